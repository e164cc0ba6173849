//! Battle participants: identities, health, and the enemy's visual state.
mod common;
mod fighter;
mod pathogen;

pub use common::EntityId;
pub use fighter::{EncounterMultipliers, Fighter, HealthBar, scale_damage};
pub use pathogen::{PathogenKind, Sickman, VisualFlags};
