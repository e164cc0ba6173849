//! Encounter content and loaders.
//!
//! This crate turns level data into battle setups:
//! - Encounter tables keyed by the overworld position of each enemy
//! - Level descriptions (data-driven via RON)
//! - Combat configuration (data-driven via TOML)
//!
//! Content is consumed when a battle starts and never appears in battle state.

pub mod encounter;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use encounter::{EncounterPosition, EncounterSetup, EncounterTable};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LevelLoader, LoadResult};
