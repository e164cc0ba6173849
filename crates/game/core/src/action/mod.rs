//! Moves and player actions.
//!
//! - `moves`: the [`Move`] value type and the default enemy repertoire
//! - `player`: pending actions, decoded commands, and player techniques
mod moves;
mod player;

pub use moves::{Move, MoveKind, default_repertoire};
pub use player::{PlayerAction, PlayerCommand, Technique};
