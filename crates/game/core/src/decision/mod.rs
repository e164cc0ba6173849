//! Enemy move selection.
//!
//! The enemy's policy is a small behavior tree (see [`enemy_brain`])
//! evaluated against a [`DecisionContext`]. Every decision re-initializes the
//! tree and runs it once from the root.
//!
//! Priority order:
//! 1. forced heal: first healing move
//! 2. forced defend: first defence move
//! 3. forced fight: an untried offence move, or a reused one from history
//! 4. no force: defend when losing, heal if a healing move exists, otherwise fight
mod context;
mod policy;

pub use context::DecisionContext;
pub use policy::{Decision, EnemyBrain, Predicate, enemy_brain};

use crate::action::Move;
use crate::error::CombatError;

/// Externally forced decision modes. All off by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionOverrides {
    pub heal: bool,
    pub defend: bool,
    pub fight: bool,
}

impl DecisionOverrides {
    pub const NONE: Self = Self {
        heal: false,
        defend: false,
        fight: false,
    };

    pub fn heal() -> Self {
        Self {
            heal: true,
            ..Self::NONE
        }
    }

    pub fn defend() -> Self {
        Self {
            defend: true,
            ..Self::NONE
        }
    }

    pub fn fight() -> Self {
        Self {
            fight: true,
            ..Self::NONE
        }
    }
}

/// Runs one full evaluation of `brain` and returns the chosen move.
pub fn decide(brain: &mut EnemyBrain, ctx: &mut DecisionContext<'_>) -> Result<Move, CombatError> {
    if ctx.all_moves.is_empty() {
        return Err(CombatError::EmptyRepertoire);
    }

    let status = brain.evaluate(ctx);
    tracing::debug!(?status, selected = ?ctx.selected, "enemy decision evaluated");

    ctx.selected.take().ok_or(CombatError::EmptyRepertoire)
}
