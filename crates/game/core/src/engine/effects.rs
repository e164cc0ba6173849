//! Side effects produced while resolving a phase.
//!
//! The engine never plays audio or draws anything; it returns these values
//! and the runtime forwards them to whatever sinks the host provides.

use crate::action::Move;
use crate::state::{HealthBar, VisualFlags};

/// Named audio cue. Playback is fire-and-forget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AudioCue {
    Attack,
    Heal,
    Defend,
    EnemyAttack,
    Pickup,
    Death,
}

/// One-shot visual spawned into the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum VisualEffect {
    Fireball,
    Vaccine,
    Particles,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

/// Everything a resolution can ask the outside world to do.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEffect {
    Cue(AudioCue),
    Spawn(VisualEffect),
    /// The enemy's sprite layers changed.
    Flags(VisualFlags),
    /// A fighter's health changed; carries the redrawn bar.
    HealthChanged {
        side: Side,
        health: i32,
        bar: HealthBar,
    },
    EnemyMoveChosen(Move),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattleOutcome {
    Win,
    Loss,
}

/// Result of resolving the current phase.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    pub effects: Vec<CombatEffect>,
    /// Set only when a terminal phase resolved.
    pub outcome: Option<BattleOutcome>,
}

impl Resolution {
    pub(crate) fn push(&mut self, effect: CombatEffect) {
        self.effects.push(effect);
    }

    pub(crate) fn cue(&mut self, cue: AudioCue) {
        self.effects.push(CombatEffect::Cue(cue));
    }

    /// Cues fired during this resolution, in order.
    pub fn cues(&self) -> impl Iterator<Item = AudioCue> + '_ {
        self.effects.iter().filter_map(|effect| match effect {
            CombatEffect::Cue(cue) => Some(*cue),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty() && self.outcome.is_none()
    }
}
