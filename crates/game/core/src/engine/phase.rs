//! The eleven combat phases.

use crate::error::CombatError;

/// One state of the combat state machine.
///
/// Discriminants are stable so phases can be logged and replayed as bytes.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum CombatPhase {
    /// Waiting for the player to pick an action.
    #[default]
    Wait = 0,
    Attack = 1,
    UseItem = 2,
    Swap = 3,
    UpdatePlayerStats = 4,
    UpdateEnemyStats = 5,
    EnemyWait = 6,
    /// Enemy pacing delay followed by the enemy's decision.
    EnemyAttack = 7,
    ReturnWin = 8,
    ReturnLoss = 9,
    /// Death animation of a defeated enemy.
    Particles = 10,
}

impl CombatPhase {
    /// Returns true for phases that end the battle.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::ReturnWin | Self::ReturnLoss)
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for CombatPhase {
    type Error = CombatError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Wait,
            1 => Self::Attack,
            2 => Self::UseItem,
            3 => Self::Swap,
            4 => Self::UpdatePlayerStats,
            5 => Self::UpdateEnemyStats,
            6 => Self::EnemyWait,
            7 => Self::EnemyAttack,
            8 => Self::ReturnWin,
            9 => Self::ReturnLoss,
            10 => Self::Particles,
            other => return Err(CombatError::UnknownPhase(other)),
        })
    }
}

#[cfg(test)]
mod tests {
    use strum::{EnumCount, IntoEnumIterator};

    use super::*;

    #[test]
    fn byte_conversion_covers_every_phase() {
        assert_eq!(CombatPhase::COUNT, 11);
        for phase in CombatPhase::iter() {
            assert_eq!(CombatPhase::try_from(phase.as_u8()), Ok(phase));
        }
    }

    #[test]
    fn unknown_byte_is_rejected() {
        assert_eq!(
            CombatPhase::try_from(11),
            Err(CombatError::UnknownPhase(11))
        );
    }

    #[test]
    fn only_return_phases_are_terminal() {
        let terminal: Vec<_> = CombatPhase::iter().filter(|p| p.is_terminal()).collect();
        assert_eq!(terminal, [CombatPhase::ReturnWin, CombatPhase::ReturnLoss]);
        assert_eq!(CombatPhase::UpdateEnemyStats.to_string(), "UPDATE_ENEMY_STATS");
    }
}
