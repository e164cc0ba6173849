//! Player-side actions and the fixed technique set.

use super::Move;

/// Content of the single pending-action slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerAction {
    #[default]
    Idle,
    Attack,
    UseItem,
    Swap,
    Run,
}

/// A decoded player intent, ready to be submitted to a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerCommand {
    /// Attack with the given move. The move is staged until the attack resolves.
    Attack(Move),
    UseItem,
    Swap,
    Run,
}

impl PlayerCommand {
    /// Pending-action value this command stores.
    pub fn action(&self) -> PlayerAction {
        match self {
            Self::Attack(_) => PlayerAction::Attack,
            Self::UseItem => PlayerAction::UseItem,
            Self::Swap => PlayerAction::Swap,
            Self::Run => PlayerAction::Run,
        }
    }
}

/// Techniques the player can attack with.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Technique {
    Punch,
    Shoot,
    Heat,
}

impl Technique {
    pub const fn base_damage(self) -> i32 {
        match self {
            Self::Punch => 25,
            Self::Shoot => 35,
            Self::Heat => 30,
        }
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn to_move(self) -> Move {
        Move::offence(self.name(), self.base_damage())
    }

    pub fn command(self) -> PlayerCommand {
        PlayerCommand::Attack(self.to_move())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn technique_moves_carry_uppercase_names() {
        let punch = Technique::Punch.to_move();
        assert_eq!(punch.name(), "PUNCH");
        assert_eq!(punch.base_damage(), 25);
        assert!(punch.is_offence());
        assert_eq!(Technique::Shoot.to_move().base_damage(), 35);
        assert_eq!(Technique::Heat.to_move().name(), "HEAT");
    }

    #[test]
    fn techniques_parse_from_script_tokens() {
        assert_eq!("heat".parse::<Technique>(), Ok(Technique::Heat));
        assert!("kick".parse::<Technique>().is_err());
    }

    #[test]
    fn command_maps_to_pending_action() {
        assert_eq!(Technique::Punch.command().action(), PlayerAction::Attack);
        assert_eq!(PlayerCommand::Run.action(), PlayerAction::Run);
    }
}
