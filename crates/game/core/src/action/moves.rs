//! Move catalog shared by the player and the enemy.

use std::fmt;

/// What a move does when it resolves.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum MoveKind {
    /// Deals damage to the opponent.
    Offence,
    /// Braces for the next hit; changes no health.
    Defence,
    /// Restores the user's own health.
    Healing,
}

impl MoveKind {
    /// Classifies a free-form label from level data.
    ///
    /// `"healing"` and `"defence"` map to their kinds; any other label is
    /// treated as an offence move.
    pub fn from_label(label: &str) -> Self {
        match label {
            "healing" => Self::Healing,
            "defence" => Self::Defence,
            _ => Self::Offence,
        }
    }
}

/// A named move. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    kind: MoveKind,
    name: String,
    base_damage: i32,
}

impl Move {
    /// Base damage carried by moves that never subtract health.
    pub const NON_DAMAGE: i32 = -1;

    pub fn new(kind: MoveKind, name: impl Into<String>, base_damage: i32) -> Self {
        Self {
            kind,
            name: name.into(),
            base_damage,
        }
    }

    pub fn offence(name: impl Into<String>, base_damage: i32) -> Self {
        Self::new(MoveKind::Offence, name, base_damage)
    }

    pub fn defence(name: impl Into<String>) -> Self {
        Self::new(MoveKind::Defence, name, Self::NON_DAMAGE)
    }

    pub fn healing(name: impl Into<String>) -> Self {
        Self::new(MoveKind::Healing, name, Self::NON_DAMAGE)
    }

    #[inline]
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn base_damage(&self) -> i32 {
        self.base_damage
    }

    #[inline]
    pub fn is_offence(&self) -> bool {
        self.kind == MoveKind::Offence
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.kind, self.base_damage)
    }
}

/// Repertoire used by encounters whose level data lists no moves.
pub fn default_repertoire() -> Vec<Move> {
    vec![
        Move::offence("Infect", 20),
        Move::offence("Poison", 15),
        Move::offence("Neural Damage", 25),
        Move::defence("Mutate"),
        Move::healing("Regenerate"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_default_to_offence() {
        assert_eq!(MoveKind::from_label("healing"), MoveKind::Healing);
        assert_eq!(MoveKind::from_label("defence"), MoveKind::Defence);
        assert_eq!(MoveKind::from_label("offence"), MoveKind::Offence);
        assert_eq!(MoveKind::from_label("bite"), MoveKind::Offence);
    }

    #[test]
    fn default_repertoire_has_one_of_each_support_kind() {
        let moves = default_repertoire();
        assert_eq!(moves.iter().filter(|m| m.is_offence()).count(), 3);
        assert_eq!(
            moves
                .iter()
                .filter(|m| m.kind() == MoveKind::Defence)
                .count(),
            1
        );
        assert!(
            moves
                .iter()
                .filter(|m| !m.is_offence())
                .all(|m| m.base_damage() == Move::NON_DAMAGE)
        );
    }
}
