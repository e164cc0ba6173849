//! Record of the enemy's landed offence moves.

use crate::action::Move;

/// One offence move the enemy landed, with the damage actually applied.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    pub attack: Move,
    pub damage: i32,
}

/// Ordered history of enemy moves and their damage.
///
/// Moves and damage live in the same record so the two can never drift
/// apart in length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyHistory {
    records: Vec<MoveRecord>,
}

impl EnemyHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, attack: Move, damage: i32) {
        self.records.push(MoveRecord { attack, damage });
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Picks the historical move to reuse once every offence move was tried.
    ///
    /// The running maximum is never raised above zero, so every entry with
    /// positive damage replaces the pick: the result is the last such entry,
    /// or the first entry when none dealt damage. Returns `None` on an empty
    /// history.
    pub fn reuse_pick(&self) -> Option<&Move> {
        let max_damage = 0;
        let mut index = 0;
        for (i, record) in self.records.iter().enumerate() {
            if record.damage > max_damage {
                index = i;
            }
        }
        self.records.get(index).map(|record| &record.attack)
    }
}
