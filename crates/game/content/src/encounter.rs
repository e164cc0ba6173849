//! Per-enemy encounter data.

use combat_core::{
    BattleSetup, EncounterMultipliers, EntityId, Fighter, Move, PathogenKind, default_repertoire,
};

/// Overworld spawn position of an enemy. Encounters match it exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterPosition {
    pub x: f32,
    pub y: f32,
}

impl EncounterPosition {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Moves, multipliers and pathogen for one enemy.
#[derive(Clone, Debug, PartialEq)]
pub struct EncounterSetup {
    pub moves: Vec<Move>,
    pub multipliers: EncounterMultipliers,
    pub pathogen: PathogenKind,
}

impl EncounterSetup {
    /// Completes the setup with the participants of a battle.
    pub fn into_battle(self, enemy: EntityId, counterpart: EntityId, player: Fighter) -> BattleSetup {
        BattleSetup::new(enemy, counterpart, player)
            .with_moves(self.moves)
            .with_multipliers(self.multipliers)
            .with_pathogen(self.pathogen)
    }
}

impl Default for EncounterSetup {
    fn default() -> Self {
        Self {
            moves: default_repertoire(),
            multipliers: EncounterMultipliers::default(),
            pathogen: PathogenKind::default(),
        }
    }
}

/// All encounters of a level.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EncounterTable {
    entries: Vec<(EncounterPosition, EncounterSetup)>,
}

impl EncounterTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, position: EncounterPosition, setup: EncounterSetup) {
        self.entries.push((position, setup));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: EncounterPosition) -> Option<&EncounterSetup> {
        self.entries
            .iter()
            .find(|(at, _)| *at == position)
            .map(|(_, setup)| setup)
    }

    /// Setup for the enemy at `position`.
    ///
    /// Unknown positions and encounters without moves fall back to the
    /// default repertoire so a battle can always start.
    pub fn resolve(&self, position: EncounterPosition) -> EncounterSetup {
        match self.get(position) {
            Some(setup) if setup.moves.is_empty() => {
                tracing::warn!(?position, "encounter lists no moves, using defaults");
                EncounterSetup {
                    moves: default_repertoire(),
                    ..setup.clone()
                }
            }
            Some(setup) => setup.clone(),
            None => {
                tracing::warn!(?position, "no encounter at position, using defaults");
                EncounterSetup::default()
            }
        }
    }
}
