//! Level loader.
//!
//! A level file lists every enemy of a level with its spawn position,
//! pathogen, multipliers and attacks:
//!
//! ```ron
//! (
//!     enemies: [
//!         (
//!             position: (x: 400.0, y: 300.0),
//!             pathogen: "virus",
//!             multipliers: (damage_reduction: 1.0, damage_multiplier: 1.0, health_multiplier: 1.0),
//!             attacks: [(kind: "offence", name: "Infect", damage: 20)],
//!         ),
//!     ],
//! )
//! ```

use std::path::Path;

use combat_core::{EncounterMultipliers, Move, MoveKind, PathogenKind};
use serde::{Deserialize, Serialize};

use crate::encounter::{EncounterPosition, EncounterSetup, EncounterTable};
use crate::loaders::{LoadResult, read_file};

/// Level file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LevelRon {
    #[serde(default)]
    enemies: Vec<EnemyRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EnemyRon {
    position: EncounterPosition,
    #[serde(default)]
    pathogen: String,
    #[serde(default)]
    multipliers: EncounterMultipliers,
    #[serde(default)]
    attacks: Vec<AttackRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AttackRon {
    /// "offence", "defence" or "healing"; anything else counts as offence.
    kind: String,
    name: String,
    damage: i32,
}

impl EnemyRon {
    fn into_setup(self) -> EncounterSetup {
        let pathogen = self.pathogen.parse().unwrap_or_else(|_| {
            if !self.pathogen.is_empty() {
                tracing::warn!(pathogen = %self.pathogen, "unknown pathogen kind");
            }
            PathogenKind::Unknown
        });
        let moves = self
            .attacks
            .into_iter()
            .map(|a| Move::new(MoveKind::from_label(&a.kind), a.name, a.damage))
            .collect();

        EncounterSetup {
            moves,
            multipliers: self.multipliers,
            pathogen,
        }
    }
}

/// Loader for level encounter tables from RON files.
pub struct LevelLoader;

impl LevelLoader {
    /// Load a level from a RON file.
    pub fn load(path: &Path) -> LoadResult<EncounterTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<EncounterTable> {
        let level: LevelRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level RON: {}", e))?;

        let mut table = EncounterTable::new();
        for enemy in level.enemies {
            let position = enemy.position;
            table.insert(position, enemy.into_setup());
        }
        Ok(table)
    }

    /// The level bundled with the crate.
    pub fn embedded() -> LoadResult<EncounterTable> {
        Self::parse(include_str!("../../data/levels/default.ron"))
    }

    /// Like [`LevelLoader::load`], but an unreadable level yields an empty
    /// table, so every encounter resolves to defaults.
    pub fn load_or_default(path: &Path) -> EncounterTable {
        Self::load(path).unwrap_or_else(|error| {
            tracing::warn!(path = %path.display(), %error, "using empty encounter table");
            EncounterTable::new()
        })
    }
}
