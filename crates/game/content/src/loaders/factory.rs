//! Content factory for loading a data directory.

use std::path::{Path, PathBuf};

use combat_core::CombatConfig;

use crate::encounter::EncounterTable;
use crate::loaders::{ConfigLoader, LevelLoader, LoadResult};

/// Content factory that loads combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── levels/
///     ├── default.ron
///     └── lung.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load combat configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the encounters of `levels/<name>.ron`.
    pub fn load_level(&self, name: &str) -> LoadResult<EncounterTable> {
        LevelLoader::load(&self.level_path(name))
    }

    pub fn level_path(&self, name: &str) -> PathBuf {
        self.data_dir.join("levels").join(format!("{name}.ron"))
    }
}
