//! Content factory for loading a deployment's raid data directory.

use std::path::{Path, PathBuf};

use raid_core::{RaidConfig, WorldRaidTemplate};

use crate::loaders::{ConfigLoader, LoadResult, WorldRaidTemplateLoader};

/// Content factory that loads all raid content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── raid.toml
/// └── world_raids.ron
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

    /// Data directory bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load raid configuration from `raid.toml`.
    pub fn load_config(&self) -> LoadResult<RaidConfig> {
        ConfigLoader::load(&self.data_dir.join("raid.toml"))
    }

    /// Load the world raid template pool from `world_raids.ron`.
    pub fn load_world_raid_templates(&self) -> LoadResult<Vec<WorldRaidTemplate>> {
        WorldRaidTemplateLoader::load(&self.data_dir.join("world_raids.ron"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
