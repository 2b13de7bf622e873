//! Raid configuration loader.

use std::path::Path;

use raid_core::RaidConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for raid configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing tables and keys fall back to [`RaidConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<RaidConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<RaidConfig> {
        let config: RaidConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
