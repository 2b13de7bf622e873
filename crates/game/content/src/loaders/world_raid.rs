//! World raid template pool loader.

use std::path::Path;

use raid_core::WorldRaidTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Template pool structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldRaidCatalog {
    pub templates: Vec<WorldRaidTemplate>,
}

/// Loader for the world raid template pool from RON files.
pub struct WorldRaidTemplateLoader;

impl WorldRaidTemplateLoader {
    /// Load the template pool from a RON file.
    ///
    /// An empty pool is returned as-is; launching from it fails later, at the
    /// point a world raid is actually needed.
    pub fn load(path: &Path) -> LoadResult<Vec<WorldRaidTemplate>> {
        let content = read_file(path)?;
        let catalog: WorldRaidCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse world raid catalog RON: {}", e))?;

        Ok(catalog.templates)
    }
}
