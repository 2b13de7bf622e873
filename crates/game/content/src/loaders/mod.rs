//! Content loaders for reading raid data from files.
//!
//! Each loader turns one RON/TOML file into `raid-core` types.

pub mod config;
pub mod factory;
pub mod world_raid;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use world_raid::WorldRaidTemplateLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
