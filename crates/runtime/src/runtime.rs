//! Runtime configuration shared by the raid use cases.

use raid_content::ContentFactory;
use raid_core::RaidConfig;

use crate::api::{Result, RuntimeError};

/// Runtime configuration loaded from a content pack.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub raid: RaidConfig,
}

impl RuntimeConfig {
    /// Load configuration from the content pack's `raid.toml`.
    pub fn from_content(content: &ContentFactory) -> Result<Self> {
        let raid = content
            .load_config()
            .map_err(|err| RuntimeError::Content(format!("{err:#}")))?;
        tracing::debug!(data_dir = %content.data_dir().display(), "raid configuration loaded");
        Ok(Self { raid })
    }
}
