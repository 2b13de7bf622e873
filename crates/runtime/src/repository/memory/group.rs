//! In-memory group event tracking.

use std::sync::RwLock;

use raid_core::LaunchedEventId;

use crate::repository::{GroupEventRepository, RepositoryError, Result};

/// Records every raid outcome reported for difficulty tuning.
pub struct InMemoryGroupEventRepository {
    outcomes: RwLock<Vec<(LaunchedEventId, bool)>>,
}

impl InMemoryGroupEventRepository {
    pub fn new() -> Self {
        Self {
            outcomes: RwLock::new(Vec::new()),
        }
    }

    /// Reported `(launched event, participants won)` pairs in report order.
    pub fn outcomes(&self) -> Result<Vec<(LaunchedEventId, bool)>> {
        let outcomes = self
            .outcomes
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(outcomes.clone())
    }
}

impl Default for InMemoryGroupEventRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupEventRepository for InMemoryGroupEventRepository {
    fn update_raid_level(&self, launched_event_id: LaunchedEventId, won: bool) -> Result<()> {
        let mut outcomes = self
            .outcomes
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        outcomes.push((launched_event_id, won));
        Ok(())
    }
}
