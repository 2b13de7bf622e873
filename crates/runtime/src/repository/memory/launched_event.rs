//! In-memory write-once store of launched event results.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::RwLock;

use raid_core::{LaunchedEventId, RaidResult};

use crate::repository::{LaunchedEventRepository, RepositoryError, Result};

/// Terminal raid results keyed by launched event.
pub struct InMemoryLaunchedEventRepository {
    results: RwLock<HashMap<LaunchedEventId, RaidResult>>,
}

impl InMemoryLaunchedEventRepository {
    pub fn new() -> Self {
        Self {
            results: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryLaunchedEventRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LaunchedEventRepository for InMemoryLaunchedEventRepository {
    fn save_result(&self, launched_event_id: LaunchedEventId, result: &RaidResult) -> Result<()> {
        let mut results = self
            .results
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        match results.entry(launched_event_id) {
            Entry::Occupied(_) => Err(RepositoryError::ResultAlreadyRecorded(launched_event_id)),
            Entry::Vacant(slot) => {
                slot.insert(result.clone());
                Ok(())
            }
        }
    }

    fn find_result(&self, launched_event_id: LaunchedEventId) -> Result<Option<RaidResult>> {
        let results = self
            .results
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(results.get(&launched_event_id).cloned())
    }
}
