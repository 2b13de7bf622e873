//! In-memory personage balances and raid history.

use std::collections::HashMap;
use std::sync::RwLock;

use raid_core::{LaunchedEvent, LaunchedEventId, Money, PersonageId, PersonageRaidResult};

use crate::repository::{PersonageRepository, RepositoryError, Result};

/// Personage balances and per-event raid results.
pub struct InMemoryPersonageRepository {
    balances: RwLock<HashMap<PersonageId, Money>>,
    raid_results: RwLock<HashMap<LaunchedEventId, Vec<PersonageRaidResult>>>,
}

impl InMemoryPersonageRepository {
    pub fn new() -> Self {
        Self {
            balances: RwLock::new(HashMap::new()),
            raid_results: RwLock::new(HashMap::new()),
        }
    }

    /// Current balance, zero for personages never credited.
    pub fn balance(&self, personage_id: PersonageId) -> Result<Money> {
        let balances = self
            .balances
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(balances.get(&personage_id).copied().unwrap_or_default())
    }

    pub fn raid_results(
        &self,
        launched_event_id: LaunchedEventId,
    ) -> Result<Vec<PersonageRaidResult>> {
        let raid_results = self
            .raid_results
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(raid_results
            .get(&launched_event_id)
            .cloned()
            .unwrap_or_default())
    }
}

impl Default for InMemoryPersonageRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonageRepository for InMemoryPersonageRepository {
    fn add_money(&self, personage_id: PersonageId, amount: Money) -> Result<()> {
        let mut balances = self
            .balances
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *balances.entry(personage_id).or_default() += amount;
        Ok(())
    }

    fn save_raid_results(
        &self,
        results: &[PersonageRaidResult],
        event: &LaunchedEvent,
    ) -> Result<()> {
        let mut raid_results = self
            .raid_results
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        raid_results
            .entry(event.id)
            .or_default()
            .extend_from_slice(results);
        Ok(())
    }
}
