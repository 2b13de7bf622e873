//! In-memory world raid singleton.

use std::sync::RwLock;

use rand::seq::SliceRandom;
use raid_core::{ActiveWorldRaid, Money, WorldRaidId, WorldRaidResearch, WorldRaidTemplate};

use crate::repository::{Insertion, RepositoryError, Result, WorldRaidRepository};

#[derive(Default)]
struct Slot {
    active: Option<ActiveWorldRaid>,
    last_id: u64,
}

/// World raid storage holding the template pool and at most one active raid.
///
/// The existence check and the insert of [`WorldRaidRepository::create_active`]
/// run under one write lock.
pub struct InMemoryWorldRaidRepository {
    templates: Vec<WorldRaidTemplate>,
    slot: RwLock<Slot>,
}

impl InMemoryWorldRaidRepository {
    pub fn new(templates: Vec<WorldRaidTemplate>) -> Self {
        Self {
            templates,
            slot: RwLock::new(Slot::default()),
        }
    }

    pub fn templates(&self) -> &[WorldRaidTemplate] {
        &self.templates
    }
}

impl WorldRaidRepository for InMemoryWorldRaidRepository {
    fn active(&self) -> Result<Option<ActiveWorldRaid>> {
        let slot = self
            .slot
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(slot.active.clone())
    }

    fn random_template(&self) -> Result<Option<WorldRaidTemplate>> {
        Ok(self.templates.choose(&mut rand::thread_rng()).cloned())
    }

    fn create_active(
        &self,
        template: &WorldRaidTemplate,
        fund: Money,
        research: WorldRaidResearch,
    ) -> Result<Insertion> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        if slot.active.is_some() {
            return Ok(Insertion::AlreadyActive);
        }
        slot.last_id += 1;
        slot.active = Some(ActiveWorldRaid {
            id: WorldRaidId(slot.last_id),
            template: template.clone(),
            fund,
            research,
        });
        Ok(Insertion::Inserted)
    }

    fn finish_active(&self) -> Result<Option<ActiveWorldRaid>> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(slot.active.take())
    }
}
