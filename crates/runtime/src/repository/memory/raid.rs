//! In-memory raid definitions and rosters.

use std::collections::HashMap;
use std::sync::RwLock;

use raid_core::{EventId, LaunchedEventId, RaidDefinition, RaidParticipant};

use crate::repository::{ParticipantRepository, RaidRepository, RepositoryError, Result};

/// Raid definitions indexed by their scheduling event.
pub struct InMemoryRaidRepository {
    raids: RwLock<HashMap<EventId, RaidDefinition>>,
}

impl InMemoryRaidRepository {
    pub fn new() -> Self {
        Self {
            raids: RwLock::new(HashMap::new()),
        }
    }

    /// Bind a raid definition to its event, replacing any previous binding.
    pub fn insert(&self, raid: RaidDefinition) -> Result<()> {
        let mut raids = self
            .raids
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        raids.insert(raid.event_id, raid);
        Ok(())
    }
}

impl Default for InMemoryRaidRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RaidRepository for InMemoryRaidRepository {
    fn find_by_event(&self, event_id: EventId) -> Result<Option<RaidDefinition>> {
        let raids = self
            .raids
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(raids.get(&event_id).cloned())
    }
}

/// Join records indexed by launched event, in join order.
pub struct InMemoryParticipantRepository {
    rosters: RwLock<HashMap<LaunchedEventId, Vec<RaidParticipant>>>,
}

impl InMemoryParticipantRepository {
    pub fn new() -> Self {
        Self {
            rosters: RwLock::new(HashMap::new()),
        }
    }

    /// Record a participant joining a launched event.
    ///
    /// Joining twice keeps the first record.
    pub fn join(
        &self,
        launched_event_id: LaunchedEventId,
        participant: RaidParticipant,
    ) -> Result<()> {
        let mut rosters = self
            .rosters
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let roster = rosters.entry(launched_event_id).or_default();
        if roster
            .iter()
            .all(|joined| joined.personage.id != participant.personage.id)
        {
            roster.push(participant);
        }
        Ok(())
    }
}

impl Default for InMemoryParticipantRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticipantRepository for InMemoryParticipantRepository {
    fn raid_participants(
        &self,
        launched_event_id: LaunchedEventId,
    ) -> Result<Vec<RaidParticipant>> {
        let rosters = self
            .rosters
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(rosters.get(&launched_event_id).cloned().unwrap_or_default())
    }
}
