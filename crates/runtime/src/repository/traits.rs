//! Repository contracts for the raid pipeline and the world raid singleton.

use raid_core::{
    ActiveWorldRaid, EventId, LaunchedEvent, LaunchedEventId, Money, PersonageId,
    PersonageRaidResult, RaidDefinition, RaidParticipant, RaidResult, WorldRaidResearch,
    WorldRaidTemplate,
};

use super::error::Result;

/// Lookup of raid definitions by their scheduling event.
pub trait RaidRepository: Send + Sync {
    fn find_by_event(&self, event_id: EventId) -> Result<Option<RaidDefinition>>;
}

/// Rosters of launched raid events.
pub trait ParticipantRepository: Send + Sync {
    /// Everyone who joined the launched event, possibly nobody.
    fn raid_participants(&self, launched_event_id: LaunchedEventId) -> Result<Vec<RaidParticipant>>;
}

/// Personage-side effects of a resolved raid.
pub trait PersonageRepository: Send + Sync {
    /// Credit `amount` to the personage's balance.
    fn add_money(&self, personage_id: PersonageId, amount: Money) -> Result<()>;

    /// Store per-participant results against the personages and the event.
    fn save_raid_results(
        &self,
        results: &[PersonageRaidResult],
        event: &LaunchedEvent,
    ) -> Result<()>;
}

/// Group-level event tracking used to tune future raid difficulty.
pub trait GroupEventRepository: Send + Sync {
    fn update_raid_level(&self, launched_event_id: LaunchedEventId, won: bool) -> Result<()>;
}

/// Terminal results of launched events.
///
/// A result is written at most once per launched event; a second write
/// fails with [`super::RepositoryError::ResultAlreadyRecorded`].
pub trait LaunchedEventRepository: Send + Sync {
    fn save_result(&self, launched_event_id: LaunchedEventId, result: &RaidResult) -> Result<()>;

    fn find_result(&self, launched_event_id: LaunchedEventId) -> Result<Option<RaidResult>>;
}

/// Outcome of an attempt to create the active world raid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insertion {
    Inserted,
    /// Another writer created the singleton first; nothing was written.
    AlreadyActive,
}

/// Storage of the world raid singleton and its template pool.
///
/// Implementations must make [`WorldRaidRepository::create_active`] atomic:
/// at most one active raid exists no matter how many callers race.
pub trait WorldRaidRepository: Send + Sync {
    fn active(&self) -> Result<Option<ActiveWorldRaid>>;

    /// One template picked at random, `None` if the pool is empty.
    fn random_template(&self) -> Result<Option<WorldRaidTemplate>>;

    fn create_active(
        &self,
        template: &WorldRaidTemplate,
        fund: Money,
        research: WorldRaidResearch,
    ) -> Result<Insertion>;

    /// Close the active raid, returning it. Called by the lifecycle outside
    /// the launcher once a raid is over.
    fn finish_active(&self) -> Result<Option<ActiveWorldRaid>>;
}
