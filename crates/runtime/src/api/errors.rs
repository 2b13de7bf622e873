//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from repositories, the battle service and data-integrity
//! checks so schedulers and bot handlers can bubble them up with consistent
//! context.
use raid_core::{ErrorSeverity, EventId, GameError, LaunchedEventId, PersonageId, RosterError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("no raid is bound to event {event_id} (launched event {launched_event_id})")]
    RaidNotFound {
        event_id: EventId,
        launched_event_id: LaunchedEventId,
    },

    #[error("world raid template pool is empty")]
    WorldRaidTemplatesMissing,

    #[error("active world raid disappeared right after launch")]
    ActiveWorldRaidMissing,

    #[error("invalid roster for launched event {launched_event_id}")]
    InvalidRoster {
        launched_event_id: LaunchedEventId,
        #[source]
        source: RosterError,
    },

    #[error("battle result names personage {personage} who is not on the roster of {launched_event_id}")]
    UnknownParticipant {
        launched_event_id: LaunchedEventId,
        personage: PersonageId,
    },

    #[error("battle result covers {actual} of {expected} participants of {launched_event_id}")]
    IncompleteBattleResult {
        launched_event_id: LaunchedEventId,
        expected: usize,
        actual: usize,
    },

    #[error("battle service failed: {0}")]
    BattleFailed(String),

    #[error("{0} must be configured before building")]
    MissingCollaborator(&'static str),

    #[error("failed to load raid content: {0}")]
    Content(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::RaidNotFound { .. }
            | Self::WorldRaidTemplatesMissing
            | Self::MissingCollaborator(_)
            | Self::Content(_) => ErrorSeverity::Fatal,
            Self::ActiveWorldRaidMissing
            | Self::InvalidRoster { .. }
            | Self::UnknownParticipant { .. }
            | Self::IncompleteBattleResult { .. } => ErrorSeverity::Internal,
            Self::BattleFailed(_) => ErrorSeverity::Recoverable,
            Self::Repository(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::RaidNotFound { .. } => "raid_not_found",
            Self::WorldRaidTemplatesMissing => "world_raid_templates_missing",
            Self::ActiveWorldRaidMissing => "active_world_raid_missing",
            Self::InvalidRoster { .. } => "invalid_roster",
            Self::UnknownParticipant { .. } => "unknown_participant",
            Self::IncompleteBattleResult { .. } => "incomplete_battle_result",
            Self::BattleFailed(_) => "battle_failed",
            Self::MissingCollaborator(_) => "missing_collaborator",
            Self::Content(_) => "content",
            Self::Repository(_) => "repository",
        }
    }
}
