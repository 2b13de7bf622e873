//! Error types raised by repository implementations.

use raid_core::{ErrorSeverity, GameError, LaunchedEventId};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("repository lock was poisoned")]
    LockPoisoned,

    #[error("result of launched event {0} is already recorded")]
    ResultAlreadyRecorded(LaunchedEventId),

    #[error("storage backend error: {0}")]
    Backend(String),
}

impl GameError for RepositoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::LockPoisoned => ErrorSeverity::Fatal,
            Self::ResultAlreadyRecorded(_) => ErrorSeverity::Internal,
            Self::Backend(_) => ErrorSeverity::Recoverable,
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
