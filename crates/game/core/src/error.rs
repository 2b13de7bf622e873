//! Common error infrastructure for raid-core.
//!
//! Domain-specific errors (e.g. [`crate::RosterError`]) are defined next to
//! the types they validate. This module holds the shared classification used
//! by every layer to decide between retrying, rejecting and alerting.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: transient conditions that may succeed on retry
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected inconsistencies between collaborators
/// - **Fatal**: deployment or data-integrity violations, never retried
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with the same input.
    ///
    /// Examples: persistence backend temporarily unavailable
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: duplicate personage in a roster
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: battle result names a personage that never joined
    Internal,

    /// Fatal error - the deployment or stored data is broken.
    ///
    /// Examples: launched event without a raid, empty world raid template pool
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug or broken data.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for classified errors across the raid crates.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and assertions in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
