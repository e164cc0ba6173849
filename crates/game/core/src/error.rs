//! Common error infrastructure for combat-core.
//!
//! Every error in the crate reports an [`ErrorSeverity`] through the
//! [`GameError`] trait so callers can tell a broken session from a request
//! that merely failed.

use behavior_tree::TreeError;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller may retry or degrade to defaults
/// - **Validation**: the input was rejected and should not be retried as-is
/// - **Fatal**: the battle session can no longer be trusted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all combat errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Invariant violations inside the combat engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    #[error("a battle session is already active")]
    SessionAlreadyActive,

    #[error("unknown combat phase {0}")]
    UnknownPhase(u8),

    #[error("enemy repertoire is empty")]
    EmptyRepertoire,

    #[error("attack resolved without a staged player move")]
    MissingPlayerMove,

    #[error("enemy behavior tree is malformed: {0}")]
    InvalidTree(#[from] TreeError),
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SessionAlreadyActive => "COMBAT_SESSION_ALREADY_ACTIVE",
            Self::UnknownPhase(_) => "COMBAT_UNKNOWN_PHASE",
            Self::EmptyRepertoire => "COMBAT_EMPTY_REPERTOIRE",
            Self::MissingPlayerMove => "COMBAT_MISSING_PLAYER_MOVE",
            Self::InvalidTree(_) => "COMBAT_INVALID_TREE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combat_errors_are_fatal() {
        let error = CombatError::UnknownPhase(42);
        assert!(error.severity().is_fatal());
        assert_eq!(error.error_code(), "COMBAT_UNKNOWN_PHASE");
        assert_eq!(error.to_string(), "unknown combat phase 42");
    }

    #[test]
    fn tree_errors_convert() {
        let error: CombatError = TreeError::Empty.into();
        assert_eq!(error, CombatError::InvalidTree(TreeError::Empty));
    }
}
