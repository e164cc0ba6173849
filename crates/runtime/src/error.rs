//! Unified error types surfaced by the runtime API.
use combat_core::{CombatError, ErrorSeverity, GameError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error("input channel closed")]
    InputChannelClosed,
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Combat(error) => error.severity(),
            Self::InputChannelClosed => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Combat(error) => error.error_code(),
            Self::InputChannelClosed => "RUNTIME_INPUT_CHANNEL_CLOSED",
        }
    }
}
