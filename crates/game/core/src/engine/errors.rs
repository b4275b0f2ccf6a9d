//! Rejections raised while the engine drives an action through its phases.

use crate::action::{ActionTransition, StoneMineAction};
use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};

/// Phase of [`crate::action::ActionTransition`] that rejected an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// An action error tagged with the phase that raised it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while reducing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("stone mine action failed: {0}")]
    StoneMine(TransitionPhaseError<<StoneMineAction as ActionTransition>::Error>),

    /// The environment could not supply the request instant.
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl ExecuteError {
    /// Phase in which the action was rejected, or `None` when it never
    /// reached the pipeline.
    pub fn phase(&self) -> Option<TransitionPhase> {
        match self {
            ExecuteError::StoneMine(failure) => Some(failure.phase),
            ExecuteError::Oracle(_) => None,
        }
    }

    /// The player-facing message of the underlying action error.
    pub fn reason(&self) -> String {
        match self {
            ExecuteError::StoneMine(failure) => failure.error.to_string(),
            ExecuteError::Oracle(error) => error.to_string(),
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ExecuteError::StoneMine(failure) => failure.error.severity(),
            ExecuteError::Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ExecuteError::StoneMine(failure) => failure.error.error_code(),
            ExecuteError::Oracle(error) => error.error_code(),
        }
    }
}
