//! Errors raised when the environment lacks an oracle.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when accessing oracle data.
///
/// The engine cannot evaluate cooldowns without a clock or balance values
/// without a config, so these are fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// ConfigOracle is not available in the environment.
    #[error("ConfigOracle not available")]
    ConfigNotAvailable,

    /// ClockOracle is not available in the environment.
    #[error("ClockOracle not available")]
    ClockNotAvailable,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            ConfigNotAvailable => "ORACLE_CONFIG_NOT_AVAILABLE",
            ClockNotAvailable => "ORACLE_CLOCK_NOT_AVAILABLE",
        }
    }
}
