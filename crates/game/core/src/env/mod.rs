//! Traits describing read-only facts the reducer depends on.
//!
//! Oracles expose balance configuration and the current time. The
//! [`GameEnv`] aggregate bundles them so transitions can access everything
//! they need without hard coupling to concrete implementations.
mod clock;
mod config;
mod error;

pub use clock::{ClockOracle, FixedClock, SystemClock};
pub use config::ConfigOracle;
pub use error::OracleError;

/// Aggregates read-only oracles required by the reducer and action pipeline.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    config: Option<&'a dyn ConfigOracle>,
    clock: Option<&'a dyn ClockOracle>,
}

impl<'a> GameEnv<'a> {
    pub fn new(config: Option<&'a dyn ConfigOracle>, clock: Option<&'a dyn ClockOracle>) -> Self {
        Self { config, clock }
    }

    pub fn with_all(config: &'a dyn ConfigOracle, clock: &'a dyn ClockOracle) -> Self {
        Self::new(Some(config), Some(clock))
    }

    pub fn empty() -> Self {
        Self {
            config: None,
            clock: None,
        }
    }

    /// Returns a copy of this environment reading time from `clock`.
    pub fn with_clock<'b>(&self, clock: &'b dyn ClockOracle) -> GameEnv<'b>
    where
        'a: 'b,
    {
        GameEnv {
            config: self.config,
            clock: Some(clock),
        }
    }

    /// Returns the ConfigOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config oracle was provided.
    pub fn config(&self) -> Result<&'a dyn ConfigOracle, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }

    /// Returns the ClockOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ClockNotAvailable` if no clock oracle was provided.
    pub fn clock(&self) -> Result<&'a dyn ClockOracle, OracleError> {
        self.clock.ok_or(OracleError::ClockNotAvailable)
    }

    /// Reads the current instant from the clock oracle.
    pub fn now(&self) -> Result<crate::state::Timestamp, OracleError> {
        Ok(self.clock()?.now())
    }
}

impl std::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEnv")
            .field("config", &self.config.is_some())
            .field("clock", &self.clock.is_some())
            .finish()
    }
}
