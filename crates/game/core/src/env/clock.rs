//! Clock oracle: the reducer's only source of wall-clock time.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::state::Timestamp;

/// Provides the current instant in milliseconds since the Unix epoch.
pub trait ClockOracle: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Reads the host's wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl ClockOracle for SystemClock {
    fn now(&self) -> Timestamp {
        // A clock set before 1970 reads as the epoch.
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0);
        Timestamp::from_millis(millis)
    }
}

/// Always reports the same instant. Used for replays and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub Timestamp);

impl FixedClock {
    pub const fn new(now: Timestamp) -> Self {
        Self(now)
    }
}

impl ClockOracle for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
