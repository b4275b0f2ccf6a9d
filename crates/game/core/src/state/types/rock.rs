use rust_decimal::Decimal;

use super::Timestamp;

/// Mineable stone on a rock node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct StoneNode {
    /// Stone yielded by the next successful mine.
    pub amount: Decimal,
    /// Effective instant of the last successful mine. May be back-dated by
    /// recovery modifiers.
    pub mined_at: Timestamp,
}

impl StoneNode {
    /// Yield a rock holds again after every successful mine.
    pub const RESET_AMOUNT: Decimal = Decimal::TWO;

    pub fn new(amount: Decimal, mined_at: Timestamp) -> Self {
        Self { amount, mined_at }
    }

    /// True once strictly more than `recovery_ms` has elapsed since `mined_at`.
    pub fn is_recovered(&self, now: Timestamp, recovery_ms: i64) -> bool {
        now.millis_since(self.mined_at) > recovery_ms
    }

    /// Earliest instant at which [`Self::is_recovered`] holds.
    pub fn recovers_at(&self, recovery_ms: i64) -> Timestamp {
        self.mined_at
            .saturating_add_millis(recovery_ms)
            .saturating_add_millis(1)
    }
}

/// A placed rock node on the player's land.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rock {
    pub stone: StoneNode,
}

impl Rock {
    pub fn new(amount: Decimal, mined_at: Timestamp) -> Self {
        Self {
            stone: StoneNode::new(amount, mined_at),
        }
    }
}
