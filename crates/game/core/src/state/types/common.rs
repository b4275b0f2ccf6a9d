use std::fmt;

/// Milliseconds since the Unix epoch.
///
/// Signed so that back-dated recovery timestamps and clock-skewed values
/// remain representable and comparable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const EPOCH: Self = Self(0);

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to `self`; negative when `earlier`
    /// lies in the future.
    pub const fn millis_since(self, earlier: Timestamp) -> i64 {
        self.0.saturating_sub(earlier.0)
    }

    pub const fn saturating_add_millis(self, millis: i64) -> Self {
        Self(self.0.saturating_add(millis))
    }

    pub const fn saturating_sub_millis(self, millis: i64) -> Self {
        Self(self.0.saturating_sub(millis))
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Self(millis)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Placement of an item on the land grid, in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_since_is_negative_for_future_instants() {
        let now = Timestamp::from_millis(1_000);
        let later = Timestamp::from_millis(5_000);

        assert_eq!(later.millis_since(now), 4_000);
        assert_eq!(now.millis_since(later), -4_000);
    }

    #[test]
    fn arithmetic_saturates_at_bounds() {
        let max = Timestamp(i64::MAX);
        let min = Timestamp(i64::MIN);

        assert_eq!(max.saturating_add_millis(1), max);
        assert_eq!(min.saturating_sub_millis(1), min);
        assert_eq!(max.millis_since(min), i64::MAX);
    }
}
