/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct GameConfig {
    /// Seconds a stone rock needs before it can be mined again.
    /// Shared by every stone node.
    pub stone_recovery_secs: u64,
    /// How long a placed Time Warp Totem keeps boosting recovery.
    pub time_warp_totem_duration_secs: u64,
}

impl GameConfig {
    pub const MILLIS_PER_SEC: i64 = 1000;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STONE_RECOVERY_SECS: u64 = 4 * 60 * 60;
    pub const DEFAULT_TIME_WARP_TOTEM_DURATION_SECS: u64 = 2 * 60 * 60;

    pub fn new() -> Self {
        Self {
            stone_recovery_secs: Self::DEFAULT_STONE_RECOVERY_SECS,
            time_warp_totem_duration_secs: Self::DEFAULT_TIME_WARP_TOTEM_DURATION_SECS,
        }
    }

    pub fn with_stone_recovery_secs(stone_recovery_secs: u64) -> Self {
        Self {
            stone_recovery_secs,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts whole seconds to milliseconds, saturating at `i64::MAX`.
pub fn secs_to_millis(secs: u64) -> i64 {
    i64::try_from(secs)
        .unwrap_or(i64::MAX)
        .saturating_mul(GameConfig::MILLIS_PER_SEC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_live_balance() {
        let config = GameConfig::default();

        assert_eq!(config.stone_recovery_secs, 14_400);
        assert_eq!(config.time_warp_totem_duration_secs, 7_200);
    }

    #[test]
    fn secs_to_millis_saturates() {
        assert_eq!(secs_to_millis(14_400), 14_400_000);
        assert_eq!(secs_to_millis(u64::MAX), i64::MAX);
    }
}
