//! Configuration oracle for exposing balance values to the engine.

use crate::config::{GameConfig, secs_to_millis};
use crate::state::CollectibleName;

/// Provides access to runtime configuration values.
pub trait ConfigOracle: Send + Sync {
    /// Returns the recovery window of stone rocks in seconds.
    fn stone_recovery_secs(&self) -> u64;

    /// Returns how long a collectible's boost lasts after placement, or `None`
    /// when the boost never expires.
    fn collectible_effect_ms(&self, name: CollectibleName) -> Option<i64>;

    /// Returns the recovery window of stone rocks in milliseconds.
    fn stone_recovery_ms(&self) -> i64 {
        secs_to_millis(self.stone_recovery_secs())
    }
}

impl ConfigOracle for GameConfig {
    fn stone_recovery_secs(&self) -> u64 {
        self.stone_recovery_secs
    }

    fn collectible_effect_ms(&self, name: CollectibleName) -> Option<i64> {
        match name {
            CollectibleName::TimeWarpTotem => {
                Some(secs_to_millis(self.time_warp_totem_duration_secs))
            }
            CollectibleName::RockGolem
            | CollectibleName::TunnelMole
            | CollectibleName::RockyTheMole => None,
        }
    }
}
