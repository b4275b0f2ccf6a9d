//! Placed collectibles and their effect windows.

use std::collections::BTreeMap;

use super::{Position, Timestamp};

/// Collectibles that can be placed on the land.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollectibleName {
    #[strum(serialize = "Time Warp Totem")]
    #[cfg_attr(feature = "serde", serde(rename = "Time Warp Totem"))]
    TimeWarpTotem,
    #[strum(serialize = "Rock Golem")]
    #[cfg_attr(feature = "serde", serde(rename = "Rock Golem"))]
    RockGolem,
    #[strum(serialize = "Tunnel Mole")]
    #[cfg_attr(feature = "serde", serde(rename = "Tunnel Mole"))]
    TunnelMole,
    #[strum(serialize = "Rocky the Mole")]
    #[cfg_attr(feature = "serde", serde(rename = "Rocky the Mole"))]
    RockyTheMole,
}

/// One placement of a collectible.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PlacedItem {
    pub id: String,
    /// `None` while the item sits in the inventory without a tile.
    #[cfg_attr(feature = "serde", serde(default))]
    pub coordinates: Option<Position>,
    pub created_at: Timestamp,
    /// Instant at which construction finishes.
    pub ready_at: Timestamp,
}

impl PlacedItem {
    pub fn new(id: impl Into<String>, coordinates: Position, created_at: Timestamp) -> Self {
        Self {
            id: id.into(),
            coordinates: Some(coordinates),
            created_at,
            ready_at: created_at,
        }
    }

    pub fn with_ready_at(mut self, ready_at: Timestamp) -> Self {
        self.ready_at = ready_at;
        self
    }

    pub fn is_placed(&self) -> bool {
        self.coordinates.is_some()
    }

    pub fn is_built(&self, now: Timestamp) -> bool {
        self.ready_at <= now
    }

    /// Timed effects last `effect_ms` from placement; `None` never expires.
    pub fn is_within_effect_window(&self, now: Timestamp, effect_ms: Option<i64>) -> bool {
        match effect_ms {
            Some(duration) => self.created_at.saturating_add_millis(duration) > now,
            None => true,
        }
    }
}

/// Placements per collectible.
pub type Collectibles = BTreeMap<CollectibleName, Vec<PlacedItem>>;

/// True when at least one placement of `name` is on a tile, finished
/// building, and still inside its effect window at `now`.
pub fn is_collectible_active(
    name: CollectibleName,
    collectibles: &Collectibles,
    now: Timestamp,
    effect_ms: Option<i64>,
) -> bool {
    collectibles.get(&name).is_some_and(|placements| {
        placements.iter().any(|placed| {
            placed.is_placed()
                && placed.is_built(now)
                && placed.is_within_effect_window(now, effect_ms)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_HOURS_MS: i64 = 2 * 60 * 60 * 1000;

    fn totem(created_at: i64) -> PlacedItem {
        PlacedItem::new("totem-1", Position::new(2, 3), Timestamp(created_at))
    }

    fn with_totem(placed: PlacedItem) -> Collectibles {
        Collectibles::from([(CollectibleName::TimeWarpTotem, vec![placed])])
    }

    #[test]
    fn absent_collectible_is_inactive() {
        assert!(!is_collectible_active(
            CollectibleName::TimeWarpTotem,
            &Collectibles::new(),
            Timestamp(0),
            Some(TWO_HOURS_MS),
        ));
    }

    #[test]
    fn timed_effect_expires_after_its_window() {
        let collectibles = with_totem(totem(1_000));
        let name = CollectibleName::TimeWarpTotem;

        assert!(is_collectible_active(
            name,
            &collectibles,
            Timestamp(1_000 + TWO_HOURS_MS - 1),
            Some(TWO_HOURS_MS),
        ));
        assert!(!is_collectible_active(
            name,
            &collectibles,
            Timestamp(1_000 + TWO_HOURS_MS),
            Some(TWO_HOURS_MS),
        ));
    }

    #[test]
    fn unbuilt_or_unplaced_items_are_inactive() {
        let name = CollectibleName::TimeWarpTotem;

        let building = with_totem(totem(0).with_ready_at(Timestamp(500)));
        assert!(!is_collectible_active(name, &building, Timestamp(100), None));
        assert!(is_collectible_active(name, &building, Timestamp(500), None));

        let mut stored = totem(0);
        stored.coordinates = None;
        let stored = with_totem(stored);
        assert!(!is_collectible_active(name, &stored, Timestamp(100), None));
    }

    #[test]
    fn any_active_placement_counts() {
        let name = CollectibleName::TimeWarpTotem;
        let collectibles = Collectibles::from([(name, vec![totem(0), totem(TWO_HOURS_MS * 3)])]);

        assert!(is_collectible_active(
            name,
            &collectibles,
            Timestamp(TWO_HOURS_MS * 3 + 10),
            Some(TWO_HOURS_MS),
        ));
    }
}
