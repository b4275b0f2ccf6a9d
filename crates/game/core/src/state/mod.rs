//! Authoritative game state representation.
//!
//! This module owns the data structures that describe a player's land:
//! resource nodes, inventory, the bumpkin avatar, and placed collectibles.
//! Reducers take the state by shared reference and hand back an owned,
//! independent successor; nothing here is mutated in place by the engine.
pub mod types;

use std::collections::BTreeMap;

pub use types::{
    ActivityLedger, ActivityName, Bumpkin, CollectibleName, Collectibles, Inventory, ItemName,
    PlacedItem, Position, Rock, SkillName, Skills, StoneNode, Timestamp, has_skill,
    is_collectible_active, track_activity, track_activity_by,
};

/// Canonical snapshot of a player's land.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GameState {
    /// Stone rock nodes keyed by their placement index.
    pub stones: BTreeMap<u32, Rock>,
    pub inventory: Inventory,
    /// The player's avatar; absent until one has been minted.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub bumpkin: Option<Bumpkin>,
    pub collectibles: Collectibles,
}

impl GameState {
    /// Creates an empty land with no nodes, items, or avatar.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_bumpkin(mut self, bumpkin: Bumpkin) -> Self {
        self.bumpkin = Some(bumpkin);
        self
    }

    pub fn with_rock(mut self, index: u32, rock: Rock) -> Self {
        self.stones.insert(index, rock);
        self
    }

    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn with_collectibles(mut self, collectibles: Collectibles) -> Self {
        self.collectibles = collectibles;
        self
    }

    pub fn rock(&self, index: u32) -> Option<&Rock> {
        self.stones.get(&index)
    }

    pub fn rock_mut(&mut self, index: u32) -> Option<&mut Rock> {
        self.stones.get_mut(&index)
    }
}
