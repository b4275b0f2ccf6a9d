//! Action domain.
//!
//! Each player intent is a small value type implementing [`ActionTransition`].
//! The [`Action`] envelope tags them with their wire name so that requests can
//! be decoded from JSON (`{"type": "stoneRock.mined", "index": 0}`) and routed
//! by the engine.

pub mod stone_mine;
mod transition;

pub use stone_mine::{
    MineError, MineStoneArgs, MinedAtArgs, StoneMineAction, can_mine, get_mined_at,
    get_mined_at_with, mine_stone,
};
pub use transition::ActionTransition;

/// Top-level action envelope.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type")
)]
pub enum Action {
    #[cfg_attr(feature = "serde", serde(rename = "stoneRock.mined"))]
    StoneMined(StoneMineAction),
}

impl Action {
    /// Returns the wire name of the action.
    ///
    /// Used for logging and as the serialization tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::StoneMined(_) => StoneMineAction::TYPE,
        }
    }
}

impl From<StoneMineAction> for Action {
    fn from(action: StoneMineAction) -> Self {
        Self::StoneMined(action)
    }
}
