pub mod bumpkin;
pub mod collectible;
pub mod common;
pub mod inventory;
pub mod rock;

// Re-export avatar types
pub use bumpkin::{
    ActivityLedger, ActivityName, Bumpkin, SkillName, Skills, has_skill, track_activity,
    track_activity_by,
};

// Re-export collectible types
pub use collectible::{CollectibleName, Collectibles, PlacedItem, is_collectible_active};

// Re-export common types
pub use common::{Position, Timestamp};

// Re-export inventory types
pub use inventory::{Inventory, ItemName};

// Re-export resource node types
pub use rock::{Rock, StoneNode};
