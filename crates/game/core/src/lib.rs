//! Deterministic land logic and data types.
//!
//! `land-core` defines the canonical rules (actions, engine, land state) and
//! exposes pure APIs: every reducer takes the current [`GameState`] by shared
//! reference and returns an independent successor. Time and balance values
//! enter only through the oracles bundled in [`GameEnv`].
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod modifiers;
pub mod state;

pub use action::{
    Action, ActionTransition, MineError, MineStoneArgs, MinedAtArgs, StoneMineAction, can_mine,
    get_mined_at, get_mined_at_with, mine_stone,
};
pub use config::GameConfig;
pub use engine::{ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError};
pub use env::{ClockOracle, ConfigOracle, FixedClock, GameEnv, OracleError, SystemClock};
pub use error::{ErrorSeverity, GameError};
pub use modifiers::{
    CollectibleModifier, ModifierContext, ModifierRegistry, RecoveryModifier, SkillModifier,
};
pub use state::{
    ActivityLedger, ActivityName, Bumpkin, CollectibleName, Collectibles, GameState, Inventory,
    ItemName, PlacedItem, Position, Rock, SkillName, Skills, StoneNode, Timestamp,
    is_collectible_active, track_activity, track_activity_by,
};

// Re-exported so callers can build quantities without a direct dependency.
pub use rust_decimal::Decimal;
