//! Mining stone from a rock node.
//!
//! A rock is either recovering or available. Mining an available rock spends
//! one Pickaxe, moves the rock's yield into the inventory, counts a
//! "Stone Mined" activity, and restarts the rock's recovery from a
//! (possibly back-dated) mined-at instant.

use rust_decimal::Decimal;
use tracing::debug;

use crate::action::ActionTransition;
use crate::engine::drive_transition;
use crate::env::{ConfigOracle, FixedClock, GameEnv, OracleError};
use crate::error::{ErrorSeverity, GameError};
use crate::modifiers::{ModifierContext, ModifierRegistry};
use crate::state::{
    ActivityName, Collectibles, GameState, ItemName, Rock, Skills, StoneNode, Timestamp,
    track_activity,
};

/// Reasons a mine request is rejected. `Display` is the player-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MineError {
    #[error("Stone does not exist")]
    StoneNotFound { index: u32 },

    #[error("You do not have a Bumpkin")]
    MissingBumpkin,

    #[error("Rock is still recovering")]
    StillRecovering { index: u32, recovers_at: Timestamp },

    #[error("No pickaxes left")]
    NoPickaxes,

    #[error("rock {index} was not reset after mining")]
    RockNotReset { index: u32 },

    #[error("pickaxe count went negative")]
    PickaxesOverdrawn,

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for MineError {
    fn severity(&self) -> ErrorSeverity {
        use MineError::*;
        match self {
            StoneNotFound { .. } | MissingBumpkin => ErrorSeverity::Validation,
            StillRecovering { .. } | NoPickaxes => ErrorSeverity::Recoverable,
            RockNotReset { .. } | PickaxesOverdrawn => ErrorSeverity::Internal,
            Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use MineError::*;
        match self {
            StoneNotFound { .. } => "MINE_STONE_NOT_FOUND",
            MissingBumpkin => "MINE_MISSING_BUMPKIN",
            StillRecovering { .. } => "MINE_STILL_RECOVERING",
            NoPickaxes => "MINE_NO_PICKAXES",
            RockNotReset { .. } => "MINE_ROCK_NOT_RESET",
            PickaxesOverdrawn => "MINE_PICKAXES_OVERDRAWN",
            Oracle(error) => error.error_code(),
        }
    }
}

/// Request to mine the stone rock placed at `index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoneMineAction {
    pub index: u32,
}

impl StoneMineAction {
    /// Wire name of this action.
    pub const TYPE: &'static str = "stoneRock.mined";

    pub fn new(index: u32) -> Self {
        Self { index }
    }
}

/// True once the rock's recovery window has fully elapsed at `now`.
///
/// A `mined_at` in the future yields a negative elapsed time, so the rock is
/// treated as still recovering.
pub fn can_mine(rock: &Rock, now: Timestamp, config: &dyn ConfigOracle) -> bool {
    rock.stone.is_recovered(now, config.stone_recovery_ms())
}

pub struct MinedAtArgs<'a> {
    pub skills: &'a Skills,
    pub created_at: Timestamp,
    pub collectibles: &'a Collectibles,
}

/// Mined-at instant to record after a successful mine.
///
/// Starts from `created_at` and moves it into the past by every active stone
/// modifier, which makes the rock replenish sooner. Never later than
/// `created_at`.
pub fn get_mined_at(args: MinedAtArgs<'_>, config: &dyn ConfigOracle) -> Timestamp {
    get_mined_at_with(&ModifierRegistry::stone(), args, config)
}

/// [`get_mined_at`] against an explicit modifier set.
pub fn get_mined_at_with(
    registry: &ModifierRegistry,
    args: MinedAtArgs<'_>,
    config: &dyn ConfigOracle,
) -> Timestamp {
    let ctx = ModifierContext {
        skills: args.skills,
        collectibles: args.collectibles,
        now: args.created_at,
        config,
    };
    let reduction = registry.total_reduction_ms(&ctx, config.stone_recovery_ms());
    args.created_at.saturating_sub_millis(reduction)
}

pub struct MineStoneArgs<'a> {
    pub state: &'a GameState,
    pub action: &'a StoneMineAction,
    /// Instant of the request; `None` reads the environment's clock.
    pub created_at: Option<Timestamp>,
}

/// Mines a stone rock and returns the resulting state.
///
/// The same instant drives the recovery check and the new mined-at value.
/// On error nothing is produced and `args.state` is untouched.
pub fn mine_stone(args: MineStoneArgs<'_>, env: &GameEnv<'_>) -> Result<GameState, MineError> {
    let created_at = match args.created_at {
        Some(created_at) => created_at,
        None => env.now()?,
    };
    let clock = FixedClock::new(created_at);
    let env = env.with_clock(&clock);

    drive_transition(args.action, args.state, &env).map_err(|failure| failure.error)
}

impl ActionTransition for StoneMineAction {
    type Error = MineError;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let rock = state
            .rock(self.index)
            .ok_or(MineError::StoneNotFound { index: self.index })?;

        if state.bumpkin.is_none() {
            return Err(MineError::MissingBumpkin);
        }

        let config = env.config()?;
        let now = env.now()?;
        if !can_mine(rock, now, config) {
            return Err(MineError::StillRecovering {
                index: self.index,
                recovers_at: rock.stone.recovers_at(config.stone_recovery_ms()),
            });
        }

        if state.inventory.amount(ItemName::Pickaxe) < Decimal::ONE {
            return Err(MineError::NoPickaxes);
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let config = env.config()?;
        let now = env.now()?;

        let GameState {
            stones,
            inventory,
            bumpkin,
            collectibles,
        } = state;
        let rock = stones
            .get_mut(&self.index)
            .ok_or(MineError::StoneNotFound { index: self.index })?;
        let bumpkin = bumpkin.as_mut().ok_or(MineError::MissingBumpkin)?;

        // Yield is read before the node is reset.
        let stone_mined = rock.stone.amount;

        let pickaxes_left = inventory
            .deduct(ItemName::Pickaxe, Decimal::ONE)
            .ok_or(MineError::NoPickaxes)?;
        let stone_total = inventory.add(ItemName::Stone, stone_mined);

        let mined_at = get_mined_at(
            MinedAtArgs {
                skills: &bumpkin.skills,
                created_at: now,
                collectibles: &*collectibles,
            },
            config,
        );
        rock.stone = StoneNode::new(StoneNode::RESET_AMOUNT, mined_at);

        bumpkin.activity = track_activity(ActivityName::StoneMined, &bumpkin.activity);

        debug!(
            index = self.index,
            %stone_mined,
            %stone_total,
            %pickaxes_left,
            %mined_at,
            "stone mined"
        );

        Ok(())
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let rock = state
            .rock(self.index)
            .ok_or(MineError::StoneNotFound { index: self.index })?;

        if rock.stone.amount != StoneNode::RESET_AMOUNT {
            return Err(MineError::RockNotReset { index: self.index });
        }

        if state.inventory.amount(ItemName::Pickaxe) < Decimal::ZERO {
            return Err(MineError::PickaxesOverdrawn);
        }

        Ok(())
    }
}
