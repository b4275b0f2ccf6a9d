//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It
//! routes each [`Action`] through its transition phases against a private
//! copy of the caller's state and surfaces rich error information when a
//! phase rejects it. Callers apply actions one at a time, feeding each
//! returned state into the next call.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub(crate) use transition::drive_transition;

use tracing::debug;

use crate::action::Action;
use crate::env::{FixedClock, GameEnv};
use crate::state::{GameState, Timestamp};

/// Reduces actions against game states.
///
/// The engine never mutates the state it is given: every successful call
/// returns a new, independent [`GameState`], and a failed call returns only
/// the error.
#[derive(Clone, Copy, Debug)]
pub struct GameEngine<'a> {
    env: GameEnv<'a>,
}

impl<'a> GameEngine<'a> {
    /// Creates an engine reading configuration and time from `env`.
    pub fn new(env: GameEnv<'a>) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &GameEnv<'a> {
        &self.env
    }

    /// Reduces `action` against `state` at the environment's current time.
    ///
    /// The clock is read once; every phase sees that instant.
    pub fn reduce(&self, state: &GameState, action: &Action) -> Result<GameState, ExecuteError> {
        let now = self.env.now()?;
        self.reduce_at(state, action, now)
    }

    /// Reduces `action` as if it had been requested at `created_at`.
    pub fn reduce_at(
        &self,
        state: &GameState,
        action: &Action,
        created_at: Timestamp,
    ) -> Result<GameState, ExecuteError> {
        let clock = FixedClock::new(created_at);
        let env = self.env.with_clock(&clock);
        let next = transition::execute_transition(action, state, &env)?;
        debug!(action = action.as_str(), %created_at, "action reduced");
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

    use rust_decimal::Decimal;

    use super::*;
    use crate::action::StoneMineAction;
    use crate::config::GameConfig;
    use crate::env::{ClockOracle, OracleError};
    use crate::error::GameError;
    use crate::state::{Bumpkin, ItemName, Rock};

    const WINDOW_MS: i64 = GameConfig::DEFAULT_STONE_RECOVERY_SECS as i64 * 1000;

    fn land() -> GameState {
        GameState::empty()
            .with_rock(0, Rock::new(Decimal::from(3), Timestamp(0)))
            .with_inventory(
                [(ItemName::Pickaxe, Decimal::from(2))]
                    .into_iter()
                    .collect(),
            )
            .with_bumpkin(Bumpkin::new())
    }

    #[test]
    fn reduce_reads_time_from_the_clock_oracle() {
        let config = GameConfig::default();
        let clock = FixedClock::new(Timestamp(WINDOW_MS + 1));
        let engine = GameEngine::new(GameEnv::with_all(&config, &clock));
        let state = land();

        let next = engine
            .reduce(&state, &StoneMineAction::new(0).into())
            .unwrap();

        assert_eq!(next.inventory.amount(ItemName::Stone), Decimal::from(3));
        assert_eq!(next.stones[&0].stone.mined_at, Timestamp(WINDOW_MS + 1));
    }

    #[test]
    fn rejections_carry_the_phase_and_player_message() {
        let config = GameConfig::default();
        let clock = FixedClock::new(Timestamp(1));
        let engine = GameEngine::new(GameEnv::with_all(&config, &clock));
        let state = land();

        let error = engine
            .reduce(&state, &StoneMineAction::new(0).into())
            .unwrap_err();

        assert_eq!(error.phase(), Some(TransitionPhase::PreValidate));
        assert_eq!(error.reason(), "Rock is still recovering");
        assert_eq!(error.error_code(), "MINE_STILL_RECOVERING");
        assert_eq!(
            error.to_string(),
            "stone mine action failed: pre_validate failed: Rock is still recovering"
        );
    }

    #[test]
    fn reduce_at_overrides_the_clock() {
        let config = GameConfig::default();
        let clock = FixedClock::new(Timestamp(1));
        let engine = GameEngine::new(GameEnv::with_all(&config, &clock));
        let state = land();
        let action: Action = StoneMineAction::new(0).into();

        assert!(engine.reduce(&state, &action).is_err());
        let next = engine
            .reduce_at(&state, &action, Timestamp(WINDOW_MS + 1))
            .unwrap();

        assert_eq!(next.inventory.amount(ItemName::Pickaxe), Decimal::ONE);
    }

    /// Advances by one millisecond on every read.
    struct TickingClock {
        next: AtomicI64,
        reads: AtomicUsize,
    }

    impl ClockOracle for TickingClock {
        fn now(&self) -> Timestamp {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Timestamp(self.next.fetch_add(1, Ordering::SeqCst))
        }
    }

    #[test]
    fn reduce_reads_the_clock_once() {
        let config = GameConfig::default();
        let clock = TickingClock {
            next: AtomicI64::new(WINDOW_MS + 1),
            reads: AtomicUsize::new(0),
        };
        let engine = GameEngine::new(GameEnv::with_all(&config, &clock));

        let next = engine
            .reduce(&land(), &StoneMineAction::new(0).into())
            .unwrap();

        assert_eq!(clock.reads.load(Ordering::SeqCst), 1);
        assert_eq!(next.stones[&0].stone.mined_at, Timestamp(WINDOW_MS + 1));
    }

    #[test]
    fn reduce_without_a_clock_fails_before_the_pipeline() {
        let config = GameConfig::default();
        let env = GameEnv::new(Some(&config), None);
        let engine = GameEngine::new(env);

        let error = engine
            .reduce(&land(), &StoneMineAction::new(0).into())
            .unwrap_err();

        assert_eq!(error, ExecuteError::Oracle(OracleError::ClockNotAvailable));
        assert_eq!(error.phase(), None);
        assert_eq!(error.error_code(), "ORACLE_CLOCK_NOT_AVAILABLE");
    }

    #[test]
    fn sequential_reductions_respect_the_cooldown() {
        let config = GameConfig::default();
        let clock = FixedClock::new(Timestamp(WINDOW_MS + 1));
        let engine = GameEngine::new(GameEnv::with_all(&config, &clock));
        let action: Action = StoneMineAction::new(0).into();

        let first = engine.reduce(&land(), &action).unwrap();
        let second = engine.reduce(&first, &action).unwrap_err();

        assert_eq!(second.error_code(), "MINE_STILL_RECOVERING");
        assert_eq!(first.inventory.amount(ItemName::Pickaxe), Decimal::ONE);
    }
}
