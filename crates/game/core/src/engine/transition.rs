//! Action transition dispatch and execution logic.

use tracing::debug;

use crate::action::{Action, ActionTransition};
use crate::env::GameEnv;
use crate::error::GameError;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Runs a transition through the three-phase pipeline and returns the next state.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions against the caller's state
/// 2. `apply` - Mutate a private copy of the state
/// 3. `post_validate` - Verify postconditions on the copy
///
/// The copy is only handed back once every phase has passed, so a failure in
/// any phase leaves no trace.
pub(crate) fn drive_transition<T>(
    transition: &T,
    state: &GameState,
    env: &GameEnv<'_>,
) -> Result<GameState, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
    T::Error: GameError,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| reject(TransitionPhase::PreValidate, error))?;

    let mut next = state.clone();

    transition
        .apply(&mut next, env)
        .map_err(|error| reject(TransitionPhase::Apply, error))?;

    transition
        .post_validate(&next, env)
        .map_err(|error| reject(TransitionPhase::PostValidate, error))?;

    Ok(next)
}

fn reject<E: GameError>(phase: TransitionPhase, error: E) -> TransitionPhaseError<E> {
    debug!(
        phase = phase.as_str(),
        code = error.error_code(),
        severity = error.severity().as_str(),
        %error,
        "transition rejected"
    );
    TransitionPhaseError::new(phase, error)
}

/// Routes each action type to its transition.
pub(super) fn execute_transition(
    action: &Action,
    state: &GameState,
    env: &GameEnv<'_>,
) -> Result<GameState, ExecuteError> {
    match action {
        Action::StoneMined(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::StoneMine)
        }
    }
}
