//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionTransition};
use crate::env::DuelEnv;
use crate::state::DuelState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the duel state
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut DuelState,
    env: &DuelEnv<'_>,
) -> Result<(), TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))
}

/// Routes each action variant to its transition.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut DuelState,
    env: &DuelEnv<'_>,
) -> Result<(), ExecuteError> {
    match action {
        Action::Initialize(t) => drive_transition(t, state, env).map_err(ExecuteError::Initialize),
        Action::ProcessStartOfTurn(t) => {
            drive_transition(t, state, env).map_err(ExecuteError::StartOfTurn)
        }
        Action::PlayCard(t) => drive_transition(t, state, env).map_err(ExecuteError::PlayCard),
        Action::OpponentTurn(t) => {
            drive_transition(t, state, env).map_err(ExecuteError::OpponentTurn)
        }
        Action::Pass(t) => drive_transition(t, state, env).map_err(ExecuteError::Pass),
        Action::AttackAnimationComplete(t) => {
            drive_transition(t, state, env).map_err(ExecuteError::AnimationComplete)
        }
        Action::EndDuel(t) => drive_transition(t, state, env).map_err(ExecuteError::EndDuel),
    }
}
