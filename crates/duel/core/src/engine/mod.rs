//! Duel reducer and action execution pipeline.
//!
//! The [`DuelEngine`] is the authoritative reducer for [`DuelState`]. It never
//! holds state between calls: every call takes the caller's current state and
//! returns the next one. Rejections are surfaced through [`DuelEngine::try_apply`]
//! and swallowed by [`DuelEngine::apply`], which returns the input unchanged.

mod errors;
mod transition;
pub mod turns;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub use turns::{TurnStartReport, process_start_of_turn};

use crate::action::Action;
use crate::env::DuelEnv;
use crate::error::GameError;
use crate::state::DuelState;

/// Pure reducer over [`DuelState`].
///
/// All actions flow through the three-phase pipeline:
/// pre_validate → apply → post_validate
#[derive(Clone, Copy, Debug)]
pub struct DuelEngine<'a> {
    env: DuelEnv<'a>,
}

impl<'a> DuelEngine<'a> {
    pub fn new(env: DuelEnv<'a>) -> Self {
        Self { env }
    }

    pub fn env(&self) -> DuelEnv<'a> {
        self.env
    }

    /// Applies `action` to a copy of `state`, or reports why it was refused.
    ///
    /// On error the caller's state is untouched; the partially mutated copy is
    /// discarded.
    pub fn try_apply(&self, state: &DuelState, action: &Action) -> Result<DuelState, ExecuteError> {
        let mut next = state.clone();
        transition::execute_transition(action, &mut next, &self.env)?;
        tracing::debug!(
            "{} accepted (status={}, turn={}, hp {}/{})",
            action.as_str(),
            next.status,
            next.turn,
            next.player.hp,
            next.opponent.hp
        );
        Ok(next)
    }

    /// Reducer entry point: the next state, or `state` itself if the action
    /// was rejected.
    pub fn apply(&self, state: &DuelState, action: &Action) -> DuelState {
        match self.try_apply(state, action) {
            Ok(next) => next,
            Err(error) => {
                if error.severity().is_internal() {
                    tracing::warn!(
                        "{} [{}] during {}: {}",
                        action.as_str(),
                        error.error_code(),
                        error.phase().as_str(),
                        error
                    );
                } else {
                    tracing::debug!(
                        "{} rejected [{}]: {}",
                        action.as_str(),
                        error.error_code(),
                        error
                    );
                }
                state.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{DuelSetup, RejectReason};
    use crate::config::DuelConfig;
    use crate::state::{Card, ComboBook, DuelStatus, MasteryTable, OpponentProfile, Side};

    fn started(engine: &DuelEngine<'_>) -> DuelState {
        let setup = DuelSetup::new(
            OpponentProfile::challenge("Sugar Crash", 60, 8),
            vec![Card::new("walk", "Morning Walk").with_stats(12, 3).with_cost(3)],
            vec![Card::new("snack", "Midnight Snack").with_stats(8, 0).with_cost(2)],
        );
        engine.apply(&DuelState::new(), &Action::initialize(setup, MasteryTable::new()))
    }

    #[test]
    fn rejection_reports_phase_and_reason() {
        let config = DuelConfig::default();
        let combos = ComboBook::default();
        let engine = DuelEngine::new(DuelEnv::new(&config, &combos));

        let error = engine
            .try_apply(&DuelState::new(), &Action::pass(Side::Player))
            .unwrap_err();

        assert_eq!(error.phase(), TransitionPhase::PreValidate);
        assert_eq!(
            error.reason(),
            &RejectReason::NotOngoing {
                status: DuelStatus::Pending
            }
        );
        assert_eq!(error.error_code(), "DUEL_NOT_ONGOING");
        assert!(matches!(error, ExecuteError::Pass(_)));
    }

    #[test]
    fn apply_returns_input_on_rejection() {
        let config = DuelConfig::default();
        let combos = ComboBook::default();
        let engine = DuelEngine::new(DuelEnv::new(&config, &combos));
        let state = started(&engine);

        let ghost = Card::new("ghost", "Not In Hand").with_stats(99, 0);
        let next = engine.apply(&state, &Action::play_card(&ghost, Side::Player));

        assert_eq!(next, state);
    }

    #[test]
    fn accepted_action_leaves_input_untouched() {
        let config = DuelConfig::default();
        let combos = ComboBook::default();
        let engine = DuelEngine::new(DuelEnv::new(&config, &combos));
        let state = started(&engine);
        let walk = state.player.hand[0].clone();

        let next = engine
            .try_apply(&state, &Action::play_card(&walk, Side::Player))
            .unwrap();

        assert_eq!(state.player.hand.len(), 1);
        assert!(next.player.hand.is_empty());
        assert_eq!(next.opponent.hp, 48);
    }
}
