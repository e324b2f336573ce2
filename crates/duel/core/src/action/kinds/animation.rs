use crate::action::{ActionTransition, RejectReason, require_ongoing};
use crate::env::DuelEnv;
use crate::state::{DuelState, Side};

/// Signals that the presentation layer finished animating the last attack.
///
/// This is the only transition that hands control to the other side. A side
/// stunned by a combo loses the turn it would have received.
///
/// After a lethal play the duel is already finished; the signal is still
/// accepted so the finishing blow's transient ui is cleared, but the turn and
/// status stay as they are.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationCompleteAction {
    pub was_player_attack: bool,
}

impl ActionTransition for AnimationCompleteAction {
    type Error = RejectReason;

    fn pre_validate(&self, state: &DuelState, _env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        if state.is_finished() {
            return Ok(());
        }
        require_ongoing(state)
    }

    fn apply(&self, state: &mut DuelState, _env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        state.ui.clear();
        state.active_combo = None;
        if state.is_finished() {
            return Ok(());
        }

        let attacker = Side::from_is_player(self.was_player_attack);
        let next = attacker.opposite();
        let stunned = state.side(next).stunned;
        if stunned {
            state.side_mut(next).stunned = false;
            state.turn = attacker;
            tracing::debug!("{} is stunned and loses the turn", next);
        } else {
            state.turn = next;
        }
        Ok(())
    }

    fn post_validate(&self, state: &DuelState, _env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        if !state.ui.is_clear() {
            return Err(RejectReason::InvariantViolated("ui signals not cleared"));
        }
        Ok(())
    }
}
