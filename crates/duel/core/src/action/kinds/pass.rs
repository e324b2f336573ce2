use crate::action::{ActionTransition, RejectReason, check_invariants, require_ongoing};
use crate::env::DuelEnv;
use crate::state::{DuelMessage, DuelState, Side};

/// Skips playing and regains a little stamina.
///
/// Control is handed over by the following `AttackAnimationComplete`, as for
/// any other play.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassAction {
    pub side: Side,
}

/// Grants the pass refund to `side`. Shared with the opponent's turn.
pub(crate) fn apply_pass(state: &mut DuelState, side: Side, refund: u32) {
    let combatant = state.side_mut(side);
    combatant.stamina = combatant.stamina.saturating_add(refund);
    state.ui.message = Some(DuelMessage::Passed { side, refund });
    tracing::debug!("{} passes, +{} stamina", side, refund);
}

impl ActionTransition for PassAction {
    type Error = RejectReason;

    fn pre_validate(&self, state: &DuelState, _env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        require_ongoing(state)
    }

    fn apply(&self, state: &mut DuelState, env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        apply_pass(state, self.side, env.config().pass_refund);
        Ok(())
    }

    fn post_validate(&self, state: &DuelState, env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        check_invariants(state, env)
    }
}
