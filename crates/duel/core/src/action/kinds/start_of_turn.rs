use crate::action::{ActionTransition, RejectReason, check_invariants, require_ongoing};
use crate::engine::process_start_of_turn;
use crate::env::DuelEnv;
use crate::state::{DuelState, Side};

/// Damage over time and duration tick for one side, once per turn, before any
/// card is played that turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartOfTurnAction {
    pub side: Side,
}

impl ActionTransition for StartOfTurnAction {
    type Error = RejectReason;

    fn pre_validate(&self, state: &DuelState, _env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        require_ongoing(state)
    }

    fn apply(&self, state: &mut DuelState, env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        process_start_of_turn(state, self.side, env.config());
        Ok(())
    }

    fn post_validate(&self, state: &DuelState, env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        check_invariants(state, env)
    }
}
