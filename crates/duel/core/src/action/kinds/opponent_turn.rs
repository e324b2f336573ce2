use crate::action::{ActionTransition, RejectReason, check_invariants, require_ongoing};
use crate::combat::resolve_play;
use crate::env::DuelEnv;
use crate::policy::{OpponentDecision, select_card};
use crate::state::{DuelState, Side};

use super::pass::apply_pass;

/// Lets the opponent policy act: play its best affordable card, or pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpponentTurnAction;

impl ActionTransition for OpponentTurnAction {
    type Error = RejectReason;

    fn pre_validate(&self, state: &DuelState, _env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        require_ongoing(state)
    }

    fn apply(&self, state: &mut DuelState, env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        let chosen = match select_card(state, Side::Opponent, env.config()) {
            OpponentDecision::Play(card) => Some(card.id.clone()),
            OpponentDecision::Pass => None,
        };

        match chosen {
            Some(card) => {
                let outcome = resolve_play(state, &card, Side::Opponent, env)?;
                tracing::debug!("opponent played {} for {} damage", card, outcome.damage);
            }
            None => apply_pass(state, Side::Opponent, env.config().pass_refund),
        }
        Ok(())
    }

    fn post_validate(&self, state: &DuelState, env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        check_invariants(state, env)
    }
}
