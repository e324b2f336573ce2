use crate::action::{ActionTransition, RejectReason, check_invariants, require_ongoing};
use crate::combat::{check_playable, resolve_play};
use crate::env::DuelEnv;
use crate::state::{CardId, DuelState, Side};

/// Plays one card from `side`'s hand.
///
/// The card is identified by id; the engine uses its own copy from the hand,
/// which carries any mastery bonuses applied at initialization.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayCardAction {
    pub card: CardId,
    pub side: Side,
}

impl ActionTransition for PlayCardAction {
    type Error = RejectReason;

    fn pre_validate(&self, state: &DuelState, env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        require_ongoing(state)?;

        let actor = state.side(self.side);
        let card = actor
            .hand
            .iter()
            .find(|card| card.id == self.card)
            .ok_or_else(|| RejectReason::CardNotInHand {
                side: self.side,
                card: self.card.clone(),
            })?;
        check_playable(card, self.side, actor, env.config()).map(|_| ())
    }

    fn apply(&self, state: &mut DuelState, env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        let outcome = resolve_play(state, &self.card, self.side, env)?;
        tracing::debug!(
            "{} played {}: {} damage, {} stamina{}",
            outcome.side,
            outcome.card,
            outcome.damage,
            outcome.stamina_spent,
            outcome
                .combo
                .as_ref()
                .map(|c| format!(", combo '{}'", c.name))
                .unwrap_or_default()
        );
        Ok(())
    }

    fn post_validate(&self, state: &DuelState, env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        check_invariants(state, env)
    }
}
