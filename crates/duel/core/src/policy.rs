//! Opponent decision procedure.
//!
//! The opponent plays greedily: among the cards it can afford right now, the
//! one with the highest attack. Ties go to the earliest card in hand order, so
//! the choice is fully determined by the state.

use crate::combat::playable_cards;
use crate::config::DuelConfig;
use crate::state::{Card, DuelState, Side};

/// What the opponent decided to do this turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpponentDecision<'s> {
    Play(&'s Card),
    Pass,
}

/// Selects the card `side` should play, or `Pass` if nothing is affordable.
pub fn select_card<'s>(
    state: &'s DuelState,
    side: Side,
    config: &'s DuelConfig,
) -> OpponentDecision<'s> {
    let mut best: Option<&Card> = None;

    for card in playable_cards(state, side, config) {
        tracing::debug!("  candidate {}: attack={}", card.id, card.stats.attack);

        // In case of tie, first card wins (stable ordering)
        if best.is_none_or(|b| card.stats.attack > b.stats.attack) {
            best = Some(card);
        }
    }

    match best {
        Some(card) => {
            tracing::debug!("{} policy selected {}", side, card.id);
            OpponentDecision::Play(card)
        }
        None => {
            tracing::debug!("{} policy found nothing playable, passing", side);
            OpponentDecision::Pass
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Combatant, StatusEffectKind};

    fn with_opponent_hand(stamina: u32, hand: Vec<Card>) -> DuelState {
        DuelState {
            opponent: Combatant::new(100, stamina, hand),
            ..DuelState::new()
        }
    }

    #[test]
    fn picks_highest_affordable_attack() {
        let config = DuelConfig::default();
        let state = with_opponent_hand(
            4,
            vec![
                Card::new("a", "Stretch").with_stats(5, 0).with_cost(1),
                Card::new("b", "Deadlift").with_stats(30, 0).with_cost(8),
                Card::new("c", "Kettlebell").with_stats(12, 0).with_cost(4),
            ],
        );

        let decision = select_card(&state, Side::Opponent, &config);

        assert!(matches!(decision, OpponentDecision::Play(card) if card.id.as_str() == "c"));
    }

    #[test]
    fn ties_break_by_hand_order() {
        let config = DuelConfig::default();
        let state = with_opponent_hand(
            10,
            vec![
                Card::new("first", "Plank").with_stats(9, 0),
                Card::new("second", "Squat").with_stats(9, 0),
            ],
        );

        let decision = select_card(&state, Side::Opponent, &config);

        assert!(matches!(decision, OpponentDecision::Play(card) if card.id.as_str() == "first"));
    }

    #[test]
    fn energized_discount_widens_the_choice() {
        let config = DuelConfig::default();
        let mut state = with_opponent_hand(
            3,
            vec![Card::new("a", "Sprint").with_stats(20, 0).with_cost(5)],
        );
        assert_eq!(select_card(&state, Side::Opponent, &config), OpponentDecision::Pass);

        state
            .opponent
            .effects
            .add(StatusEffectKind::Energized, 1, None);
        assert!(matches!(
            select_card(&state, Side::Opponent, &config),
            OpponentDecision::Play(_)
        ));
    }

    #[test]
    fn fatigue_excludes_expensive_cards() {
        let config = DuelConfig::default();
        let mut state = with_opponent_hand(
            10,
            vec![
                Card::new("big", "Ironman").with_stats(40, 0).with_cost(7),
                Card::new("small", "Jog").with_stats(6, 0).with_cost(2),
            ],
        );
        state.opponent.effects.add(StatusEffectKind::Fatigued, 2, None);

        let decision = select_card(&state, Side::Opponent, &config);

        assert!(matches!(decision, OpponentDecision::Play(card) if card.id.as_str() == "small"));
    }
}
