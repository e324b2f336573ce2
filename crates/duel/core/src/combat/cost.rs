//! Stamina cost and playability rules.

use crate::action::RejectReason;
use crate::config::DuelConfig;
use crate::state::{Card, Combatant, DuelState, Side, StatusEffectKind, StatusEffects};

/// Stamina a card costs after the `Energized` discount, floored at zero.
pub fn effective_cost(card: &Card, effects: &StatusEffects, config: &DuelConfig) -> u32 {
    if effects.has(StatusEffectKind::Energized) {
        card.stamina_cost.saturating_sub(config.energized_discount)
    } else {
        card.stamina_cost
    }
}

/// Checks whether `side` may play `card` and returns the stamina it will spend.
///
/// # Errors
///
/// - [`RejectReason::InsufficientStamina`] when the effective cost exceeds stamina
/// - [`RejectReason::FatigueLockout`] when fatigued and the nominal cost is too high
pub fn check_playable(
    card: &Card,
    side: Side,
    combatant: &Combatant,
    config: &DuelConfig,
) -> Result<u32, RejectReason> {
    let cost = effective_cost(card, &combatant.effects, config);
    if cost > combatant.stamina {
        return Err(RejectReason::InsufficientStamina {
            side,
            cost,
            stamina: combatant.stamina,
        });
    }

    if combatant.effects.has(StatusEffectKind::Fatigued)
        && card.stamina_cost > config.fatigue_cost_threshold
    {
        return Err(RejectReason::FatigueLockout {
            side,
            cost: card.stamina_cost,
            threshold: config.fatigue_cost_threshold,
        });
    }

    Ok(cost)
}

/// Cards in `side`'s hand that could be played right now, in hand order.
pub fn playable_cards<'s>(
    state: &'s DuelState,
    side: Side,
    config: &'s DuelConfig,
) -> impl Iterator<Item = &'s Card> + 's {
    let combatant = state.side(side);
    combatant
        .hand
        .iter()
        .filter(move |card| check_playable(card, side, combatant, config).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combatant(stamina: u32) -> Combatant {
        Combatant::new(100, stamina, Vec::new())
    }

    #[test]
    fn energized_discount_floors_at_zero() {
        let config = DuelConfig::default();
        let mut effects = StatusEffects::empty();
        effects.add(StatusEffectKind::Energized, 2, None);

        let cheap = Card::new("a", "Sun Salute").with_cost(1);
        let pricey = Card::new("b", "Ice Bath").with_cost(6);

        assert_eq!(effective_cost(&cheap, &effects, &config), 0);
        assert_eq!(effective_cost(&pricey, &effects, &config), 4);
    }

    #[test]
    fn rejects_when_stamina_short() {
        let config = DuelConfig::default();
        let card = Card::new("a", "Sprint").with_cost(4);

        let result = check_playable(&card, Side::Player, &combatant(3), &config);

        assert_eq!(
            result,
            Err(RejectReason::InsufficientStamina {
                side: Side::Player,
                cost: 4,
                stamina: 3
            })
        );
    }

    #[test]
    fn fatigue_uses_nominal_cost() {
        let config = DuelConfig::default();
        let mut tired = combatant(10);
        tired.effects.add(StatusEffectKind::Fatigued, 2, None);
        tired.effects.add(StatusEffectKind::Energized, 2, None);

        // Discounted to 4, but the nominal cost of 6 is still locked out.
        let card = Card::new("a", "Marathon").with_cost(6);
        assert!(matches!(
            check_playable(&card, Side::Opponent, &tired, &config),
            Err(RejectReason::FatigueLockout { cost: 6, .. })
        ));

        let light = Card::new("b", "Walk").with_cost(5);
        assert_eq!(check_playable(&light, Side::Opponent, &tired, &config), Ok(3));
    }
}
