//! Resolution of a single card play.
//!
//! All validation happens before the first mutation, so a rejected play leaves
//! the state untouched even when called on a live value.

use crate::action::RejectReason;
use crate::env::DuelEnv;
use crate::state::{
    CardId, Category, Combo, ComboEffect, DamageSignal, DuelMessage, DuelState, EffectTarget,
    ScreenEffects, Side, StatusEffectKind,
};

use super::cost::check_playable;
use super::damage::{DamageModifiers, calculate_damage};

/// What a successful play did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayOutcome {
    pub card: CardId,
    pub side: Side,
    pub stamina_spent: u32,
    pub damage: u32,
    pub healed: u32,
    pub combo: Option<Combo>,
    pub applied: Option<StatusEffectKind>,
    /// True when the play ended the duel.
    pub finished: bool,
}

/// Finds the combo a card triggers against the currently primed category.
pub fn detect_combo<'c>(
    primed: Option<Category>,
    categories: &[Category],
    env: &DuelEnv<'c>,
) -> Option<&'c Combo> {
    env.combos().find(primed?, categories)
}

/// Plays the card `card_id` from `side`'s hand.
///
/// # Errors
///
/// - [`RejectReason::CardNotInHand`] if the card is not in the acting hand
/// - [`RejectReason::InsufficientStamina`] / [`RejectReason::FatigueLockout`]
///   from the cost rules
pub fn resolve_play(
    state: &mut DuelState,
    card_id: &CardId,
    side: Side,
    env: &DuelEnv<'_>,
) -> Result<PlayOutcome, RejectReason> {
    let config = env.config();
    let defender_side = side.opposite();

    let actor = state.side(side);
    let index = actor
        .hand_position(card_id)
        .ok_or_else(|| RejectReason::CardNotInHand {
            side,
            card: card_id.clone(),
        })?;
    let cost = check_playable(&actor.hand[index], side, actor, config)?;

    let attacker_focused = actor.effects.has(StatusEffectKind::Focused);
    let defender_calm = state
        .side(defender_side)
        .effects
        .has(StatusEffectKind::Calm);

    let card = state.side_mut(side).hand.remove(index);

    // Combo check against the armed category, otherwise arm a new one.
    let combo = detect_combo(state.primed_category, &card.categories, env).cloned();
    match &combo {
        Some(combo) => {
            tracing::debug!(
                "{} triggers combo '{}' ({:?} -> {:?})",
                card.id,
                combo.name,
                combo.prime_category,
                combo.trigger_category
            );
            state.primed_category = None;
        }
        None => {
            if let Some(category) = card.primes_category {
                if !env.combos().primes_anything(category) {
                    tracing::warn!(
                        "card {} primes {:?} but no combo uses it as a prime",
                        card.id,
                        category
                    );
                }
                state.primed_category = Some(category);
            }
        }
    }

    let combo_effect = combo.as_ref().map(|c| c.effect);
    let modifiers = DamageModifiers {
        attacker_focused,
        combo_multiplier: matches!(combo_effect, Some(ComboEffect::DoubleDamage))
            .then_some(config.combo_damage_multiplier),
        defender_calm,
    };
    let damage = calculate_damage(card.stats.attack, modifiers, config);

    // Spend resources and one-shot buffs.
    let actor = state.side_mut(side);
    actor.stamina -= cost;
    actor.effects.consume(StatusEffectKind::Energized);
    if attacker_focused {
        actor.effects.consume(StatusEffectKind::Focused);
    }

    let limit = config.bio_rhythm_limit.abs();
    state.bio_rhythm = state
        .bio_rhythm
        .saturating_add(card.bio_rhythm_impact)
        .clamp(-limit, limit);

    state.side_mut(defender_side).take_damage(damage);

    let mut healed = 0;
    match combo_effect {
        Some(ComboEffect::Heal { amount }) => healed = state.side_mut(side).heal(amount),
        Some(ComboEffect::Stun) => state.side_mut(defender_side).stunned = true,
        Some(ComboEffect::Immune) => state.side_mut(side).immune = true,
        Some(ComboEffect::DoubleDamage) | None => {}
    }

    let mut applied = None;
    if let Some(effect) = card.applies_status_effect {
        let target_side = match effect.target {
            EffectTarget::OnSelf => side,
            EffectTarget::OnOpponent => defender_side,
        };
        let target = state.side_mut(target_side);
        if effect.kind.is_negative() && target.immune {
            tracing::debug!("{} is immune, {} suppressed", target_side, effect.kind);
        } else if target.effects.add(effect.kind, effect.duration, None).is_some() {
            applied = Some(effect.kind);
        } else {
            tracing::warn!(
                "status effect list of {} is full, dropping {}",
                target_side,
                effect.kind
            );
        }
    }

    let mut screen = ScreenEffects::SHAKE;
    screen.set(ScreenEffects::COMBO, combo.is_some());
    screen.set(ScreenEffects::HEAL_GLOW, healed > 0);
    state.ui.attacking_card = Some(card.id.clone());
    state.ui.attacker = Some(side);
    state.ui.last_damage = Some(DamageSignal {
        target: defender_side,
        amount: damage,
    });
    state.ui.screen = screen;
    state.ui.effect_vfx = applied;
    state.ui.message = combo.as_ref().map(|c| DuelMessage::ComboTriggered {
        name: c.name.clone(),
    });
    state.active_combo = combo.clone();

    let finished = state.check_defeat(defender_side);

    Ok(PlayOutcome {
        card: card.id,
        side,
        stamina_spent: cost,
        damage,
        healed,
        combo,
        applied,
        finished,
    })
}
