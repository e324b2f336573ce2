//! Start-of-turn processing.
//!
//! Damage over time lands first, then every effect of the side ticks down.
//! Each `Inflamed` instance deals its damage independently.

use crate::config::DuelConfig;
use crate::state::{DamageSignal, DuelMessage, DuelState, ScreenEffects, Side, StatusEffectKind};

/// What the start-of-turn tick did to one side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnStartReport {
    pub burn_damage: u32,
    pub expired: usize,
    pub finished: bool,
}

/// Applies damage over time and ticks durations for `side`.
pub fn process_start_of_turn(
    state: &mut DuelState,
    side: Side,
    config: &DuelConfig,
) -> TurnStartReport {
    let combatant = state.side_mut(side);

    // Immunity granted by a combo covers exactly one enemy turn.
    combatant.immune = false;

    let burns = combatant.effects.count(StatusEffectKind::Inflamed);
    let burn_damage = config
        .inflamed_damage
        .saturating_mul(u32::try_from(burns).unwrap_or(u32::MAX));
    combatant.take_damage(burn_damage);
    let expired = combatant.effects.tick();

    if burn_damage > 0 {
        state.ui.last_damage = Some(DamageSignal {
            target: side,
            amount: burn_damage,
        });
        state.ui.screen.insert(ScreenEffects::BURN_FLASH);
        state.ui.effect_vfx = Some(StatusEffectKind::Inflamed);
        state.ui.message = Some(DuelMessage::BurnDamage {
            side,
            amount: burn_damage,
        });
    }

    tracing::debug!(
        "start of {} turn: {} burn damage, {} effects expired",
        side,
        burn_damage,
        expired
    );

    let finished = state.check_defeat(side);

    TurnStartReport {
        burn_damage,
        expired,
        finished,
    }
}
