//! Damage calculation.
//!
//! # Formula
//!
//! ```text
//! damage = card.attack
//! if attacker Focused:   damage = round(damage * focused_percent / 100)
//! if combo DoubleDamage: damage = damage * combo_multiplier
//! if defender Calm:      damage = round(damage / calm_divisor)
//! ```
//!
//! Rounding is half-up on non-negative integers, no floating point.

use crate::config::DuelConfig;

/// Modifiers in effect for one play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DamageModifiers {
    pub attacker_focused: bool,
    pub combo_multiplier: Option<u32>,
    pub defender_calm: bool,
}

/// Calculates the final damage of a card with the given base attack.
pub fn calculate_damage(attack: u32, modifiers: DamageModifiers, config: &DuelConfig) -> u32 {
    let mut damage = attack;

    if modifiers.attacker_focused {
        damage = scale_percent(damage, config.focused_multiplier_percent);
    }

    if let Some(multiplier) = modifiers.combo_multiplier {
        damage = damage.saturating_mul(multiplier);
    }

    if modifiers.defender_calm {
        damage = divide_rounded(damage, config.calm_divisor);
    }

    damage
}

/// `round(value * percent / 100)`, half-up.
pub fn scale_percent(value: u32, percent: u32) -> u32 {
    let scaled = (u64::from(value) * u64::from(percent) + 50) / 100;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// `round(value / divisor)`, half-up. A zero divisor leaves the value unchanged.
pub fn divide_rounded(value: u32, divisor: u32) -> u32 {
    if divisor == 0 {
        return value;
    }
    let divisor = u64::from(divisor);
    let rounded = (u64::from(value) * 2 + divisor) / (2 * divisor);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focused_rounds_half_up() {
        assert_eq!(scale_percent(10, 130), 13);
        assert_eq!(scale_percent(15, 130), 20);
        assert_eq!(scale_percent(0, 130), 0);
    }

    #[test]
    fn calm_halves_rounding_half_up() {
        assert_eq!(divide_rounded(5, 2), 3);
        assert_eq!(divide_rounded(4, 2), 2);
        assert_eq!(divide_rounded(1, 2), 1);
        assert_eq!(divide_rounded(9, 0), 9);
    }

    #[test]
    fn combo_applies_before_calm() {
        let config = DuelConfig::default();
        let modifiers = DamageModifiers {
            attacker_focused: true,
            combo_multiplier: Some(2),
            defender_calm: true,
        };

        // 15 -> 20 (focused) -> 40 (combo) -> 20 (calm)
        assert_eq!(calculate_damage(15, modifiers, &config), 20);
    }
}
