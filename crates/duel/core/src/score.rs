//! Stack strength scoring.
//!
//! The score estimates a hand's potential, for pre-duel comparison and for
//! seeding power levels. It is never consulted by the resolver.
//!
//! # Formula
//!
//! ```text
//! score = Σ (attack + defense)
//!       + Σ over categories held by more than one card: count × repeat_bonus
//!       + Σ over combos whose prime and trigger both appear: synergy_bonus
//! ```

use std::collections::{BTreeMap, BTreeSet};

use crate::config::DuelConfig;
use crate::state::{Card, Category, ComboBook};

/// Computes the aggregate strength score of a hand.
pub fn calculate_stack_score(hand: &[Card], combos: &ComboBook, config: &DuelConfig) -> u32 {
    let base = hand
        .iter()
        .map(|card| card.stats.power())
        .fold(0, u32::saturating_add);

    let mut counts: BTreeMap<Category, u32> = BTreeMap::new();
    for card in hand {
        let distinct: BTreeSet<Category> = card.categories.iter().copied().collect();
        for category in distinct {
            *counts.entry(category).or_insert(0) += 1;
        }
    }

    let repetition = counts
        .values()
        .filter(|&&count| count > 1)
        .map(|count| count.saturating_mul(config.category_repeat_bonus))
        .fold(0, u32::saturating_add);

    let present = |category: Category| counts.contains_key(&category);
    let potential_combos = combos
        .iter()
        .filter(|combo| present(combo.prime_category) && present(combo.trigger_category))
        .count();
    let synergy = u32::try_from(potential_combos)
        .unwrap_or(u32::MAX)
        .saturating_mul(config.combo_synergy_bonus);

    base.saturating_add(repetition).saturating_add(synergy)
}

/// Side-by-side stack scores shown before a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackComparison {
    pub player: u32,
    pub opponent: u32,
}

impl StackComparison {
    pub fn new(
        player_hand: &[Card],
        opponent_hand: &[Card],
        combos: &ComboBook,
        config: &DuelConfig,
    ) -> Self {
        Self {
            player: calculate_stack_score(player_hand, combos, config),
            opponent: calculate_stack_score(opponent_hand, combos, config),
        }
    }

    /// Player score minus opponent score.
    pub fn advantage(&self) -> i64 {
        i64::from(self.player) - i64::from(self.opponent)
    }

    /// Player share of the combined score, in percent (50 when both are zero).
    pub fn player_share_percent(&self) -> u32 {
        let total = u64::from(self.player) + u64::from(self.opponent);
        if total == 0 {
            return 50;
        }
        u32::try_from(u64::from(self.player) * 100 / total).unwrap_or(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Combo, ComboEffect};

    fn light(id: &str) -> Card {
        Card::new(id, "Morning Light")
            .with_categories([Category::Light])
            .with_stats(10, 5)
    }

    #[test]
    fn repeated_category_scores_bonus() {
        let hand = vec![light("a"), light("b")];
        let score = calculate_stack_score(&hand, &ComboBook::default(), &DuelConfig::default());

        assert_eq!(score, (10 + 5) * 2 + 2 * 5);
    }

    #[test]
    fn combo_pairs_anywhere_in_hand_score_synergy() {
        let combos = ComboBook::new(vec![Combo::new(
            "Sunrise Run",
            Category::Light,
            Category::Movement,
            ComboEffect::DoubleDamage,
        )]);
        let run = Card::new("run", "Run")
            .with_categories([Category::Movement])
            .with_stats(8, 2);
        let hand = vec![run, light("a")];

        let score = calculate_stack_score(&hand, &combos, &DuelConfig::default());

        assert_eq!(score, 10 + 15 + 50);
    }

    #[test]
    fn duplicate_tags_on_one_card_do_not_repeat() {
        let card = Card::new("x", "Double Tag")
            .with_categories([Category::Cold, Category::Cold])
            .with_stats(1, 1);

        let score = calculate_stack_score(&[card], &ComboBook::default(), &DuelConfig::default());

        assert_eq!(score, 2);
    }

    #[test]
    fn huge_stats_saturate_instead_of_overflowing() {
        let giant = |id: &str| Card::new(id, "Giant").with_stats(u32::MAX / 2 + 1, u32::MAX);
        let hand = vec![giant("a"), giant("b")];

        let score = calculate_stack_score(&hand, &ComboBook::default(), &DuelConfig::default());

        assert_eq!(score, u32::MAX);
    }

    #[test]
    fn comparison_share() {
        let comparison = StackComparison {
            player: 30,
            opponent: 10,
        };
        assert_eq!(comparison.advantage(), 20);
        assert_eq!(comparison.player_share_percent(), 75);

        let empty = StackComparison::new(&[], &[], &ComboBook::default(), &DuelConfig::default());
        assert_eq!(empty.player_share_percent(), 50);
    }
}
