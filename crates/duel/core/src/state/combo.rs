//! Combo rules.
//!
//! Combos are static data: a primed category armed by one card, a trigger
//! category carried by a later card, and the bonus that fires when they meet.

use super::Category;

/// Bonus produced by a combo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComboEffect {
    /// Multiplies the triggering card's damage before defender mitigation.
    DoubleDamage,
    /// Restores HP to the playing side, capped at its maximum.
    Heal { amount: u32 },
    /// The defending side loses its next turn.
    Stun,
    /// The playing side ignores debuffs until the start of its next turn.
    Immune,
}

/// A static combo rule.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combo {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub prime_category: Category,
    pub trigger_category: Category,
    pub effect: ComboEffect,
}

impl Combo {
    pub fn new(
        name: impl Into<String>,
        prime_category: Category,
        trigger_category: Category,
        effect: ComboEffect,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            prime_category,
            trigger_category,
            effect,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// The set of combos known to a duel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ComboBook {
    combos: Vec<Combo>,
}

impl ComboBook {
    pub fn new(combos: Vec<Combo>) -> Self {
        Self { combos }
    }

    /// Finds the first combo primed by `primed` whose trigger is one of `categories`.
    pub fn find(&self, primed: Category, categories: &[Category]) -> Option<&Combo> {
        self.combos
            .iter()
            .find(|c| c.prime_category == primed && categories.contains(&c.trigger_category))
    }

    /// Returns true if any combo is primed by the given category.
    pub fn primes_anything(&self, category: Category) -> bool {
        self.combos.iter().any(|c| c.prime_category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combo> {
        self.combos.iter()
    }

    pub fn len(&self) -> usize {
        self.combos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }
}

impl FromIterator<Combo> for ComboBook {
    fn from_iter<I: IntoIterator<Item = Combo>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
