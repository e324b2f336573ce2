//! Protocol cards as consumed by the duel.
//!
//! Cards are resolved from the content catalog before they reach the engine.
//! Cost, duration and category fields are immutable for the life of a duel;
//! only the stat block is adjusted once, by mastery bonuses at duel start.

use super::{PassiveAbility, StatusEffectKind};

/// Catalog identifier of a card instance.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CardId(pub String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl core::fmt::Display for CardId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category tag of a wellness protocol.
///
/// Categories drive combo priming and the stack score's repetition bonus.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Category {
    Light,
    Movement,
    Breath,
    Cold,
    Heat,
    Sleep,
    Nutrition,
    Mindset,
    Recovery,
    Social,
}

/// Derived combat stats of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CardStats {
    pub attack: u32,
    pub defense: u32,
}

impl CardStats {
    pub const fn new(attack: u32, defense: u32) -> Self {
        Self { attack, defense }
    }

    /// Attack plus defense, the per-card term of the stack score.
    pub const fn power(&self) -> u32 {
        self.attack.saturating_add(self.defense)
    }
}

/// Which side an applied status effect lands on, relative to the card's owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectTarget {
    OnSelf,
    OnOpponent,
}

/// Status effect a card applies when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppliedEffect {
    pub kind: StatusEffectKind,
    pub duration: u32,
    pub target: EffectTarget,
}

impl AppliedEffect {
    pub const fn new(kind: StatusEffectKind, duration: u32, target: EffectTarget) -> Self {
        Self {
            kind,
            duration,
            target,
        }
    }
}

/// A protocol card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    pub id: CardId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub categories: Vec<Category>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: CardStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stamina_cost: u32,
    /// Signed shift of the bio-rhythm (positive: sympathetic).
    #[cfg_attr(feature = "serde", serde(default))]
    pub bio_rhythm_impact: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub applies_status_effect: Option<AppliedEffect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub primes_category: Option<Category>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub passive: Option<PassiveAbility>,
}

impl Card {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    pub fn with_stats(mut self, attack: u32, defense: u32) -> Self {
        self.stats = CardStats::new(attack, defense);
        self
    }

    pub fn with_cost(mut self, stamina_cost: u32) -> Self {
        self.stamina_cost = stamina_cost;
        self
    }

    pub fn with_bio_rhythm(mut self, impact: i32) -> Self {
        self.bio_rhythm_impact = impact;
        self
    }

    pub fn with_effect(mut self, effect: AppliedEffect) -> Self {
        self.applies_status_effect = Some(effect);
        self
    }

    pub fn with_primes(mut self, category: Category) -> Self {
        self.primes_category = Some(category);
        self
    }

    pub fn with_passive(mut self, passive: PassiveAbility) -> Self {
        self.passive = Some(passive);
        self
    }

    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}
