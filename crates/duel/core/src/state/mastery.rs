//! Player mastery and the passives it unlocks.
//!
//! Mastery is read once, when the duel is initialized. Boosted tiers add a flat
//! stat bonus to the card; Expert and Master also unlock the card's passive.

use std::collections::HashMap;

use super::{CardId, StatusEffectKind};

/// Per-card progression tier.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum MasteryLevel {
    #[default]
    Novice,
    Apprentice,
    Adept,
    Expert,
    Master,
}

impl MasteryLevel {
    /// Adept and above receive the flat stat bonus.
    pub fn is_boosted(self) -> bool {
        self >= Self::Adept
    }

    /// Expert and above unlock the card's passive ability.
    pub fn unlocks_passive(self) -> bool {
        self >= Self::Expert
    }
}

/// Mastery progress of one card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MasteryRecord {
    pub level: MasteryLevel,
    #[cfg_attr(feature = "serde", serde(default))]
    pub streak: u32,
}

impl MasteryRecord {
    pub const fn new(level: MasteryLevel) -> Self {
        Self { level, streak: 0 }
    }
}

/// Mastery records keyed by card id.
pub type MasteryTable = HashMap<CardId, MasteryRecord>;

/// When a passive fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PassiveTrigger {
    DuelStart,
}

/// One-time effect of a passive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PassiveEffect {
    /// Raises the player's max and current HP for this duel.
    MaxHp(u32),
    /// Raises the player's starting stamina.
    Stamina(u32),
    /// Starts the duel with a status effect on the player.
    Grant { kind: StatusEffectKind, duration: u32 },
}

/// A passive ability carried by a card.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassiveAbility {
    pub name: String,
    pub trigger: PassiveTrigger,
    pub effect: PassiveEffect,
}

impl PassiveAbility {
    pub fn duel_start(name: impl Into<String>, effect: PassiveEffect) -> Self {
        Self {
            name: name.into(),
            trigger: PassiveTrigger::DuelStart,
            effect,
        }
    }
}
