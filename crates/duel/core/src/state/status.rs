//! Status effect system for duel sides.
//!
//! Status effects are timed modifiers owned by exactly one side.
//!
//! # Turn-based Duration
//!
//! Effects store the number of remaining turns. The owner's start-of-turn tick
//! decrements every effect by one and drops the ones that reach zero.
//! Multiple instances of the same kind may coexist and tick independently.

use arrayvec::ArrayVec;

use crate::config::DuelConfig;

/// Types of status effects.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatusEffectKind {
    // ========================================================================
    // Buffs (positive effects)
    // ========================================================================
    /// Next card deals boosted damage. Single use.
    Focused,

    /// Incoming card damage is halved.
    Calm,

    /// Next card costs less stamina. Single use.
    Energized,

    // ========================================================================
    // Debuffs (negative effects)
    // ========================================================================
    /// Damage over time at the start of the owner's turn.
    Inflamed,

    /// Expensive cards cannot be played.
    Fatigued,
}

impl StatusEffectKind {
    /// Returns true for debuffs, which `Immune` suppresses.
    pub const fn is_negative(&self) -> bool {
        matches!(self, Self::Inflamed | Self::Fatigued)
    }
}

/// A single status effect instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    /// Unique within its owner's list.
    pub id: u32,
    pub kind: StatusEffectKind,
    /// Remaining turns.
    pub duration: u32,
    pub value: Option<i32>,
}

/// Active status effects on one side, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffect, { DuelConfig::MAX_STATUS_EFFECTS }>,
    next_id: u32,
}

impl StatusEffects {
    /// Creates an empty status effect set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Checks if any instance of the given kind is active.
    pub fn has(&self, kind: StatusEffectKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    /// Counts the active instances of the given kind.
    pub fn count(&self, kind: StatusEffectKind) -> usize {
        self.effects.iter().filter(|e| e.kind == kind).count()
    }

    /// Appends a new effect instance and returns its id.
    ///
    /// Returns `None` when the set is at capacity; the effect is dropped.
    pub fn add(
        &mut self,
        kind: StatusEffectKind,
        duration: u32,
        value: Option<i32>,
    ) -> Option<u32> {
        if self.effects.is_full() {
            return None;
        }

        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.effects.push(StatusEffect {
            id,
            kind,
            duration,
            value,
        });
        Some(id)
    }

    /// Removes the oldest instance of the given kind, returning it.
    ///
    /// Used for single-use buffs that are spent by a play.
    pub fn consume(&mut self, kind: StatusEffectKind) -> Option<StatusEffect> {
        let index = self.effects.iter().position(|e| e.kind == kind)?;
        Some(self.effects.remove(index))
    }

    /// Removes every instance of the given kind.
    pub fn remove(&mut self, kind: StatusEffectKind) {
        self.effects.retain(|e| e.kind != kind);
    }

    /// Decrements every duration by one and drops effects that reach zero.
    ///
    /// Returns the number of effects that expired.
    pub fn tick(&mut self) -> usize {
        let before = self.effects.len();
        for effect in self.effects.iter_mut() {
            effect.duration = effect.duration.saturating_sub(1);
        }
        self.effects.retain(|e| e.duration > 0);
        before - self.effects.len()
    }

    /// Returns an iterator over all effects in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
