//! Transient presentation signals.
//!
//! Nothing here is authoritative game state. The engine writes these fields
//! deterministically from the action just applied, and clears all of them on
//! `AttackAnimationComplete`.

use bitflags::bitflags;

use super::{CardId, Side, StatusEffectKind};

bitflags! {
    /// Screen-level effects requested by the last transition.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
    pub struct ScreenEffects: u8 {
        const SHAKE      = 1 << 0;
        const COMBO      = 1 << 1;
        const HEAL_GLOW  = 1 << 2;
        const BURN_FLASH = 1 << 3;
    }
}

/// Damage taken by one side in the last transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageSignal {
    pub target: Side,
    pub amount: u32,
}

/// Narration of what just happened.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuelMessage {
    ComboTriggered { name: String },
    Passed { side: Side, refund: u32 },
    BurnDamage { side: Side, amount: u32 },
    Defeated { side: Side },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UiSignals {
    /// Card currently mid-animation.
    pub attacking_card: Option<CardId>,
    pub attacker: Option<Side>,
    pub last_damage: Option<DamageSignal>,
    pub screen: ScreenEffects,
    /// Status effect whose visual should play.
    pub effect_vfx: Option<StatusEffectKind>,
    pub message: Option<DuelMessage>,
}

impl UiSignals {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }
}
