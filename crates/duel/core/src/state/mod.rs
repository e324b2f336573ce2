//! Authoritative duel state representation.
//!
//! This module owns the data structures that describe both sides of a duel.
//! Callers hold the latest [`DuelState`] value and replace it with whatever the
//! engine returns; the engine never keeps a reference between calls.
mod card;
mod combo;
mod mastery;
mod opponent;
mod status;
mod ui;

pub use card::{AppliedEffect, Card, CardId, CardStats, Category, EffectTarget};
pub use combo::{Combo, ComboBook, ComboEffect};
pub use mastery::{
    MasteryLevel, MasteryRecord, MasteryTable, PassiveAbility, PassiveEffect, PassiveTrigger,
};
pub use opponent::OpponentProfile;
pub use status::{StatusEffect, StatusEffectKind, StatusEffects};
pub use ui::{DamageSignal, DuelMessage, ScreenEffects, UiSignals};

/// One of the two duelists.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    #[default]
    Player,
    Opponent,
}

impl Side {
    pub const fn opposite(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }

    pub const fn from_is_player(is_player: bool) -> Self {
        if is_player {
            Self::Player
        } else {
            Self::Opponent
        }
    }

    pub const fn is_player(self) -> bool {
        matches!(self, Self::Player)
    }
}

/// Lifecycle of a duel.
///
/// Transitions are monotonic: `Pending -> Ongoing -> {Victory | Defeat}`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DuelStatus {
    #[default]
    Pending,
    Ongoing,
    Victory,
    Defeat,
}

impl DuelStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }

    /// Terminal status reached when `loser` drops to zero HP.
    pub const fn lost_by(loser: Side) -> Self {
        match loser {
            Side::Player => Self::Defeat,
            Side::Opponent => Self::Victory,
        }
    }
}

/// Per-side duel data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    /// May drop below zero; `hp <= 0` is the defeat condition.
    pub hp: i32,
    pub max_hp: i32,
    pub stamina: u32,
    /// Play priority order.
    pub hand: Vec<Card>,
    pub effects: StatusEffects,
    /// Loses the next turn handed to it.
    pub stunned: bool,
    /// Ignores debuffs until the start of its next turn.
    pub immune: bool,
}

impl Combatant {
    pub fn new(hp: u32, stamina: u32, hand: Vec<Card>) -> Self {
        let hp = i32::try_from(hp).unwrap_or(i32::MAX);
        Self {
            hp,
            max_hp: hp,
            stamina,
            hand,
            ..Self::default()
        }
    }

    /// HP clamped at zero for display.
    pub fn display_hp(&self) -> u32 {
        self.hp.max(0).unsigned_abs()
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    pub fn hand_position(&self, id: &CardId) -> Option<usize> {
        self.hand.iter().position(|card| &card.id == id)
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self
            .hp
            .saturating_sub(i32::try_from(amount).unwrap_or(i32::MAX));
    }

    /// Restores HP up to `max_hp`. Returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        self.hp = self.hp.saturating_add(amount).min(self.max_hp.max(before));
        self.hp.abs_diff(before)
    }
}

/// Canonical snapshot of one duel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuelState {
    pub status: DuelStatus,
    pub turn: Side,
    pub player: Combatant,
    pub opponent: Combatant,
    pub opponent_profile: OpponentProfile,
    /// Always within the configured bio-rhythm limit.
    pub bio_rhythm: i32,
    /// Armed combo trigger awaiting a matching card.
    pub primed_category: Option<Category>,
    /// Combo that fired on the last play, for narration only.
    pub active_combo: Option<Combo>,
    pub ui: UiSignals,
}

impl DuelState {
    /// Creates a pending duel awaiting initialization.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn side(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    pub fn is_ongoing(&self) -> bool {
        self.status == DuelStatus::Ongoing
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    /// Ends the duel if `side` has dropped to zero HP. Returns true if it did.
    pub(crate) fn check_defeat(&mut self, side: Side) -> bool {
        if !self.side(side).is_defeated() {
            return false;
        }
        self.status = DuelStatus::lost_by(side);
        self.ui.message = Some(DuelMessage::Defeated { side });
        tracing::debug!("{} defeated, duel ends as {}", side, self.status);
        true
    }
}
