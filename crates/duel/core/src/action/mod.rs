//! Action domain.
//!
//! Every input to the duel is an [`Action`] variant. Each variant carries a
//! transition type implementing [`ActionTransition`], and the engine drives all
//! of them through the same pre_validate → apply → post_validate pipeline.
//!
//! # Module Structure
//!
//! - `error`: rule rejections ([`RejectReason`])
//! - `kinds`: one transition per action kind

pub mod error;
pub mod kinds;

pub use error::RejectReason;
pub use kinds::{
    AnimationCompleteAction, DuelSetup, EndDuelAction, InitializeAction, OpponentTurnAction,
    PassAction, PlayCardAction, StartOfTurnAction,
};

use crate::env::DuelEnv;
use crate::state::{Card, DuelState, MasteryTable, Side};

/// Defines how a concrete action variant mutates duel state.
pub trait ActionTransition {
    type Error;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &DuelState, _env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the duel state directly.
    fn apply(&self, state: &mut DuelState, env: &DuelEnv<'_>) -> Result<(), Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &DuelState, _env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Top-level action enum accepted by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Initialize(InitializeAction),
    ProcessStartOfTurn(StartOfTurnAction),
    PlayCard(PlayCardAction),
    OpponentTurn(OpponentTurnAction),
    Pass(PassAction),
    AttackAnimationComplete(AnimationCompleteAction),
    EndDuel(EndDuelAction),
}

impl Action {
    pub fn initialize(setup: DuelSetup, mastery: MasteryTable) -> Self {
        Self::Initialize(InitializeAction { setup, mastery })
    }

    pub fn start_of_turn(side: Side) -> Self {
        Self::ProcessStartOfTurn(StartOfTurnAction { side })
    }

    pub fn play_card(card: &Card, side: Side) -> Self {
        Self::PlayCard(PlayCardAction {
            card: card.id.clone(),
            side,
        })
    }

    pub fn opponent_turn() -> Self {
        Self::OpponentTurn(OpponentTurnAction)
    }

    pub fn pass(side: Side) -> Self {
        Self::Pass(PassAction { side })
    }

    pub fn animation_complete(was_player_attack: bool) -> Self {
        Self::AttackAnimationComplete(AnimationCompleteAction { was_player_attack })
    }

    pub fn end_duel(victory: bool) -> Self {
        Self::EndDuel(EndDuelAction { victory })
    }

    /// Stable name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initialize(_) => "initialize",
            Self::ProcessStartOfTurn(_) => "process_start_of_turn",
            Self::PlayCard(_) => "play_card",
            Self::OpponentTurn(_) => "opponent_turn",
            Self::Pass(_) => "pass",
            Self::AttackAnimationComplete(_) => "attack_animation_complete",
            Self::EndDuel(_) => "end_duel",
        }
    }
}

/// Shared pre-condition: only an ongoing duel accepts gameplay actions.
pub(crate) fn require_ongoing(state: &DuelState) -> Result<(), RejectReason> {
    if state.is_ongoing() {
        Ok(())
    } else {
        Err(RejectReason::NotOngoing {
            status: state.status,
        })
    }
}

/// Shared post-condition: invariants every accepted transition must keep.
pub(crate) fn check_invariants(state: &DuelState, env: &DuelEnv<'_>) -> Result<(), RejectReason> {
    let limit = env.config().bio_rhythm_limit.abs();
    if !(-limit..=limit).contains(&state.bio_rhythm) {
        return Err(RejectReason::InvariantViolated("bio-rhythm out of bounds"));
    }
    Ok(())
}
