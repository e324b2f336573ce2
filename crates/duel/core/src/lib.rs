//! Deterministic rules for protocol-card duels.
//!
//! `duel-core` defines the canonical duel rules (actions, combat, turn ticks,
//! opponent policy) as pure functions over [`DuelState`]. All state changes
//! flow through [`engine::DuelEngine`]; content crates and hosts depend on the
//! types re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod policy;
pub mod score;
pub mod state;

pub use action::{
    Action, ActionTransition, AnimationCompleteAction, DuelSetup, EndDuelAction,
    InitializeAction, OpponentTurnAction, PassAction, PlayCardAction, RejectReason,
    StartOfTurnAction,
};
pub use combat::{
    DamageModifiers, PlayOutcome, calculate_damage, check_playable, effective_cost,
    playable_cards, resolve_play,
};
pub use config::DuelConfig;
pub use engine::{
    DuelEngine, ExecuteError, TransitionPhase, TransitionPhaseError, TurnStartReport,
    process_start_of_turn,
};
pub use env::DuelEnv;
pub use error::{ErrorSeverity, GameError};
pub use policy::{OpponentDecision, select_card};
pub use score::{StackComparison, calculate_stack_score};
pub use state::{
    AppliedEffect, Card, CardId, CardStats, Category, Combatant, Combo, ComboBook, ComboEffect,
    DamageSignal, DuelMessage, DuelState, DuelStatus, EffectTarget, MasteryLevel, MasteryRecord,
    MasteryTable, OpponentProfile, PassiveAbility, PassiveEffect, PassiveTrigger, ScreenEffects,
    Side, StatusEffect, StatusEffectKind, StatusEffects, UiSignals,
};
