//! Error types for the transition pipeline.

use crate::action::RejectReason;
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: core::fmt::Display> core::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: core::fmt::Display + core::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while applying an action through the duel engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("initialize rejected: {0}")]
    Initialize(TransitionPhaseError<RejectReason>),

    #[error("start of turn rejected: {0}")]
    StartOfTurn(TransitionPhaseError<RejectReason>),

    #[error("play card rejected: {0}")]
    PlayCard(TransitionPhaseError<RejectReason>),

    #[error("opponent turn rejected: {0}")]
    OpponentTurn(TransitionPhaseError<RejectReason>),

    #[error("pass rejected: {0}")]
    Pass(TransitionPhaseError<RejectReason>),

    #[error("animation complete rejected: {0}")]
    AnimationComplete(TransitionPhaseError<RejectReason>),

    #[error("end duel rejected: {0}")]
    EndDuel(TransitionPhaseError<RejectReason>),
}

impl ExecuteError {
    fn inner(&self) -> &TransitionPhaseError<RejectReason> {
        match self {
            Self::Initialize(e)
            | Self::StartOfTurn(e)
            | Self::PlayCard(e)
            | Self::OpponentTurn(e)
            | Self::Pass(e)
            | Self::AnimationComplete(e)
            | Self::EndDuel(e) => e,
        }
    }

    /// The rule that rejected the action.
    pub fn reason(&self) -> &RejectReason {
        &self.inner().error
    }

    pub fn phase(&self) -> TransitionPhase {
        self.inner().phase
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        self.reason().severity()
    }

    fn error_code(&self) -> &'static str {
        self.reason().error_code()
    }
}
