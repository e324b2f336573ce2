//! Rule rejections.
//!
//! Every variant here is an expected, recoverable input from the caller's
//! point of view. The public reducer maps them to "state unchanged".

use crate::error::{ErrorSeverity, GameError};
use crate::state::{CardId, DuelStatus, Side};

/// Reasons a transition refused to change the duel.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    /// The duel is not accepting actions of this kind in its current status.
    #[error("duel is not ongoing (status: {status})")]
    NotOngoing { status: DuelStatus },

    /// Initialize was sent to a duel that already left `Pending`.
    #[error("duel already initialized (status: {status})")]
    AlreadyInitialized { status: DuelStatus },

    /// The played card is not in the acting side's hand.
    #[error("{side} does not hold card {card}")]
    CardNotInHand { side: Side, card: CardId },

    /// Effective cost exceeds the acting side's stamina.
    #[error("{side} needs {cost} stamina but has {stamina}")]
    InsufficientStamina { side: Side, cost: u32, stamina: u32 },

    /// The acting side is fatigued and the card is too expensive.
    #[error("{side} is fatigued and cannot play a card costing {cost} (max {threshold})")]
    FatigueLockout { side: Side, cost: u32, threshold: u32 },

    /// A post-condition of the transition does not hold.
    #[error("invariant violated: {0}")]
    InvariantViolated(&'static str),
}

impl GameError for RejectReason {
    fn severity(&self) -> ErrorSeverity {
        use RejectReason::*;
        match self {
            InsufficientStamina { .. } | FatigueLockout { .. } => ErrorSeverity::Recoverable,
            NotOngoing { .. } | AlreadyInitialized { .. } | CardNotInHand { .. } => {
                ErrorSeverity::Validation
            }
            InvariantViolated(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use RejectReason::*;
        match self {
            NotOngoing { .. } => "DUEL_NOT_ONGOING",
            AlreadyInitialized { .. } => "DUEL_ALREADY_INITIALIZED",
            CardNotInHand { .. } => "PLAY_CARD_NOT_IN_HAND",
            InsufficientStamina { .. } => "PLAY_INSUFFICIENT_STAMINA",
            FatigueLockout { .. } => "PLAY_FATIGUE_LOCKOUT",
            InvariantViolated(_) => "DUEL_INVARIANT_VIOLATED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamina_and_fatigue_are_recoverable() {
        let stamina = RejectReason::InsufficientStamina {
            side: Side::Player,
            cost: 4,
            stamina: 1,
        };
        let fatigue = RejectReason::FatigueLockout {
            side: Side::Opponent,
            cost: 7,
            threshold: 5,
        };

        assert!(stamina.severity().is_recoverable());
        assert!(fatigue.severity().is_recoverable());
        assert_eq!(stamina.to_string(), "player needs 4 stamina but has 1");
    }

    #[test]
    fn invariant_violations_are_internal() {
        let error = RejectReason::InvariantViolated("bio-rhythm out of bounds");
        assert!(error.severity().is_internal());
        assert_eq!(error.error_code(), "DUEL_INVARIANT_VIOLATED");
    }
}
