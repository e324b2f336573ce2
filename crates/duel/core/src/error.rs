//! Common error infrastructure for duel-core.
//!
//! Domain-specific errors (e.g. [`RejectReason`](crate::action::RejectReason))
//! are defined next to the actions they validate. This module only provides
//! the classification shared by all of them.
//!
//! Rule rejections are expected input, not faults: the public reducer never
//! surfaces them as panics, and [`ErrorSeverity`] lets hosts decide whether a
//! rejection is worth showing to the user or worth a bug report.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the same intent may succeed later.
    ///
    /// Examples: not enough stamina, fatigue lockout
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: card not in hand, duel already finished or not started
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: bio-rhythm escaped its bounds after a transition
    Internal,

    /// Fatal error - duel state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all duel-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
