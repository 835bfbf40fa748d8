//! Common error infrastructure for battle-core.
//!
//! Domain errors (`StatusError`, `ProfileError`) are defined next to the code
//! that raises them. This module holds what they share.
//!
//! Only contract violations are errors. Running out of qi, missing an attack,
//! or a status expiring are ordinary outcomes recorded in the event log.

/// Severity level of an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should be rejected without retry.
    ///
    /// Examples: malformed channel profile in authored content
    Validation,

    /// A caller broke an API contract.
    ///
    /// Examples: consuming a status the combatant does not hold
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates a bug in the caller.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all battle-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by who is at fault, not by impact
pub trait BattleError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
