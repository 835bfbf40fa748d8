//! Status ledger errors.

use crate::error::{BattleError, ErrorSeverity};
use crate::state::StatusKind;

/// Errors raised by ledger operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusError {
    /// Callers must check presence before ticking or consuming.
    #[error("status {kind} not found on actor {actor}")]
    MissingStatus { actor: String, kind: StatusKind },
}

impl BattleError for StatusError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingStatus { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingStatus { .. } => "STATUS_MISSING",
        }
    }
}
