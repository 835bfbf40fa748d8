//! Events describing every state change of a turn.
//!
//! Events are facts: once pushed they are never edited. Their order is the
//! emission order, which is part of the replay contract; the same snapshots,
//! technique and random draws always yield the same sequence.

use crate::stats::DamageBreakdown;
use crate::state::StatusInstance;

/// A single observable change.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionEvent {
    /// The actor passed the pre-action phase and starts a technique.
    ActionStart {
        actor: String,
        target: String,
        technique: String,
    },

    /// The actor could not pay the qi cost; the technique is skipped.
    QiStarvation { actor: String },

    QiDelta {
        actor: String,
        delta: i32,
        qi_before: i32,
        qi_after: i32,
    },

    /// `raw` is the requested change, `delta` what actually applied.
    HealthDelta {
        actor: String,
        raw: f64,
        delta: f64,
        breakdown: Option<DamageBreakdown>,
        health_before: f64,
        health_after: f64,
    },

    StatusApplied {
        actor: String,
        target: String,
        status: StatusInstance,
    },

    /// `status` is the instance after the change.
    StatusDelta {
        actor: String,
        status: StatusInstance,
        delta: i32,
        remaining_turns_before: i32,
        remaining_turns_after: i32,
    },

    StatusExpired {
        actor: String,
        status: StatusInstance,
    },

    AccuracyRoll {
        actor: String,
        target: String,
        accuracy: f64,
        is_hit: bool,
    },

    CritRoll {
        actor: String,
        crit_chance: f64,
        is_crit: bool,
    },

    Stunned { actor: String },

    MomentumTriggered { actor: String },
}

impl ActionEvent {
    /// Name of the combatant this event is about.
    pub fn actor(&self) -> &str {
        match self {
            Self::ActionStart { actor, .. }
            | Self::QiStarvation { actor }
            | Self::QiDelta { actor, .. }
            | Self::HealthDelta { actor, .. }
            | Self::StatusApplied { actor, .. }
            | Self::StatusDelta { actor, .. }
            | Self::StatusExpired { actor, .. }
            | Self::AccuracyRoll { actor, .. }
            | Self::CritRoll { actor, .. }
            | Self::Stunned { actor }
            | Self::MomentumTriggered { actor } => actor,
        }
    }
}

/// Append-only sequence of events.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventLog {
    events: Vec<ActionEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: ActionEvent) {
        self.events.push(event);
    }

    /// Appends a batch, keeping its order.
    pub fn append(&mut self, events: impl IntoIterator<Item = ActionEvent>) {
        self.events.extend(events);
    }

    pub fn iter(&self) -> core::slice::Iter<'_, ActionEvent> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[ActionEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn into_events(self) -> Vec<ActionEvent> {
        self.events
    }
}

impl From<Vec<ActionEvent>> for EventLog {
    fn from(events: Vec<ActionEvent>) -> Self {
        Self { events }
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a ActionEvent;
    type IntoIter = core::slice::Iter<'a, ActionEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

// ============================================================================
// Replay Encoding
// ============================================================================

#[cfg(feature = "serde")]
mod replay {
    use sha2::{Digest, Sha256};

    use super::EventLog;
    use crate::error::{BattleError, ErrorSeverity};

    /// Errors from encoding or decoding an event log.
    #[derive(Debug, thiserror::Error)]
    pub enum ReplayError {
        #[error("event log encoding failed: {0}")]
        Encode(#[source] bincode::Error),

        #[error("event log decoding failed: {0}")]
        Decode(#[source] bincode::Error),
    }

    impl BattleError for ReplayError {
        fn severity(&self) -> ErrorSeverity {
            match self {
                Self::Encode(_) => ErrorSeverity::Internal,
                Self::Decode(_) => ErrorSeverity::Validation,
            }
        }

        fn error_code(&self) -> &'static str {
            match self {
                Self::Encode(_) => "REPLAY_ENCODE",
                Self::Decode(_) => "REPLAY_DECODE",
            }
        }
    }

    impl EventLog {
        /// Deterministic binary encoding (bincode).
        pub fn encode(&self) -> Result<Vec<u8>, ReplayError> {
            bincode::serialize(self).map_err(ReplayError::Encode)
        }

        pub fn decode(bytes: &[u8]) -> Result<Self, ReplayError> {
            bincode::deserialize(bytes).map_err(ReplayError::Decode)
        }

        /// SHA-256 over [`EventLog::encode`]; equal logs give equal digests.
        pub fn digest(&self) -> Result<[u8; 32], ReplayError> {
            let bytes = self.encode()?;
            Ok(Sha256::digest(&bytes).into())
        }
    }
}

#[cfg(feature = "serde")]
pub use replay::ReplayError;
