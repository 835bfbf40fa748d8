//! Combatant snapshots.
//!
//! Every operation in this crate takes a `&CombatantState` and returns a new
//! one. Snapshots own all of their data, so `Clone` is a full deep copy and a
//! returned snapshot never aliases its input.
mod status;
mod statuses;

pub use status::{
    ChannelModifier, NestedModifier, StatusEffect, StatusFlags, StatusInstance, StatusKind, SwordQi,
};
pub use statuses::StatusLedger;

use crate::stats::Stats;

/// One combatant at a point in time.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantState {
    /// Identity key; also the `actor` of every event about this combatant.
    pub name: String,
    pub stats: Stats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub statuses: StatusLedger,
}

impl CombatantState {
    pub fn new(name: impl Into<String>, stats: Stats) -> Self {
        Self {
            name: name.into(),
            stats,
            statuses: StatusLedger::empty(),
        }
    }

    /// Builder: install a status.
    pub fn with_status(mut self, status: StatusInstance) -> Self {
        self.statuses.insert(status);
        self
    }

    pub fn has_status(&self, kind: StatusKind) -> bool {
        self.statuses.has(kind)
    }

    pub fn status(&self, kind: StatusKind) -> Option<&StatusInstance> {
        self.statuses.get(kind)
    }
}
