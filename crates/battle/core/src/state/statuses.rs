//! Ordered, one-per-kind status storage.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;

use super::status::{StatusInstance, StatusKind};

/// Active statuses of one combatant, keyed by [`StatusKind`].
///
/// Holds at most one instance per kind. Iteration follows insertion order;
/// replacing an existing kind keeps its original position.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusLedger {
    entries: ArrayVec<StatusInstance, { BattleConfig::MAX_STATUSES }>,
}

impl StatusLedger {
    /// Creates an empty ledger.
    pub fn empty() -> Self {
        Self {
            entries: ArrayVec::new(),
        }
    }

    /// Checks if a status of `kind` is active.
    pub fn has(&self, kind: StatusKind) -> bool {
        self.entries.iter().any(|s| s.kind() == kind)
    }

    pub fn get(&self, kind: StatusKind) -> Option<&StatusInstance> {
        self.entries.iter().find(|s| s.kind() == kind)
    }

    pub fn get_mut(&mut self, kind: StatusKind) -> Option<&mut StatusInstance> {
        self.entries.iter_mut().find(|s| s.kind() == kind)
    }

    /// Installs a status, replacing any instance of the same kind in place.
    ///
    /// Returns the replaced instance.
    pub fn insert(&mut self, status: StatusInstance) -> Option<StatusInstance> {
        if let Some(existing) = self.get_mut(status.kind()) {
            return Some(core::mem::replace(existing, status));
        }

        // One slot per kind, so a new kind always fits.
        self.entries.push(status);
        None
    }

    /// Removes a status immediately.
    pub fn remove(&mut self, kind: StatusKind) -> Option<StatusInstance> {
        let index = self.entries.iter().position(|s| s.kind() == kind)?;
        Some(self.entries.remove(index))
    }

    /// Active kinds in insertion order.
    pub fn kinds(&self) -> impl Iterator<Item = StatusKind> + '_ {
        self.entries.iter().map(StatusInstance::kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusInstance> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<StatusInstance> for StatusLedger {
    fn from_iter<I: IntoIterator<Item = StatusInstance>>(iter: I) -> Self {
        let mut ledger = Self::empty();
        for status in iter {
            ledger.insert(status);
        }
        ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusEffect;
    use strum::IntoEnumIterator;

    #[test]
    fn replacing_keeps_position_and_single_instance() {
        let mut ledger: StatusLedger = [
            StatusInstance::stun(1),
            StatusInstance::shield(0.5, 2),
            StatusInstance::qi_over_time(1, 3),
        ]
        .into_iter()
        .collect();

        let replaced = ledger.insert(StatusInstance::shield(0.8, 5));

        assert_eq!(replaced, Some(StatusInstance::shield(0.5, 2)));
        assert_eq!(ledger.len(), 3);
        assert_eq!(
            ledger.kinds().collect::<Vec<_>>(),
            vec![StatusKind::Stun, StatusKind::Shield, StatusKind::QiOverTime]
        );
        assert_eq!(
            ledger.get(StatusKind::Shield).map(|s| s.remaining_turns),
            Some(5)
        );
    }

    #[test]
    fn remove_returns_the_instance() {
        let mut ledger: StatusLedger = [StatusInstance::stun(2)].into_iter().collect();

        assert_eq!(ledger.remove(StatusKind::Stun), Some(StatusInstance::stun(2)));
        assert_eq!(ledger.remove(StatusKind::Stun), None);
        assert!(ledger.is_empty());
    }

    #[test]
    fn holds_every_kind_at_once() {
        let mut ledger = StatusLedger::empty();
        for kind in StatusKind::iter() {
            let effect = match kind {
                StatusKind::AttackModifier => StatusEffect::AttackModifier(Default::default()),
                StatusKind::DefenseModifier => StatusEffect::DefenseModifier(Default::default()),
                StatusKind::ResistanceModifier => {
                    StatusEffect::ResistanceModifier(Default::default())
                }
                StatusKind::SpeedModifier => StatusEffect::SpeedModifier {
                    delta: 1.0,
                    is_multiplicative: false,
                },
                StatusKind::HealthOverTime => StatusEffect::HealthOverTime {
                    delta_per_turn: 1.0,
                    profile: Default::default(),
                },
                StatusKind::QiOverTime => StatusEffect::QiOverTime { delta_per_turn: 1 },
                StatusKind::Stun => StatusEffect::Stun,
                StatusKind::Shield => StatusEffect::Shield { multiplier: 0.5 },
                StatusKind::SwordQi => StatusEffect::SwordQi(Default::default()),
            };
            ledger.insert(StatusInstance::new(effect, 1));
        }

        assert_eq!(ledger.len(), BattleConfig::MAX_STATUSES);
        assert!(StatusKind::iter().all(|kind| ledger.has(kind)));
    }
}
