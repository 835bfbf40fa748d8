//! Status ledger operations: passive ticks and duration consumption.
//!
//! Public functions are snapshot-in, snapshot-out. The `*_in_place` helpers
//! do the same work on a working copy and are shared with the action
//! pipeline, which already owns its copies.
//!
//! # Expiry
//!
//! A status is removed exactly when a consuming decrement leaves
//! `remaining_turns <= 0`. Each consumption emits one `StatusDelta`, followed
//! by one `StatusExpired` when that happens.

mod error;

pub use error::StatusError;

use crate::event::ActionEvent;
use crate::state::{CombatantState, StatusEffect, StatusKind};

/// Result of a single-combatant operation.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: CombatantState,
    pub events: Vec<ActionEvent>,
}

/// Apply the passive effect of `kind`, then optionally consume turns from it.
///
/// - Health over time: adds `delta_per_turn`, clamped to `[0, max_health]`.
/// - Qi over time: adds `delta_per_turn`.
/// - Other kinds have no passive effect.
///
/// # Errors
///
/// `StatusError::MissingStatus` if the combatant does not hold `kind`.
pub fn tick_status(
    state: &CombatantState,
    kind: StatusKind,
    consume: Option<i32>,
) -> Result<Transition, StatusError> {
    let mut state = state.clone();
    let mut events = Vec::new();
    tick_in_place(&mut state, kind, consume, &mut events)?;
    Ok(Transition { state, events })
}

/// Consume `delta` turns from `kind`, expiring it at zero.
///
/// # Errors
///
/// `StatusError::MissingStatus` if the combatant does not hold `kind`.
pub fn consume_status(
    state: &CombatantState,
    kind: StatusKind,
    delta: i32,
) -> Result<Transition, StatusError> {
    let mut state = state.clone();
    let mut events = Vec::new();
    consume_in_place(&mut state, kind, delta, &mut events)?;
    Ok(Transition { state, events })
}

/// Consume every status by its own remaining turns, in insertion order.
pub fn consume_all_statuses(state: &CombatantState) -> Transition {
    let mut state = state.clone();
    let mut events = Vec::new();

    let pending: Vec<(StatusKind, i32)> = state
        .statuses
        .iter()
        .map(|s| (s.kind(), s.remaining_turns))
        .collect();
    for (kind, remaining) in pending {
        consume_present(&mut state, kind, remaining, &mut events);
    }

    Transition { state, events }
}

/// Consume one turn from every status flagged `DEFAULT_CONSUME`.
///
/// The scheduler decides at which phase boundary to call this.
pub fn consume_default_statuses(state: &CombatantState) -> Transition {
    let mut state = state.clone();
    let mut events = Vec::new();

    let pending: Vec<StatusKind> = state
        .statuses
        .iter()
        .filter(|s| s.is_default_consume())
        .map(|s| s.kind())
        .collect();
    for kind in pending {
        consume_present(&mut state, kind, 1, &mut events);
    }

    Transition { state, events }
}

// ============================================================================
// In-place helpers
// ============================================================================

pub(crate) fn tick_in_place(
    state: &mut CombatantState,
    kind: StatusKind,
    consume: Option<i32>,
    events: &mut Vec<ActionEvent>,
) -> Result<(), StatusError> {
    let effect = state
        .statuses
        .get(kind)
        .map(|s| s.effect.clone())
        .ok_or_else(|| missing(state, kind))?;

    match effect {
        StatusEffect::HealthOverTime { delta_per_turn, .. } => {
            let (health_before, health_after) = state.stats.apply_health_delta(delta_per_turn);
            events.push(ActionEvent::HealthDelta {
                actor: state.name.clone(),
                raw: delta_per_turn,
                delta: health_after - health_before,
                breakdown: None,
                health_before,
                health_after,
            });
        }
        StatusEffect::QiOverTime { delta_per_turn } => {
            let (qi_before, qi_after) = state.stats.apply_qi_delta(delta_per_turn);
            events.push(ActionEvent::QiDelta {
                actor: state.name.clone(),
                delta: qi_after - qi_before,
                qi_before,
                qi_after,
            });
        }
        StatusEffect::AttackModifier(_)
        | StatusEffect::DefenseModifier(_)
        | StatusEffect::ResistanceModifier(_)
        | StatusEffect::SpeedModifier { .. }
        | StatusEffect::Stun
        | StatusEffect::Shield { .. }
        | StatusEffect::SwordQi(_) => {}
    }

    if let Some(delta) = consume {
        consume_in_place(state, kind, delta, events)?;
    }
    Ok(())
}

pub(crate) fn consume_in_place(
    state: &mut CombatantState,
    kind: StatusKind,
    delta: i32,
    events: &mut Vec<ActionEvent>,
) -> Result<(), StatusError> {
    let Some(status) = state.statuses.get_mut(kind) else {
        return Err(missing(state, kind));
    };

    let before = status.remaining_turns;
    status.remaining_turns = before.saturating_sub(delta);
    let after = status.remaining_turns;
    let snapshot = status.clone();

    tracing::trace!("{}: {} turns {} -> {}", state.name, kind, before, after);
    events.push(ActionEvent::StatusDelta {
        actor: state.name.clone(),
        status: snapshot.clone(),
        delta: delta.saturating_neg(),
        remaining_turns_before: before,
        remaining_turns_after: after,
    });

    if after <= 0 {
        state.statuses.remove(kind);
        tracing::debug!("{}: {} expired", state.name, kind);
        events.push(ActionEvent::StatusExpired {
            actor: state.name.clone(),
            status: snapshot,
        });
    }
    Ok(())
}

/// Consume a kind the caller just read from the ledger.
fn consume_present(
    state: &mut CombatantState,
    kind: StatusKind,
    delta: i32,
    events: &mut Vec<ActionEvent>,
) {
    if let Err(err) = consume_in_place(state, kind, delta, events) {
        debug_assert!(false, "ledger changed during iteration: {err}");
    }
}

fn missing(state: &CombatantState, kind: StatusKind) -> StatusError {
    StatusError::MissingStatus {
        actor: state.name.clone(),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{StatusFlags, StatusInstance};
    use crate::stats::Stats;

    fn fighter() -> CombatantState {
        CombatantState::new("Mei", Stats::new(100.0, 10.0, 0.0, 5).with_health(50.0))
    }

    fn expired_count(events: &[ActionEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, ActionEvent::StatusExpired { .. }))
            .count()
    }

    #[test]
    fn health_over_time_heals_and_clamps() {
        let state = fighter().with_status(StatusInstance::health_over_time(80.0, 3));

        let out = tick_status(&state, StatusKind::HealthOverTime, None).unwrap();

        assert_eq!(out.state.stats.health, 100.0);
        assert_eq!(
            out.events,
            vec![ActionEvent::HealthDelta {
                actor: "Mei".to_string(),
                raw: 80.0,
                delta: 50.0,
                breakdown: None,
                health_before: 50.0,
                health_after: 100.0,
            }]
        );
        // no consume requested
        assert_eq!(
            out.state.status(StatusKind::HealthOverTime).map(|s| s.remaining_turns),
            Some(3)
        );
    }

    #[test]
    fn health_over_time_never_drops_below_zero() {
        let state = fighter().with_status(StatusInstance::health_over_time(-1.0e12, 1));

        let out = tick_status(&state, StatusKind::HealthOverTime, Some(1)).unwrap();

        assert_eq!(out.state.stats.health, 0.0);
        assert!(!out.state.has_status(StatusKind::HealthOverTime));
    }

    #[test]
    fn qi_over_time_adjusts_qi() {
        let state = fighter().with_status(StatusInstance::qi_over_time(3, 2));

        let out = tick_status(&state, StatusKind::QiOverTime, Some(1)).unwrap();

        assert_eq!(out.state.stats.qi, 8);
        assert_eq!(
            out.events[0],
            ActionEvent::QiDelta {
                actor: "Mei".to_string(),
                delta: 3,
                qi_before: 5,
                qi_after: 8,
            }
        );
        assert!(matches!(
            out.events[1],
            ActionEvent::StatusDelta {
                delta: -1,
                remaining_turns_before: 2,
                remaining_turns_after: 1,
                ..
            }
        ));
    }

    #[test]
    fn consuming_full_duration_expires_once() {
        let state = fighter().with_status(StatusInstance::shield(0.5, 3));

        let out = consume_status(&state, StatusKind::Shield, 3).unwrap();

        assert!(!out.state.has_status(StatusKind::Shield));
        assert_eq!(out.events.len(), 2);
        assert_eq!(expired_count(&out.events), 1);
    }

    #[test]
    fn consuming_less_than_remaining_keeps_status() {
        let state = fighter().with_status(StatusInstance::shield(0.5, 3));

        let out = consume_status(&state, StatusKind::Shield, 2).unwrap();

        assert_eq!(
            out.state.status(StatusKind::Shield).map(|s| s.remaining_turns),
            Some(1)
        );
        assert_eq!(expired_count(&out.events), 0);
    }

    #[test]
    fn missing_status_is_an_error() {
        let err = consume_status(&fighter(), StatusKind::Stun, 1).unwrap_err();

        assert_eq!(
            err,
            StatusError::MissingStatus {
                actor: "Mei".to_string(),
                kind: StatusKind::Stun
            }
        );
        assert_eq!(err.to_string(), "status stun not found on actor Mei");
        assert!(tick_status(&fighter(), StatusKind::QiOverTime, None).is_err());
    }

    #[test]
    fn consume_all_follows_insertion_order() {
        let state = fighter()
            .with_status(StatusInstance::shield(0.5, 2))
            .with_status(StatusInstance::stun(1))
            .with_status(StatusInstance::qi_over_time(1, 4));

        let out = consume_all_statuses(&state);

        assert!(out.state.statuses.is_empty());
        assert_eq!(expired_count(&out.events), 3);
        let expired: Vec<StatusKind> = out
            .events
            .iter()
            .filter_map(|e| match e {
                ActionEvent::StatusExpired { status, .. } => Some(status.kind()),
                _ => None,
            })
            .collect();
        assert_eq!(
            expired,
            vec![StatusKind::Shield, StatusKind::Stun, StatusKind::QiOverTime]
        );
        // consuming never ticks
        assert_eq!(out.state.stats.qi, 5);
    }

    #[test]
    fn default_consumption_only_touches_flagged_statuses() {
        let state = fighter()
            .with_status(StatusInstance::shield(0.5, 2).with_flags(StatusFlags::DEFAULT_CONSUME))
            .with_status(StatusInstance::stun(2));

        let out = consume_default_statuses(&state);

        assert_eq!(
            out.state.status(StatusKind::Shield).map(|s| s.remaining_turns),
            Some(1)
        );
        assert_eq!(
            out.state.status(StatusKind::Stun).map(|s| s.remaining_turns),
            Some(2)
        );
        assert_eq!(out.events.len(), 1);
    }

    #[test]
    fn input_snapshot_is_untouched() {
        let state = fighter().with_status(StatusInstance::health_over_time(10.0, 1));

        let _ = tick_status(&state, StatusKind::HealthOverTime, Some(1)).unwrap();

        assert_eq!(state.stats.health, 50.0);
        assert_eq!(
            state.status(StatusKind::HealthOverTime).map(|s| s.remaining_turns),
            Some(1)
        );
    }
}
