//! Pre-action phase: stun and statuses that act before the main action.

use crate::event::ActionEvent;
use crate::ledger::{self, StatusError};
use crate::state::{CombatantState, StatusKind};

/// Result of a phase that may end the actor's turn.
#[derive(Clone, Debug, PartialEq)]
pub struct PhaseOutcome {
    pub state: CombatantState,
    pub events: Vec<ActionEvent>,
    pub should_end_turn: bool,
}

/// Resolve the pre-action phase for `state`.
///
/// 1. If stunned: emit `Stunned`, consume one stun turn, end the turn.
/// 2. Tick and consume one turn of every status flagged `PRE_ACTION`, in
///    insertion order.
///
/// The turn ends iff the actor was stunned, whatever stun duration remains.
pub fn apply_pre_action(state: &CombatantState) -> Result<PhaseOutcome, StatusError> {
    let mut state = state.clone();
    let mut events = Vec::new();

    let is_stunned = state.has_status(StatusKind::Stun);
    if is_stunned {
        tracing::debug!("{} is stunned, skipping main action", state.name);
        events.push(ActionEvent::Stunned {
            actor: state.name.clone(),
        });
        ledger::tick_in_place(&mut state, StatusKind::Stun, Some(1), &mut events)?;
    }

    let pre_action: Vec<StatusKind> = state
        .statuses
        .iter()
        .filter(|s| s.is_pre_action())
        .map(|s| s.kind())
        .collect();
    for kind in pre_action {
        ledger::tick_in_place(&mut state, kind, Some(1), &mut events)?;
    }

    Ok(PhaseOutcome {
        state,
        events,
        should_end_turn: is_stunned,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{StatusFlags, StatusInstance};
    use crate::stats::Stats;

    fn fighter() -> CombatantState {
        CombatantState::new("Rui", Stats::new(100.0, 10.0, 0.0, 5).with_health(60.0))
    }

    #[test]
    fn stun_ends_turn_and_is_announced_first() {
        let state = fighter().with_status(StatusInstance::stun(1));

        let out = apply_pre_action(&state).unwrap();

        assert!(out.should_end_turn);
        assert!(!out.state.has_status(StatusKind::Stun));
        assert!(matches!(out.events[0], ActionEvent::Stunned { .. }));
        assert!(matches!(out.events[1], ActionEvent::StatusDelta { .. }));
        assert!(matches!(out.events[2], ActionEvent::StatusExpired { .. }));
        assert_eq!(out.events.len(), 3);
    }

    #[test]
    fn long_stun_still_ends_turn() {
        let state = fighter().with_status(StatusInstance::stun(3));

        let out = apply_pre_action(&state).unwrap();

        assert!(out.should_end_turn);
        assert_eq!(
            out.state.status(StatusKind::Stun).map(|s| s.remaining_turns),
            Some(2)
        );
    }

    #[test]
    fn pre_action_statuses_tick_without_ending_turn() {
        let state = fighter()
            .with_status(
                StatusInstance::health_over_time(-15.0, 2).with_flags(StatusFlags::PRE_ACTION),
            )
            .with_status(StatusInstance::shield(0.5, 2));

        let out = apply_pre_action(&state).unwrap();

        assert!(!out.should_end_turn);
        assert_eq!(out.state.stats.health, 45.0);
        assert_eq!(
            out.state.status(StatusKind::HealthOverTime).map(|s| s.remaining_turns),
            Some(1)
        );
        // unflagged statuses are left alone
        assert_eq!(
            out.state.status(StatusKind::Shield).map(|s| s.remaining_turns),
            Some(2)
        );
    }

    #[test]
    fn stunned_actor_still_ticks_pre_action_statuses() {
        let state = CombatantState::new("Rui", Stats::new(100.0, 10.0, 0.0, 10))
            .with_status(StatusInstance::stun(2))
            .with_status(StatusInstance::qi_over_time(3, 2).with_flags(StatusFlags::PRE_ACTION));

        let out = apply_pre_action(&state).unwrap();

        assert!(out.should_end_turn);
        assert_eq!(out.state.stats.qi, 13);
        assert_eq!(
            out.state.status(StatusKind::Stun).map(|s| s.remaining_turns),
            Some(1)
        );
        assert_eq!(
            out.state.status(StatusKind::QiOverTime).map(|s| s.remaining_turns),
            Some(1)
        );
        assert!(matches!(out.events[0], ActionEvent::Stunned { .. }));
        assert!(matches!(
            &out.events[1],
            ActionEvent::StatusDelta { status, .. } if status.kind() == StatusKind::Stun
        ));
        assert!(matches!(out.events[2], ActionEvent::QiDelta { delta: 3, .. }));
        assert!(matches!(
            &out.events[3],
            ActionEvent::StatusDelta { status, .. } if status.kind() == StatusKind::QiOverTime
        ));
        assert_eq!(out.events.len(), 4);
    }

    #[test]
    fn no_statuses_means_no_events() {
        let out = apply_pre_action(&fighter()).unwrap();

        assert!(!out.should_end_turn);
        assert!(out.events.is_empty());
        assert_eq!(out.state, fighter());
    }
}
