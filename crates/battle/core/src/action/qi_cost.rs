//! Qi cost gate.
//!
//! Paying for a technique either deducts its cost or, when the actor cannot
//! afford it, skips the technique and grants a small amount of qi instead.
//! Starvation is a normal outcome, not an error.

use crate::config::BattleConfig;
use crate::event::ActionEvent;
use crate::state::CombatantState;

use super::PhaseOutcome;

/// Charge `qi_cost` to `state`.
///
/// - `qi < qi_cost`: qi += `starvation_qi_gain`, emit `QiStarvation` then
///   `QiDelta`, end the turn.
/// - otherwise: qi -= `qi_cost`, emit `QiDelta`, continue.
pub fn apply_qi_cost(state: &CombatantState, qi_cost: i32, config: &BattleConfig) -> PhaseOutcome {
    let mut state = state.clone();
    let mut events = Vec::new();

    if state.stats.qi < qi_cost {
        tracing::debug!(
            "{} starved: qi {} < cost {}",
            state.name,
            state.stats.qi,
            qi_cost
        );
        let (qi_before, qi_after) = state.stats.apply_qi_delta(config.starvation_qi_gain);
        events.push(ActionEvent::QiStarvation {
            actor: state.name.clone(),
        });
        events.push(ActionEvent::QiDelta {
            actor: state.name.clone(),
            delta: config.starvation_qi_gain,
            qi_before,
            qi_after,
        });
        return PhaseOutcome {
            state,
            events,
            should_end_turn: true,
        };
    }

    let delta = qi_cost.saturating_neg();
    let (qi_before, qi_after) = state.stats.apply_qi_delta(delta);
    events.push(ActionEvent::QiDelta {
        actor: state.name.clone(),
        delta,
        qi_before,
        qi_after,
    });

    PhaseOutcome {
        state,
        events,
        should_end_turn: false,
    }
}
