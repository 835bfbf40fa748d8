//! One actor's full turn: pre-action, qi gate, effects, momentum.

use crate::config::BattleConfig;
use crate::env::RandomSource;
use crate::event::{ActionEvent, EventLog};
use crate::ledger::StatusError;
use crate::state::CombatantState;

use super::effect::apply_technique_effects;
use super::pre_action::apply_pre_action;
use super::qi_cost::apply_qi_cost;
use super::technique::Technique;

/// Why a turn stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnEnd {
    /// The actor was stunned; no technique was attempted.
    Stunned,
    /// The actor could not pay the qi cost.
    QiStarvation,
    /// Every effect of the technique resolved.
    Completed,
}

/// Both combatants after a turn, plus its ordered event log.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnOutcome {
    pub actor: CombatantState,
    pub target: CombatantState,
    pub log: EventLog,
    pub end: TurnEnd,
}

/// Resolve `actor` using `technique` on `target`.
///
/// ```text
/// pre-action ── stunned ──────────────────────────> Stunned
///     │
/// ActionStart
///     │
/// qi gate ───── starved ──────────────────────────> QiStarvation
///     │
/// effects ── [MomentumTriggered] ─────────────────> Completed
/// ```
///
/// Status turns that are not consumed by a phase above are left to the
/// scheduler (see [`crate::ledger::consume_default_statuses`]).
pub fn resolve_turn<R: RandomSource + ?Sized>(
    actor: &CombatantState,
    target: &CombatantState,
    technique: &Technique,
    rng: &mut R,
    config: &BattleConfig,
) -> Result<TurnOutcome, StatusError> {
    let mut log = EventLog::new();

    let pre = apply_pre_action(actor)?;
    log.append(pre.events);
    if pre.should_end_turn {
        return Ok(TurnOutcome {
            actor: pre.state,
            target: target.clone(),
            log,
            end: TurnEnd::Stunned,
        });
    }

    tracing::debug!("{} uses {} on {}", pre.state.name, technique.name, target.name);
    log.record(ActionEvent::ActionStart {
        actor: pre.state.name.clone(),
        target: target.name.clone(),
        technique: technique.name.clone(),
    });

    let paid = apply_qi_cost(&pre.state, technique.qi_cost, config);
    log.append(paid.events);
    if paid.should_end_turn {
        return Ok(TurnOutcome {
            actor: paid.state,
            target: target.clone(),
            log,
            end: TurnEnd::QiStarvation,
        });
    }

    let applied = apply_technique_effects(&paid.state, target, technique, rng, config)?;
    log.append(applied.events);

    if technique.grants_momentum {
        log.record(ActionEvent::MomentumTriggered {
            actor: applied.actor.name.clone(),
        });
    }

    Ok(TurnOutcome {
        actor: applied.actor,
        target: applied.target,
        log,
        end: TurnEnd::Completed,
    })
}
