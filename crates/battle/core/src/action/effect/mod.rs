//! Effect executor: applies a technique's effect list to both combatants.
//!
//! Effects run strictly in authored order against working copies of the
//! actor and the target. Each effect picks its side through
//! [`EffectTarget`]; the actor's stats are always the "user" for hit and crit
//! rolls.
//!
//! # Random draws
//!
//! - Health delta, damage branch: 2 (accuracy, then crit)
//! - Status delta with a chance: 1
//! - Everything else: 0
//!
//! # Effect Categories
//!
//! - **Health**: heals directly; attacks roll, resist, and hit shields
//! - **Qi**: combines with the pool under the configured [`QiDeltaRule`]
//! - **Status**: installs, shortens or removes a status
//!
//! [`QiDeltaRule`]: crate::config::QiDeltaRule

mod health;
mod qi;
mod status;

use crate::config::BattleConfig;
use crate::env::RandomSource;
use crate::event::ActionEvent;
use crate::ledger::StatusError;
use crate::state::CombatantState;

use super::technique::{Effect, EffectTarget, Technique};

/// Updated snapshots of both combatants plus the events that got them there.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectOutcome {
    pub actor: CombatantState,
    pub target: CombatantState,
    pub events: Vec<ActionEvent>,
}

// ============================================================================
// Effect Context
// ============================================================================

/// Working state shared by the effects of one technique.
struct EffectContext<'a, R: RandomSource + ?Sized> {
    actor: CombatantState,
    target: CombatantState,
    rng: &'a mut R,
    config: &'a BattleConfig,
    events: Vec<ActionEvent>,
}

impl<'a, R: RandomSource + ?Sized> EffectContext<'a, R> {
    fn new(
        actor: &CombatantState,
        target: &CombatantState,
        rng: &'a mut R,
        config: &'a BattleConfig,
    ) -> Self {
        Self {
            actor: actor.clone(),
            target: target.clone(),
            rng,
            config,
            events: Vec::new(),
        }
    }

    fn side(&self, target: EffectTarget) -> &CombatantState {
        match target {
            EffectTarget::Caster => &self.actor,
            EffectTarget::Enemy => &self.target,
        }
    }

    /// The chosen combatant and the event buffer, borrowed together.
    fn split(&mut self, target: EffectTarget) -> (&mut CombatantState, &mut Vec<ActionEvent>) {
        let side = match target {
            EffectTarget::Caster => &mut self.actor,
            EffectTarget::Enemy => &mut self.target,
        };
        (side, &mut self.events)
    }

    fn into_outcome(self) -> EffectOutcome {
        EffectOutcome {
            actor: self.actor,
            target: self.target,
            events: self.events,
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Apply every effect of `technique`, in order.
///
/// Does not charge the qi cost; see [`super::apply_qi_cost`].
///
/// # Errors
///
/// Only ledger contract violations, which the executor itself guards against.
pub fn apply_technique_effects<R: RandomSource + ?Sized>(
    actor: &CombatantState,
    target: &CombatantState,
    technique: &Technique,
    rng: &mut R,
    config: &BattleConfig,
) -> Result<EffectOutcome, StatusError> {
    let mut ctx = EffectContext::new(actor, target, rng, config);

    for effect in &technique.effects {
        apply_effect(effect, &mut ctx)?;
    }

    Ok(ctx.into_outcome())
}

/// Dispatch a single effect.
fn apply_effect<R: RandomSource + ?Sized>(
    effect: &Effect,
    ctx: &mut EffectContext<'_, R>,
) -> Result<(), StatusError> {
    match effect {
        Effect::HealthDelta {
            base,
            multiplier,
            profile,
            target,
        } => health::apply(ctx, base * multiplier, profile, *target),

        Effect::QiDelta { delta, target } => {
            qi::apply(ctx, *delta, *target);
            Ok(())
        }

        Effect::StatusDelta {
            status: instance,
            target,
            amount,
            chance,
        } => status::apply(ctx, instance, *target, *amount, *chance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::technique::{ActionGrade, StatusAmount};
    use crate::env::ScriptedSource;
    use crate::state::{StatusInstance, StatusKind};
    use crate::stats::{ChannelProfile, Stats};

    fn combatant(name: &str, health: f64) -> CombatantState {
        CombatantState::new(name, Stats::new(100.0, 10.0, 0.0, 10).with_health(health))
    }

    #[test]
    fn effects_run_in_order() {
        let technique = Technique::new("Drain", ActionGrade::Rare, 0)
            .with_effect(Effect::HealthDelta {
                base: -20.0,
                multiplier: 1.0,
                profile: ChannelProfile::default(),
                target: EffectTarget::Enemy,
            })
            .with_effect(Effect::HealthDelta {
                base: 5.0,
                multiplier: 2.0,
                profile: ChannelProfile::default(),
                target: EffectTarget::Caster,
            });
        let actor = combatant("A", 50.0);
        let target = combatant("B", 100.0);
        let mut rng = ScriptedSource::new([0.0, 0.99]);

        let out =
            apply_technique_effects(&actor, &target, &technique, &mut rng, &BattleConfig::default())
                .unwrap();

        let kinds: Vec<&str> = out.events.iter().map(event_name).collect();
        assert_eq!(kinds, vec!["accuracy", "crit", "health", "health"]);
        assert_eq!(out.actor.stats.health, 60.0);
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn inputs_are_not_mutated() {
        let technique = Technique::new("Seal", ActionGrade::Common, 0)
            .with_effect(Effect::StatusDelta {
                status: StatusInstance::stun(2),
                target: EffectTarget::Enemy,
                amount: StatusAmount::Turns(1),
                chance: None,
            })
            .with_effect(Effect::QiDelta {
                delta: -4,
                target: EffectTarget::Enemy,
            });
        let actor = combatant("A", 100.0);
        let target = combatant("B", 100.0);

        let out = apply_technique_effects(
            &actor,
            &target,
            &technique,
            &mut ScriptedSource::default(),
            &BattleConfig::default(),
        )
        .unwrap();

        assert!(out.target.has_status(StatusKind::Stun));
        assert!(!target.has_status(StatusKind::Stun));
        assert_eq!(target.stats.qi, 10);
    }

    fn event_name(event: &ActionEvent) -> &'static str {
        match event {
            ActionEvent::AccuracyRoll { .. } => "accuracy",
            ActionEvent::CritRoll { .. } => "crit",
            ActionEvent::HealthDelta { .. } => "health",
            _ => "other",
        }
    }
}
