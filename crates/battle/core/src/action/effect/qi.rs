//! Qi delta effect.

use crate::action::technique::EffectTarget;
use crate::env::RandomSource;
use crate::event::ActionEvent;

use super::EffectContext;

/// Combine `delta` with the chosen side's qi under the configured rule.
///
/// The event carries the authored delta; `qi_after - qi_before` may differ
/// when the rule clips the result.
pub(super) fn apply<R: RandomSource + ?Sized>(
    ctx: &mut EffectContext<'_, R>,
    delta: i32,
    target: EffectTarget,
) {
    let rule = ctx.config.qi_delta_rule;
    let (side, events) = ctx.split(target);

    let qi_before = side.stats.qi;
    let qi_after = rule.apply(qi_before, delta);
    side.stats.qi = qi_after;

    tracing::debug!("{} qi {} -> {} ({:?})", side.name, qi_before, qi_after, rule);
    events.push(ActionEvent::QiDelta {
        actor: side.name.clone(),
        delta,
        qi_before,
        qi_after,
    });
}

#[cfg(test)]
mod tests {
    use crate::action::apply_technique_effects;
    use crate::action::technique::{ActionGrade, Effect, EffectTarget, Technique};
    use crate::config::{BattleConfig, QiDeltaRule};
    use crate::env::ScriptedSource;
    use crate::event::ActionEvent;
    use crate::state::CombatantState;
    use crate::stats::Stats;

    fn with_qi(name: &str, qi: i32) -> CombatantState {
        CombatantState::new(name, Stats::new(100.0, 10.0, 0.0, qi))
    }

    fn drain(delta: i32, target: EffectTarget) -> Technique {
        Technique::new("Siphon", ActionGrade::Uncommon, 0)
            .with_effect(Effect::QiDelta { delta, target })
    }

    fn run(
        technique: &Technique,
        config: &BattleConfig,
    ) -> (CombatantState, CombatantState, Vec<ActionEvent>) {
        let out = apply_technique_effects(
            &with_qi("A", 7),
            &with_qi("B", 7),
            technique,
            &mut ScriptedSource::default(),
            config,
        )
        .unwrap();
        (out.actor, out.target, out.events)
    }

    #[test]
    fn default_rule_caps_at_zero() {
        let (_, target, events) = run(&drain(-3, EffectTarget::Enemy), &BattleConfig::default());

        assert_eq!(target.stats.qi, 0);
        assert_eq!(
            events,
            vec![ActionEvent::QiDelta {
                actor: "B".to_string(),
                delta: -3,
                qi_before: 7,
                qi_after: 0,
            }]
        );
    }

    #[test]
    fn deep_drain_goes_negative_under_default_rule() {
        let (_, target, _) = run(&drain(-10, EffectTarget::Enemy), &BattleConfig::default());

        assert_eq!(target.stats.qi, -3);
    }

    #[test]
    fn floor_rule_keeps_pool_non_negative() {
        let config = BattleConfig::default().with_qi_delta_rule(QiDeltaRule::FloorAtZero);

        let (actor, _, _) = run(&drain(5, EffectTarget::Caster), &config);
        assert_eq!(actor.stats.qi, 12);

        let (_, target, _) = run(&drain(-10, EffectTarget::Enemy), &config);
        assert_eq!(target.stats.qi, 0);
    }
}
