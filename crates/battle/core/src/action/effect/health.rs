//! Health delta effect: heals and attacks.

use crate::action::technique::EffectTarget;
use crate::combat::{
    absorb_with_shield, calculate_accuracy, calculate_crit_chance, calculate_damage, roll,
};
use crate::env::RandomSource;
use crate::event::ActionEvent;
use crate::ledger::{self, StatusError};
use crate::state::{StatusEffect, StatusKind};
use crate::stats::ChannelProfile;

use super::EffectContext;

/// Apply `amount` of health change to the chosen side.
///
/// Non-negative amounts heal without rolling. Negative amounts go through the
/// attack pipeline.
pub(super) fn apply<R: RandomSource + ?Sized>(
    ctx: &mut EffectContext<'_, R>,
    amount: f64,
    profile: &ChannelProfile,
    target: EffectTarget,
) -> Result<(), StatusError> {
    if amount >= 0.0 {
        heal(ctx, amount, target);
        Ok(())
    } else {
        strike(ctx, amount, profile, target)
    }
}

fn heal<R: RandomSource + ?Sized>(
    ctx: &mut EffectContext<'_, R>,
    amount: f64,
    target: EffectTarget,
) {
    let (side, events) = ctx.split(target);
    let (health_before, health_after) = side.stats.apply_health_delta(amount);

    tracing::debug!("{} healed {} -> {}", side.name, health_before, health_after);
    events.push(ActionEvent::HealthDelta {
        actor: side.name.clone(),
        raw: amount,
        delta: health_after - health_before,
        breakdown: None,
        health_before,
        health_after,
    });
}

/// Attack pipeline.
///
/// The technique user supplies speed and luck; the chosen side supplies speed,
/// resistances and any shield. Accuracy and crit are both drawn before damage
/// is resolved, so every attack consumes exactly two draws.
fn strike<R: RandomSource + ?Sized>(
    ctx: &mut EffectContext<'_, R>,
    amount: f64,
    profile: &ChannelProfile,
    target: EffectTarget,
) -> Result<(), StatusError> {
    let config = ctx.config;
    let attacker = ctx.actor.name.clone();
    let (attacker_speed, attacker_luck) = (ctx.actor.stats.speed, ctx.actor.stats.luck);

    let defender = ctx.side(target);
    let defender_name = defender.name.clone();
    let defender_speed = defender.stats.speed;
    let resistances = defender.stats.resistances;

    // 1. Accuracy
    let accuracy = calculate_accuracy(attacker_speed, defender_speed, config);
    let is_hit = roll(accuracy, &mut *ctx.rng);
    ctx.events.push(ActionEvent::AccuracyRoll {
        actor: attacker.clone(),
        target: defender_name.clone(),
        accuracy,
        is_hit,
    });

    // 2. Crit
    let crit_chance = calculate_crit_chance(attacker_luck, &[], config);
    let is_crit = roll(crit_chance, &mut *ctx.rng);
    ctx.events.push(ActionEvent::CritRoll {
        actor: attacker.clone(),
        crit_chance,
        is_crit,
    });

    if !is_hit && config.miss_negates_damage {
        tracing::debug!("{} missed {}", attacker, defender_name);
        return Ok(());
    }

    // 3. Channel split against the defender's resistances
    let raw = amount.abs() * if is_crit { config.crit_multiplier } else { 1.0 };
    let damage = calculate_damage(raw, profile, &resistances, config);

    let (defender, events) = ctx.split(target);

    // 4. Shield absorbs part of the total and loses one turn
    let shield = defender.status(StatusKind::Shield).and_then(|s| match s.effect {
        StatusEffect::Shield { multiplier } => Some(multiplier),
        _ => None,
    });
    let dealt = match shield {
        Some(multiplier) => {
            let after_shield =
                absorb_with_shield(damage.total, multiplier, config.shield_penetration);
            ledger::consume_in_place(defender, StatusKind::Shield, 1, events)?;
            after_shield
        }
        None => damage.total,
    };

    // 5. Apply
    let (health_before, health_after) = defender.stats.apply_health_delta(-dealt);
    tracing::debug!(
        "{} hits {} for {} ({} before shield, crit: {})",
        attacker,
        defender.name,
        dealt,
        damage.total,
        is_crit
    );
    events.push(ActionEvent::HealthDelta {
        actor: defender.name.clone(),
        raw: -damage.total,
        delta: health_after - health_before,
        breakdown: Some(damage.breakdown),
        health_before,
        health_after,
    });

    Ok(())
}
