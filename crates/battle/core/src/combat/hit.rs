//! Accuracy and critical-hit chances.

use crate::config::BattleConfig;
use crate::env::RandomSource;
use crate::stats::clamp;

/// Calculate the chance to hit from the two speeds.
///
/// # Formula
///
/// ```text
/// accuracy = actor_speed / (actor_speed + target_speed)
/// clamped to [accuracy_min, accuracy_max]
/// ```
///
/// When both speeds are zero the ratio is undefined and
/// `config.accuracy_fallback` is used instead.
pub fn calculate_accuracy(actor_speed: f64, target_speed: f64, config: &BattleConfig) -> f64 {
    let total = actor_speed + target_speed;
    let ratio = if total == 0.0 {
        config.accuracy_fallback
    } else {
        actor_speed / total
    };

    clamp(ratio, config.accuracy_min, config.accuracy_max)
}

/// Calculate the crit chance from luck plus additive modifiers.
///
/// # Formula
///
/// ```text
/// crit = base + clamp(luck, 0, luck_cap) / luck_cap + sum(modifiers)
/// clamped to [0, 1]
/// ```
pub fn calculate_crit_chance(luck: f64, modifiers: &[f64], config: &BattleConfig) -> f64 {
    let luck_bonus = clamp(luck, 0.0, config.luck_cap) / config.luck_cap;
    let chance = config.base_crit_chance + luck_bonus + modifiers.iter().sum::<f64>();

    clamp(chance, 0.0, 1.0)
}

/// Draw once from `rng` and compare against `chance`.
///
/// Succeeds when the draw is `<= chance`.
pub fn roll<R: RandomSource + ?Sized>(chance: f64, rng: &mut R) -> bool {
    rng.next_unit() <= chance
}
