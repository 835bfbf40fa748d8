//! Battle tuning constants.
//!
//! Numeric balance is configuration, not rules: every constant the resolution
//! pipeline reads lives on [`BattleConfig`]. `Default` reproduces the shipped
//! balance values.

use crate::state::StatusKind;

/// How a qi-delta effect combines with the current qi pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum QiDeltaRule {
    /// `qi_after = min(qi_before + delta, 0)`.
    ///
    /// Treats qi-delta effects as drains: the result never rises above zero.
    #[default]
    CapAtZero,

    /// `qi_after = max(qi_before + delta, 0)`.
    FloorAtZero,
}

impl QiDeltaRule {
    /// Combine `qi_before` with `delta` under this rule.
    pub fn apply(self, qi_before: i32, delta: i32) -> i32 {
        let raw = qi_before.saturating_add(delta);
        match self {
            Self::CapAtZero => raw.min(0),
            Self::FloorAtZero => raw.max(0),
        }
    }
}

/// Tunable parameters for turn resolution.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct BattleConfig {
    /// Lower bound of the chance to hit.
    pub accuracy_min: f64,
    /// Upper bound of the chance to hit.
    pub accuracy_max: f64,
    /// Chance to hit when both combatants have zero speed.
    pub accuracy_fallback: f64,

    /// Crit chance before luck and modifiers.
    pub base_crit_chance: f64,
    /// Luck is clamped to `[0, luck_cap]` and divided by it.
    pub luck_cap: f64,
    /// Damage multiplier on a critical hit.
    pub crit_multiplier: f64,

    /// Per-channel clamp applied during profile normalization.
    pub resistance_min: f64,
    pub resistance_max: f64,

    /// Fraction of the shielded amount that still reaches health.
    pub shield_penetration: f64,

    /// Qi granted when a technique is skipped for lack of qi.
    pub starvation_qi_gain: i32,

    /// When set, a failed accuracy roll zeroes the damage of that effect.
    pub miss_negates_damage: bool,

    /// Combination rule for qi-delta effects.
    pub qi_delta_rule: QiDeltaRule,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// One ledger slot per status kind.
    pub const MAX_STATUSES: usize = 9;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ACCURACY_MIN: f64 = 0.1;
    pub const DEFAULT_ACCURACY_MAX: f64 = 0.95;
    pub const DEFAULT_ACCURACY_FALLBACK: f64 = 0.5;
    pub const DEFAULT_BASE_CRIT_CHANCE: f64 = 0.05;
    pub const DEFAULT_LUCK_CAP: f64 = 100.0;
    pub const DEFAULT_CRIT_MULTIPLIER: f64 = 1.5;
    pub const DEFAULT_RESISTANCE_MIN: f64 = 0.0;
    pub const DEFAULT_RESISTANCE_MAX: f64 = 0.9;
    pub const DEFAULT_SHIELD_PENETRATION: f64 = 0.2;
    pub const DEFAULT_STARVATION_QI_GAIN: i32 = 1;

    pub fn new() -> Self {
        Self {
            accuracy_min: Self::DEFAULT_ACCURACY_MIN,
            accuracy_max: Self::DEFAULT_ACCURACY_MAX,
            accuracy_fallback: Self::DEFAULT_ACCURACY_FALLBACK,
            base_crit_chance: Self::DEFAULT_BASE_CRIT_CHANCE,
            luck_cap: Self::DEFAULT_LUCK_CAP,
            crit_multiplier: Self::DEFAULT_CRIT_MULTIPLIER,
            resistance_min: Self::DEFAULT_RESISTANCE_MIN,
            resistance_max: Self::DEFAULT_RESISTANCE_MAX,
            shield_penetration: Self::DEFAULT_SHIELD_PENETRATION,
            starvation_qi_gain: Self::DEFAULT_STARVATION_QI_GAIN,
            miss_negates_damage: false,
            qi_delta_rule: QiDeltaRule::CapAtZero,
        }
    }

    /// Builder: let a failed accuracy roll cancel damage.
    pub fn with_miss_negates_damage(mut self, enabled: bool) -> Self {
        self.miss_negates_damage = enabled;
        self
    }

    /// Builder: choose the qi-delta combination rule.
    pub fn with_qi_delta_rule(mut self, rule: QiDeltaRule) -> Self {
        self.qi_delta_rule = rule;
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

const _: () = assert!(BattleConfig::MAX_STATUSES == <StatusKind as strum::EnumCount>::COUNT);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_at_zero_never_goes_positive() {
        assert_eq!(QiDeltaRule::CapAtZero.apply(10, 5), 0);
        assert_eq!(QiDeltaRule::CapAtZero.apply(3, -5), -2);
    }

    #[test]
    fn floor_at_zero_never_goes_negative() {
        assert_eq!(QiDeltaRule::FloorAtZero.apply(10, 5), 15);
        assert_eq!(QiDeltaRule::FloorAtZero.apply(3, -5), 0);
    }

    #[test]
    fn builders_override_defaults() {
        let config = BattleConfig::default()
            .with_miss_negates_damage(true)
            .with_qi_delta_rule(QiDeltaRule::FloorAtZero);

        assert!(config.miss_negates_damage);
        assert_eq!(config.qi_delta_rule, QiDeltaRule::FloorAtZero);
        assert_eq!(config.starvation_qi_gain, 1);
    }
}
