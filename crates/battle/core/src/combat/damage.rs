//! Damage calculation and shield absorption.

use crate::config::BattleConfig;
use crate::stats::{ChannelProfile, DamageBreakdown, normalize};

/// Total damage of a hit plus its per-channel split.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageRoll {
    pub total: f64,
    pub breakdown: DamageBreakdown,
}

/// Calculate damage from raw power and two channel profiles.
///
/// # Formula
///
/// ```text
/// A' = normalize(attack), R' = normalize(resistance)
/// damage_c = raw * A'_c * (1 - R'_c)        for c in {magic, physical, spiritual}
/// total    = sum(damage_c)
/// ```
///
/// Linear in `raw`: doubling the power doubles every channel.
pub fn calculate_damage(
    raw: f64,
    attack: &ChannelProfile,
    resistance: &ChannelProfile,
    config: &BattleConfig,
) -> DamageRoll {
    let weights = normalize(attack, config.resistance_min, config.resistance_max);
    let resist = normalize(resistance, config.resistance_min, config.resistance_max);

    let breakdown = DamageBreakdown {
        magic: raw * weights.magic * (1.0 - resist.magic),
        physical: raw * weights.physical * (1.0 - resist.physical),
        spiritual: raw * weights.spiritual * (1.0 - resist.spiritual),
    };

    DamageRoll {
        total: breakdown.total(),
        breakdown,
    }
}

/// Reduce `damage` by a shield.
///
/// # Formula
///
/// ```text
/// shield_value = damage * multiplier
/// after_shield = damage - shield_value * (1 - penetration)
/// ```
///
/// `penetration` of the blocked amount always gets through.
pub fn absorb_with_shield(damage: f64, multiplier: f64, penetration: f64) -> f64 {
    let shield_value = damage * multiplier;
    damage - shield_value * (1.0 - penetration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BALANCED: ChannelProfile = ChannelProfile::new(0.25, 0.25, 0.5);

    #[test]
    fn splits_damage_by_weights_and_resistances() {
        let config = BattleConfig::default();
        // Resistance normalizes to magic 1.0: magic channel fully resisted.
        let roll = calculate_damage(100.0, &BALANCED, &ChannelProfile::default(), &config);

        assert_eq!(roll.breakdown.magic, 0.0);
        assert_eq!(roll.breakdown.physical, 25.0);
        assert_eq!(roll.breakdown.spiritual, 50.0);
        assert_eq!(roll.total, 75.0);
    }

    #[test]
    fn matching_resistance_halves_each_channel() {
        let config = BattleConfig::default();
        let resist = ChannelProfile::new(0.5, 0.5, 0.0);
        let roll = calculate_damage(40.0, &BALANCED, &resist, &config);

        // weights {m .25, p .25, s .5}, resist {m .5, p .5, s 0}
        assert_eq!(roll.breakdown.magic, 5.0);
        assert_eq!(roll.breakdown.physical, 5.0);
        assert_eq!(roll.breakdown.spiritual, 20.0);
        assert_eq!(roll.total, 30.0);
    }

    #[test]
    fn shield_lets_penetration_through() {
        let after = absorb_with_shield(100.0, 0.5, 0.2);
        assert!((after - 60.0).abs() < 1e-9);
    }

    #[test]
    fn full_shield_without_penetration_blocks_everything() {
        assert_eq!(absorb_with_shield(80.0, 1.0, 0.0), 0.0);
    }

    proptest! {
        #[test]
        fn damage_is_linear_in_raw_power(
            raw in 0.0f64..10_000.0,
            am in 0.0f64..1.0, ap in 0.0f64..1.0, asp in 0.0f64..1.0,
            rm in 0.0f64..1.0, rp in 0.0f64..1.0, rs in 0.0f64..1.0,
        ) {
            let config = BattleConfig::default();
            let attack = ChannelProfile::new(am, ap, asp);
            let resist = ChannelProfile::new(rm, rp, rs);

            let single = calculate_damage(raw, &attack, &resist, &config);
            let double = calculate_damage(raw * 2.0, &attack, &resist, &config);

            let close = |a: f64, b: f64| (a - b).abs() <= 1e-9 * (1.0 + b.abs());
            prop_assert!(close(double.total, single.total * 2.0));
            prop_assert!(close(double.breakdown.magic, single.breakdown.magic * 2.0));
            prop_assert!(close(double.breakdown.physical, single.breakdown.physical * 2.0));
            prop_assert!(close(double.breakdown.spiritual, single.breakdown.spiritual * 2.0));
        }
    }
}
