//! Combatant statistics.
//!
//! Stats are plain values. Health is the only bounded quantity: every write
//! goes through [`Stats::apply_health_delta`], which keeps it inside
//! `[0, max_health]`.

mod channel;

pub use channel::{Channel, ChannelProfile, DamageBreakdown, ProfileError, normalize};

/// Saturate `value` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics; with inverted bounds `max` wins.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Raw statistics of a combatant.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub max_health: f64,
    pub health: f64,
    pub attack: ChannelProfile,
    pub defense: ChannelProfile,
    pub resistances: ChannelProfile,
    pub speed: f64,
    pub luck: f64,
    /// Resource spent on techniques.
    pub qi: i32,
}

impl Stats {
    /// Creates stats at full health with neutral profiles.
    pub fn new(max_health: f64, speed: f64, luck: f64, qi: i32) -> Self {
        Self {
            max_health,
            health: max_health,
            speed,
            luck,
            qi,
            ..Self::default()
        }
    }

    /// Builder: set the resistance profile.
    pub fn with_resistances(mut self, resistances: ChannelProfile) -> Self {
        self.resistances = resistances;
        self
    }

    /// Builder: set the attack profile.
    pub fn with_attack(mut self, attack: ChannelProfile) -> Self {
        self.attack = attack;
        self
    }

    /// Builder: set the defense profile.
    pub fn with_defense(mut self, defense: ChannelProfile) -> Self {
        self.defense = defense;
        self
    }

    /// Builder: set current health (clamped).
    pub fn with_health(mut self, health: f64) -> Self {
        self.health = clamp(health, 0.0, self.max_health);
        self
    }

    /// Add `amount` to health, clamped to `[0, max_health]`.
    ///
    /// Returns `(health_before, health_after)`.
    pub fn apply_health_delta(&mut self, amount: f64) -> (f64, f64) {
        let before = self.health;
        let after = clamp(before + amount, 0.0, self.max_health);
        self.health = after;
        (before, after)
    }

    /// Add `delta` to qi without bounds.
    ///
    /// Returns `(qi_before, qi_after)`.
    pub fn apply_qi_delta(&mut self, delta: i32) -> (i32, i32) {
        let before = self.qi;
        self.qi = before.saturating_add(delta);
        (before, self.qi)
    }
}
