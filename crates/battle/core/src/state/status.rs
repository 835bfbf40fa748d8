//! Status effects attached to combatants.
//!
//! A status is a timed modifier or periodic effect. Every instance carries a
//! remaining-turns counter; the ledger operations in [`crate::ledger`] remove
//! it as soon as a consuming decrement brings that counter to zero or below.
//!
//! # Kinds
//!
//! - Modifiers: attack, defense, resistance, speed
//! - Periodic: health over time, qi over time
//! - Control: stun
//! - Mitigation: shield
//! - Composite: sword qi (owns nested attack and defense modifiers)

use bitflags::bitflags;
use strum::{Display, EnumCount, EnumIter, IntoStaticStr};

use crate::stats::ChannelProfile;

/// Discriminant of [`StatusEffect`]; the ledger key.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "camelCase")]
pub enum StatusKind {
    AttackModifier,
    DefenseModifier,
    ResistanceModifier,
    SpeedModifier,
    HealthOverTime,
    QiOverTime,
    Stun,
    Shield,
    SwordQi,
}

bitflags! {
    /// Scheduling hints carried by a status.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct StatusFlags: u8 {
        /// Ticks and loses a turn during the pre-action phase.
        const PRE_ACTION      = 1 << 0;
        /// Loses a turn whenever the scheduler runs default consumption.
        const DEFAULT_CONSUME = 1 << 1;
    }
}

/// Human-readable formats use the flag text (`"PRE_ACTION | DEFAULT_CONSUME"`),
/// binary formats the raw bits.
#[cfg(feature = "serde")]
impl serde::Serialize for StatusFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bitflags::serde::serialize(self, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for StatusFlags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bitflags::serde::deserialize(deserializer)
    }
}

/// Per-channel stat modifier.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelModifier {
    pub delta: ChannelProfile,
    pub is_multiplicative: bool,
}

/// Modifier owned by a composite status, with its own duration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NestedModifier {
    pub remaining_turns: i32,
    pub modifier: ChannelModifier,
}

/// Sword qi: boosts sword techniques and hardens defense.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwordQi {
    pub attack: NestedModifier,
    pub defense: NestedModifier,
}

impl SwordQi {
    /// Technique attack type this status boosts.
    pub const ATTACK_TYPE: &'static str = "sword";
}

/// Kind-specific payload of a status.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusEffect {
    AttackModifier(ChannelModifier),
    DefenseModifier(ChannelModifier),
    ResistanceModifier(ChannelModifier),
    SpeedModifier { delta: f64, is_multiplicative: bool },
    /// Positive heals, negative damages. `profile` is kept for display.
    HealthOverTime {
        delta_per_turn: f64,
        profile: ChannelProfile,
    },
    QiOverTime { delta_per_turn: i32 },
    Stun,
    /// Blocks `multiplier` of incoming damage, minus penetration.
    Shield { multiplier: f64 },
    SwordQi(SwordQi),
}

impl StatusEffect {
    /// The ledger key of this payload.
    pub const fn kind(&self) -> StatusKind {
        match self {
            Self::AttackModifier(_) => StatusKind::AttackModifier,
            Self::DefenseModifier(_) => StatusKind::DefenseModifier,
            Self::ResistanceModifier(_) => StatusKind::ResistanceModifier,
            Self::SpeedModifier { .. } => StatusKind::SpeedModifier,
            Self::HealthOverTime { .. } => StatusKind::HealthOverTime,
            Self::QiOverTime { .. } => StatusKind::QiOverTime,
            Self::Stun => StatusKind::Stun,
            Self::Shield { .. } => StatusKind::Shield,
            Self::SwordQi(_) => StatusKind::SwordQi,
        }
    }
}

/// A status with its remaining duration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusInstance {
    pub effect: StatusEffect,
    pub remaining_turns: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: StatusFlags,
}

impl StatusInstance {
    pub fn new(effect: StatusEffect, remaining_turns: i32) -> Self {
        Self {
            effect,
            remaining_turns,
            flags: StatusFlags::empty(),
        }
    }

    pub fn stun(remaining_turns: i32) -> Self {
        Self::new(StatusEffect::Stun, remaining_turns)
    }

    pub fn shield(multiplier: f64, remaining_turns: i32) -> Self {
        Self::new(StatusEffect::Shield { multiplier }, remaining_turns)
    }

    pub fn health_over_time(delta_per_turn: f64, remaining_turns: i32) -> Self {
        Self::new(
            StatusEffect::HealthOverTime {
                delta_per_turn,
                profile: ChannelProfile::default(),
            },
            remaining_turns,
        )
    }

    pub fn qi_over_time(delta_per_turn: i32, remaining_turns: i32) -> Self {
        Self::new(StatusEffect::QiOverTime { delta_per_turn }, remaining_turns)
    }

    /// Builder: add scheduling flags.
    pub fn with_flags(mut self, flags: StatusFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub const fn kind(&self) -> StatusKind {
        self.effect.kind()
    }

    pub fn is_pre_action(&self) -> bool {
        self.flags.contains(StatusFlags::PRE_ACTION)
    }

    pub fn is_default_consume(&self) -> bool {
        self.flags.contains(StatusFlags::DEFAULT_CONSUME)
    }
}
