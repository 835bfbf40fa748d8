//! Technique definitions.
//!
//! Techniques are authored content: a qi cost and an ordered list of effects.
//! The core only reads them.

use strum::{Display, EnumCount, EnumIter, IntoStaticStr};

use crate::state::StatusInstance;
use crate::stats::ChannelProfile;

/// Rarity grade of a technique.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ActionGrade {
    #[default]
    Common,
    Uncommon,
    Rare,
    Unique,
}

/// Which side of the exchange an effect lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectTarget {
    /// The combatant using the technique.
    #[cfg_attr(feature = "serde", serde(rename = "self"))]
    Caster,
    #[cfg_attr(feature = "serde", serde(rename = "enemy"))]
    Enemy,
}

/// Whether a status delta applies or consumes, and how much it consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusAmount {
    /// Positive applies the status for the authored instance's
    /// `remaining_turns`; the value itself is not a duration. Negative
    /// consumes that many turns.
    Turns(i32),
    /// Consumes the status entirely.
    All,
}

/// A single step of a technique.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// `base * multiplier` >= 0 heals, < 0 is an attack.
    HealthDelta {
        base: f64,
        multiplier: f64,
        profile: ChannelProfile,
        target: EffectTarget,
    },
    QiDelta {
        delta: i32,
        target: EffectTarget,
    },
    StatusDelta {
        status: StatusInstance,
        target: EffectTarget,
        amount: StatusAmount,
        /// Application chance in `[0, 1]`; always applies when absent.
        #[cfg_attr(feature = "serde", serde(default))]
        chance: Option<f64>,
    },
}

impl Effect {
    pub fn target(&self) -> EffectTarget {
        match self {
            Self::HealthDelta { target, .. }
            | Self::QiDelta { target, .. }
            | Self::StatusDelta { target, .. } => *target,
        }
    }
}

/// A named, costed list of effects.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Technique {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub grade: ActionGrade,
    pub qi_cost: i32,
    pub effects: Vec<Effect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub grants_momentum: bool,
}

impl Technique {
    pub fn new(name: impl Into<String>, grade: ActionGrade, qi_cost: i32) -> Self {
        Self {
            name: name.into(),
            grade,
            qi_cost,
            effects: Vec::new(),
            grants_momentum: false,
        }
    }

    /// Builder: append an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Builder: grant momentum on completion.
    pub fn with_momentum(mut self) -> Self {
        self.grants_momentum = true;
        self
    }

    /// Every channel profile authored in this technique, in effect order.
    pub fn profiles(&self) -> impl Iterator<Item = &ChannelProfile> {
        use crate::state::StatusEffect;

        self.effects.iter().filter_map(|effect| match effect {
            Effect::HealthDelta { profile, .. } => Some(profile),
            Effect::StatusDelta { status, .. } => match &status.effect {
                StatusEffect::HealthOverTime { profile, .. } => Some(profile),
                _ => None,
            },
            Effect::QiDelta { .. } => None,
        })
    }
}
