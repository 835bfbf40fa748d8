//! Three-channel weighting over magic, physical and spiritual.
//!
//! Attack mixes, resistance mixes and damage breakdowns all use the same
//! shape. Stored profiles need not sum to one; [`normalize`] turns them into
//! usable weights before any damage math.

use strum::{Display, EnumCount, EnumIter, IntoStaticStr};

use crate::error::{BattleError, ErrorSeverity};

use super::clamp;

/// A single damage/resistance channel.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Channel {
    Magic,
    Physical,
    Spiritual,
}

/// Weights (or values) per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChannelProfile {
    pub magic: f64,
    pub physical: f64,
    pub spiritual: f64,
}

/// Per-channel damage dealt by a single hit.
pub type DamageBreakdown = ChannelProfile;

impl ChannelProfile {
    /// Normalization fallback: everything routed through magic.
    pub const MAGIC_ONLY: Self = Self::new(1.0, 0.0, 0.0);

    pub const fn new(magic: f64, physical: f64, spiritual: f64) -> Self {
        Self {
            magic,
            physical,
            spiritual,
        }
    }

    /// Value of a single channel.
    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Magic => self.magic,
            Channel::Physical => self.physical,
            Channel::Spiritual => self.spiritual,
        }
    }

    /// Sum over all channels.
    pub fn total(&self) -> f64 {
        self.magic + self.physical + self.spiritual
    }

    /// Strict check for authored profiles.
    ///
    /// Normalization never rejects a profile; this is for content loaders
    /// that want malformed data to fail loudly instead of being coerced.
    pub fn validate(&self) -> Result<(), ProfileError> {
        use strum::IntoEnumIterator;

        for channel in Channel::iter() {
            let weight = self.get(channel);
            if !weight.is_finite() {
                return Err(ProfileError::NonFinite { channel });
            }
            if weight < 0.0 {
                return Err(ProfileError::Negative { channel, weight });
            }
        }
        Ok(())
    }
}

/// Normalize a profile so its channels sum to exactly one.
///
/// # Formula
///
/// ```text
/// physical' = clamp(magic, min, max)
/// spiritual' = clamp(spiritual, min, max)
/// magic'    = clamp(physical, min, max) + (1 - (physical' + spiritual' + magic))
/// ```
///
/// Note the physical/magic inputs are read crosswise. Balance data is authored
/// against this mapping, so it is kept as-is.
///
/// If the three results do not sum to exactly `1.0`, the profile collapses to
/// [`ChannelProfile::MAGIC_ONLY`].
pub fn normalize(profile: &ChannelProfile, min: f64, max: f64) -> ChannelProfile {
    let physical = clamp(profile.magic, min, max);
    let spiritual = clamp(profile.spiritual, min, max);
    let magic = clamp(profile.physical, min, max) + (1.0 - (physical + spiritual + profile.magic));

    if physical + spiritual + magic == 1.0 {
        ChannelProfile {
            magic,
            physical,
            spiritual,
        }
    } else {
        ChannelProfile::MAGIC_ONLY
    }
}

/// Errors raised by [`ChannelProfile::validate`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("{channel} weight is not a finite number")]
    NonFinite { channel: Channel },

    #[error("{channel} weight {weight} is negative")]
    Negative { channel: Channel, weight: f64 },
}

impl BattleError for ProfileError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonFinite { .. } => "PROFILE_NON_FINITE",
            Self::Negative { .. } => "PROFILE_NEGATIVE",
        }
    }
}
