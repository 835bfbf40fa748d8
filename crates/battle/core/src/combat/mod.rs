//! Combat resolution math.
//!
//! Pure functions only: no state, no events. The effect executor combines them
//! into hits.
//!
//! # Core Functions
//!
//! - `calculate_accuracy`: speed ratio chance to hit
//! - `calculate_crit_chance`: luck plus modifiers
//! - `calculate_damage`: three-channel damage with resistances
//! - `absorb_with_shield`: shield reduction with penetration

pub mod damage;
pub mod hit;

pub use damage::{DamageRoll, absorb_with_shield, calculate_damage};
pub use hit::{calculate_accuracy, calculate_crit_chance, roll};
