//! Action domain: techniques and the turn pipeline.
//!
//! # Module Structure
//!
//! - `technique`: Authored techniques and their effect lists
//! - `pre_action`: Stun check and pre-action status ticks
//! - `qi_cost`: Qi payment and starvation
//! - `effect`: Effect executor (health, qi, status)
//! - `turn`: Composes the phases above into one turn
//!
//! Every phase takes snapshots by reference and returns new ones together
//! with the events it produced.

pub mod effect;
pub mod pre_action;
pub mod qi_cost;
pub mod technique;
pub mod turn;

pub use effect::{EffectOutcome, apply_technique_effects};
pub use pre_action::{PhaseOutcome, apply_pre_action};
pub use qi_cost::apply_qi_cost;
pub use technique::{ActionGrade, Effect, EffectTarget, StatusAmount, Technique};
pub use turn::{TurnEnd, TurnOutcome, resolve_turn};
