//! Deterministic turn resolution for two-combatant battles.
//!
//! `battle-core` owns the combat rules: hit and crit rolls, channel-weighted
//! damage, shields, the qi economy and status durations. Every operation is a
//! pure function from immutable [`CombatantState`] snapshots to new snapshots
//! plus an ordered list of [`ActionEvent`]s. Randomness enters only through an
//! injected [`RandomSource`], so a recorded sequence of draws replays a turn
//! exactly.
pub mod action;
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod event;
pub mod ledger;
pub mod state;
pub mod stats;

pub use action::{
    ActionGrade, Effect, EffectOutcome, EffectTarget, PhaseOutcome, StatusAmount, Technique,
    TurnEnd, TurnOutcome, apply_pre_action, apply_qi_cost, apply_technique_effects, resolve_turn,
};
pub use combat::{
    DamageRoll, absorb_with_shield, calculate_accuracy, calculate_crit_chance, calculate_damage,
    roll,
};
pub use config::{BattleConfig, QiDeltaRule};
pub use env::{PcgSource, RandomSource, ScriptedSource, compute_seed};
pub use error::{BattleError, ErrorSeverity};
#[cfg(feature = "serde")]
pub use event::ReplayError;
pub use event::{ActionEvent, EventLog};
pub use ledger::{
    StatusError, Transition, consume_all_statuses, consume_default_statuses, consume_status,
    tick_status,
};
pub use state::{
    ChannelModifier, CombatantState, NestedModifier, StatusEffect, StatusFlags, StatusInstance,
    StatusKind, StatusLedger, SwordQi,
};
pub use stats::{Channel, ChannelProfile, DamageBreakdown, ProfileError, Stats, clamp, normalize};
