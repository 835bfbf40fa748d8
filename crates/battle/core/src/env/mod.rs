//! Collaborators injected into resolution.
//!
//! The only external input besides snapshots and techniques is randomness.
mod rng;

pub use rng::{PcgSource, RandomSource, ScriptedSource, compute_seed};
