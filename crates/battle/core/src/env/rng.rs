//! Uniform random sources for hit and crit rolls.
//!
//! The resolution pipeline never owns an RNG: callers inject a
//! [`RandomSource`] and the core draws from it a fixed number of times per
//! effect. Replaying the same draws reproduces the same event log.
//!
//! # Determinism
//!
//! [`PcgSource`] is fully determined by its seed. [`ScriptedSource`] replays a
//! recorded sequence, which is what tests and replays use.

/// A source of uniform values in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 32-bit output from 64-bit state.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcgSource {
    state: u64,
}

impl PcgSource {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a raw seed.
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Creates a generator for one actor's turn within a battle.
    ///
    /// See [`compute_seed`] for how the parts are mixed.
    pub fn for_turn(battle_seed: u64, round: u64, actor_index: u32) -> Self {
        Self::new(compute_seed(battle_seed, round, actor_index, 0))
    }

    /// Advance the state and return 32 random bits.
    pub fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }

    /// `state' = state * multiplier + increment (mod 2^64)`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RandomSource for PcgSource {
    fn next_unit(&mut self) -> f64 {
        // 2^-32 scaling keeps the result strictly below 1.0
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// An empty script always yields `0.0`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Compute a deterministic seed from battle components.
///
/// # Context Values
///
/// Use different `context` values when one turn needs independent streams.
pub fn compute_seed(battle_seed: u64, round: u64, actor_index: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash multipliers
    let mut hash = battle_seed;

    hash ^= round.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor_index as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
