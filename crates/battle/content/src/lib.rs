//! Authored battle content and its loaders.
//!
//! Provides loaders for RON/TOML data files:
//! - Battle tuning (`BattleConfig`, via TOML)
//! - Technique lists (via RON), validated before use
//! - A name-keyed technique registry with embedded sample data
//!
//! Content is read once at startup and handed to `battle-core` by reference;
//! it never appears in combatant snapshots.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, LoadResult, TechniqueCatalog, TechniqueLoader, TechniqueRegistry,
};
