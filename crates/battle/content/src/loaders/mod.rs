//! Content loaders for reading battle data from files.
//!
//! Each loader has a `load(path)` entry point for files and a `parse_str`
//! counterpart for embedded data.

pub mod config;
pub mod techniques;

pub use config::ConfigLoader;
pub use techniques::{TechniqueCatalog, TechniqueLoader, TechniqueRegistry};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
