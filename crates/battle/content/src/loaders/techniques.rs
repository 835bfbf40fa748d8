//! Technique loader and registry.
//!
//! Techniques are authored as a RON catalog. Unlike the core, which silently
//! normalizes whatever profile it is given, the loader rejects malformed
//! content up front.

use std::collections::HashMap;
use std::path::Path;

use battle_core::{BattleError, Effect, StatusAmount, Technique};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Technique catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechniqueCatalog {
    pub techniques: Vec<Technique>,
}

/// Loader for technique catalogs from RON files.
pub struct TechniqueLoader;

impl TechniqueLoader {
    /// Load and validate a technique catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a TechniqueCatalog
    pub fn load(path: &Path) -> LoadResult<Vec<Technique>> {
        let content = read_file(path)?;
        Self::parse_str(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse and validate a technique catalog from RON text.
    pub fn parse_str(content: &str) -> LoadResult<Vec<Technique>> {
        let catalog: TechniqueCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse technique catalog RON: {}", e))?;

        for technique in &catalog.techniques {
            validate(technique)?;
        }
        Ok(catalog.techniques)
    }
}

/// Reject content the core would otherwise coerce or misread.
fn validate(technique: &Technique) -> LoadResult<()> {
    let name = &technique.name;

    if technique.qi_cost < 0 {
        anyhow::bail!("technique {name}: negative qi cost {}", technique.qi_cost);
    }

    for profile in technique.profiles() {
        profile.validate().map_err(|e| {
            anyhow::anyhow!("technique {name}: invalid profile [{}]: {e}", e.error_code())
        })?;
    }

    for effect in &technique.effects {
        match effect {
            Effect::HealthDelta {
                base, multiplier, ..
            } if !(base * multiplier).is_finite() => {
                anyhow::bail!("technique {name}: health delta is not finite");
            }
            Effect::StatusDelta {
                chance: Some(chance),
                ..
            } if !(0.0..=1.0).contains(chance) => {
                anyhow::bail!("technique {name}: chance {chance} outside [0, 1]");
            }
            Effect::StatusDelta {
                amount: StatusAmount::Turns(i32::MIN),
                ..
            } => {
                anyhow::bail!("technique {name}: status amount {} out of range", i32::MIN);
            }
            Effect::StatusDelta {
                status,
                amount: StatusAmount::Turns(turns),
                ..
            } if *turns > 0 && status.remaining_turns <= 0 => {
                anyhow::bail!(
                    "technique {name}: applied {} must last at least one turn",
                    status.kind()
                );
            }
            _ => {}
        }
    }

    Ok(())
}

/// Registry of techniques keyed by name.
#[derive(Debug, Clone, Default)]
pub struct TechniqueRegistry {
    techniques: HashMap<String, Technique>,
}

impl TechniqueRegistry {
    /// Loads the sample techniques embedded in this crate.
    pub fn builtin() -> LoadResult<Self> {
        let sample = include_str!("../../data/techniques/sample.ron");
        let techniques = TechniqueLoader::parse_str(sample)
            .map_err(|e| anyhow::anyhow!("{} (sample.ron)", e))?;
        Self::from_techniques(techniques)
    }

    /// Builds a registry, rejecting duplicate names.
    pub fn from_techniques(techniques: impl IntoIterator<Item = Technique>) -> LoadResult<Self> {
        let mut registry = Self::default();
        for technique in techniques {
            registry.insert(technique)?;
        }
        tracing::debug!("registered {} techniques", registry.len());
        Ok(registry)
    }

    /// Adds one technique; names must be unique.
    pub fn insert(&mut self, technique: Technique) -> LoadResult<()> {
        if self.techniques.contains_key(&technique.name) {
            anyhow::bail!("duplicate technique name {}", technique.name);
        }
        self.techniques.insert(technique.name.clone(), technique);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Technique> {
        self.techniques.get(name)
    }

    /// Returns an iterator over all registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.techniques.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.techniques.len()
    }

    pub fn is_empty(&self) -> bool {
        self.techniques.is_empty()
    }
}
