//! Battle configuration loader.

use std::path::Path;

use battle_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle tuning from TOML files.
///
/// Missing keys fall back to [`BattleConfig::default`], so a file only needs
/// the values it overrides. Unknown keys are an error.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing BattleConfig
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        let config = Self::parse_str(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::debug!("loaded battle config from {}", path.display());
        Ok(config)
    }

    /// Parse config data from TOML text.
    pub fn parse_str(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Self::check_ranges(&config)?;
        Ok(config)
    }

    fn check_ranges(config: &BattleConfig) -> LoadResult<()> {
        if config.accuracy_min > config.accuracy_max {
            anyhow::bail!(
                "accuracy_min {} exceeds accuracy_max {}",
                config.accuracy_min,
                config.accuracy_max
            );
        }
        if config.resistance_min > config.resistance_max {
            anyhow::bail!(
                "resistance_min {} exceeds resistance_max {}",
                config.resistance_min,
                config.resistance_max
            );
        }
        if config.luck_cap <= 0.0 {
            anyhow::bail!("luck_cap must be positive, got {}", config.luck_cap);
        }
        Ok(())
    }
}
