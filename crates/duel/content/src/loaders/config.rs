//! Duel configuration loader.

use std::path::Path;

use duel_core::DuelConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for duel rule parameters from TOML files.
///
/// Missing keys keep their [`DuelConfig::default`] value, so a file only needs
/// to list the rules it rebalances.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<DuelConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<DuelConfig> {
        let config: DuelConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.calm_divisor == 0 {
            anyhow::bail!("calm_divisor must be at least 1");
        }
        if config.bio_rhythm_limit < 0 {
            anyhow::bail!(
                "bio_rhythm_limit must not be negative (got {})",
                config.bio_rhythm_limit
            );
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse("starting_hp = 120\npass_refund = 3\n").unwrap();

        assert_eq!(config.starting_hp, 120);
        assert_eq!(config.pass_refund, 3);
        assert_eq!(config.inflamed_damage, DuelConfig::DEFAULT_INFLAMED_DAMAGE);
    }

    #[test]
    fn zero_calm_divisor_is_rejected() {
        let err = ConfigLoader::parse("calm_divisor = 0").unwrap_err();
        assert!(err.to_string().contains("calm_divisor"));
    }
}
