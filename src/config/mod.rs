//! Forge configuration.
//!
//! ```yaml
//! seed: 12345
//! generation:
//!   default_size_min: 1
//!   default_size_max: 32
//! ```
//!
//! The `FORGE_SEED` environment variable overrides the file's seed, so a
//! failing run can be replayed without editing anything.

mod seed;

pub use seed::parse_seed;

use anyhow::Context;
use forge_generator::{Forge, GenerationConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable holding a seed override.
pub const SEED_ENV: &str = "FORGE_SEED";

/// Settings used to build a [`Forge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForgeConfig {
    /// Fixed seed; `None` picks one from system entropy
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub generation: GenerationConfig,
}

impl ForgeConfig {
    /// Parse a configuration from YAML.
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(content).with_context(|| "Failed to parse forge config YAML")
    }

    /// Read a configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read forge config file: {path:?}"))?;
        Self::from_yaml(&content)
    }

    /// Default settings with the environment override applied.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::default().with_env_override()
    }

    /// Apply `FORGE_SEED` when it is set.
    pub fn with_env_override(self) -> anyhow::Result<Self> {
        let value = std::env::var(SEED_ENV).ok();
        self.with_seed_override(value.as_deref())
            .with_context(|| format!("Invalid {SEED_ENV}"))
    }

    /// Replace the seed with a parsed override, if any.
    pub fn with_seed_override(mut self, value: Option<&str>) -> anyhow::Result<Self> {
        if let Some(value) = value {
            self.seed = Some(parse_seed(value)?);
        }
        Ok(self)
    }

    /// Build a Forge from these settings.
    pub fn build(&self) -> anyhow::Result<Forge> {
        let forge = Forge::from_config(self.seed, self.generation.clone())
            .context("Invalid generation settings")?;
        tracing::info!(
            seed = %format!("{:#x}", forge.seed()),
            fixed = self.seed.is_some(),
            "Forge ready"
        );
        Ok(forge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml() {
        let config = ForgeConfig::from_yaml(
            "seed: 99\ngeneration:\n  default_size_min: 2\n  default_size_max: 5\n",
        )
        .unwrap();
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.generation.default_size_min, 2);
        assert_eq!(config.generation.default_size_max, 5);
    }

    #[test]
    fn test_from_yaml_defaults() {
        let config = ForgeConfig::from_yaml("{}").unwrap();
        assert_eq!(config, ForgeConfig::default());
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_seed_override() {
        let config = ForgeConfig::default()
            .with_seed_override(Some("0x10"))
            .unwrap();
        assert_eq!(config.seed, Some(16));

        let config = config.with_seed_override(None).unwrap();
        assert_eq!(config.seed, Some(16));

        assert!(ForgeConfig::default()
            .with_seed_override(Some("nope"))
            .is_err());
    }

    #[test]
    fn test_build_uses_seed() {
        let config = ForgeConfig {
            seed: Some(1234),
            ..Default::default()
        };
        let mut a = config.build().unwrap();
        let mut b = config.build().unwrap();
        assert_eq!(a.seed(), 1234);
        assert_eq!(a.a_huge_int(), b.a_huge_int());
    }

    #[test]
    fn test_build_rejects_empty_size_window() {
        let config = ForgeConfig {
            seed: Some(1),
            generation: GenerationConfig {
                default_size_min: 4,
                default_size_max: 4,
            },
        };
        let err = config.build().unwrap_err();
        assert!(format!("{err:#}").contains("default_size_min"));
    }
}
