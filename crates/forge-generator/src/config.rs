//! Generation settings shared by every Forge.

use crate::error::ForgeError;
use serde::{Deserialize, Serialize};

fn default_size_min() -> usize {
    1
}

fn default_size_max() -> usize {
    32
}

/// Settings for sizes picked when the caller does not give one.
///
/// Strings and containers without an explicit size get a length drawn
/// uniformly in `[default_size_min, default_size_max)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_size_min")]
    pub default_size_min: usize,

    #[serde(default = "default_size_max")]
    pub default_size_max: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            default_size_min: default_size_min(),
            default_size_max: default_size_max(),
        }
    }
}

impl GenerationConfig {
    /// Check that the default size window is not empty and never yields 0.
    pub fn validate(&self) -> Result<(), ForgeError> {
        if self.default_size_min == 0 {
            return Err(ForgeError::InvalidConstraint(
                "default_size_min must be at least 1".to_string(),
            ));
        }
        if self.default_size_min >= self.default_size_max {
            return Err(ForgeError::InvalidConstraint(format!(
                "default_size_min ({}) must be less than default_size_max ({})",
                self.default_size_min, self.default_size_max
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_yaml() {
        let config: GenerationConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, GenerationConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_window() {
        let config: GenerationConfig =
            serde_yaml::from_str("default_size_min: 4\ndefault_size_max: 4").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ForgeError::InvalidConstraint(_))
        ));

        let config = GenerationConfig {
            default_size_min: 0,
            default_size_max: 3,
        };
        assert!(config.validate().is_err());
    }
}
