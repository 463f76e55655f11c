//! Tier table configuration loaded from a TOML file.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tierpack_core::{PricingTier, MAX_INPUT_TIERS};

/// Pricing configuration: the unit token price and the promotional tiers
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PricingConfig {
    /// Integer tokens per display unit
    pub token_price: u64,

    /// Promotional tiers, first bonus window first
    #[serde(default)]
    pub tiers: Vec<PricingTier>,
}

impl PricingConfig {
    /// Load configuration from TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        let config: PricingConfig = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self.token_price == 0 {
            bail!("token_price must be greater than 0");
        }

        if self.tiers.len() > MAX_INPUT_TIERS {
            bail!(
                "at most {} tiers are supported (the permanent price occupies the last slot): got {}",
                MAX_INPUT_TIERS,
                self.tiers.len()
            );
        }

        Ok(())
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            token_price: 100,
            tiers: vec![],
        }
    }
}

/// Create example configuration file
pub fn create_example_config(path: &Path) -> Result<()> {
    let example = PricingConfig {
        token_price: 100,
        tiers: vec![
            PricingTier::new("50", "5", "0", "0"),
            PricingTier::new("25", "10", "0", "0"),
            PricingTier::new("10", "15", "0", "0"),
        ],
    };

    example.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parsing() {
        let config: PricingConfig = toml::from_str(
            r#"
            token_price = 100

            [[tiers]]
            price = "50"
            duration_days = "5"
            duration_hours = "0"
            duration_minutes = "0"
            "#,
        )
        .unwrap();

        assert_eq!(config.token_price, 100);
        assert_eq!(config.tiers.len(), 1);
        assert_eq!(config.tiers[0], PricingTier::new("50", "5", "0", "0"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = PricingConfig::default();
        assert!(config.validate().is_ok());

        config.token_price = 0;
        assert!(config.validate().is_err());

        config.token_price = 100;
        config.tiers = (0..8).map(|_| PricingTier::new("50", "5", "0", "0")).collect();
        assert!(config.validate().is_err());
    }
}
