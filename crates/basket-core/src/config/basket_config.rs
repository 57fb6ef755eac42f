//! Top-level basket configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{filter_config, FilterConfig, MiningConfig, RuleConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`BASKET_*`)
/// 2. Project config (`basket.toml` in project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BasketConfig {
    pub mining: MiningConfig,
    pub rules: RuleConfig,
    pub filters: FilterConfig,
}

impl BasketConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 2: project config
        let project_config_path = root.join("basket.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 1 (highest priority): environment variables
        Self::apply_env_overrides(&mut config);

        // Validate the final config
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    ///
    /// Mining thresholds are deliberately not validated here: out-of-range
    /// support/confidence values degrade to empty or exhaustive results in
    /// the algorithms themselves rather than erroring.
    pub fn validate(config: &BasketConfig) -> Result<(), ConfigError> {
        if let Some(alpha) = config.filters.alpha {
            if !alpha.is_finite() || alpha <= 0.0 || alpha > 1.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "filters.alpha".to_string(),
                    message: "must be in (0.0, 1.0]".to_string(),
                });
            }
        }
        if let Some(ref adjustment) = config.filters.adjustment {
            if !filter_config::is_known_adjustment(adjustment) {
                return Err(ConfigError::ValidationFailed {
                    field: "filters.adjustment".to_string(),
                    message: format!(
                        "unknown adjustment {:?}, expected one of {:?}",
                        adjustment,
                        filter_config::KNOWN_ADJUSTMENTS
                    ),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut BasketConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: BasketConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut BasketConfig, other: &BasketConfig) {
        // Mining
        if other.mining.min_support.is_some() {
            base.mining.min_support = other.mining.min_support;
        }
        if other.mining.min_len.is_some() {
            base.mining.min_len = other.mining.min_len;
        }
        if other.mining.max_len.is_some() {
            base.mining.max_len = other.mining.max_len;
        }

        // Rules
        if other.rules.min_confidence.is_some() {
            base.rules.min_confidence = other.rules.min_confidence;
        }
        if other.rules.min_len.is_some() {
            base.rules.min_len = other.rules.min_len;
        }

        // Filters
        if other.filters.alpha.is_some() {
            base.filters.alpha = other.filters.alpha;
        }
        if other.filters.adjustment.is_some() {
            base.filters.adjustment = other.filters.adjustment.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `BASKET_MINING_MIN_SUPPORT`, `BASKET_FILTERS_ALPHA`, etc.
    fn apply_env_overrides(config: &mut BasketConfig) {
        if let Ok(val) = std::env::var("BASKET_MINING_MIN_SUPPORT") {
            if let Ok(v) = val.parse::<f64>() {
                config.mining.min_support = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BASKET_MINING_MIN_LEN") {
            if let Ok(v) = val.parse::<usize>() {
                config.mining.min_len = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BASKET_MINING_MAX_LEN") {
            if let Ok(v) = val.parse::<usize>() {
                config.mining.max_len = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BASKET_RULES_MIN_CONFIDENCE") {
            if let Ok(v) = val.parse::<f64>() {
                config.rules.min_confidence = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BASKET_RULES_MIN_LEN") {
            if let Ok(v) = val.parse::<usize>() {
                config.rules.min_len = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BASKET_FILTERS_ALPHA") {
            if let Ok(v) = val.parse::<f64>() {
                config.filters.alpha = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BASKET_FILTERS_ADJUSTMENT") {
            config.filters.adjustment = Some(val);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
