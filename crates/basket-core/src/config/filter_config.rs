//! Rule filter configuration.

use serde::{Deserialize, Serialize};

/// Adjustment names accepted by the significance filter.
pub const KNOWN_ADJUSTMENTS: [&str; 3] = ["none", "bonferroni", "benjamini_hochberg"];

/// Configuration for the statistical rule filters.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterConfig {
    /// Significance level for the Fisher exact test. Default: 0.05.
    pub alpha: Option<f64>,
    /// Multiple-testing adjustment:
    /// "none" | "bonferroni" | "benjamini_hochberg". Default: "none".
    pub adjustment: Option<String>,
}

impl FilterConfig {
    /// Returns the effective significance level, defaulting to 0.05.
    pub fn effective_alpha(&self) -> f64 {
        self.alpha.unwrap_or(0.05)
    }

    /// Returns the effective adjustment name, defaulting to "none".
    pub fn effective_adjustment(&self) -> &str {
        self.adjustment.as_deref().unwrap_or("none")
    }
}

/// Whether `name` is one of the accepted adjustment names.
pub fn is_known_adjustment(name: &str) -> bool {
    KNOWN_ADJUSTMENTS.contains(&name)
}
