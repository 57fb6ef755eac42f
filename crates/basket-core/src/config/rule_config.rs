//! Association rule generation configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the rule generation stage.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuleConfig {
    /// Minimum confidence for an emitted rule. Default: 0.8.
    pub min_confidence: Option<f64>,
    /// Minimum size of an itemset to split into rules. Default: 2.
    pub min_len: Option<usize>,
}

impl RuleConfig {
    /// Returns the effective minimum confidence, defaulting to 0.8.
    pub fn effective_min_confidence(&self) -> f64 {
        self.min_confidence.unwrap_or(0.8)
    }

    /// Returns the effective minimum itemset size, defaulting to 2.
    pub fn effective_min_len(&self) -> usize {
        self.min_len.unwrap_or(2)
    }
}
