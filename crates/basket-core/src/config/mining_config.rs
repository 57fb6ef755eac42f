//! Itemset mining configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the frequent-itemset mining stage.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MiningConfig {
    /// Minimum support ratio for a frequent itemset. Default: 0.1.
    pub min_support: Option<f64>,
    /// Minimum itemset size to report. Default: 1.
    pub min_len: Option<usize>,
    /// Maximum itemset size to explore. Default: 10.
    pub max_len: Option<usize>,
}

impl MiningConfig {
    /// Returns the effective minimum support, defaulting to 0.1.
    pub fn effective_min_support(&self) -> f64 {
        self.min_support.unwrap_or(0.1)
    }

    /// Returns the effective minimum itemset size, defaulting to 1.
    pub fn effective_min_len(&self) -> usize {
        self.min_len.unwrap_or(1)
    }

    /// Returns the effective maximum itemset size, defaulting to 10.
    pub fn effective_max_len(&self) -> usize {
        self.max_len.unwrap_or(10)
    }
}
