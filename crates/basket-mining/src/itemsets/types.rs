//! Core types for frequent itemset mining.

use serde::{Deserialize, Serialize};

use basket_core::config::MiningConfig;
use basket_core::types::collections::SmallVec4;
use basket_core::types::identifiers::ItemId;

use crate::transactions::TransactionStore;

/// Itemset member list, kept in the miner's fixed extension order.
pub type ItemVec = SmallVec4<ItemId>;

/// A mined itemset with its support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itemset {
    /// Member items, sorted in the miner's fixed total order
    /// (lexicographic by label).
    pub items: ItemVec,
    /// Number of transactions that are supersets of this itemset.
    pub count: u64,
    /// Support ratio: `count / total transactions`.
    pub support: f64,
}

impl Itemset {
    /// Create an itemset from a member list and its transaction count.
    pub fn new(items: ItemVec, count: u64, total: usize) -> Self {
        let support = if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        };
        Self {
            items,
            count,
            support,
        }
    }

    /// Number of member items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the itemset has no members.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Resolve the member items to their labels.
    pub fn labels<'a>(&self, store: &'a TransactionStore) -> Vec<&'a str> {
        self.items.iter().map(|&i| store.resolve(i)).collect()
    }
}

/// Configuration for itemset mining.
#[derive(Debug, Clone)]
pub struct ItemsetParams {
    /// Minimum support ratio for a frequent itemset. Default: 0.1.
    pub min_support: f64,
    /// Minimum itemset size to report. Default: 1.
    pub min_len: usize,
    /// Maximum itemset size to explore. Default: 10.
    pub max_len: usize,
}

impl Default for ItemsetParams {
    fn default() -> Self {
        Self {
            min_support: 0.1,
            min_len: 1,
            max_len: 10,
        }
    }
}

impl ItemsetParams {
    /// Build params from the mining section of the config.
    pub fn from_config(config: &MiningConfig) -> Self {
        Self {
            min_support: config.effective_min_support(),
            min_len: config.effective_min_len(),
            max_len: config.effective_max_len(),
        }
    }
}
