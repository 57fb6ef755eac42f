//! Core types for association rules.

use serde::{Deserialize, Serialize};

use basket_core::config::RuleConfig;

use crate::itemsets::ItemVec;
use crate::transactions::TransactionStore;

/// An association rule `antecedent → consequent` with its metrics.
///
/// Antecedent and consequent are disjoint, non-empty, and together form
/// the frequent itemset the rule was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub antecedent: ItemVec,
    pub consequent: ItemVec,
    /// Number of transactions containing antecedent ∪ consequent.
    pub count: u64,
    /// Support ratio of antecedent ∪ consequent.
    pub support: f64,
    /// `support(antecedent ∪ consequent) / support(antecedent)`.
    pub confidence: f64,
    /// `confidence / support(consequent)`.
    pub lift: f64,
    /// Support ratio of the antecedent alone.
    pub coverage: f64,
}

impl Rule {
    /// Render the rule as `{lhs} => {rhs}` using resolved labels.
    pub fn describe(&self, store: &TransactionStore) -> String {
        let side = |items: &ItemVec| {
            items
                .iter()
                .map(|&i| store.resolve(i))
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!(
            "{{{}}} => {{{}}}",
            side(&self.antecedent),
            side(&self.consequent)
        )
    }
}

/// Configuration for rule generation.
#[derive(Debug, Clone)]
pub struct RuleParams {
    /// Minimum confidence for an emitted rule. Default: 0.8.
    pub min_confidence: f64,
    /// Minimum size of an itemset to split into rules. Default: 2.
    pub min_len: usize,
}

impl Default for RuleParams {
    fn default() -> Self {
        Self {
            min_confidence: 0.8,
            min_len: 2,
        }
    }
}

impl RuleParams {
    /// Build params from the rules section of the config.
    pub fn from_config(config: &RuleConfig) -> Self {
        Self {
            min_confidence: config.effective_min_confidence(),
            min_len: config.effective_min_len(),
        }
    }
}
