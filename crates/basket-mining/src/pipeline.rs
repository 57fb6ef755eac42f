//! End-to-end mining pipeline.
//!
//! Stage chain: Transactions → Itemsets → Rules → Filters.
//! Every stage is a pure function of its predecessor's output; the
//! pipeline only sequences them under one config and reports counts.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use basket_core::config::BasketConfig;
use basket_core::errors::{ConfigError, PipelineError};
use basket_core::types::identifiers::ItemId;

use crate::filters::{filter_maximal, filter_significant, SignificanceConfig};
use crate::itemsets::{mine, Itemset, ItemsetParams};
use crate::rules::{generate, Rule, RuleParams};
use crate::transactions::TransactionStore;

/// A mined itemset with resolved labels, ready for tabular display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsetRecord {
    pub items: Vec<String>,
    pub count: u64,
    pub support: f64,
}

/// A surviving rule with resolved labels and all metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleRecord {
    pub antecedent: Vec<String>,
    pub consequent: Vec<String>,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
    pub coverage: f64,
}

/// Result of a full pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput {
    /// Number of transactions loaded.
    pub transactions: usize,
    /// Number of distinct items in the vocabulary.
    pub distinct_items: usize,
    /// Frequent itemsets, in the miner's deterministic order.
    pub itemsets: Vec<ItemsetRecord>,
    /// Rules surviving both filters.
    pub rules: Vec<RuleRecord>,
    /// Candidate rules before filtering.
    pub generated: usize,
    /// Rules removed by the significance filter.
    pub insignificant: usize,
    /// Rules removed by the maximality filter.
    pub non_maximal: usize,
}

/// Sequences the mining stages under a single configuration.
pub struct MiningPipeline {
    config: BasketConfig,
}

impl MiningPipeline {
    /// Create a pipeline from an explicit config.
    pub fn new(config: BasketConfig) -> Self {
        Self { config }
    }

    /// Create a pipeline from the layered config found at `root`.
    pub fn from_root(root: &Path) -> Result<Self, ConfigError> {
        Ok(Self::new(BasketConfig::load(root)?))
    }

    /// The effective configuration.
    pub fn config(&self) -> &BasketConfig {
        &self.config
    }

    /// Run the full chain over raw `(transaction_id, item)` pairs.
    ///
    /// A run that generates no candidate rules is a defined empty result:
    /// the filters are skipped rather than surfacing their empty-input
    /// error.
    pub fn run<I, S>(&self, records: I) -> Result<PipelineOutput, PipelineError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let store = TransactionStore::load(records)?;
        info!(
            transactions = store.len(),
            distinct_items = store.vocabulary_len(),
            "transaction store loaded"
        );

        let itemsets = mine(&store, &ItemsetParams::from_config(&self.config.mining));
        info!(itemsets = itemsets.len(), "frequent itemsets mined");

        let rules = generate(&itemsets, &RuleParams::from_config(&self.config.rules));
        info!(rules = rules.len(), "candidate rules generated");

        if rules.is_empty() {
            return Ok(Self::output(&store, &itemsets, &[], 0, 0, 0));
        }

        let significance = SignificanceConfig::from_config(&self.config.filters);
        let significant = filter_significant(&rules, &store, &significance)?;
        let insignificant = rules.len() - significant.len();
        info!(
            kept = significant.len(),
            dropped = insignificant,
            "significance filter applied"
        );

        let maximal = if significant.is_empty() {
            Vec::new()
        } else {
            filter_maximal(&significant)?
        };
        let non_maximal = significant.len() - maximal.len();
        info!(
            kept = maximal.len(),
            dropped = non_maximal,
            "maximality filter applied"
        );

        Ok(Self::output(
            &store,
            &itemsets,
            &maximal,
            rules.len(),
            insignificant,
            non_maximal,
        ))
    }

    fn output(
        store: &TransactionStore,
        itemsets: &[Itemset],
        rules: &[Rule],
        generated: usize,
        insignificant: usize,
        non_maximal: usize,
    ) -> PipelineOutput {
        let resolve = |items: &[ItemId]| {
            items
                .iter()
                .map(|&i| store.resolve(i).to_owned())
                .collect::<Vec<_>>()
        };
        PipelineOutput {
            transactions: store.len(),
            distinct_items: store.vocabulary_len(),
            itemsets: itemsets
                .iter()
                .map(|set| ItemsetRecord {
                    items: resolve(&set.items),
                    count: set.count,
                    support: set.support,
                })
                .collect(),
            rules: rules
                .iter()
                .map(|rule| RuleRecord {
                    antecedent: resolve(&rule.antecedent),
                    consequent: resolve(&rule.consequent),
                    support: rule.support,
                    confidence: rule.confidence,
                    lift: rule.lift,
                    coverage: rule.coverage,
                })
                .collect(),
            generated,
            insignificant,
            non_maximal,
        }
    }
}
