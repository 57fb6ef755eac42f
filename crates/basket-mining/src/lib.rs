//! Basket mining engine: transaction store, itemset mining, rule generation,
//! and statistical rule filtering.
//!
//! Dependency chain: Transactions → Itemsets → Rules → Filters

pub mod filters;
pub mod itemsets;
pub mod pipeline;
pub mod rules;
pub mod transactions;

pub use filters::{
    filter_maximal, filter_significant, is_maximal, is_significant, Adjustment,
    SignificanceConfig,
};
pub use itemsets::{mine, Itemset, ItemsetParams};
pub use pipeline::{MiningPipeline, PipelineOutput};
pub use rules::{generate, Rule, RuleParams};
pub use transactions::{Transaction, TransactionStore};
