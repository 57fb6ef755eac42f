//! Association rule derivation from frequent itemsets.

pub mod generator;
pub mod types;

pub use generator::generate;
pub use types::{Rule, RuleParams};
