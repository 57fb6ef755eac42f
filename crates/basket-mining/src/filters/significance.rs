//! Fisher exact significance test for association rules.
//!
//! Null hypothesis: antecedent and consequent occurrences are independent.
//! The one-sided (over-representation) p-value is the upper tail of the
//! hypergeometric distribution over the 2×2 contingency table of
//! transaction counts. No continuity correction.

use statrs::distribution::{Discrete, Hypergeometric};

use basket_core::config::FilterConfig;
use basket_core::errors::FilterError;

use super::adjustment::Adjustment;
use crate::rules::Rule;
use crate::transactions::TransactionStore;

/// 2×2 contingency table of transaction counts for one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContingencyTable {
    /// Transactions containing both antecedent and consequent.
    pub both: u64,
    /// Transactions containing the antecedent but not the consequent.
    pub antecedent_only: u64,
    /// Transactions containing the consequent but not the antecedent.
    pub consequent_only: u64,
    /// Transactions containing neither.
    pub neither: u64,
}

impl ContingencyTable {
    /// Count the table for a rule over the whole store.
    pub fn from_rule(rule: &Rule, store: &TransactionStore) -> Self {
        let mut table = Self {
            both: 0,
            antecedent_only: 0,
            consequent_only: 0,
            neither: 0,
        };
        for txn in store.transactions() {
            let lhs = txn.contains_all(&rule.antecedent);
            let rhs = txn.contains_all(&rule.consequent);
            match (lhs, rhs) {
                (true, true) => table.both += 1,
                (true, false) => table.antecedent_only += 1,
                (false, true) => table.consequent_only += 1,
                (false, false) => table.neither += 1,
            }
        }
        table
    }

    /// Total number of transactions.
    pub fn total(&self) -> u64 {
        self.both + self.antecedent_only + self.consequent_only + self.neither
    }

    /// Transactions containing the antecedent.
    pub fn antecedent_total(&self) -> u64 {
        self.both + self.antecedent_only
    }

    /// Transactions containing the consequent.
    pub fn consequent_total(&self) -> u64 {
        self.both + self.consequent_only
    }
}

/// One-sided Fisher exact p-value for over-representation of the
/// `both` cell.
///
/// `P[X >= both]` where `X ~ Hypergeometric(total, antecedent_total,
/// consequent_total)`. Degenerate tables (empty store, or a side that
/// never occurs) return 1.0: no evidence against independence.
pub fn fisher_exact_one_sided(table: &ContingencyTable) -> f64 {
    let population = table.total();
    let successes = table.antecedent_total();
    let draws = table.consequent_total();
    if population == 0 || successes == 0 || draws == 0 || table.both == 0 {
        return 1.0;
    }

    let dist = match Hypergeometric::new(population, successes, draws) {
        Ok(dist) => dist,
        Err(_) => return 1.0,
    };

    let upper = successes.min(draws);
    let tail: f64 = (table.both..=upper).map(|k| dist.pmf(k)).sum();
    tail.min(1.0)
}

/// Fisher exact p-value for a rule against the store it was mined from.
pub fn p_value(rule: &Rule, store: &TransactionStore) -> f64 {
    fisher_exact_one_sided(&ContingencyTable::from_rule(rule, store))
}

/// Whether the rule's p-value falls below `alpha` (no adjustment).
pub fn is_significant(rule: &Rule, store: &TransactionStore, alpha: f64) -> bool {
    p_value(rule, store) < alpha
}

/// Configuration for the significance filter.
#[derive(Debug, Clone)]
pub struct SignificanceConfig {
    /// Significance level for the Fisher exact test. Default: 0.05.
    pub alpha: f64,
    /// Multiple-testing adjustment. Default: none.
    pub adjustment: Adjustment,
}

impl Default for SignificanceConfig {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            adjustment: Adjustment::None,
        }
    }
}

impl SignificanceConfig {
    /// Build the filter config from the filters section of the config.
    /// Unknown adjustment names fall back to no adjustment; the config
    /// loader rejects them before they can reach this point.
    pub fn from_config(config: &FilterConfig) -> Self {
        Self {
            alpha: config.effective_alpha(),
            adjustment: Adjustment::from_name(config.effective_adjustment())
                .unwrap_or_default(),
        }
    }
}

/// Keep only the rules whose independence null is rejected.
///
/// Fails with `FilterError::EmptyRuleSet` on empty input.
pub fn filter_significant(
    rules: &[Rule],
    store: &TransactionStore,
    config: &SignificanceConfig,
) -> Result<Vec<Rule>, FilterError> {
    if rules.is_empty() {
        return Err(FilterError::EmptyRuleSet);
    }
    let p_values: Vec<f64> = rules.iter().map(|r| p_value(r, store)).collect();
    let keep = config.adjustment.reject_flags(&p_values, config.alpha);
    Ok(rules
        .iter()
        .zip(keep)
        .filter(|(_, keep)| *keep)
        .map(|(rule, _)| rule.clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itemsets::{mine, ItemsetParams};
    use crate::rules::{generate, RuleParams};

    fn store(baskets: &[&[&str]]) -> TransactionStore {
        let records: Vec<(String, String)> = baskets
            .iter()
            .enumerate()
            .flat_map(|(tid, items)| {
                items
                    .iter()
                    .map(move |item| (format!("t{tid}"), item.to_string()))
            })
            .collect();
        TransactionStore::load(records).unwrap()
    }

    fn rules_from(store: &TransactionStore, min_support: f64) -> Vec<Rule> {
        let sets = mine(
            store,
            &ItemsetParams {
                min_support,
                min_len: 1,
                max_len: 3,
            },
        );
        generate(
            &sets,
            &RuleParams {
                min_confidence: 0.0,
                min_len: 2,
            },
        )
    }

    #[test]
    fn test_fisher_perfect_association() {
        // a and b co-occur in 3 of 6 transactions and never apart:
        // P[X >= 3] = C(3,3)C(3,0)/C(6,3) = 1/20.
        let table = ContingencyTable {
            both: 3,
            antecedent_only: 0,
            consequent_only: 0,
            neither: 3,
        };
        let p = fisher_exact_one_sided(&table);
        assert!((p - 0.05).abs() < 1e-10);
    }

    #[test]
    fn test_fisher_partial_association() {
        // P[X >= 2] = (C(3,2)C(3,1) + C(3,3)C(3,0)) / C(6,3) = 10/20.
        let table = ContingencyTable {
            both: 2,
            antecedent_only: 1,
            consequent_only: 1,
            neither: 2,
        };
        let p = fisher_exact_one_sided(&table);
        assert!((p - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_fisher_saturated_table_is_one() {
        // Every transaction contains the antecedent: the tail covers the
        // whole distribution.
        let table = ContingencyTable {
            both: 2,
            antecedent_only: 1,
            consequent_only: 1,
            neither: 0,
        };
        let p = fisher_exact_one_sided(&table);
        assert!((p - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_fisher_degenerate_tables() {
        let empty = ContingencyTable {
            both: 0,
            antecedent_only: 0,
            consequent_only: 0,
            neither: 0,
        };
        assert_eq!(fisher_exact_one_sided(&empty), 1.0);

        let no_overlap = ContingencyTable {
            both: 0,
            antecedent_only: 3,
            consequent_only: 3,
            neither: 0,
        };
        assert_eq!(fisher_exact_one_sided(&no_overlap), 1.0);
    }

    #[test]
    fn test_is_significant_depends_on_alpha() {
        // p is 1/20 here, between the two alpha levels probed.
        let baskets: &[&[&str]] = &[
            &["a", "b"],
            &["a", "b"],
            &["a", "b"],
            &["c"],
            &["c"],
            &["c"],
        ];
        let store = store(baskets);
        let rules = rules_from(&store, 0.4);
        let rule = rules
            .iter()
            .find(|r| r.describe(&store) == "{a} => {b}")
            .unwrap();
        assert!((p_value(rule, &store) - 0.05).abs() < 1e-10);
        assert!(!is_significant(rule, &store, 0.01));
        assert!(is_significant(rule, &store, 0.1));
    }

    #[test]
    fn test_filter_significant_empty_input_errors() {
        let store = store(&[&["a"]]);
        let err = filter_significant(&[], &store, &SignificanceConfig::default());
        assert!(matches!(err, Err(FilterError::EmptyRuleSet)));
    }

    #[test]
    fn test_filter_significant_keeps_associated_pair() {
        // a,b always together in half of 20 transactions; c,d in the
        // other half. Both pairwise associations are extreme.
        let mut baskets: Vec<Vec<&str>> = Vec::new();
        for _ in 0..10 {
            baskets.push(vec!["a", "b"]);
        }
        for _ in 0..10 {
            baskets.push(vec!["c", "d"]);
        }
        let borrowed: Vec<&[&str]> = baskets.iter().map(|b| b.as_slice()).collect();
        let store = store(&borrowed);

        let rules = rules_from(&store, 0.4);
        let kept =
            filter_significant(&rules, &store, &SignificanceConfig::default()).unwrap();
        assert_eq!(kept.len(), rules.len());
        assert!(kept.iter().any(|r| r.describe(&store) == "{a} => {b}"));
    }

    #[test]
    fn test_filter_significant_drops_independent_pair() {
        // Every item occurs in 3 of 4 transactions and every pairwise
        // table is saturated, so p = 1 for all rules.
        let store = store(&[&["a", "b"], &["a", "b", "c"], &["b", "c"], &["a", "c"]]);
        let rules = rules_from(&store, 0.5);
        assert!(!rules.is_empty());
        let kept =
            filter_significant(&rules, &store, &SignificanceConfig::default()).unwrap();
        assert!(kept.is_empty());
    }

    #[test]
    fn test_bonferroni_is_stricter() {
        let mut baskets: Vec<Vec<&str>> = Vec::new();
        for _ in 0..4 {
            baskets.push(vec!["a", "b"]);
        }
        for _ in 0..4 {
            baskets.push(vec!["c"]);
        }
        let borrowed: Vec<&[&str]> = baskets.iter().map(|b| b.as_slice()).collect();
        let store = store(&borrowed);
        let rules = rules_from(&store, 0.4);
        let rule = rules
            .iter()
            .find(|r| r.describe(&store) == "{a} => {b}")
            .unwrap();

        // P[X >= 4] with N=8, K=4, n=4 is 1/70 ≈ 0.0143.
        let p = p_value(rule, &store);
        assert!((p - 1.0 / 70.0).abs() < 1e-10);

        let raw = SignificanceConfig {
            alpha: 0.05,
            adjustment: Adjustment::None,
        };
        let kept = filter_significant(&rules, &store, &raw).unwrap();
        assert!(kept.iter().any(|r| r.describe(&store) == "{a} => {b}"));

        // Bonferroni over two rules: bound 0.025, still kept; over a
        // simulated 10-rule batch the same p would be dropped.
        let flags = Adjustment::Bonferroni.reject_flags(&[p; 10], 0.05);
        assert!(flags.iter().all(|&f| !f));
    }
}
