//! Rule derivation: every antecedent/consequent split of every frequent
//! itemset, kept when confidence meets the threshold.

use basket_core::types::collections::FxHashMap;

use super::types::{Rule, RuleParams};
use crate::itemsets::{ItemVec, Itemset};

/// Derive association rules from frequent itemsets.
///
/// For every itemset `F` with `|F| >= params.min_len`, every non-empty
/// proper subset `L` becomes a candidate antecedent with consequent
/// `F − L`. The candidate is emitted when
/// `support(F) / support(L) >= params.min_confidence`.
///
/// A split whose antecedent or consequent support is missing from
/// `itemsets` (pruned below the mining threshold) is skipped: its
/// confidence or lift is indeterminate, never computed as zero.
///
/// Pure computation; `itemsets` must share one fixed member order so
/// subset lookups match (the miner's output does).
pub fn generate(itemsets: &[Itemset], params: &RuleParams) -> Vec<Rule> {
    let min_len = params.min_len.max(2);

    let mut support: FxHashMap<ItemVec, f64> = FxHashMap::default();
    for set in itemsets {
        support.insert(set.items.clone(), set.support);
    }

    let mut rules = Vec::new();
    for set in itemsets {
        let members = set.items.len();
        if members < min_len {
            continue;
        }
        if members >= u64::BITS as usize {
            // Split masks are u64 bitmasks; itemsets this large cannot be
            // split exhaustively.
            continue;
        }

        let full: u64 = (1 << members) - 1;
        for mask in 1..full {
            let mut antecedent = ItemVec::new();
            let mut consequent = ItemVec::new();
            for (idx, &item) in set.items.iter().enumerate() {
                if mask & (1 << idx) != 0 {
                    antecedent.push(item);
                } else {
                    consequent.push(item);
                }
            }

            let antecedent_support = match support.get(&antecedent) {
                Some(&s) => s,
                None => continue,
            };
            let consequent_support = match support.get(&consequent) {
                Some(&s) => s,
                None => continue,
            };
            if antecedent_support <= 0.0 || consequent_support <= 0.0 {
                // A zero-coverage side makes confidence or lift indeterminate.
                continue;
            }

            let confidence = set.support / antecedent_support;
            if confidence >= params.min_confidence {
                rules.push(Rule {
                    antecedent,
                    consequent,
                    count: set.count,
                    support: set.support,
                    confidence,
                    lift: confidence / consequent_support,
                    coverage: antecedent_support,
                });
            }
        }
    }
    rules
}
