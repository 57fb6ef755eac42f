//! Maximality pruning: drop rules implied by a more general rule.

use basket_core::errors::FilterError;
use basket_core::types::identifiers::ItemId;

use crate::rules::Rule;

/// Whether `a` is a subset of `b`. Member lists are small, so a linear
/// containment scan beats building hash sets.
fn is_subset(a: &[ItemId], b: &[ItemId]) -> bool {
    a.iter().all(|item| b.contains(item))
}

/// Whether `a` is a proper subset of `b`.
fn is_proper_subset(a: &[ItemId], b: &[ItemId]) -> bool {
    a.len() < b.len() && is_subset(a, b)
}

/// Whether `general` makes `specific` redundant: a strictly smaller
/// antecedent, a consequent covering the specific one, and metrics at
/// least as strong.
fn generalizes(general: &Rule, specific: &Rule) -> bool {
    is_proper_subset(&general.antecedent, &specific.antecedent)
        && is_subset(&specific.consequent, &general.consequent)
        && general.support >= specific.support
        && general.confidence >= specific.confidence
}

/// Whether no other rule in `all` generalizes `rule`.
pub fn is_maximal(rule: &Rule, all: &[Rule]) -> bool {
    !all.iter().any(|other| generalizes(other, rule))
}

/// Remove every non-maximal rule, judged against the full input set.
///
/// Fails with `FilterError::EmptyRuleSet` on empty input. The operation
/// is idempotent: rules surviving one pass have no generalizer in the
/// input, hence none in any subset of it.
pub fn filter_maximal(rules: &[Rule]) -> Result<Vec<Rule>, FilterError> {
    if rules.is_empty() {
        return Err(FilterError::EmptyRuleSet);
    }
    Ok(rules
        .iter()
        .filter(|rule| is_maximal(rule, rules))
        .cloned()
        .collect())
}
