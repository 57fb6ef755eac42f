//! ECLAT-style frequent itemset enumeration.
//!
//! Vertical representation: each item maps to the sorted list of
//! transaction indices containing it. A frequent prefix is extended with
//! items greater than all of its members in a fixed total order
//! (lexicographic by label), so every itemset is generated exactly once.
//! Candidates below the support threshold are pruned together with their
//! entire extension subtree (anti-monotonicity).

use rayon::prelude::*;

use basket_core::types::collections::FxHashMap;
use basket_core::types::identifiers::ItemId;

use super::tidlist::intersect;
use super::types::{ItemVec, Itemset, ItemsetParams};
use crate::transactions::TransactionStore;

/// Enumerate all itemsets with support ratio >= `params.min_support` and
/// size in `[params.min_len, params.max_len]`.
///
/// `min_len > max_len` yields an empty result, not an error. A
/// non-positive `min_support` admits every candidate, so the result is
/// the full powerset of the vocabulary up to `max_len`, combinatorially
/// large, the caller's responsibility.
///
/// The first-extension branches of the search are independent and are
/// mined in parallel; per-branch results are concatenated in branch
/// order, so the output order is deterministic.
pub fn mine(store: &TransactionStore, params: &ItemsetParams) -> Vec<Itemset> {
    let min_len = params.min_len.max(1);
    if min_len > params.max_len {
        return Vec::new();
    }
    let total = store.len();
    if total == 0 {
        return Vec::new();
    }

    let (items, tids) = frequent_single_items(store, params.min_support);

    let branches: Vec<Vec<Itemset>> = items
        .par_iter()
        .enumerate()
        .map(|(rank, &first)| {
            let mut out = Vec::new();
            let mut prefix = ItemVec::new();
            prefix.push(first);
            extend(
                &items,
                &tids,
                &mut prefix,
                &tids[rank],
                rank + 1,
                total,
                min_len,
                params,
                &mut out,
            );
            out
        })
        .collect();

    branches.into_iter().flatten().collect()
}

/// Build per-item tid-lists and keep the frequent items, sorted in the
/// fixed extension order.
fn frequent_single_items(
    store: &TransactionStore,
    min_support: f64,
) -> (Vec<ItemId>, Vec<Vec<u32>>) {
    let mut lists: FxHashMap<ItemId, Vec<u32>> = FxHashMap::default();
    for (tid, txn) in store.transactions().iter().enumerate() {
        for &item in txn.items() {
            // Outer loop runs in tid order, so each list stays sorted.
            lists.entry(item).or_default().push(tid as u32);
        }
    }

    let total = store.len() as f64;
    let mut entries: Vec<(ItemId, Vec<u32>)> = lists
        .into_iter()
        .filter(|(_, tids)| tids.len() as f64 / total >= min_support)
        .collect();
    entries.sort_by(|a, b| store.resolve(a.0).cmp(store.resolve(b.0)));
    entries.into_iter().unzip()
}

/// Depth-first prefix extension.
///
/// `next` is the first extension rank to try; every extension item ranks
/// strictly above all prefix members.
#[allow(clippy::too_many_arguments)]
fn extend(
    items: &[ItemId],
    tids: &[Vec<u32>],
    prefix: &mut ItemVec,
    prefix_tids: &[u32],
    next: usize,
    total: usize,
    min_len: usize,
    params: &ItemsetParams,
    out: &mut Vec<Itemset>,
) {
    if prefix.len() >= min_len {
        out.push(Itemset::new(
            prefix.clone(),
            prefix_tids.len() as u64,
            total,
        ));
    }
    if prefix.len() >= params.max_len {
        return;
    }
    for rank in next..items.len() {
        let candidate_tids = intersect(prefix_tids, &tids[rank]);
        if candidate_tids.len() as f64 / total as f64 >= params.min_support {
            prefix.push(items[rank]);
            extend(
                items,
                tids,
                prefix,
                &candidate_tids,
                rank + 1,
                total,
                min_len,
                params,
                out,
            );
            prefix.pop();
        }
    }
}
