//! Transaction store construction and per-item statistics.

use lasso::RodeoReader;

use basket_core::errors::LoadError;
use basket_core::types::collections::{BTreeMap, FxHashMap, FxHashSet};
use basket_core::types::identifiers::ItemId;
use basket_core::types::interning::ItemInterner;

use tracing::debug;

/// A single basket: an external transaction id plus its distinct items.
#[derive(Debug, Clone)]
pub struct Transaction {
    id: String,
    items: FxHashSet<ItemId>,
}

impl Transaction {
    /// The external transaction id as it appeared in the input.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The distinct items in this basket.
    pub fn items(&self) -> &FxHashSet<ItemId> {
        &self.items
    }

    /// Number of distinct items in this basket.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the basket has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether this basket contains the given item.
    pub fn contains(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    /// Whether this basket is a superset of all given items.
    pub fn contains_all(&self, items: &[ItemId]) -> bool {
        items.iter().all(|i| self.items.contains(i))
    }
}

/// An immutable, in-memory basket dataset.
///
/// Built once from raw `(transaction_id, item)` pairs; the transaction
/// sequence and item vocabulary are fixed for the whole mining phase.
#[derive(Debug)]
pub struct TransactionStore {
    vocabulary: RodeoReader,
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Group raw `(transaction_id, item)` pairs into transactions.
    ///
    /// Items are deduplicated within a transaction; transactions keep their
    /// first-seen order. Fails on an empty item label or transaction id.
    pub fn load<I, S>(records: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let interner = ItemInterner::new();
        let mut index: FxHashMap<String, usize> = FxHashMap::default();
        let mut transactions: Vec<Transaction> = Vec::new();

        for (record, (id, item)) in records.into_iter().enumerate() {
            let id = id.as_ref();
            let item = item.as_ref();
            if id.is_empty() {
                return Err(LoadError::EmptyTransactionId { record });
            }
            if item.is_empty() {
                return Err(LoadError::EmptyItemLabel {
                    record,
                    transaction_id: id.to_string(),
                });
            }

            let item_id = interner.intern(item);
            let slot = match index.get(id) {
                Some(&slot) => slot,
                None => {
                    let slot = transactions.len();
                    index.insert(id.to_string(), slot);
                    transactions.push(Transaction {
                        id: id.to_string(),
                        items: FxHashSet::default(),
                    });
                    slot
                }
            };
            transactions[slot].items.insert(item_id);
        }

        debug!(
            transactions = transactions.len(),
            items = interner.len(),
            "transaction store loaded"
        );

        Ok(Self {
            vocabulary: interner.into_reader(),
            transactions,
        })
    }

    /// Number of transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store holds no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Number of distinct items across all transactions.
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// The transactions in first-seen order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Look up the id of an item label, if it occurs in the dataset.
    pub fn item_id(&self, label: &str) -> Option<ItemId> {
        self.vocabulary.get(label).map(ItemId::new)
    }

    /// Resolve an `ItemId` back to its label.
    pub fn resolve(&self, item: ItemId) -> &str {
        self.vocabulary.resolve(&item.inner())
    }

    /// Support ratio of the single itemset `{item}` across all transactions.
    /// Unknown labels have frequency 0.
    pub fn item_frequency(&self, label: &str) -> f64 {
        match self.item_id(label) {
            Some(item) => self.frequency(item),
            None => 0.0,
        }
    }

    /// Support ratio of a single item by id.
    pub fn frequency(&self, item: ItemId) -> f64 {
        if self.transactions.is_empty() {
            return 0.0;
        }
        let count = self
            .transactions
            .iter()
            .filter(|t| t.contains(item))
            .count();
        count as f64 / self.transactions.len() as f64
    }

    /// Distribution of basket sizes: distinct item count → number of
    /// transactions with that many items.
    pub fn basket_size_distribution(&self) -> BTreeMap<usize, usize> {
        let mut dist = BTreeMap::new();
        for txn in &self.transactions {
            *dist.entry(txn.len()).or_insert(0) += 1;
        }
        dist
    }

    /// Per-item support ratios, sorted by descending frequency
    /// (ties broken by label for a stable order).
    pub fn item_frequencies(&self) -> Vec<(ItemId, f64)> {
        let mut counts: FxHashMap<ItemId, usize> = FxHashMap::default();
        for txn in &self.transactions {
            for &item in txn.items() {
                *counts.entry(item).or_insert(0) += 1;
            }
        }
        let total = self.transactions.len() as f64;
        let mut freqs: Vec<(ItemId, f64)> = counts
            .into_iter()
            .map(|(item, count)| (item, count as f64 / total))
            .collect();
        freqs.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| self.resolve(a.0).cmp(self.resolve(b.0)))
        });
        freqs
    }
}
