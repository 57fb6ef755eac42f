//! String interning for item labels.
//!
//! Uses `lasso::ThreadedRodeo` for thread-safe interning during the load
//! phase, and `lasso::RodeoReader` for contention-free reads during mining.

use lasso::{RodeoReader, ThreadedRodeo};

use super::identifiers::ItemId;

/// Item label interner. The set of interned labels is the global item
/// vocabulary: every `ItemId` handed out resolves back to its label.
pub struct ItemInterner {
    inner: ThreadedRodeo,
}

impl ItemInterner {
    /// Create a new item interner.
    pub fn new() -> Self {
        Self {
            inner: ThreadedRodeo::default(),
        }
    }

    /// Intern an item label.
    pub fn intern(&self, label: &str) -> ItemId {
        ItemId::new(self.inner.get_or_intern(label))
    }

    /// Look up a previously interned label without inserting.
    pub fn get(&self, label: &str) -> Option<ItemId> {
        self.inner.get(label).map(ItemId::new)
    }

    /// Resolve an `ItemId` back to its label.
    pub fn resolve(&self, id: ItemId) -> &str {
        self.inner.resolve(&id.inner())
    }

    /// Number of distinct labels interned so far.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether no labels have been interned.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Freeze the interner into a read-only `RodeoReader`.
    pub fn into_reader(self) -> RodeoReader {
        self.inner.into_reader()
    }
}

impl Default for ItemInterner {
    fn default() -> Self {
        Self::new()
    }
}
