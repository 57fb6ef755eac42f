//! Spur-based identifier for interned item labels.
//!
//! Wrapping the raw `lasso::Spur` keeps item keys from being confused
//! with any other interned value.

use lasso::Spur;
use serde::{Deserialize, Serialize};

/// Interned item label identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Spur);

impl ItemId {
    /// Create a new ID from a `Spur`.
    pub fn new(spur: Spur) -> Self {
        Self(spur)
    }

    /// Get the inner `Spur`.
    pub fn inner(self) -> Spur {
        self.0
    }
}

impl From<Spur> for ItemId {
    fn from(spur: Spur) -> Self {
        Self(spur)
    }
}

impl From<ItemId> for Spur {
    fn from(id: ItemId) -> Self {
        id.0
    }
}
