//! In-memory transaction dataset: grouped, deduplicated, interned baskets.

pub mod store;

pub use store::{Transaction, TransactionStore};
