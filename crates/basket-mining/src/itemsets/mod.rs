//! Frequent itemset mining: vertical (tid-list) enumeration with
//! anti-monotone pruning.

pub mod eclat;
pub mod tidlist;
pub mod types;

pub use eclat::mine;
pub use types::{ItemVec, Itemset, ItemsetParams};
