//! Statistical and structural rule filters.
//!
//! Two independent, composable passes: a Fisher-exact significance test
//! against the independence null, and maximality pruning of rules implied
//! by a more general rule. Both produce a new, smaller collection rather
//! than editing entries in place.

pub mod adjustment;
pub mod maximality;
pub mod significance;

pub use adjustment::Adjustment;
pub use maximality::{filter_maximal, is_maximal};
pub use significance::{
    filter_significant, fisher_exact_one_sided, is_significant, ContingencyTable,
    SignificanceConfig,
};
