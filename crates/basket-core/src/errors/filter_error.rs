//! Rule filter errors.

use super::error_code::{self, BasketErrorCode};

/// Errors that can occur while filtering association rules.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("Cannot filter an empty rule set")]
    EmptyRuleSet,
}

impl BasketErrorCode for FilterError {
    fn error_code(&self) -> &'static str {
        error_code::EMPTY_RULE_SET
    }
}
