//! Transaction load errors.

use super::error_code::{self, BasketErrorCode};

/// Errors that can occur while loading raw transaction records.
/// All variants are fatal: malformed input is surfaced immediately and
/// no recovery is attempted.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Record {record} for transaction {transaction_id} has an empty item label")]
    EmptyItemLabel {
        record: usize,
        transaction_id: String,
    },

    #[error("Record {record} has an empty transaction id")]
    EmptyTransactionId { record: usize },
}

impl BasketErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_INPUT
    }
}
