//! BasketErrorCode trait for structured error codes.

/// Trait for attaching stable error codes to basket errors.
/// Every error enum implements this so downstream consumers can switch
/// on a code string instead of parsing display messages.
pub trait BasketErrorCode {
    /// Returns the error code string (e.g., "INVALID_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn code_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const EMPTY_RULE_SET: &str = "EMPTY_RULE_SET";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
