//! Error handling for the basket engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod filter_error;
pub mod load_error;
pub mod pipeline_error;

pub use config_error::ConfigError;
pub use error_code::BasketErrorCode;
pub use filter_error::FilterError;
pub use load_error::LoadError;
pub use pipeline_error::PipelineError;
