//! Pipeline errors.

use super::{BasketErrorCode, ConfigError, FilterError, LoadError};

/// Errors that can occur during a mining pipeline run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl BasketErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Load(e) => e.error_code(),
            Self::Filter(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
