//! Error types for summary generation.

use thiserror::Error;

/// Result type alias for summary operations.
pub type SummaryResult<T> = Result<T, SummaryError>;

/// Errors that can occur while producing a session summary.
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Summary API error: {0}")]
    Api(String),

    #[error("Response parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for SummaryError {
    fn from(err: config::ConfigError) -> Self {
        SummaryError::Config(err.to_string())
    }
}
