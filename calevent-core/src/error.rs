//! Error types for calevent.

use thiserror::Error;

/// Errors that can occur while rendering or writing an event document.
#[derive(Error, Debug)]
pub enum CalEventError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid date for '{field}': {value:?}")]
    InvalidDate { field: &'static str, value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalEventError {
    /// True for errors raised by input checks, before any I/O happens.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CalEventError::Validation(_) | CalEventError::InvalidDate { .. }
        )
    }
}

/// Result type alias for calevent operations.
pub type CalEventResult<T> = Result<T, CalEventError>;
