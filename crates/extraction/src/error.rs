//! Extraction-layer errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the extraction layer
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Unknown IANA timezone name in the configuration
    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    /// Configuration value out of range
    #[error("Configuration error: {0}")]
    Configuration(String),
}
