//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input text was empty or whitespace-only
    #[error("Input text is empty")]
    EmptyInput,

    /// A score fell outside the [0, 1] range
    #[error("Score '{name}' out of range: {value}")]
    InvalidScore { name: &'static str, value: f32 },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create an invalid score error
    pub const fn invalid_score(name: &'static str, value: f32) -> Self {
        Self::InvalidScore { name, value }
    }
}
