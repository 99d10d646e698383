//! Source span value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte offsets of a clause within the original input text
///
/// Carried on every extracted task for traceability. The span references the
/// text the caller passed in; it never owns a copy of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceSpan {
    /// Byte offset of the first character of the clause
    pub start: usize,
    /// Byte offset one past the last character of the clause
    pub end: usize,
}

impl SourceSpan {
    /// Create a new span
    ///
    /// # Errors
    ///
    /// Returns a validation error when `end < start`.
    pub fn new(start: usize, end: usize) -> Result<Self, crate::DomainError> {
        if end < start {
            return Err(crate::DomainError::ValidationError(format!(
                "span end {end} precedes start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Length of the span in bytes
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Resolve the span against the original text
    ///
    /// Returns `None` when the span is out of bounds or does not fall on
    /// character boundaries.
    #[must_use]
    pub fn slice_of<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end)
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
