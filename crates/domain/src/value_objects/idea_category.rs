//! Idea category value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse classification of a captured idea
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdeaCategory {
    /// Business strategy, sales, operations
    Business,
    /// Engineering and technical work
    Technical,
    /// Creative output (writing, design)
    Creative,
    /// Workflow and personal-effectiveness ideas
    Productivity,
    /// Private, non-work matters
    Personal,
    /// No confident classification
    #[default]
    Other,
}

impl IdeaCategory {
    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Business => "Business",
            Self::Technical => "Technical",
            Self::Creative => "Creative",
            Self::Productivity => "Productivity",
            Self::Personal => "Personal",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for IdeaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
