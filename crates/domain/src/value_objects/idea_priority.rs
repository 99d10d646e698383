//! Idea priority value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority assigned to a captured idea by its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdeaPriority {
    /// Someday/maybe
    Low,
    /// Worth doing
    #[default]
    Medium,
    /// Should happen soon
    High,
    /// Drop everything
    Urgent,
}

impl IdeaPriority {
    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }
}

impl fmt::Display for IdeaPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_medium() {
        assert_eq!(IdeaPriority::default(), IdeaPriority::Medium);
    }
}
