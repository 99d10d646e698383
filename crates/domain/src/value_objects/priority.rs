//! Task priority value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority tier of an extracted task
///
/// Derived from the urgency score via fixed buckets, so a higher urgency
/// score can never map to a lower tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    /// Can wait, nice to have
    Low,
    /// Default tier when no stronger signal is present
    #[default]
    Medium,
    /// Important, should be scheduled soon
    High,
    /// Needs immediate attention
    Urgent,
}

impl TaskPriority {
    /// Bucket an urgency score into a priority tier.
    ///
    /// Thresholds: `< 0.35` Low, `< 0.6` Medium, `< 0.85` High, else Urgent.
    /// Monotonic in the score by construction.
    #[must_use]
    pub fn from_urgency(score: f32) -> Self {
        if score < 0.35 {
            Self::Low
        } else if score < 0.6 {
            Self::Medium
        } else if score < 0.85 {
            Self::High
        } else {
            Self::Urgent
        }
    }

    /// Numeric rank, higher means more pressing
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
            Self::Urgent => 3,
        }
    }

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

    /// Get all priority tiers in ascending order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Low, Self::Medium, Self::High, Self::Urgent]
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl PartialOrd for TaskPriority {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TaskPriority {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}
