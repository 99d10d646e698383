//! Task type value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of an extracted task
///
/// Inferred from the action marker that matched the clause. Defaults to
/// `Action` when the marker is ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    /// A general obligation ("need to", "have to", "must")
    #[default]
    Action,
    /// An explicit reminder request ("remind me to")
    Reminder,
    /// An appointment with other people ("schedule a meeting")
    Meeting,
    /// A dated commitment ("due by", "deadline")
    Deadline,
}

impl TaskType {
    /// Specificity rank used to break ties between markers in one clause.
    ///
    /// More specific types win: `Deadline > Meeting > Reminder > Action`.
    #[must_use]
    pub const fn specificity(&self) -> u8 {
        match self {
            Self::Deadline => 3,
            Self::Meeting => 2,
            Self::Reminder => 1,
            Self::Action => 0,
        }
    }

    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Reminder => "Reminder",
            Self::Meeting => "Meeting",
            Self::Deadline => "Deadline",
        }
    }

    /// Get all task types in descending specificity order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Deadline, Self::Meeting, Self::Reminder, Self::Action]
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
