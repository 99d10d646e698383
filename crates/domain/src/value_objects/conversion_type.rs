//! Conversion type value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target shape of an idea conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionType {
    /// Converted into one or more actionable tasks
    Task,
    /// Converted into a calendar event
    CalendarEvent,
    /// Converted into a project grouping several tasks
    Project,
}

impl ConversionType {
    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Task => "Task",
            Self::CalendarEvent => "Calendar Event",
            Self::Project => "Project",
        }
    }
}

impl fmt::Display for ConversionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&ConversionType::CalendarEvent).unwrap();
        assert_eq!(json, "\"calendar_event\"");
    }
}
