//! Conversion result entity - outcome of an idea-to-task conversion

use serde::{Deserialize, Serialize};

use super::TaskEntry;
use crate::value_objects::ConversionType;

/// Result of converting a captured idea into actionable work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// True iff at least one task was produced
    pub success: bool,
    /// Converted tasks in document order, each carrying provenance
    pub tasks: Vec<TaskEntry>,
    /// What the idea was converted into
    pub conversion_type: ConversionType,
    /// Summary of the failure, when no tasks could be produced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ConversionResult {
    /// Build a successful conversion
    #[must_use]
    pub fn converted(tasks: Vec<TaskEntry>, conversion_type: ConversionType) -> Self {
        Self {
            success: !tasks.is_empty(),
            tasks,
            conversion_type,
            error_message: None,
        }
    }

    /// Build a failed conversion with an explanatory message
    #[must_use]
    pub fn failed(conversion_type: ConversionType, message: impl Into<String>) -> Self {
        Self {
            success: false,
            tasks: Vec::new(),
            conversion_type,
            error_message: Some(message.into()),
        }
    }
}
