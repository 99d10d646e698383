//! Extraction result entity - outcome of one extraction call

use serde::{Deserialize, Serialize};

use super::TaskEntry;

/// Result of a single `extract_tasks_from_text` call
///
/// `error_message` is set only for structural failures (empty input); a text
/// that simply contains no tasks is *not* an error and reports through
/// `success = false` plus `suggestions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// True iff at least one task was produced and confidence cleared the floor
    pub success: bool,
    /// Extracted tasks in document order of their source clauses
    pub extracted_tasks: Vec<TaskEntry>,
    /// Aggregate confidence for the whole call, in [0, 1]
    pub confidence_score: f32,
    /// Wall-clock duration of the call
    pub processing_time_ms: f64,
    /// Human-readable hints when extraction is weak or absent
    pub suggestions: Vec<String>,
    /// Set only for structural failures, never for "no tasks found"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ExtractionResult {
    /// Build the structural-failure result (empty/whitespace input)
    #[must_use]
    pub fn structural_error(message: impl Into<String>, processing_time_ms: f64) -> Self {
        Self {
            success: false,
            extracted_tasks: Vec::new(),
            confidence_score: 0.0,
            processing_time_ms,
            suggestions: Vec::new(),
            error_message: Some(message.into()),
        }
    }

    /// Build a completed (possibly weak) result
    #[must_use]
    pub fn completed(
        extracted_tasks: Vec<TaskEntry>,
        confidence_score: f32,
        confidence_floor: f32,
        suggestions: Vec<String>,
        processing_time_ms: f64,
    ) -> Self {
        let success = !extracted_tasks.is_empty() && confidence_score >= confidence_floor;
        Self {
            success,
            extracted_tasks,
            confidence_score,
            processing_time_ms,
            suggestions,
            error_message: None,
        }
    }

    /// Number of extracted tasks
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.extracted_tasks.len()
    }
}
