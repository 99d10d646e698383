//! Task entry entity - one inferred unit of actionable work

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value_objects::{SourceSpan, TaskPriority, TaskType};

/// Link from an extracted task back to the idea it was converted from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    /// Identifier of the source idea, when it had one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idea_id: Option<Uuid>,
    /// Where the idea was captured (voice note, chat, manual entry)
    pub source: String,
    /// When the idea was captured
    pub captured_at: DateTime<Utc>,
}

/// A task inferred from free-form text
///
/// Value object produced fresh per extraction call. The `priority` tier is
/// always the bucket of `urgency_score`, and `due_date` is only ever derived
/// from the reference time handed to the extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskEntry {
    /// Short actionable title derived from the matched clause, never empty
    pub title: String,
    /// Classification inferred from the matched action marker
    pub task_type: TaskType,
    /// Priority tier, bucketed from `urgency_score`
    pub priority: TaskPriority,
    /// Absolute due instant, when a temporal expression resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Lower-cased, deduplicated keywords and entities
    pub tags: BTreeSet<String>,
    /// Near-term pressure, in [0, 1]
    pub urgency_score: f32,
    /// Stakeholder/topical weight, in [0, 1]
    pub importance_score: f32,
    /// Offsets of the originating clause in the input text
    pub source_span: SourceSpan,
    /// Set when this task was converted from a captured idea
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<Provenance>,
}

impl TaskEntry {
    /// Attach idea provenance, consuming and returning the task
    #[must_use]
    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = Some(provenance);
        self
    }

    /// Whether the priority tier agrees with the urgency score bucket
    #[must_use]
    pub fn priority_is_consistent(&self) -> bool {
        self.priority == TaskPriority::from_urgency(self.urgency_score)
    }

    /// Whether both scores are inside [0, 1]
    #[must_use]
    pub fn scores_in_bounds(&self) -> bool {
        (0.0..=1.0).contains(&self.urgency_score) && (0.0..=1.0).contains(&self.importance_score)
    }
}
