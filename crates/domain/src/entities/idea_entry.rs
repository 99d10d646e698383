//! Idea entry entity - a captured free-form idea

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value_objects::{IdeaCategory, IdeaPriority};

/// A captured idea awaiting conversion into actionable work
///
/// Consumed read-only by the converter; the pipeline never mutates or stores
/// ideas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaEntry {
    /// Identifier assigned by the capturing layer, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Raw text of the idea
    pub content: String,
    /// Where the idea came from (voice note, chat, manual entry)
    pub source: String,
    /// When the idea was captured
    pub captured_at: DateTime<Utc>,
    /// Coarse classification
    #[serde(default)]
    pub category: IdeaCategory,
    /// Owner-assigned priority
    #[serde(default)]
    pub priority: IdeaPriority,
}

impl IdeaEntry {
    /// Create an idea with the minimum required fields
    #[must_use]
    pub fn new(content: impl Into<String>, source: impl Into<String>, captured_at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            content: content.into(),
            source: source.into(),
            captured_at,
            category: IdeaCategory::default(),
            priority: IdeaPriority::default(),
        }
    }

    /// Attach an identifier
    #[must_use]
    pub const fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }
}
