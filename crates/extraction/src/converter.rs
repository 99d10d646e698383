//! Idea-to-task converter - adapt captured ideas to the extraction pipeline
//!
//! Thin adapter over [`TaskExtractor`]: it hands the idea's content to the
//! extractor with the idea's capture time as the reference instant, then
//! stamps every resulting task with provenance back to the idea. All
//! analysis lives in the pipeline; this component only translates shapes.

use domain::{ConversionResult, ConversionType, IdeaEntry, Provenance};
use tracing::{debug, instrument};

use crate::extractor::TaskExtractor;

/// Converts captured ideas into provenance-tagged tasks
#[derive(Debug)]
pub struct IdeaToTaskConverter {
    extractor: TaskExtractor,
}

impl IdeaToTaskConverter {
    /// Build a converter over an existing extractor
    #[must_use]
    pub const fn new(extractor: TaskExtractor) -> Self {
        Self { extractor }
    }

    /// Convert one idea into tasks
    ///
    /// Dates in the idea text resolve against `idea.captured_at`, not the
    /// wall clock, so converting an old idea twice yields the same tasks.
    #[must_use]
    #[instrument(skip(self, idea), fields(source = %idea.source))]
    pub fn convert(&self, idea: &IdeaEntry) -> ConversionResult {
        let extraction = self.extractor.extract(&idea.content, idea.captured_at);

        if extraction.extracted_tasks.is_empty() {
            let message = extraction
                .error_message
                .or_else(|| extraction.suggestions.into_iter().next())
                .unwrap_or_else(|| "No actionable items found in idea".to_string());
            debug!(%message, "Idea conversion produced no tasks");
            return ConversionResult::failed(ConversionType::Task, message);
        }

        let provenance = Provenance {
            idea_id: idea.id,
            source: idea.source.clone(),
            captured_at: idea.captured_at,
        };
        let tasks = extraction
            .extracted_tasks
            .into_iter()
            .map(|task| task.with_provenance(provenance.clone()))
            .collect();
        ConversionResult::converted(tasks, ConversionType::Task)
    }
}
