//! Task extractor - the pipeline orchestrator
//!
//! Runs normalize, match, resolve, score, tag, and aggregate over one piece
//! of text. The whole pipeline is a pure function of the input text, the
//! caller-supplied reference time, and the configured locale; only the
//! reported processing time touches the wall clock.

use std::collections::BTreeSet;
use std::time::Instant;

use chrono::{DateTime, Utc};
use domain::{ExtractionResult, TaskEntry};
use tracing::{debug, instrument};

use crate::config::ExtractorConfig;
use crate::confidence::{ConfidenceAggregator, DateSignal};
use crate::dates::DueDateResolver;
use crate::error::ExtractionError;
use crate::matcher::ActionPatternMatcher;
use crate::normalizer::TextNormalizer;
use crate::scoring::PriorityScorer;
use crate::tags::TagExtractor;

/// Words that announce a deadline even when the date itself fails to parse
const TEMPORAL_CUES: &[&str] = &["by ", "until ", "due "];

/// Titles with fewer words than this read as vague
const MIN_TITLE_WORDS: usize = 3;

/// Deterministic task extraction over free-form text
#[derive(Debug)]
pub struct TaskExtractor {
    config: ExtractorConfig,
    normalizer: TextNormalizer,
    matcher: ActionPatternMatcher,
    resolver: DueDateResolver,
}

impl TaskExtractor {
    /// Build an extractor from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::Configuration`] when the configuration is
    /// internally inconsistent.
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractionError> {
        config.validate()?;
        let matcher = ActionPatternMatcher::new(config.max_title_length);
        let resolver = DueDateResolver::new(config.timezone, config.locale);
        Ok(Self {
            config,
            normalizer: TextNormalizer::new(),
            matcher,
            resolver,
        })
    }

    /// Extract tasks from `text`, defaulting the reference time to now
    ///
    /// Boundary entry point for callers that do not care about
    /// reproducibility; [`Self::extract`] with an explicit reference is the
    /// deterministic path.
    #[must_use]
    pub fn extract_tasks_from_text(
        &self,
        text: &str,
        reference: Option<DateTime<Utc>>,
    ) -> ExtractionResult {
        self.extract(text, reference.unwrap_or_else(Utc::now))
    }

    /// Extract tasks from `text`, resolving dates against `reference`
    ///
    /// Structural failures (empty input) are reported inside the result
    /// rather than as an error; callers always get a serializable outcome.
    #[must_use]
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn extract(&self, text: &str, reference: DateTime<Utc>) -> ExtractionResult {
        let started = Instant::now();

        let clauses = match self.normalizer.normalize(text) {
            Ok(clauses) => clauses,
            Err(error) => {
                return ExtractionResult::structural_error(error.to_string(), elapsed_ms(started));
            }
        };

        let scorer = PriorityScorer::new(&self.config);
        let aggregator = ConfidenceAggregator::new(&self.config);
        let tagger = TagExtractor::new(self.config.max_tags);

        let mut tasks = Vec::new();
        let mut confidences = Vec::new();

        for clause in &clauses {
            let Some(action) = self.matcher.match_clause(clause) else {
                continue;
            };

            let due_date = self.resolver.resolve(&clause.lower, reference);
            let date_signal = match due_date {
                Some(_) => DateSignal::Resolved,
                None if has_temporal_cue(&clause.lower) => DateSignal::Malformed,
                None => DateSignal::Absent,
            };

            let scores = scorer.score(&clause.lower, clause.index, due_date, reference);
            let tags: BTreeSet<String> =
                tagger.extract(&clause.text, &clause.lower).into_iter().collect();

            confidences.push(aggregator.task_confidence(
                action.strength,
                date_signal,
                scores.urgency,
                scores.importance,
            ));
            tasks.push(TaskEntry {
                title: action.title,
                task_type: action.task_type,
                priority: scores.priority(),
                due_date,
                tags,
                urgency_score: scores.urgency,
                importance_score: scores.importance,
                source_span: clause.span,
                provenance: None,
            });
        }

        let confidence = ConfidenceAggregator::overall(&confidences);
        let suggestions = self.suggestions(&tasks, confidence);
        debug!(
            tasks = tasks.len(),
            confidence,
            "Extraction completed"
        );
        ExtractionResult::completed(
            tasks,
            confidence,
            self.config.confidence_floor,
            suggestions,
            elapsed_ms(started),
        )
    }

    /// Actionable hints for improving a weak capture
    fn suggestions(&self, tasks: &[TaskEntry], confidence: f32) -> Vec<String> {
        let mut suggestions = Vec::new();

        if tasks.is_empty() {
            suggestions.push(
                "No actionable items found; try an explicit phrasing like 'need to' or 'remind me to'"
                    .to_string(),
            );
            return suggestions;
        }

        let undated = tasks.iter().filter(|t| t.due_date.is_none()).count();
        if undated > 0 {
            suggestions.push(format!(
                "{undated} task(s) have no due date; add a timeframe like 'by Friday' to schedule them"
            ));
        }

        let vague = tasks
            .iter()
            .filter(|t| t.title.split_whitespace().count() < MIN_TITLE_WORDS)
            .count();
        if vague > 0 {
            suggestions.push(format!(
                "{vague} task title(s) are very short; more detail makes tasks easier to act on"
            ));
        }

        if confidence < self.config.confidence_floor {
            suggestions.push(
                "Extraction confidence is low; consider rephrasing with clearer action words"
                    .to_string(),
            );
        }
        suggestions
    }
}

fn has_temporal_cue(clause_lower: &str) -> bool {
    TEMPORAL_CUES.iter().any(|cue| clause_lower.contains(cue))
        || clause_lower.ends_with(" due")
        || clause_lower.contains("deadline")
}

#[allow(clippy::cast_precision_loss)]
fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use domain::{TaskPriority, TaskType};

    fn extractor() -> TaskExtractor {
        TaskExtractor::new(ExtractorConfig::default()).unwrap()
    }

    /// Wednesday, 2025-03-05 10:00 UTC
    fn wednesday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 5, 10, 0, 0).unwrap()
    }

    #[test]
    fn empty_input_reports_structural_error() {
        let result = extractor().extract("   ", wednesday());
        assert!(!result.success);
        assert_eq!(result.error_message.as_deref(), Some("Input text is empty"));
        assert!(result.extracted_tasks.is_empty());
    }

    #[test]
    fn non_actionable_text_completes_without_tasks() {
        let result = extractor().extract("What a lovely sunny afternoon", wednesday());
        assert!(!result.success);
        assert!(result.error_message.is_none());
        assert!(result.extracted_tasks.is_empty());
        assert!(result.confidence_score.abs() < f32::EPSILON);
        assert!(!result.suggestions.is_empty());
    }

    #[test]
    fn single_clause_extracts_one_task() {
        let result = extractor().extract("I need to call John by Friday", wednesday());
        assert!(result.success);
        assert_eq!(result.task_count(), 1);

        let task = &result.extracted_tasks[0];
        assert_eq!(task.task_type, TaskType::Action);
        assert_eq!(task.title, "Call John by Friday");
        assert_eq!(
            task.due_date,
            Some(Utc.with_ymd_and_hms(2025, 3, 7, 23, 59, 59).unwrap())
        );
        assert!(task.tags.contains("john"));
    }

    #[test]
    fn multiple_sentences_extract_multiple_tasks() {
        let result = extractor().extract(
            "I need to finish the report by Friday. Also remind me to call the client tomorrow.",
            wednesday(),
        );
        assert!(result.success);
        assert_eq!(result.task_count(), 2);
        assert_eq!(result.extracted_tasks[0].task_type, TaskType::Action);
        assert_eq!(result.extracted_tasks[1].task_type, TaskType::Reminder);
    }

    #[test]
    fn urgent_keyword_yields_urgent_priority() {
        let result = extractor().extract("We need to fix the server urgently, it's urgent", wednesday());
        assert!(result.success);
        assert_eq!(result.extracted_tasks[0].priority, TaskPriority::Urgent);
    }

    #[test]
    fn tasks_without_dates_produce_a_suggestion() {
        let result = extractor().extract("I need to water the plants", wednesday());
        assert_eq!(result.task_count(), 1);
        assert!(result.extracted_tasks[0].due_date.is_none());
        assert!(result
            .suggestions
            .iter()
            .any(|s| s.contains("no due date")));
    }

    #[test]
    fn source_spans_point_back_into_the_input() {
        let text = "Random chatter first. I need to send the invoice by Monday.";
        let result = extractor().extract(text, wednesday());
        let task = &result.extracted_tasks[0];
        let clause = task.source_span.slice_of(text).unwrap();
        assert!(clause.contains("send the invoice"));
    }

    #[test]
    fn explicit_reference_matches_the_deterministic_path() {
        let text = "I need to call John by Friday";
        let extractor = extractor();
        let via_option = extractor.extract_tasks_from_text(text, Some(wednesday()));
        let direct = extractor.extract(text, wednesday());
        assert_eq!(via_option.extracted_tasks, direct.extracted_tasks);
    }

    #[test]
    fn omitted_reference_resolves_against_now() {
        let before = Utc::now();
        let result = extractor().extract_tasks_from_text("remind me to stretch tomorrow", None);
        assert_eq!(result.task_count(), 1);
        // "tomorrow" relative to call time is always in the future
        assert!(result.extracted_tasks[0].due_date.unwrap() > before);
    }

    #[test]
    fn extraction_is_deterministic() {
        let text = "We must review the budget by Thursday and schedule a meeting with the team";
        let extractor = extractor();
        let first = extractor.extract(text, wednesday());
        let second = extractor.extract(text, wednesday());
        assert_eq!(first.extracted_tasks, second.extracted_tasks);
        assert!((first.confidence_score - second.confidence_score).abs() < f32::EPSILON);
    }

    #[test]
    fn every_task_upholds_score_invariants() {
        let result = extractor().extract(
            "I need to finish the report urgently. We should meet with the client. Don't forget to send the invoice by Friday.",
            wednesday(),
        );
        for task in &result.extracted_tasks {
            assert!(task.scores_in_bounds(), "{task:?}");
            assert!(task.priority_is_consistent(), "{task:?}");
            assert!(!task.title.is_empty());
        }
    }
}
