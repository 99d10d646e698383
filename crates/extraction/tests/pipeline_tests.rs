//! End-to-end pipeline tests over realistic captures

use chrono::{DateTime, Duration, TimeZone, Utc};
use domain::{ConversionType, IdeaEntry, TaskPriority, TaskType};
use extraction::{ExtractorConfig, IdeaToTaskConverter, Locale, TaskExtractor};
use proptest::prelude::*;

fn extractor() -> TaskExtractor {
    TaskExtractor::new(ExtractorConfig::default()).expect("default config is valid")
}

/// Wednesday, 2025-03-05 10:00 UTC
fn wednesday() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 5, 10, 0, 0).unwrap()
}

#[test]
fn call_john_by_friday() {
    let result = extractor().extract(
        "I need to call John about the project deadline by Friday.",
        wednesday(),
    );

    assert!(result.success);
    assert_eq!(result.task_count(), 1);

    let task = &result.extracted_tasks[0];
    assert_eq!(task.task_type, TaskType::Action);
    assert!(task.title.to_lowercase().contains("call john"));
    assert_eq!(
        task.due_date,
        Some(Utc.with_ymd_and_hms(2025, 3, 7, 23, 59, 59).unwrap())
    );
    assert!(task.tags.contains("john"));
}

#[test]
fn review_reports_tomorrow() {
    let result = extractor().extract(
        "Don't forget to review the quarterly reports tomorrow.",
        wednesday(),
    );

    assert_eq!(result.task_count(), 1);
    let task = &result.extracted_tasks[0];
    assert_eq!(task.task_type, TaskType::Action);
    assert_eq!(
        task.due_date,
        Some(Utc.with_ymd_and_hms(2025, 3, 6, 23, 59, 59).unwrap())
    );
}

#[test]
fn empty_input_is_a_structural_error() {
    let result = extractor().extract("", wednesday());
    assert!(!result.success);
    assert!(result.error_message.is_some());
    assert!(result.extracted_tasks.is_empty());
}

#[test]
fn meeting_with_the_client_next_week() {
    let result = extractor().extract(
        "We should schedule a meeting with the client next week.",
        wednesday(),
    );

    assert_eq!(result.task_count(), 1);
    let task = &result.extracted_tasks[0];
    assert_eq!(task.task_type, TaskType::Meeting);
    assert_eq!(
        task.due_date,
        Some(Utc.with_ymd_and_hms(2025, 3, 12, 23, 59, 59).unwrap())
    );
    // "client" is a stakeholder mention
    assert!(task.importance_score > 0.6);
}

#[test]
fn small_talk_yields_nothing() {
    let result = extractor().extract("The weather is nice.", wednesday());
    assert!(!result.success);
    assert!(result.extracted_tasks.is_empty());
    assert!(result.confidence_score.abs() < f32::EPSILON);
    assert!(!result.suggestions.is_empty());
}

#[test]
fn compound_capture_yields_independent_tasks() {
    let result = extractor().extract(
        "I need to finish the budget report by Friday and remind me to call Sarah tomorrow. \
         The invoice is due by Monday!",
        wednesday(),
    );

    assert!(result.success);
    assert_eq!(result.task_count(), 3);

    let types: Vec<TaskType> = result.extracted_tasks.iter().map(|t| t.task_type).collect();
    assert_eq!(types, vec![TaskType::Action, TaskType::Reminder, TaskType::Deadline]);

    // every task resolved a date, ordered as the clauses appeared
    assert!(result.extracted_tasks.iter().all(|t| t.due_date.is_some()));
    let spans: Vec<_> = result.extracted_tasks.iter().map(|t| t.source_span.start).collect();
    let mut sorted = spans.clone();
    sorted.sort_unstable();
    assert_eq!(spans, sorted);
}

#[test]
fn absurd_relative_offsets_do_not_abort_extraction() {
    let result = extractor().extract(
        "I need to call him in 100000000000 days. Revisit the plan in 99999999999999999 weeks.",
        wednesday(),
    );
    assert_eq!(result.task_count(), 1);
    assert!(result.extracted_tasks[0].due_date.is_none());
}

#[test]
fn urgency_and_priority_track_each_other_within_a_batch() {
    let result = extractor().extract(
        "We need to fix the outage, it's urgent. I should tidy my desk in 2 weeks.",
        wednesday(),
    );
    assert_eq!(result.task_count(), 2);

    let urgent = &result.extracted_tasks[0];
    let relaxed = &result.extracted_tasks[1];
    assert!(urgent.urgency_score > relaxed.urgency_score);
    assert!(urgent.priority >= relaxed.priority);
    assert_eq!(urgent.priority, TaskPriority::Urgent);
}

#[test]
fn end_of_day_follows_the_configured_timezone() {
    let config = ExtractorConfig::default()
        .with_timezone("Europe/Berlin")
        .expect("known timezone");
    let extractor = TaskExtractor::new(config).expect("valid config");

    let result = extractor.extract("I need to submit the report today", wednesday());
    // Berlin end of day on 2025-03-05 is 22:59:59 UTC
    assert_eq!(
        result.extracted_tasks[0].due_date,
        Some(Utc.with_ymd_and_hms(2025, 3, 5, 22, 59, 59).unwrap())
    );
}

#[test]
fn german_locale_resolves_german_date_phrases() {
    let config = ExtractorConfig::default().with_locale(Locale::German);
    let extractor = TaskExtractor::new(config).expect("valid config");

    // action markers stay English; the locale governs the date vocabulary
    let result = extractor.extract("I need to call the client übermorgen", wednesday());
    assert_eq!(result.task_count(), 1);
    assert_eq!(
        result.extracted_tasks[0].due_date,
        Some(Utc.with_ymd_and_hms(2025, 3, 7, 23, 59, 59).unwrap())
    );
}

#[test]
fn conversion_matches_direct_extraction_modulo_provenance() {
    let text = "I need to send the proposal to Acme Corp by Thursday";
    let captured_at = wednesday();

    let direct = extractor().extract(text, captured_at);
    let converter = IdeaToTaskConverter::new(extractor());
    let converted = converter.convert(&IdeaEntry::new(text, "chat", captured_at));

    assert!(converted.success);
    assert_eq!(converted.conversion_type, ConversionType::Task);
    assert_eq!(converted.tasks.len(), direct.extracted_tasks.len());
    for (converted_task, direct_task) in converted.tasks.iter().zip(&direct.extracted_tasks) {
        let mut stripped = converted_task.clone();
        stripped.provenance = None;
        assert_eq!(&stripped, direct_task);
        assert_eq!(converted_task.provenance.as_ref().expect("provenance set").source, "chat");
    }
}

#[test]
fn results_serialize_with_stable_field_names() {
    let result = extractor().extract("I need to call John by Friday", wednesday());
    let json = serde_json::to_value(&result).expect("serializable");

    assert_eq!(json["success"], true);
    assert!(json["confidence_score"].is_number());
    assert!(json["processing_time_ms"].is_number());
    let task = &json["extracted_tasks"][0];
    assert_eq!(task["task_type"], "action");
    assert!(task["due_date"].is_string());
    assert!(task["tags"].is_array());
}

proptest! {
    #[test]
    fn extraction_never_panics_and_scores_stay_bounded(text in ".{0,200}") {
        let result = extractor().extract(&text, wednesday());
        prop_assert!((0.0..=1.0).contains(&result.confidence_score));
        for task in &result.extracted_tasks {
            prop_assert!(task.scores_in_bounds());
            prop_assert!(task.priority_is_consistent());
            prop_assert!(!task.title.is_empty());
        }
    }

    #[test]
    fn extraction_is_deterministic_for_any_input(text in ".{0,200}") {
        let pipeline = extractor();
        let first = pipeline.extract(&text, wednesday());
        let second = pipeline.extract(&text, wednesday());
        prop_assert_eq!(first.extracted_tasks, second.extracted_tasks);
        prop_assert_eq!(first.success, second.success);
        prop_assert_eq!(first.suggestions, second.suggestions);
    }

    #[test]
    fn relative_dates_resolve_strictly_after_the_reference(
        offset_hours in 0i64..(24 * 365),
        phrase in prop::sample::select(vec!["by monday", "tomorrow", "next week", "by sunday"]),
    ) {
        let reference = wednesday() + Duration::hours(offset_hours);
        let result = extractor().extract(&format!("I need to finish this {phrase}"), reference);
        for task in &result.extracted_tasks {
            if let Some(due) = task.due_date {
                prop_assert!(due > reference);
            }
        }
    }
}
