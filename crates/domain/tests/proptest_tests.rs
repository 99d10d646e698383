//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::{SourceSpan, TaskPriority};
use proptest::prelude::*;

mod priority_tests {
    use super::*;

    proptest! {
        #[test]
        fn bucketing_is_monotonic(a in 0.0f32..=1.0f32, b in 0.0f32..=1.0f32) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(TaskPriority::from_urgency(lo) <= TaskPriority::from_urgency(hi));
        }

        #[test]
        fn every_score_maps_to_a_tier(score in 0.0f32..=1.0f32) {
            let tier = TaskPriority::from_urgency(score);
            prop_assert!(TaskPriority::all().contains(&tier));
        }

        #[test]
        fn rank_orders_tiers(score in 0.0f32..=1.0f32) {
            let tier = TaskPriority::from_urgency(score);
            prop_assert!(tier.rank() <= TaskPriority::Urgent.rank());
        }
    }
}

mod source_span_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_spans_accepted(start in 0usize..1000, len in 0usize..1000) {
            let span = SourceSpan::new(start, start + len);
            prop_assert!(span.is_ok());
            prop_assert_eq!(span.unwrap().len(), len);
        }

        #[test]
        fn inverted_spans_rejected(start in 1usize..1000, shrink in 1usize..1000) {
            let end = start.saturating_sub(shrink);
            if end < start {
                prop_assert!(SourceSpan::new(start, end).is_err());
            }
        }

        #[test]
        fn slice_of_ascii_text_round_trips(text in "[a-z ]{1,80}", start in 0usize..40, len in 0usize..40) {
            let end = (start + len).min(text.len());
            let start = start.min(end);
            let span = SourceSpan::new(start, end).unwrap();
            // ASCII input, so every offset is a char boundary
            prop_assert_eq!(span.slice_of(&text), Some(&text[start..end]));
        }
    }
}
