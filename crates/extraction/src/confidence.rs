//! Confidence aggregator - weighted per-task and overall confidence
//!
//! Per-task confidence is a weighted mean of three signals: the strength
//! of the action marker that produced the task, the state of its temporal
//! expression, and how well the urgency and importance scores agree.
//! Overall confidence for an extraction call is the arithmetic mean of
//! per-task confidences, or 0.0 when nothing was extracted.

use tracing::debug;

use crate::config::ExtractorConfig;

/// Outcome of due date resolution for one clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSignal {
    /// A temporal expression was found and resolved
    Resolved,
    /// The clause named no temporal expression
    Absent,
    /// A temporal expression was present but could not be resolved
    Malformed,
}

impl DateSignal {
    const fn weight(self) -> f32 {
        match self {
            Self::Resolved => 1.0,
            Self::Absent => 0.5,
            Self::Malformed => 0.0,
        }
    }
}

/// Combines per-clause signals into confidence scores
#[derive(Debug)]
pub struct ConfidenceAggregator<'a> {
    config: &'a ExtractorConfig,
}

impl<'a> ConfidenceAggregator<'a> {
    #[must_use]
    pub const fn new(config: &'a ExtractorConfig) -> Self {
        Self { config }
    }

    /// Confidence for one extracted task
    #[must_use]
    pub fn task_confidence(
        &self,
        marker_strength: f32,
        date_signal: DateSignal,
        urgency: f32,
        importance: f32,
    ) -> f32 {
        let agreement = 1.0 - (urgency - importance).abs() * 0.5;

        let weight_sum =
            self.config.marker_weight + self.config.date_weight + self.config.agreement_weight;
        if weight_sum <= 0.0 {
            return 0.0;
        }

        let weighted = self.config.marker_weight * marker_strength
            + self.config.date_weight * date_signal.weight()
            + self.config.agreement_weight * agreement;
        let confidence = (weighted / weight_sum).clamp(0.0, 1.0);
        debug!(confidence, marker_strength, ?date_signal, "Scored task confidence");
        confidence
    }

    /// Overall confidence for an extraction call
    #[must_use]
    pub fn overall(task_confidences: &[f32]) -> f32 {
        if task_confidences.is_empty() {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let mean = task_confidences.iter().sum::<f32>() / task_confidences.len() as f32;
        mean.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregator_config() -> ExtractorConfig {
        ExtractorConfig::default()
    }

    #[test]
    fn strong_marker_with_resolved_date_scores_high() {
        let config = aggregator_config();
        let confidence =
            ConfidenceAggregator::new(&config).task_confidence(1.0, DateSignal::Resolved, 0.8, 0.8);
        assert!(confidence > 0.9);
    }

    #[test]
    fn weak_marker_without_date_scores_moderate() {
        let config = aggregator_config();
        let confidence =
            ConfidenceAggregator::new(&config).task_confidence(0.6, DateSignal::Absent, 0.3, 0.3);
        assert!(confidence > 0.4);
        assert!(confidence < 0.8);
    }

    #[test]
    fn malformed_date_lowers_confidence_below_absent() {
        let config = aggregator_config();
        let aggregator = ConfidenceAggregator::new(&config);
        let malformed = aggregator.task_confidence(1.0, DateSignal::Malformed, 0.5, 0.5);
        let absent = aggregator.task_confidence(1.0, DateSignal::Absent, 0.5, 0.5);
        assert!(malformed < absent);
    }

    #[test]
    fn score_disagreement_lowers_confidence() {
        let config = aggregator_config();
        let aggregator = ConfidenceAggregator::new(&config);
        let agreeing = aggregator.task_confidence(1.0, DateSignal::Resolved, 0.7, 0.7);
        let disagreeing = aggregator.task_confidence(1.0, DateSignal::Resolved, 1.0, 0.2);
        assert!(agreeing > disagreeing);
    }

    #[test]
    fn confidence_stays_in_bounds() {
        let config = aggregator_config();
        let aggregator = ConfidenceAggregator::new(&config);
        for strength in [0.0, 0.6, 1.0] {
            for signal in [DateSignal::Resolved, DateSignal::Absent, DateSignal::Malformed] {
                let c = aggregator.task_confidence(strength, signal, 1.0, 0.0);
                assert!((0.0..=1.0).contains(&c));
            }
        }
    }

    #[test]
    fn overall_is_mean_of_task_confidences() {
        let overall = ConfidenceAggregator::overall(&[0.8, 0.6]);
        assert!((overall - 0.7).abs() < 1e-6);
    }

    #[test]
    fn overall_of_nothing_is_zero() {
        assert!(ConfidenceAggregator::overall(&[]).abs() < f32::EPSILON);
    }
}
