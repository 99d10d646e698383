//! Priority scorer - urgency and importance from lexical and temporal signals
//!
//! Urgency reflects how soon the task presses: the stronger of an urgency
//! keyword hit and the proximity of a resolved due date, with a baseline
//! for clauses carrying neither signal. Importance reflects who and what
//! the task concerns: stakeholder mentions, importance keywords, and how
//! early the clause appears in the capture. Both scores are clamped to
//! [0.0, 1.0] and deterministic for a fixed reference time.

use chrono::{DateTime, Utc};
use domain::TaskPriority;
use tracing::debug;

use crate::config::ExtractorConfig;

/// Stakeholder and project-ownership mentions that raise importance
const STAKEHOLDER_KEYWORDS: &[&str] = &[
    "client",
    "customer",
    "boss",
    "manager",
    "stakeholder",
    "board",
    "team",
    "investor",
    "project",
    "milestone",
    "deliverable",
];

/// Importance-signalling keywords, distinct from urgency
const IMPORTANCE_KEYWORDS: &[&str] = &["important", "critical", "key", "essential"];

/// Due dates within this horizon score maximum urgency
const IMMINENT_HOURS: f32 = 24.0;

/// Due dates beyond this horizon bottom out at [`DISTANT_URGENCY`]
const HORIZON_HOURS: f32 = 336.0;

/// Urgency floor for far-future due dates
const DISTANT_URGENCY: f32 = 0.3;

/// Urgency and importance for one clause
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClauseScores {
    pub urgency: f32,
    pub importance: f32,
}

impl ClauseScores {
    /// Priority tier implied by the urgency score
    #[must_use]
    pub fn priority(&self) -> TaskPriority {
        TaskPriority::from_urgency(self.urgency)
    }
}

/// Scores clauses for urgency and importance
#[derive(Debug)]
pub struct PriorityScorer<'a> {
    config: &'a ExtractorConfig,
}

impl<'a> PriorityScorer<'a> {
    #[must_use]
    pub const fn new(config: &'a ExtractorConfig) -> Self {
        Self { config }
    }

    /// Score one clause given its resolved due date, if any
    #[must_use]
    pub fn score(
        &self,
        clause_lower: &str,
        clause_index: usize,
        due_date: Option<DateTime<Utc>>,
        reference: DateTime<Utc>,
    ) -> ClauseScores {
        let urgency = self.urgency(clause_lower, due_date, reference);
        let importance = importance(clause_lower, clause_index);
        debug!(urgency, importance, clause = %clause_lower, "Scored clause");
        ClauseScores { urgency, importance }
    }

    /// Keyword urgency and date proximity compete; the stronger signal wins
    fn urgency(
        &self,
        clause_lower: &str,
        due_date: Option<DateTime<Utc>>,
        reference: DateTime<Utc>,
    ) -> f32 {
        let keyword = self
            .config
            .urgency_keywords
            .iter()
            .filter(|(word, _)| clause_lower.contains(word.as_str()))
            .map(|(_, weight)| *weight)
            .fold(0.0_f32, f32::max);

        let proximity = due_date.map_or(0.0, |due| date_proximity(due, reference));

        let signal = keyword.max(proximity);
        if signal > 0.0 {
            signal.clamp(0.0, 1.0)
        } else {
            self.config.baseline_urgency
        }
    }
}

/// Urgency contribution of a due date relative to the reference time
///
/// Overdue and imminent (within 24 hours) dates score 1.0, then urgency
/// decays linearly to [`DISTANT_URGENCY`] at the two-week horizon.
fn date_proximity(due: DateTime<Utc>, reference: DateTime<Utc>) -> f32 {
    let minutes = (due - reference).num_minutes();
    if minutes <= 0 {
        return 1.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let hours = minutes as f32 / 60.0;
    if hours <= IMMINENT_HOURS {
        1.0
    } else if hours >= HORIZON_HOURS {
        DISTANT_URGENCY
    } else {
        let span = HORIZON_HOURS - IMMINENT_HOURS;
        1.0 - (hours - IMMINENT_HOURS) / span * (1.0 - DISTANT_URGENCY)
    }
}

/// Importance from stakeholder mentions, keywords, and clause position
fn importance(clause_lower: &str, clause_index: usize) -> f32 {
    let mut score = 0.4_f32;

    if STAKEHOLDER_KEYWORDS
        .iter()
        .any(|word| clause_lower.contains(word))
    {
        score += 0.25;
    }
    if IMPORTANCE_KEYWORDS
        .iter()
        .any(|word| clause_lower.contains(word))
    {
        score += 0.2;
    }

    // earlier clauses tend to carry what the author cared about most
    #[allow(clippy::cast_precision_loss)]
    let position_bonus = (0.1 - 0.02 * clause_index as f32).max(0.0);
    score += position_bonus;

    score.clamp(0.0, 1.0)
}
