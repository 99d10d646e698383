//! Action pattern matcher - detect action-bearing spans within a clause
//!
//! Uses a static, ordered lexicon of obligation/action markers grouped by
//! task type, matched case-insensitively with the Aho-Corasick algorithm.
//! A clause with no marker yields no candidate. When several markers match,
//! stronger markers beat weaker ones, then more specific task types beat
//! less specific ones, then the leftmost match wins.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use domain::TaskType;

use crate::normalizer::Clause;

/// One obligation/action marker in the lexicon
struct ActionMarker {
    phrase: &'static str,
    task_type: TaskType,
    /// Match strength: 1.0 for an exact multi-word phrase, 0.6 for a weak
    /// single-word cue that often appears in non-task prose
    strength: f32,
}

/// The marker lexicon, grouped by task type
static ACTION_MARKERS: LazyLock<Vec<ActionMarker>> = LazyLock::new(|| {
    vec![
        // Obligation phrases
        ActionMarker {
            phrase: "need to",
            task_type: TaskType::Action,
            strength: 1.0,
        },
        ActionMarker {
            phrase: "needs to",
            task_type: TaskType::Action,
            strength: 1.0,
        },
        ActionMarker {
            phrase: "have to",
            task_type: TaskType::Action,
            strength: 1.0,
        },
        ActionMarker {
            phrase: "has to",
            task_type: TaskType::Action,
            strength: 1.0,
        },
        ActionMarker {
            phrase: "don't forget to",
            task_type: TaskType::Action,
            strength: 1.0,
        },
        ActionMarker {
            phrase: "do not forget to",
            task_type: TaskType::Action,
            strength: 1.0,
        },
        ActionMarker {
            phrase: "remember to",
            task_type: TaskType::Action,
            strength: 1.0,
        },
        ActionMarker {
            phrase: "make sure to",
            task_type: TaskType::Action,
            strength: 1.0,
        },
        // Weak single-word cues
        ActionMarker {
            phrase: "must",
            task_type: TaskType::Action,
            strength: 0.6,
        },
        ActionMarker {
            phrase: "should",
            task_type: TaskType::Action,
            strength: 0.6,
        },
        ActionMarker {
            phrase: "let's",
            task_type: TaskType::Action,
            strength: 0.6,
        },
        // Explicit reminder requests
        ActionMarker {
            phrase: "remind me to",
            task_type: TaskType::Reminder,
            strength: 1.0,
        },
        ActionMarker {
            phrase: "reminder to",
            task_type: TaskType::Reminder,
            strength: 1.0,
        },
        // Meetings
        ActionMarker {
            phrase: "schedule a meeting",
            task_type: TaskType::Meeting,
            strength: 1.0,
        },
        ActionMarker {
            phrase: "set up a meeting",
            task_type: TaskType::Meeting,
            strength: 1.0,
        },
        ActionMarker {
            phrase: "arrange a meeting",
            task_type: TaskType::Meeting,
            strength: 1.0,
        },
        ActionMarker {
            phrase: "schedule a call",
            task_type: TaskType::Meeting,
            strength: 1.0,
        },
        ActionMarker {
            phrase: "meeting with",
            task_type: TaskType::Meeting,
            strength: 1.0,
        },
        ActionMarker {
            phrase: "meet with",
            task_type: TaskType::Meeting,
            strength: 0.6,
        },
        // Dated commitments
        ActionMarker {
            phrase: "due by",
            task_type: TaskType::Deadline,
            strength: 1.0,
        },
        ActionMarker {
            phrase: "due on",
            task_type: TaskType::Deadline,
            strength: 1.0,
        },
        ActionMarker {
            phrase: "is due",
            task_type: TaskType::Deadline,
            strength: 1.0,
        },
        ActionMarker {
            phrase: "are due",
            task_type: TaskType::Deadline,
            strength: 1.0,
        },
        ActionMarker {
            phrase: "submit by",
            task_type: TaskType::Deadline,
            strength: 1.0,
        },
        ActionMarker {
            phrase: "deadline",
            task_type: TaskType::Deadline,
            strength: 0.6,
        },
        ActionMarker {
            phrase: "due date",
            task_type: TaskType::Deadline,
            strength: 0.6,
        },
    ]
});

/// Pre-compiled Aho-Corasick automaton over the marker lexicon
static MARKER_AUTOMATON: LazyLock<AhoCorasick> = LazyLock::new(|| {
    let phrases: Vec<&str> = ACTION_MARKERS.iter().map(|m| m.phrase).collect();
    #[allow(clippy::expect_used)] // Infallible with valid static patterns
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(&phrases)
        .expect("Failed to build marker automaton")
});

/// Leading pronouns and filler stripped from derived titles
const TITLE_FILLERS: [&str; 6] = ["i", "we", "to", "please", "just", "let's"];

/// A matched action marker within a clause
#[derive(Debug, Clone, PartialEq)]
pub struct ActionMatch {
    /// Task type inferred from the winning marker
    pub task_type: TaskType,
    /// Strength of the winning marker (1.0 exact phrase, 0.6 weak cue)
    pub strength: f32,
    /// The marker phrase that won
    pub marker: &'static str,
    /// Cleaned task title derived from the clause
    pub title: String,
}

/// Detects action-bearing spans and derives task titles
#[derive(Debug, Clone, Copy)]
pub struct ActionPatternMatcher {
    max_title_length: usize,
}

impl ActionPatternMatcher {
    /// Create a matcher with the given title cap
    #[must_use]
    pub const fn new(max_title_length: usize) -> Self {
        Self { max_title_length }
    }

    /// Scan a clause for action markers, returning the winning match
    ///
    /// Returns `None` when the clause carries no marker; such clauses are
    /// not candidates and produce no task.
    #[must_use]
    pub fn match_clause(&self, clause: &Clause) -> Option<ActionMatch> {
        let text = clause.text.as_str();

        let best = MARKER_AUTOMATON
            .find_overlapping_iter(text)
            .filter(|m| on_word_boundaries(text, m.start(), m.end()))
            .max_by(|a, b| {
                let ma = &ACTION_MARKERS[a.pattern().as_usize()];
                let mb = &ACTION_MARKERS[b.pattern().as_usize()];
                ma.strength
                    .total_cmp(&mb.strength)
                    .then(ma.task_type.specificity().cmp(&mb.task_type.specificity()))
                    .then(b.start().cmp(&a.start()))
            })?;

        let marker = &ACTION_MARKERS[best.pattern().as_usize()];
        let title = self.derive_title(text, best.start(), best.end());
        if title.is_empty() {
            return None;
        }

        Some(ActionMatch {
            task_type: marker.task_type,
            strength: marker.strength,
            marker: marker.phrase,
            title,
        })
    }

    /// Derive a title from the clause, preferring the text after the marker
    fn derive_title(&self, clause_text: &str, marker_start: usize, marker_end: usize) -> String {
        let after = clause_text.get(marker_end..).unwrap_or_default();
        let mut title = self.clean_fragment(after);
        if title.is_empty() {
            let before = clause_text.get(..marker_start).unwrap_or_default();
            title = self.clean_fragment(before);
        }
        if title.is_empty() {
            title = self.clean_fragment(clause_text);
        }
        title
    }

    /// Strip fillers, collapse whitespace, capitalize and cap the length
    fn clean_fragment(&self, fragment: &str) -> String {
        let words: Vec<&str> = fragment
            .split_whitespace()
            .skip_while(|w| {
                TITLE_FILLERS.contains(&w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                    .to_lowercase()
                    .as_str())
            })
            .collect();

        let joined = words
            .join(" ")
            .trim_matches(|c: char| c.is_whitespace() || ",.;:!?".contains(c))
            .to_string();
        if joined.is_empty() {
            return String::new();
        }

        let capped: String = joined.chars().take(self.max_title_length).collect();
        let capped = capped.trim_end().to_string();
        capitalize_first(&capped)
    }
}

/// Check that a match starts and ends at word boundaries
///
/// Keeps "must" from matching inside "mustard" while preserving plain
/// substring semantics for phrases.
fn on_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let before_ok = start == 0
        || text[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
    let after_ok = end == text.len()
        || text[end..].chars().next().is_none_or(|c| !c.is_alphanumeric());
    before_ok && after_ok
}

/// Uppercase the first character of a fragment
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
