//! Tag extractor - topical tags from proper nouns and domain vocabulary
//!
//! Two passes over a clause: capitalized runs in the original-case text
//! (likely names of people, companies, or projects), then a curated list
//! of work-domain nouns in the lowercased text. Tags are lowercased,
//! deduplicated, and capped; proper nouns rank ahead of domain nouns
//! since they are the more specific signal.

use tracing::debug;

/// Work-domain nouns worth surfacing as tags
const DOMAIN_NOUNS: &[&str] = &[
    "deadline",
    "report",
    "proposal",
    "meeting",
    "budget",
    "presentation",
    "project",
    "invoice",
    "email",
    "campaign",
    "review",
];

/// Capitalized words that are not proper nouns
const CAPITALIZED_STOPWORDS: &[&str] = &[
    "i", "the", "a", "an", "we", "you", "he", "she", "it", "they", "my", "our", "this", "that",
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "tomorrow",
    "today",
];

/// Extracts lowercased topical tags from clauses
#[derive(Debug, Clone, Copy)]
pub struct TagExtractor {
    max_tags: usize,
}

impl TagExtractor {
    #[must_use]
    pub const fn new(max_tags: usize) -> Self {
        Self { max_tags }
    }

    /// Extract tags from a clause, most specific first
    #[must_use]
    pub fn extract(&self, text: &str, lower: &str) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();

        for run in capitalized_runs(text) {
            push_unique(&mut tags, run, self.max_tags);
        }

        let mut nouns: Vec<(usize, &str)> = DOMAIN_NOUNS
            .iter()
            .filter_map(|noun| first_word_occurrence(lower, noun).map(|pos| (pos, *noun)))
            .collect();
        nouns.sort_unstable_by_key(|(pos, _)| *pos);
        for (_, noun) in nouns {
            push_unique(&mut tags, noun.to_string(), self.max_tags);
        }

        debug!(?tags, clause = %text, "Extracted tags");
        tags
    }
}

fn push_unique(tags: &mut Vec<String>, tag: String, max_tags: usize) {
    if tags.len() < max_tags && !tags.contains(&tag) {
        tags.push(tag);
    }
}

/// Runs of consecutive capitalized words, lowercased and joined
///
/// The clause-initial word is skipped on its own since English capitalizes
/// it regardless of what it names; it still joins a run continued by the
/// next word.
fn capitalized_runs(text: &str) -> Vec<String> {
    let words: Vec<&str> = text
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .collect();

    let mut runs = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for (index, word) in words.iter().enumerate() {
        if is_proper_candidate(word) {
            current.push(word.to_lowercase());
            continue;
        }
        flush_run(&mut runs, &mut current, index);
    }
    flush_run(&mut runs, &mut current, words.len());
    runs
}

/// Close out the current run, discarding a lone clause-initial word
fn flush_run(runs: &mut Vec<String>, current: &mut Vec<String>, end_index: usize) {
    if current.is_empty() {
        return;
    }
    let start_index = end_index - current.len();
    let lone_initial = start_index == 0 && current.len() == 1;
    if !lone_initial {
        runs.push(current.join(" "));
    }
    current.clear();
}

fn is_proper_candidate(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_uppercase()
        && chars.all(char::is_lowercase)
        && !CAPITALIZED_STOPWORDS.contains(&word.to_lowercase().as_str())
}

/// First byte offset at which `needle` occurs as a whole word
fn first_word_occurrence(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .match_indices(needle)
        .find(|(idx, _)| {
            let before_ok = *idx == 0
                || haystack[..*idx]
                    .chars()
                    .next_back()
                    .is_none_or(|c| !c.is_alphanumeric());
            let end = idx + needle.len();
            let after_ok = end == haystack.len()
                || haystack[end..]
                    .chars()
                    .next()
                    .is_none_or(|c| !c.is_alphanumeric());
            before_ok && after_ok
        })
        .map(|(idx, _)| idx)
}
