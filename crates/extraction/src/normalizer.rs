//! Text normalizer - clean and segment raw input into clauses
//!
//! Splits on sentence terminators and on the coordinating conjunctions that
//! typically separate independent actionable clauses. Clauses keep their
//! original casing (titles need it) and carry byte offsets into the original
//! text; a lowercased view is kept alongside for matching.

use domain::{DomainError, SourceSpan};
use tracing::debug;

/// Characters that end a sentence segment
const SENTENCE_TERMINATORS: [char; 5] = ['.', '!', '?', ';', '\n'];

/// Conjunctions that separate independent actionable clauses
const CLAUSE_CONJUNCTIONS: [&str; 2] = [" and ", " also "];

/// Clauses shorter than this (in bytes) carry no extractable signal
const MIN_CLAUSE_LEN: usize = 3;

/// One segment of input text, treated as a candidate task site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// Clause text in original casing, trimmed
    pub text: String,
    /// Lowercased view for case-insensitive matching
    pub lower: String,
    /// Byte offsets of `text` within the original input
    pub span: SourceSpan,
    /// Zero-based position among the extracted clauses
    pub index: usize,
}

/// Cleans and segments raw input into an ordered clause sequence
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Create a normalizer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Segment `text` into clauses with original-text offsets
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyInput`] for empty or whitespace-only
    /// input; this is the pipeline's only structural error.
    pub fn normalize(&self, text: &str) -> Result<Vec<Clause>, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::EmptyInput);
        }

        let mut clauses = Vec::new();
        for (start, end) in split_sentences(text) {
            for (cstart, cend) in split_conjunctions(text, start, end) {
                let Some((tstart, tend)) = trim_range(text, cstart, cend) else {
                    continue;
                };
                if tend - tstart < MIN_CLAUSE_LEN {
                    continue;
                }
                let clause_text = &text[tstart..tend];
                clauses.push(Clause {
                    text: clause_text.to_string(),
                    lower: clause_text.to_lowercase(),
                    span: SourceSpan {
                        start: tstart,
                        end: tend,
                    },
                    index: clauses.len(),
                });
            }
        }

        debug!(clause_count = clauses.len(), "Normalized input text");
        Ok(clauses)
    }
}

/// Byte ranges of sentence segments, terminators excluded
fn split_sentences(text: &str) -> Vec<(usize, usize)> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (idx, ch) in text.char_indices() {
        if SENTENCE_TERMINATORS.contains(&ch) {
            if idx > start {
                segments.push((start, idx));
            }
            start = idx + ch.len_utf8();
        }
    }
    if start < text.len() {
        segments.push((start, text.len()));
    }
    segments
}

/// Split one sentence segment at coordinating conjunctions
fn split_conjunctions(text: &str, start: usize, end: usize) -> Vec<(usize, usize)> {
    let mut parts = Vec::new();
    // ASCII lowercasing preserves byte offsets; the conjunctions are ASCII
    let lower = text[start..end].to_ascii_lowercase();
    let mut cursor = 0;

    loop {
        let next = CLAUSE_CONJUNCTIONS
            .iter()
            .filter_map(|sep| lower[cursor..].find(sep).map(|pos| (cursor + pos, sep.len())))
            .min_by_key(|(pos, _)| *pos);

        match next {
            Some((pos, sep_len)) => {
                parts.push((start + cursor, start + pos));
                cursor = pos + sep_len;
            }
            None => {
                parts.push((start + cursor, end));
                break;
            }
        }
    }
    parts
}

/// Shrink a range to exclude surrounding whitespace and stray commas
fn trim_range(text: &str, start: usize, end: usize) -> Option<(usize, usize)> {
    let slice = text.get(start..end)?;
    let trimmed_start = slice.trim_start_matches([' ', '\t', '\r', ',', '-']);
    let lead = slice.len() - trimmed_start.len();
    let trimmed = trimmed_start.trim_end_matches([' ', '\t', '\r', ',']);
    if trimmed.is_empty() {
        return None;
    }
    Some((start + lead, start + lead + trimmed.len()))
}
