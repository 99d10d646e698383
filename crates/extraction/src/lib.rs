//! Extraction layer - Turn free-form text into structured, scored tasks
//!
//! The pipeline is a pure function of (text, reference time, locale): it runs
//! synchronously, holds no state across calls beyond immutable lexicons, and
//! never reaches into storage or transport. Components, in pipeline order:
//! - [`normalizer`]: clean and segment raw input into clauses
//! - [`matcher`]: detect action-bearing spans via a marker lexicon
//! - [`dates`]: resolve temporal expressions against a reference time
//! - [`scoring`]: urgency and importance scores from keyword signals
//! - [`tags`]: salient keywords and entities as tags
//! - [`confidence`]: aggregate per-clause signals into one score
//! - [`extractor`]: the orchestrator
//! - [`converter`]: adapt captured ideas to the extractor

pub mod config;
pub mod confidence;
pub mod converter;
pub mod dates;
pub mod error;
pub mod extractor;
pub mod matcher;
pub mod normalizer;
pub mod scoring;
pub mod tags;

pub use config::{ExtractorConfig, Locale};
pub use converter::IdeaToTaskConverter;
pub use error::ExtractionError;
pub use extractor::TaskExtractor;
