//! Domain entities - Objects produced and consumed by the extraction pipeline

mod conversion_result;
mod extraction_result;
mod idea_entry;
mod task_entry;

pub use conversion_result::ConversionResult;
pub use extraction_result::ExtractionResult;
pub use idea_entry::IdeaEntry;
pub use task_entry::{Provenance, TaskEntry};
