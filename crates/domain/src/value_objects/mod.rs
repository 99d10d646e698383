//! Value Objects - Immutable, identity-less domain primitives

mod conversion_type;
mod idea_category;
mod idea_priority;
mod priority;
mod source_span;
mod task_type;

pub use conversion_type::ConversionType;
pub use idea_category::IdeaCategory;
pub use idea_priority::IdeaPriority;
pub use priority::TaskPriority;
pub use source_span::SourceSpan;
pub use task_type::TaskType;
