//! Domain layer for Taskmind
//!
//! Contains the core entities and value objects of the task extraction
//! pipeline. This layer has no I/O and defines the ubiquitous language:
//! tasks, ideas, extraction and conversion results.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
