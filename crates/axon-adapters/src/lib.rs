//! Infrastructure adapters for Axon.
//!
//! This crate implements the ports defined in `axon-core::ports`.
//! It contains all external dependencies and I/O operations.

pub mod generator;
pub mod profile;
pub mod prompter;
pub mod runtime;

// Re-export commonly used adapters
pub use generator::BuiltinGenerator;
pub use profile::{FileProfileStore, MemoryProfileStore};
pub use prompter::DialoguerPrompter;
pub use runtime::StaticRuntime;
