//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the wizard needs from its collaborators.
//! The `axon-adapters` crate provides implementations.

use std::path::PathBuf;

use crate::error::{GenerationError, PromptError};
use crate::options::Metadata;
use crate::schema::Question;

/// Everything the generation engine needs for one run.
///
/// Owned values: the request is built once, handed to the engine, and
/// dropped with it.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// The confirmed metadata map, written verbatim as the descriptor.
    pub pkg: Metadata,
    /// `true` only when the force mode is `overriding`.
    pub overriding: bool,
    /// Target directory for all writes.
    pub cwd: PathBuf,
    /// Version string of the module runtime, stamped into the scaffold.
    pub runtime_version: String,
    /// Chosen license identifier.
    pub license: String,
    /// Resolved template name.
    pub template: String,
}

/// Port for the scaffold-generation engine.
///
/// Implemented by:
/// - `axon_adapters::generator::BuiltinGenerator` (production)
#[cfg_attr(test, mockall::automock)]
pub trait Generator: Send + Sync {
    /// Identifiers of the templates the engine can generate.
    fn available_templates(&self) -> Vec<String>;

    /// Identifiers of the licenses the engine can emit.
    fn available_licenses(&self) -> Vec<String>;

    /// Template-specific extra questions, mixed into the questionnaire.
    fn extra_schemas(&self, template: &str) -> Vec<Question>;

    /// Generate the scaffold. The only step in the whole wizard that
    /// writes to the filesystem.
    fn generate(&self, request: GenerateRequest) -> Result<(), GenerationError>;
}

/// Port for the interactive prompt engine.
///
/// Implemented by:
/// - `axon_adapters::prompter::DialoguerPrompter` (production)
#[cfg_attr(test, mockall::automock)]
pub trait Prompter: Send + Sync {
    /// Single-choice list prompt; returns the chosen label.
    fn select(&self, message: &str, choices: &[String]) -> Result<String, PromptError>;

    /// Yes/no prompt with a default answer.
    fn confirm(&self, message: &str, default: bool) -> Result<bool, PromptError>;

    /// Schema-driven multi-question flow. Fields present in `prefilled`
    /// are copied into the answers without being asked.
    fn questionnaire(
        &self,
        questions: &[Question],
        prefilled: &Metadata,
    ) -> Result<Metadata, PromptError>;
}

/// Port for the persisted user-profile store.
///
/// Implemented by:
/// - `axon_adapters::profile::FileProfileStore` (production)
/// - `axon_adapters::profile::MemoryProfileStore` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ProfileStore: Send + Sync {
    /// Look up a previously saved identity field.
    fn get(&self, key: &str) -> Option<String>;
}

/// Port for the runtime-version lookup.
///
/// Implemented by:
/// - `axon_adapters::runtime::StaticRuntime`
#[cfg_attr(test, mockall::automock)]
pub trait RuntimeInfo: Send + Sync {
    /// Version string of the module runtime the scaffold targets.
    fn version(&self) -> String;
}

/// Port for informational text shown to the user (the wizard's intro,
/// the confirmation payload, cancel/abort notices). Text only, never
/// structured; diagnostics go through `tracing` instead.
///
/// Implemented by the CLI crate on top of its output manager.
#[cfg_attr(test, mockall::automock)]
pub trait Reporter: Send + Sync {
    fn info(&self, msg: &str);
}
