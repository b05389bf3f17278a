//! Axon Core - init-wizard orchestration
//!
//! This crate provides the data model, collaborator ports, and the
//! sequential orchestration for the `axon init` wizard, following a
//! ports-and-adapters split.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            axon-cli (CLI)               │
//! │      (builds and runs the wizard)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │              InitWizard                 │
//! │  inspect → select → resolve → collect   │
//! │        → confirm → generate             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Ports (Traits)                 │
//! │  Generator, Prompter, ProfileStore,     │
//! │  RuntimeInfo, Reporter                  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     axon-adapters (Infrastructure)      │
//! │  BuiltinGenerator, DialoguerPrompter,   │
//! │  FileProfileStore, StaticRuntime        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The wizard is strictly sequential: at most one collaborator call is
//! outstanding at any time, and the final outcome is produced exactly
//! once. User cancellation and a declined confirmation are successful
//! completions ([`WizardOutcome::Cancelled`] / [`WizardOutcome::Aborted`]),
//! not errors.

pub mod error;
pub mod options;
pub mod ports;
pub mod schema;
pub mod wizard;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::error::{GenerationError, PromptError, WizardError, WizardResult};
    pub use crate::options::{ForceMode, InitOptions, Metadata, WizardOutcome};
    pub use crate::ports::{
        GenerateRequest, Generator, ProfileStore, Prompter, Reporter, RuntimeInfo,
    };
    pub use crate::schema::{Question, QuestionKind};
    pub use crate::wizard::InitWizard;
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
