//! Request-scoped wizard state and the force-mode model.
//!
//! [`InitOptions`] is created by the caller, mutated in place as the
//! wizard walks its steps, and discarded at completion. No state here
//! outlives a single run.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The to-be-generated package descriptor: a key-to-value map built by
/// merging profile-derived defaults, questionnaire answers, and the
/// license/template choices. Immutable once confirmed.
///
/// `BTreeMap` keeps keys unique and the confirmation rendering stable.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// The template name meaning "no explicit choice was made".
pub const DEFAULT_TEMPLATE: &str = "default";

/// Conflict-handling strategy for a non-empty target directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForceMode {
    /// Overwrite existing files.
    Overriding,
    /// Keep existing files, only write missing ones.
    Skipping,
    /// Defined in the choice mapping but never offered in the visible
    /// list. Dispatches as a no-op; see [`crate::wizard::InitWizard`].
    Updating,
    /// User chose not to proceed (the `none` token).
    #[serde(rename = "none")]
    Cancel,
}

/// Labels offered by the conflict-resolution prompt. The first letter
/// of each label is the key into [`ForceMode::from_choice_label`].
pub const CONFLICT_CHOICES: [&str; 3] = [
    "Skip: keep existing files, and initialize other files.",
    "Override: override existing files.",
    "Cancel: cancel initializing.",
];

impl ForceMode {
    /// Map a conflict-prompt label to a force mode by its first letter
    /// (case-sensitive). `U` is accepted here even though no offered
    /// label starts with it.
    pub fn from_choice_label(label: &str) -> Option<Self> {
        match label.chars().next()? {
            'S' => Some(Self::Skipping),
            'O' => Some(Self::Overriding),
            'U' => Some(Self::Updating),
            'C' => Some(Self::Cancel),
            _ => None,
        }
    }

    /// The wire/config token for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overriding => "overriding",
            Self::Skipping => "skipping",
            Self::Updating => "updating",
            Self::Cancel => "none",
        }
    }
}

impl std::fmt::Display for ForceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options threaded through a single wizard run.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Working directory to initialize.
    pub cwd: PathBuf,
    /// Requested template name; `"default"` means "let the wizard pick".
    pub template: String,
    /// Pre-supplied conflict strategy. When set, the conflict prompt is
    /// skipped; metadata collection and confirmation still run.
    pub force: Option<ForceMode>,
    /// Whether `cwd` was empty at inspection time. Set by the wizard.
    pub empty: bool,
    /// The confirmed metadata map. Set by the wizard just before
    /// generation; `None` on every non-generated outcome.
    pub pkg: Option<Metadata>,
}

impl InitOptions {
    /// Options for initializing `cwd` with the default template.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            template: DEFAULT_TEMPLATE.to_string(),
            force: None,
            empty: false,
            pkg: None,
        }
    }

    /// Request a specific template.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Pre-supply a force mode, bypassing the conflict prompt.
    pub fn with_force(mut self, force: ForceMode) -> Self {
        self.force = Some(force);
        self
    }
}

/// Terminal state of a wizard run. Errors are reserved for directory
/// inspection and generation failures; everything else ends here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardOutcome {
    /// Files were written to disk.
    Generated,
    /// User chose Cancel at the conflict prompt.
    Cancelled,
    /// User declined the confirmation gate.
    Aborted,
}

// ── tests ─────────────────────────────────────────────────────────────────────
