//! Unified error handling for Axon Core.
//!
//! Two hard failure kinds exist in the wizard: the working directory
//! cannot be listed, and the generation engine fails. Prompt-engine
//! errors propagate unmodified. Everything else (cancel, declined
//! confirmation) is a successful completion, not an error.

use std::path::PathBuf;
use thiserror::Error;

/// Convenient result type alias.
pub type WizardResult<T> = Result<T, WizardError>;

/// Root error type for wizard runs.
#[derive(Debug, Error)]
pub enum WizardError {
    /// The working directory could not be listed (missing, permission
    /// denied, not a directory). Aborts the wizard immediately.
    #[error("cannot read directory '{path}'")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The generation engine failed. Surfaced verbatim, no retry, no
    /// partial cleanup.
    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),

    /// The prompt engine failed (e.g. stdin closed mid-prompt).
    /// No kind translation is applied.
    #[error("prompt failed: {0}")]
    Prompt(#[from] PromptError),
}

impl WizardError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryRead { path, .. } => vec![
                format!("Could not list: {}", path.display()),
                "Check that the directory exists and is readable".into(),
            ],
            Self::Generation(e) => e.suggestions(),
            Self::Prompt(_) => vec![
                "The interactive prompt could not be completed".into(),
                "Run from an interactive terminal".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryRead { .. } => ErrorCategory::Internal,
            Self::Generation(e) => e.category(),
            Self::Prompt(_) => ErrorCategory::Internal,
        }
    }
}

/// Failures reported by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The resolved template is not known to the engine.
    #[error("unknown template '{name}'")]
    UnknownTemplate { name: String, available: Vec<String> },

    /// A file could not be written.
    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The target directory could not be created.
    #[error("failed to create directory '{path}'")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The metadata map could not be serialized into the descriptor.
    #[error("failed to serialize package descriptor")]
    Serialize(#[source] serde_json::Error),
}

impl GenerationError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownTemplate { name, available } => vec![
                format!("'{name}' is not a known template"),
                format!("Available templates: {}", available.join(", ")),
                "Use `axon list` to see available templates".into(),
            ],
            Self::Write { path, .. } | Self::CreateDir { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::Serialize(_) => vec!["Check the collected metadata for invalid values".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownTemplate { .. } => ErrorCategory::NotFound,
            Self::Write { .. } | Self::CreateDir { .. } | Self::Serialize(_) => {
                ErrorCategory::Internal
            }
        }
    }
}

/// A prompt-engine failure, carried through unmodified.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn directory_read_carries_path_and_cause() {
        let err = WizardError::DirectoryRead {
            path: PathBuf::from("/does/not/exist"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/does/not/exist"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn unknown_template_is_not_found() {
        let err = GenerationError::UnknownTemplate {
            name: "nope".into(),
            available: vec!["default".into()],
        };
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().iter().any(|s| s.contains("default")));
    }

    #[test]
    fn generation_error_propagates_into_wizard_error() {
        let gen_err = GenerationError::Write {
            path: PathBuf::from("axon.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let err: WizardError = gen_err.into();
        assert!(matches!(err, WizardError::Generation(_)));
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn prompt_error_is_transparent() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed");
        let err = PromptError::from(io_err);
        assert_eq!(err.to_string(), "stdin closed");
    }
}
