//! User-profile store.
//!
//! The profile is a flat TOML key/value file holding identity fields
//! saved from earlier sessions (`username`, `email`). A missing or
//! unreadable file is not an error; the store is simply empty and the
//! questionnaire asks for everything.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use axon_core::ports::ProfileStore;

/// Profile store backed by a TOML file.
#[derive(Debug, Clone, Default)]
pub struct FileProfileStore {
    values: BTreeMap<String, String>,
}

impl FileProfileStore {
    /// Load from the platform config directory
    /// (e.g. `~/.config/axon/profile.toml` on Linux).
    pub fn load_default() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from an explicit path. Missing or malformed files yield an
    /// empty store with a warning, never an error.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no profile file");
                return Self::default();
            }
        };

        match toml::from_str::<BTreeMap<String, String>>(&content) {
            Ok(values) => {
                debug!(path = %path.display(), fields = values.len(), "profile loaded");
                Self { values }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "malformed profile file, ignoring");
                Self::default()
            }
        }
    }

    /// Path to the default profile file, when the platform exposes a
    /// config directory.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("io", "axon", "axon")
            .map(|d| d.config_dir().join("profile.toml"))
    }
}

impl ProfileStore for FileProfileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// In-memory profile store for tests and programmatic use.
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileStore {
    values: BTreeMap<String, String>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ProfileStore for MemoryProfileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
