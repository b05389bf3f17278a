//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`AXON_RUNTIME_VERSION`)
//! 3. Config file (`--config` or the default location)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use axon_adapters::runtime::DEFAULT_RUNTIME_VERSION;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new scaffolds.
    pub defaults: Defaults,
    /// Runtime the generated descriptor targets.
    pub runtime: RuntimeConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Profile store settings.
    pub profile: ProfileConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Template used when `--template` is not given.  `None` lets the
    /// wizard resolve it interactively.
    pub template: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Version string stamped into generated scaffolds.
    pub version: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_RUNTIME_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Override for the profile file location.
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `--config` path must exist and parse; the default
    /// location is optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("cannot read config file '{}'", path.display()))?;
                toml::from_str(&content)
                    .with_context(|| format!("cannot parse config file '{}'", path.display()))?
            }
            None => {
                let path = Self::config_path();
                match std::fs::read_to_string(&path) {
                    Ok(content) => toml::from_str(&content)
                        .with_context(|| format!("cannot parse config file '{}'", path.display()))?,
                    Err(_) => Self::default(),
                }
            }
        };

        if let Ok(version) = std::env::var("AXON_RUNTIME_VERSION") {
            if !version.is_empty() {
                config.runtime.version = version;
            }
        }

        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.axon.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("io", "axon", "axon")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".axon.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn defaults_carry_the_builtin_runtime_version() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.runtime.version, DEFAULT_RUNTIME_VERSION);
        assert!(cfg.defaults.template.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\ntemplate = \"neuron\"").unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.defaults.template.as_deref(), Some("neuron"));
        assert_eq!(cfg.runtime.version, DEFAULT_RUNTIME_VERSION);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/no/such/axon-config.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn malformed_explicit_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "defaults = [broken").unwrap();
        assert!(AppConfig::load(Some(&file.path().to_path_buf())).is_err());
    }

    #[test]
    fn config_path_is_nonempty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
