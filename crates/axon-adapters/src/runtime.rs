//! Runtime version source.

use axon_core::ports::RuntimeInfo;

/// Runtime version the generated descriptor pins by default. Overridden
/// by configuration or the `AXON_RUNTIME_VERSION` environment variable
/// at the CLI layer.
pub const DEFAULT_RUNTIME_VERSION: &str = "7.3.1";

/// Fixed runtime version, resolved once at startup.
#[derive(Debug, Clone)]
pub struct StaticRuntime {
    version: String,
}

impl StaticRuntime {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

impl Default for StaticRuntime {
    fn default() -> Self {
        Self::new(DEFAULT_RUNTIME_VERSION)
    }
}

impl RuntimeInfo for StaticRuntime {
    fn version(&self) -> String {
        self.version.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_the_configured_version() {
        assert_eq!(StaticRuntime::new("9.0.0").version(), "9.0.0");
        assert_eq!(StaticRuntime::default().version(), DEFAULT_RUNTIME_VERSION);
    }
}
