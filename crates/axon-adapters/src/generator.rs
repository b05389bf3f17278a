//! Built-in scaffold-generation engine.
//!
//! [`BuiltinGenerator`] ships two templates:
//!
//! - `default`: descriptor, license file, and a README.
//! - `neuron`: the same plus a module entry-point stub; carries one
//!   extra question (`main`) so the questionnaire can ask for the entry
//!   path.
//!
//! File writing honors the wizard's force mode: with `overriding` the
//! engine replaces existing files, otherwise it leaves them untouched
//! and only fills in the gaps. There is no rollback; a failed write
//! surfaces as a [`GenerationError`] with the offending path.

use std::path::Path;

use tracing::{debug, info};

use axon_core::{
    error::GenerationError,
    options::Metadata,
    ports::{GenerateRequest, Generator},
    schema::Question,
};

/// Licenses the engine can emit.
static LICENSES: [&str; 6] = [
    "MIT",
    "Apache-2.0",
    "BSD-2-Clause",
    "ISC",
    "GPL-3.0",
    "UNLICENSED",
];

/// A template the engine knows how to generate.
struct BuiltinTemplate {
    name: &'static str,
    /// Extra questions mixed into the questionnaire for this template.
    extra: fn() -> Vec<Question>,
}

static TEMPLATES: [BuiltinTemplate; 2] = [
    BuiltinTemplate {
        name: "default",
        extra: Vec::new,
    },
    BuiltinTemplate {
        name: "neuron",
        extra: neuron_extra,
    },
];

fn neuron_extra() -> Vec<Question> {
    vec![Question::input("main", "module entry point").with_default("src/main.ax")]
}

/// In-process generation engine over the built-in template table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinGenerator;

impl BuiltinGenerator {
    pub fn new() -> Self {
        Self
    }

    fn template(&self, name: &str) -> Result<&'static BuiltinTemplate, GenerationError> {
        TEMPLATES
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| GenerationError::UnknownTemplate {
                name: name.to_string(),
                available: self.available_templates(),
            })
    }
}

impl Generator for BuiltinGenerator {
    fn available_templates(&self) -> Vec<String> {
        TEMPLATES.iter().map(|t| t.name.to_string()).collect()
    }

    fn available_licenses(&self) -> Vec<String> {
        LICENSES.iter().map(|l| l.to_string()).collect()
    }

    fn extra_schemas(&self, template: &str) -> Vec<Question> {
        TEMPLATES
            .iter()
            .find(|t| t.name == template)
            .map(|t| (t.extra)())
            .unwrap_or_default()
    }

    fn generate(&self, request: GenerateRequest) -> Result<(), GenerationError> {
        let template = self.template(&request.template)?;

        std::fs::create_dir_all(&request.cwd).map_err(|e| GenerationError::CreateDir {
            path: request.cwd.clone(),
            source: e,
        })?;

        let descriptor =
            serde_json::to_string_pretty(&request.pkg).map_err(GenerationError::Serialize)?;
        write_file(
            &request.cwd.join("axon.json"),
            &format!("{descriptor}\n"),
            request.overriding,
        )?;

        write_file(
            &request.cwd.join("LICENSE"),
            &license_text(&request.license, &request.pkg),
            request.overriding,
        )?;

        write_file(
            &request.cwd.join("README.md"),
            &readme_text(&request.pkg),
            request.overriding,
        )?;

        if template.name == "neuron" {
            let main = request
                .pkg
                .get("main")
                .and_then(|v| v.as_str())
                .unwrap_or("src/main.ax");
            let path = request.cwd.join(main);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| GenerationError::CreateDir {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
            write_file(
                &path,
                &entry_stub(&request.pkg, &request.runtime_version),
                request.overriding,
            )?;
        }

        info!(
            cwd = %request.cwd.display(),
            template = template.name,
            "Scaffold written"
        );
        Ok(())
    }
}

/// Write `content` to `path`, skipping existing files unless overriding.
fn write_file(path: &Path, content: &str, overriding: bool) -> Result<(), GenerationError> {
    if path.exists() && !overriding {
        debug!(path = %path.display(), "exists, skipping");
        return Ok(());
    }
    std::fs::write(path, content).map_err(|e| GenerationError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

fn field<'a>(pkg: &'a Metadata, key: &str) -> &'a str {
    pkg.get(key).and_then(|v| v.as_str()).unwrap_or_default()
}

fn license_text(license: &str, pkg: &Metadata) -> String {
    format!(
        "{license}\n\nCopyright (c) {}\n",
        field(pkg, "author_name")
    )
}

fn readme_text(pkg: &Metadata) -> String {
    let name = field(pkg, "name");
    let description = field(pkg, "description");
    format!("# {name}\n\n{description}\n")
}

fn entry_stub(pkg: &Metadata, runtime_version: &str) -> String {
    format!(
        "// {} v{}\n// requires runtime >= {runtime_version}\n",
        field(pkg, "name"),
        field(pkg, "version"),
    )
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn request(cwd: PathBuf, template: &str, overriding: bool) -> GenerateRequest {
        let mut pkg = Metadata::new();
        for (k, v) in [
            ("name", "synaptic"),
            ("version", "0.1.0"),
            ("description", "a test module"),
            ("author_name", "kael"),
            ("author_email", "kael@example.org"),
            ("license", "MIT"),
            ("template", template),
        ] {
            pkg.insert(k.to_string(), serde_json::Value::String(v.to_string()));
        }
        GenerateRequest {
            pkg,
            overriding,
            cwd,
            runtime_version: "7.3.1".to_string(),
            license: "MIT".to_string(),
            template: template.to_string(),
        }
    }

    #[test]
    fn lists_both_builtin_templates() {
        let generator = BuiltinGenerator::new();
        assert_eq!(generator.available_templates(), vec!["default", "neuron"]);
    }

    #[test]
    fn license_list_is_nonempty_and_contains_mit() {
        let licenses = BuiltinGenerator::new().available_licenses();
        assert!(licenses.contains(&"MIT".to_string()));
    }

    #[test]
    fn neuron_template_has_a_main_question() {
        let extras = BuiltinGenerator::new().extra_schemas("neuron");
        assert_eq!(extras.len(), 1);
        assert_eq!(extras[0].name, "main");
        assert_eq!(extras[0].default.as_deref(), Some("src/main.ax"));
    }

    #[test]
    fn default_template_has_no_extras() {
        assert!(BuiltinGenerator::new().extra_schemas("default").is_empty());
        // Unknown template names also produce no extras rather than failing.
        assert!(BuiltinGenerator::new().extra_schemas("nope").is_empty());
    }

    #[test]
    fn generates_descriptor_license_and_readme() {
        let dir = TempDir::new().unwrap();
        let generator = BuiltinGenerator::new();
        generator
            .generate(request(dir.path().to_path_buf(), "default", true))
            .unwrap();

        let descriptor = std::fs::read_to_string(dir.path().join("axon.json")).unwrap();
        assert!(descriptor.contains("\"name\": \"synaptic\""));
        assert!(descriptor.contains("\"author_email\": \"kael@example.org\""));

        let license = std::fs::read_to_string(dir.path().join("LICENSE")).unwrap();
        assert!(license.starts_with("MIT"));
        assert!(license.contains("kael"));

        let readme = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert!(readme.contains("# synaptic"));
    }

    #[test]
    fn neuron_template_writes_entry_stub() {
        let dir = TempDir::new().unwrap();
        BuiltinGenerator::new()
            .generate(request(dir.path().to_path_buf(), "neuron", true))
            .unwrap();

        // No explicit `main` answer falls back to the default path.
        let stub = std::fs::read_to_string(dir.path().join("src/main.ax")).unwrap();
        assert!(stub.contains("synaptic v0.1.0"));
        assert!(stub.contains("requires runtime >= 7.3.1"));
    }

    #[test]
    fn skipping_mode_preserves_existing_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("README.md"), "hands off\n").unwrap();

        BuiltinGenerator::new()
            .generate(request(dir.path().to_path_buf(), "default", false))
            .unwrap();

        let readme = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert_eq!(readme, "hands off\n");
        // Missing files are still created.
        assert!(dir.path().join("axon.json").exists());
    }

    #[test]
    fn overriding_mode_replaces_existing_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("README.md"), "stale\n").unwrap();

        BuiltinGenerator::new()
            .generate(request(dir.path().to_path_buf(), "default", true))
            .unwrap();

        let readme = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert!(readme.contains("# synaptic"));
    }

    #[test]
    fn unknown_template_is_rejected_before_any_write() {
        let dir = TempDir::new().unwrap();
        let err = BuiltinGenerator::new()
            .generate(request(dir.path().to_path_buf(), "mystery", true))
            .unwrap_err();

        assert!(matches!(err, GenerationError::UnknownTemplate { .. }));
        assert!(!dir.path().join("axon.json").exists());
    }
}
