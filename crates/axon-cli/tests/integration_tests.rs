//! End-to-end tests for the `axon` binary.
//!
//! Only non-interactive paths are exercised here; the wizard's prompt
//! flow is covered by the core crate's tests against a scripted prompt
//! engine.

use assert_cmd::Command;
use predicates::prelude::*;

fn axon() -> Command {
    Command::cargo_bin("axon").expect("binary builds")
}

#[test]
fn no_arguments_prints_help_and_fails() {
    axon()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_subcommands() {
    axon()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_matches_manifest() {
    axon()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn quiet_and_verbose_conflict() {
    axon()
        .args(["--quiet", "--verbose", "list"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn list_names_builtin_templates() {
    axon()
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default"))
        .stdout(predicate::str::contains("neuron"));
}

#[test]
fn list_json_is_parseable() {
    let output = axon()
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    let templates = parsed["templates"].as_array().expect("templates array");
    assert!(templates.iter().any(|t| t == "default"));
    assert!(parsed["licenses"].as_array().is_some_and(|l| !l.is_empty()));
}

#[test]
fn completions_emit_bash_script() {
    axon()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("axon"));
}

#[test]
fn init_rejects_unknown_force_token() {
    axon()
        .args(["init", "--force", "updating"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn init_on_unreadable_directory_is_an_internal_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");

    axon()
        .args(["init", missing.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read directory"));
}
