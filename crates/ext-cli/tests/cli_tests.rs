//! Integration tests for the extorder binary

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for the extorder binary
fn extorder_cmd() -> Command {
    Command::cargo_bin("extorder").expect("Failed to find extorder binary")
}

fn manifest(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const PIPELINE: &str = r#"
[[extension]]
provides = ["a"]

[[extension]]
provides = ["b"]
needs = ["a"]
last = true

[[extension]]
provides = ["c"]
"#;

// ============================================================================
// order Command Tests
// ============================================================================

#[test]
fn test_order_prints_one_id_per_line() {
    let dir = TempDir::new().unwrap();
    let path = manifest(&dir, "pipeline.toml", PIPELINE);

    extorder_cmd()
        .arg("order")
        .arg(&path)
        .assert()
        .success()
        .stdout("a\nc\nb\n");
}

#[test]
fn test_order_json() {
    let dir = TempDir::new().unwrap();
    let path = manifest(&dir, "pipeline.toml", PIPELINE);

    let output = extorder_cmd()
        .args(["order", "--json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let ids: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(ids, vec!["a", "c", "b"]);
}

#[test]
fn test_order_across_manifests() {
    let dir = TempDir::new().unwrap();
    let plugins = manifest(
        &dir,
        "plugins.toml",
        "[[extension]]\nprovides = [\"plugin\"]\nneeds = [\"core\"]\n",
    );
    let core = manifest(&dir, "core.toml", "[[extension]]\nprovides = [\"core\"]\n");

    extorder_cmd()
        .arg("order")
        .arg(&plugins)
        .arg(&core)
        .assert()
        .success()
        .stdout("core\nplugin\n");
}

#[test]
fn test_order_reports_cycle() {
    let dir = TempDir::new().unwrap();
    let path = manifest(
        &dir,
        "cycle.toml",
        r#"
[[extension]]
provides = ["a"]
needs = ["b"]

[[extension]]
provides = ["b"]
needs = ["a"]
"#,
    );

    extorder_cmd()
        .arg("order")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("circular dependency found: b, a"));
}

#[test]
fn test_order_reports_missing_dependency() {
    let dir = TempDir::new().unwrap();
    let path = manifest(
        &dir,
        "missing.toml",
        "[[extension]]\nprovides = [\"b\"]\nneeds = [\"a\"]\n",
    );

    extorder_cmd()
        .arg("order")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("must be configured: a"));
}

#[test]
fn test_order_missing_manifest_file() {
    extorder_cmd()
        .args(["order", "/nonexistent/extensions.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("extension manifest not found"));
}

// ============================================================================
// check Command Tests
// ============================================================================

#[test]
fn test_check_reports_count() {
    let dir = TempDir::new().unwrap();
    let path = manifest(&dir, "pipeline.toml", PIPELINE);

    extorder_cmd()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("ok"))
        .stdout(predicate::str::contains("3"));
}

#[test]
fn test_check_lenient_allows_shared_provider() {
    let dir = TempDir::new().unwrap();
    let path = manifest(
        &dir,
        "shared.toml",
        r#"
[[extension]]
provides = ["a", "log"]

[[extension]]
provides = ["b", "log"]

[[extension]]
provides = ["c"]
needs = ["log"]
"#,
    );

    extorder_cmd()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("provided by more than one extension"));

    extorder_cmd()
        .args(["check", "--lenient"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn test_help_lists_commands() {
    extorder_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("order"))
        .stdout(predicate::str::contains("check"));
}
