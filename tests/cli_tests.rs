//! CLI integration tests using the REAL bundle-manifest binary

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

use common::TestWorkspace;

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
fn bundle_manifest_cmd() -> Command {
    let mut cmd = Command::cargo_bin("bundle-manifest").unwrap();
    cmd.env_remove("BUNDLE_MANIFEST_FORMAT").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_output() {
    bundle_manifest_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("fold"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_output() {
    bundle_manifest_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bundle-manifest"))
        .stdout(predicate::str::contains("Build info"))
        .stdout(predicate::str::contains("Minimum Rust version: 1.85"));
}

#[test]
fn test_inspect_text() {
    bundle_manifest_cmd()
        .arg("inspect")
        .arg(common::fixture_path("core.MF"))
        .assert()
        .success()
        .stdout(predicate::str::contains("com.acme.core"))
        .stdout(predicate::str::contains("1.4.0.v20240512"))
        .stdout(predicate::str::contains("package com.acme.core.api 1.4.0"))
        .stdout(predicate::str::contains(
            "bundle org.eclipse.core.runtime [3.10.0,4.0.0)",
        ));
}

#[test]
fn test_inspect_json() {
    let output = bundle_manifest_cmd()
        .args(["inspect", "--format", "json"])
        .arg(common::fixture_path("core.MF"))
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["symbolic_name"], "com.acme.core");
    assert_eq!(json["version"], "1.4.0.v20240512");
    assert_eq!(json["requirements"][2]["version_range"], "[1.0.0,2.0.0)");
    assert_eq!(json["capabilities"][0]["uses"][0], "com.acme.spi");
}

#[test]
fn test_inspect_format_from_env() {
    bundle_manifest_cmd()
        .env("BUNDLE_MANIFEST_FORMAT", "yaml")
        .arg("inspect")
        .arg(common::fixture_path("source.MF"))
        .assert()
        .success()
        .stdout(predicate::str::contains("symbolic_name: com.acme.core.source"))
        .stdout(predicate::str::contains("source_bundle:"));
}

#[test]
fn test_inspect_stdin() {
    bundle_manifest_cmd()
        .args(["inspect", "-"])
        .write_stdin("Bundle-SymbolicName: from.stdin\nBundle-Version: 3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("from.stdin 3.0.0"));
}

#[test]
fn test_inspect_missing_symbolic_name() {
    bundle_manifest_cmd()
        .arg("inspect")
        .arg(common::fixture_path("nameless.MF"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: No Bundle-SymbolicName in the manifest",
        ));
}

#[test]
fn test_inspect_malformed_version() {
    let workspace = TestWorkspace::new();
    let path = workspace.write_file(
        "MANIFEST.MF",
        "Bundle-SymbolicName: a\nBundle-Version: 1.beta\n",
    );
    bundle_manifest_cmd()
        .arg("inspect")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bundle-Version"))
        .stderr(predicate::str::contains("1.beta"));
}

#[test]
fn test_inspect_missing_file() {
    let workspace = TestWorkspace::new();
    bundle_manifest_cmd()
        .arg("inspect")
        .arg(workspace.path.join("nope.MF"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Failed to read file"));
}

#[test]
fn test_inspect_invalid_utf8() {
    let workspace = TestWorkspace::new();
    let path = workspace.write_bytes("MANIFEST.MF", b"Bundle-SymbolicName: \xfe\n");
    bundle_manifest_cmd()
        .arg("inspect")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn test_inspect_reports_recovered_errors() {
    bundle_manifest_cmd()
        .arg("inspect")
        .arg(common::fixture_path("broken.MF"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Header syntax errors:"))
        .stdout(predicate::str::contains("package com.acme.a"))
        .stdout(predicate::str::contains("package com.acme.b"));
}

#[test]
fn test_check_clean_manifest() {
    bundle_manifest_cmd()
        .arg("check")
        .arg(common::fixture_path("core.MF"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No header syntax errors"));
}

#[test]
fn test_check_reports_caret() {
    bundle_manifest_cmd()
        .arg("check")
        .arg(common::fixture_path("broken.MF"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Import-Package: Empty value"))
        .stdout(predicate::str::contains(
            "   com.acme.a;;com.acme.b, ;resolution:=optional\n              ^\n",
        ))
        .stdout(predicate::str::contains("4 header syntax error(s)"));
}

#[test]
fn test_check_single_header() {
    bundle_manifest_cmd()
        .args(["check", "--header", "Export-Package"])
        .arg(common::fixture_path("broken.MF"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Unterminated \"-quoted string"))
        .stdout(predicate::str::contains("1 header syntax error(s)"));
}

#[test]
fn test_check_strict_fails() {
    bundle_manifest_cmd()
        .args(["check", "--strict"])
        .arg(common::fixture_path("broken.MF"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Found 4 structural error(s) in manifest headers",
        ));
}

#[test]
fn test_check_invalid_manifest_line() {
    bundle_manifest_cmd()
        .args(["check", "-"])
        .write_stdin(" leading continuation\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid manifest line 1"));
}

#[test]
fn test_fold_wraps_long_lines() {
    let workspace = TestWorkspace::new();
    let long = format!("Import-Package: {}", "p".repeat(100));
    let path = workspace.write_file("MANIFEST.MF", &format!("{long}\n\n\n"));
    let expected = format!(
        "{}\n {}\n",
        &long[..72],
        &long[72..]
    );
    bundle_manifest_cmd()
        .arg("fold")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn test_verbose_logs_to_stderr() {
    bundle_manifest_cmd()
        .args(["inspect", "--verbose"])
        .arg(common::fixture_path("broken.MF"))
        .assert()
        .success()
        .stderr(predicate::str::contains("recovered header syntax error"));
}

#[test]
fn test_completions_bash() {
    bundle_manifest_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bundle-manifest"));
}

#[test]
fn test_completions_unknown_shell() {
    bundle_manifest_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Invalid argument: Unknown shell: tcsh",
        ))
        .stderr(predicate::str::contains("IO error").not());
}
