//! End-to-end tests of the command surface via the compiled binary.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn shoehorn() -> Command {
    Command::cargo_bin("shoehorn").unwrap()
}

#[test]
fn help_lists_the_command_groups() {
    let assert_result = shoehorn().arg("--help").assert().success();
    let output = assert_result.get_output();
    let help_output = String::from_utf8_lossy(&output.stdout);

    assert!(help_output.contains("Usage:"));
    assert!(help_output.contains("Commands:"));
    assert!(help_output.contains("auth"));
    assert!(help_output.contains("get"));
    assert!(help_output.contains("search"));
    assert!(help_output.contains("forge"));
    assert!(help_output.contains("manifest"));
    assert!(help_output.contains("validate"));
    assert!(help_output.contains("convert"));
    assert!(help_output.contains("version"));
    assert!(help_output.contains("-h, --help"));
    assert!(help_output.contains("-V, --version"));
}

#[test]
fn subcommand_help_outputs_exist() {
    for subcommand in ["auth", "get", "forge", "manifest"] {
        let assert_result = shoehorn().arg(subcommand).arg("--help").assert().success();
        let output = assert_result.get_output();
        let help_output = String::from_utf8_lossy(&output.stdout);
        assert!(help_output.contains("Usage:"));
    }
}

#[test]
fn get_lists_all_resources() {
    let assert_result = shoehorn().arg("get").arg("--help").assert().success();
    let output = assert_result.get_output();
    let help_output = String::from_utf8_lossy(&output.stdout);

    for resource in [
        "entities",
        "entity",
        "owned",
        "teams",
        "team",
        "users",
        "user",
        "groups",
        "group-roles",
        "k8s-agents",
        "scorecard",
        "whoami",
    ] {
        assert!(
            help_output.contains(resource),
            "missing resource {} in get help",
            resource
        );
    }
}

#[test]
fn no_arguments_shows_usage_and_fails() {
    shoehorn()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn unknown_command_is_rejected() {
    shoehorn().arg("frobnicate").assert().failure();
}

#[test]
fn unauthenticated_catalog_read_exits_with_auth_code() {
    let dir = tempfile::tempdir().unwrap();
    shoehorn()
        .env("SHOEHORN_CONFIG_DIR", dir.path())
        .args(["get", "teams", "--no-interactive"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not authenticated"));
}

#[test]
fn no_interactive_errors_are_plain_text() {
    let dir = tempfile::tempdir().unwrap();
    shoehorn()
        .env("SHOEHORN_CONFIG_DIR", dir.path())
        .args(["get", "teams", "--no-interactive"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn version_flag_prints_the_package_version() {
    shoehorn()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_subcommand_prints_the_package_version() {
    shoehorn()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn validate_works_without_the_manifest_prefix() {
    let assert_result = shoehorn().args(["validate", "--help"]).assert().success();
    let output = assert_result.get_output();
    let help_output = String::from_utf8_lossy(&output.stdout);
    assert!(help_output.contains("Validate a manifest"));

    let assert_result = shoehorn().args(["convert", "--help"]).assert().success();
    let output = assert_result.get_output();
    let help_output = String::from_utf8_lossy(&output.stdout);
    assert!(help_output.contains("--to"));
}
