//! Smoke tests to verify command module wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("clientele").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Run the HTTP server"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("clientele").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind"))
        .stdout(predicate::str::contains("settings file"));
}

#[test]
fn test_serve_missing_config_fails() {
    let mut cmd = Command::cargo_bin("clientele").unwrap();
    cmd.arg("serve")
        .arg("--config")
        .arg("/nonexistent/clientele.toml")
        .env_remove("DATABASE_URL");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Config not found"));
}
