#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These tests run the binary with an isolated config directory and no
//! Azure credentials, and never depend on network access succeeding.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn xlate(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("xlate").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1")
        .env_remove("AZURE_TRANSLATOR_API_KEY")
        .env_remove("RUST_LOG")
        .current_dir(config_home.path());
    cmd
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    xlate(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("multi-provider fallback"))
        .stdout(predicate::str::contains("--provider"))
        .stdout(predicate::str::contains("--from"))
        .stdout(predicate::str::contains("--to"))
        .stdout(predicate::str::contains("--timeout"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    xlate(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_providers_lists_catalog() {
    let home = TempDir::new().unwrap();
    xlate(&home)
        .arg("providers")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bing (Azure SDK)"))
        .stdout(predicate::str::contains("(primary)"))
        .stdout(predicate::str::contains("Google"))
        .stdout(predicate::str::contains("(built-in)"))
        .stdout(predicate::str::contains("Youdao"));
}

#[test]
fn test_empty_text_prints_nothing() {
    let home = TempDir::new().unwrap();
    xlate(&home)
        .arg("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_empty_stdin_prints_nothing() {
    let home = TempDir::new().unwrap();
    xlate(&home)
        .args(["--provider", "google"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unsupported_provider_fails() {
    let home = TempDir::new().unwrap();
    xlate(&home)
        .args(["hello", "--provider", "no-such-provider"])
        .assert()
        .code(exitcode::UNAVAILABLE)
        .stderr(predicate::str::contains("Translation failed"))
        .stderr(predicate::str::contains("no-such-provider"));
}

#[test]
fn test_dotenv_log_level_is_honored() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join(".env"), "RUST_LOG=xlate=debug\n").unwrap();

    xlate(&home)
        .args(["hello", "--provider", "no-such-provider"])
        .assert()
        .code(exitcode::UNAVAILABLE)
        .stderr(predicate::str::contains("translating with aggregator"));
}

#[test]
fn test_oversized_timeout_rejected() {
    let home = TempDir::new().unwrap();
    xlate(&home)
        .args(["hello", "--timeout", "1e20"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid timeout"));
}

#[test]
fn test_invalid_timeout_rejected() {
    let home = TempDir::new().unwrap();
    xlate(&home)
        .args(["hello", "--timeout", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timeout"));
}

#[test]
fn test_detect_without_key_is_config_error() {
    let home = TempDir::new().unwrap();
    xlate(&home)
        .args(["detect", "bonjour"])
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("AZURE_TRANSLATOR_API_KEY"));
}

#[test]
fn test_detect_empty_input_is_unknown_without_key() {
    let home = TempDir::new().unwrap();
    xlate(&home)
        .args(["detect", ""])
        .assert()
        .success()
        .stdout(predicate::str::diff("unknown\n"));
}

#[test]
fn test_languages_without_key_is_config_error() {
    let home = TempDir::new().unwrap();
    xlate(&home)
        .arg("languages")
        .assert()
        .code(exitcode::CONFIG);
}

#[test]
fn test_config_shows_defaults_and_masks_key() {
    let home = TempDir::new().unwrap();
    xlate(&home)
        .env("AZURE_TRANSLATOR_API_KEY", "0123456789abcdef")
        .env_remove("AZURE_TRANSLATOR_REGION")
        .env_remove("AZURE_TRANSLATOR_ENDPOINT")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("(not found)"))
        .stdout(predicate::str::contains("bing"))
        .stdout(predicate::str::contains("eastasia"))
        .stdout(predicate::str::contains("********cdef"))
        .stdout(predicate::str::contains("0123456789abcdef").not());
}

#[test]
fn test_invalid_config_file_reported() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("xlate");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[xlate\n").unwrap();

    xlate(&home)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}
