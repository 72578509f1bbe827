//! Integration tests for the restgen command line

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/api.swagger.json")
}

#[test]
fn test_generate_to_stdout() {
    let mut cmd = Command::cargo_bin("restgen").unwrap();

    cmd.arg(fixture_path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "/* Code generated by restgen. DO NOT EDIT. */",
        ))
        .stdout(predicate::str::contains("public interface IFriend"))
        .stdout(predicate::str::contains("GetFriendAsync("));
}

#[test]
fn test_generate_to_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("Client/ApiClient.cs");
    let mut cmd = Command::cargo_bin("restgen").unwrap();

    cmd.arg(fixture_path())
        .arg("--output")
        .arg(&output)
        .arg("--namespace")
        .arg("Game.Api")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&output).expect("output file written");
    assert!(content.contains("namespace Game.Api"));
}

#[test]
fn test_config_file_and_override() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("restgen.yml");
    std::fs::write(&config, "client_class: GameClient\ndefault_timeout: 20\n").unwrap();
    let mut cmd = Command::cargo_bin("restgen").unwrap();

    cmd.arg(fixture_path())
        .arg("--config")
        .arg(&config)
        .arg("--client-class")
        .arg("OverrideClient")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "public OverrideClient(Uri baseUri, IHttpAdapter httpAdapter, int timeout = 20)",
        ));
}

#[test]
fn test_custom_template() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("summary.tera");
    std::fs::write(
        &template,
        "{% for operation in operations %}{{ operation.method_name }}\n{% endfor %}",
    )
    .unwrap();
    let mut cmd = Command::cargo_bin("restgen").unwrap();

    cmd.arg(fixture_path())
        .arg("--template")
        .arg(&template)
        .assert()
        .success()
        .stdout(predicate::str::contains("GetFriendAsync\n"))
        .stdout(predicate::str::contains("AuthenticateDeviceAsync\n"));
}

#[test]
fn test_missing_input_fails() {
    let mut cmd = Command::cargo_bin("restgen").unwrap();

    cmd.arg("does/not/exist.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

#[test]
fn test_failed_generation_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("grid.json");
    std::fs::write(
        &input,
        r#"{
            "swagger": "2.0",
            "paths": {},
            "definitions": {
                "Grid": {
                    "type": "object",
                    "properties": {
                        "cells": { "type": "array", "items": { "type": "array", "items": { "type": "string" } } }
                    }
                }
            }
        }"#,
    )
    .unwrap();
    let output = temp_dir.path().join("ApiClient.cs");
    let mut cmd = Command::cargo_bin("restgen").unwrap();

    cmd.arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("array<array<string>>"));

    assert!(!output.exists());
}
