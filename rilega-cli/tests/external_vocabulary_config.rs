//! Integration tests for external vocabulary configuration

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Test generating a vocabulary configuration template
#[test]
fn test_generate_config_command() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("test_vocab.toml");

    let mut cmd = Command::cargo_bin("rilega").unwrap();
    cmd.args([
        "generate-config",
        "--language-code",
        "test",
        "--output",
        output_path.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains(
        "Configuration template generated successfully",
    ));

    // Verify file was created
    assert!(output_path.exists());

    // Verify content
    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("code = \"test\""));
    assert!(content.contains("[metadata]"));
    assert!(content.contains("[sections]"));
    assert!(content.contains("[months]"));
}

/// Test validating a valid configuration
#[test]
fn test_validate_valid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("valid.toml");

    let config_content = r#"
[metadata]
code = "de"
name = "German"

[sections]
experience = ["berufserfahrung", "erfahrung"]
education = ["ausbildung"]
skills = ["kenntnisse"]

[months]
abbreviations = ["jan", "feb", "mrz", "apr", "mai", "jun"]

[heuristics]
section_max_chars = 35
date_max_chars = 50
lowercase_extra = "äöüß"
"#;

    fs::write(&config_path, config_content).unwrap();

    let mut cmd = Command::cargo_bin("rilega").unwrap();
    cmd.args([
        "validate",
        "--vocabulary-config",
        config_path.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Configuration is valid"))
    .stdout(predicate::str::contains("Vocabulary code: de"));
}

/// Test validating an invalid configuration
#[test]
fn test_validate_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("invalid.toml");

    // Empty vocabulary code
    let config_content = r#"
[metadata]
code = ""
name = "Broken"

[sections]
experience = ["experience"]

[months]
abbreviations = ["jan"]
"#;

    fs::write(&config_path, config_content).unwrap();

    let mut cmd = Command::cargo_bin("rilega").unwrap();
    cmd.args([
        "validate",
        "--vocabulary-config",
        config_path.to_str().unwrap(),
    ])
    .assert()
    .failure()
    .stdout(predicate::str::contains("Configuration is invalid"));
}

/// Test reflowing with an external vocabulary
#[test]
fn test_reflow_with_external_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("german.toml");
    let resume_path = temp_dir.path().join("resume.txt");

    let config_content = r#"
[metadata]
code = "de"
name = "German"

[sections]
experience = ["berufserfahrung"]
skills = ["kenntnisse"]

[months]
abbreviations = ["jan", "feb", "mrz"]

[heuristics]
lowercase_extra = "äöüß"
"#;
    fs::write(&config_path, config_content).unwrap();

    let resume = "\
Erika Mustermann
Berufserfahrung
Leitete die Umstellung der
älteren Abrechnungsplattform.
";
    fs::write(&resume_path, resume).unwrap();

    let mut cmd = Command::cargo_bin("rilega").unwrap();
    cmd.args([
        "reflow",
        "-i",
        resume_path.to_str().unwrap(),
        "--vocabulary-config",
        config_path.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("title          Erika Mustermann"))
    .stdout(predicate::str::contains("section_header Berufserfahrung"))
    .stdout(predicate::str::contains(
        "Leitete die Umstellung der älteren Abrechnungsplattform.",
    ));
}

/// Generated templates round-trip through validation
#[test]
fn test_generated_template_validates() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("roundtrip.toml");

    Command::cargo_bin("rilega")
        .unwrap()
        .args([
            "generate-config",
            "--language-code",
            "xx",
            "--output",
            output_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    Command::cargo_bin("rilega")
        .unwrap()
        .args([
            "validate",
            "--vocabulary-config",
            output_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vocabulary code: xx"));
}
