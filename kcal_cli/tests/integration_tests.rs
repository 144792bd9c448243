//! Integration tests for the kcal binary.
//!
//! These tests verify end-to-end behavior including:
//! - Estimates for table exercises and the treadmill
//! - Default substitution for malformed flags
//! - CSV and JSON output
//! - Config-file controls and custom exercises

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temp dir holding a config file with the given contents
fn setup_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, contents).expect("Failed to write config");
    (temp_dir, path)
}

/// Helper to get the CLI with an empty config, isolated from the user's own
fn cli(config: &PathBuf) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("kcal"));
    cmd.arg("--config").arg(config);
    cmd
}

#[test]
fn test_cli_help() {
    Command::new(assert_cmd::cargo::cargo_bin!("kcal"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Calorie burn estimator"));
}

#[test]
fn test_default_command_is_treadmill_estimate() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Treadmill"))
        .stdout(predicate::str::contains("10.89 kcal"))
        .stdout(predicate::str::contains("327 kcal over 30 min"))
        .stdout(predicate::str::contains("8.0 km/h"))
        .stdout(predicate::str::contains("Total kcal burned"))
        .stdout(predicate::str::contains("Time (minutes)"));
}

#[test]
fn test_named_individual_estimate() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .args(["estimate", "--profile", "jeremy", "--exercise", "burpees"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Burpees · jeremy"))
        .stdout(predicate::str::contains("12.56 kcal"))
        .stdout(predicate::str::contains("km/h").not());
}

#[test]
fn test_custom_profile_scales_by_weight() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .args([
            "estimate",
            "--profile",
            "custom",
            "--exercise",
            "burpees",
            "--weight",
            "40",
            "--duration",
            "10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("6.28 kcal"))
        .stdout(predicate::str::contains("63 kcal over 10 min"));
}

#[test]
fn test_oversized_duration_falls_back() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .args([
            "estimate",
            "--profile",
            "jeremy",
            "--exercise",
            "burpees",
            "--duration",
            "99999999999",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("over 30 min"));
}

#[test]
fn test_capitalised_profile_is_custom() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .args([
            "estimate",
            "--profile",
            "Jeremy",
            "--exercise",
            "burpees",
            "--weight",
            "40",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("6.28 kcal"));
}

#[test]
fn test_unknown_exercise_reads_zero() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .args(["estimate", "--profile", "kevin", "--exercise", "juggling"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.00 kcal"));
}

#[test]
fn test_malformed_numbers_fall_back_to_defaults() {
    let (_dir, config) = setup_config("");

    // weight -> 75, speed -> 8, incline -> 0, duration -> 30
    cli(&config)
        .args([
            "estimate",
            "--weight",
            "heavy",
            "--speed",
            "fast",
            "--incline",
            "",
            "--duration",
            "-5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("10.89 kcal"))
        .stdout(predicate::str::contains("over 30 min"));
}

#[test]
fn test_csv_output() {
    let (_dir, config) = setup_config("");

    let output = cli(&config)
        .args([
            "estimate",
            "--exercise",
            "treadmill",
            "--weight",
            "80",
            "--speed",
            "8.0",
            "--incline",
            "10",
            "--duration",
            "3",
            "--format",
            "csv",
        ])
        .output()
        .expect("Failed to run kcal");
    assert!(output.status.success());

    let mut reader = csv::Reader::from_reader(output.stdout.as_slice());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(&headers, vec!["minute", "cumulative_kcal"]);

    let rows: Vec<(u32, f64)> = reader.deserialize().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].0, 1);
    assert!((rows[0].1 - 18.62).abs() < 1e-9);
    assert!((rows[2].1 - 55.86).abs() < 1e-9);
}

#[test]
fn test_json_output() {
    let (_dir, config) = setup_config("");

    let output = cli(&config)
        .args([
            "estimate",
            "--profile",
            "jeremy",
            "--exercise",
            "sprints",
            "--duration",
            "4",
            "--format",
            "json",
        ])
        .output()
        .expect("Failed to run kcal");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["duration_minutes"], 4);
    assert_eq!(json["rate_per_minute"], 15.14);
    assert_eq!(json["points"].as_array().unwrap().len(), 4);
    assert_eq!(json["points"][0]["minute"], 1);
}

#[test]
fn test_config_controls_used_when_flags_absent() {
    let (_dir, config) = setup_config(
        r#"
[controls]
profile = "kevin"
exercise = "boxing"
duration = 10
"#,
    );

    cli(&config)
        .arg("estimate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Boxing · kevin"))
        .stdout(predicate::str::contains("16.61 kcal"))
        .stdout(predicate::str::contains("166 kcal over 10 min"));
}

#[test]
fn test_custom_exercise_from_config() {
    let (_dir, config) = setup_config(
        r#"
[[exercises.custom]]
id = "rowing"
name = "Rowing"
jeremy = 10.0
base_weight_kg = 100
"#,
    );

    cli(&config)
        .arg("exercises")
        .assert()
        .success()
        .stdout(predicate::str::contains("rowing"))
        .stdout(predicate::str::contains("burpees"));

    cli(&config)
        .args(["estimate", "--exercise", "rowing", "--weight", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5.00 kcal"));
}

#[test]
fn test_invalid_custom_exercise_fails() {
    let (_dir, config) = setup_config(
        r#"
[[exercises.custom]]
id = "treadmill"
name = "Treadmill override"
jeremy = 9.0
"#,
    );

    cli(&config)
        .arg("estimate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("reserved"));
}

#[test]
fn test_missing_config_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("nope.toml");

    cli(&missing).arg("estimate").assert().failure();
}

#[test]
fn test_met_table_listing() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .arg("met")
        .assert()
        .success()
        .stdout(predicate::str::contains("8.0    8.3"))
        .stdout(predicate::str::contains("14.0   14.5"));
}

#[test]
fn test_config_command_prints_toml() {
    let (_dir, config) = setup_config("[controls]\nweight = 90\n");

    cli(&config)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[controls]"))
        .stdout(predicate::str::contains("weight = \"90\""));
}
