//! End-to-end tests for the `degreeplan` binary
//!
//! Each run gets its own config home and data directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn degreeplan(home: &Path, args: &[&str]) -> Output {
    let data_dir = home.join("data");
    Command::new(env!("CARGO_BIN_EXE_degreeplan"))
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .arg("--data-dir")
        .arg(&data_dir)
        .args(args)
        .output()
        .expect("Failed to run degreeplan")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_complete_unknown_code_fails_but_keeps_valid_ones() {
    let home = TempDir::new().expect("Failed to create temp dir");

    let output = degreeplan(home.path(), &["complete", "PSY 201", "XYZ 999"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown course 'XYZ 999'"));
    assert!(!stdout(&output).contains('✗'));

    let completed = fs::read_to_string(home.path().join("data/completedCourses.json")).unwrap();
    assert_eq!(completed, r#"["PSY 201"]"#);
}

#[test]
fn test_uncomplete_missing_code_fails_on_stderr() {
    let home = TempDir::new().expect("Failed to create temp dir");

    let output = degreeplan(home.path(), &["uncomplete", "PSY 201"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("PSY 201 is not marked completed"));
    assert!(!stdout(&output).contains('✗'));
}

#[test]
fn test_plan_remove_of_unplanned_course_fails() {
    let home = TempDir::new().expect("Failed to create temp dir");

    let output = degreeplan(home.path(), &["plan", "remove", "PSY 201", "Fall 2025"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("PSY 201 is not planned in Fall 2025"));
}

#[test]
fn test_plan_remove_accepts_non_season_label() {
    let home = TempDir::new().expect("Failed to create temp dir");
    let data_dir = home.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(
        data_dir.join("plannedCourses.json"),
        r#"{"Transfer": ["WR 121"], "Fall 2025": ["PSY 201"]}"#,
    )
    .unwrap();

    let output = degreeplan(home.path(), &["plan", "remove", "WR 121", "Transfer"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let planned = fs::read_to_string(data_dir.join("plannedCourses.json")).unwrap();
    assert_eq!(planned, r#"{"Fall 2025":["PSY 201"]}"#);
}

#[test]
fn test_plan_remove_normalizes_season_label() {
    let home = TempDir::new().expect("Failed to create temp dir");
    assert!(degreeplan(home.path(), &["plan", "add", "PSY 201", "Fall 2025"])
        .status
        .success());

    let output = degreeplan(home.path(), &["plan", "remove", "PSY 201", "fall 2025"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Removed PSY 201 from Fall 2025"));
}
