//! Integration tests for logger behavior

use degree_planner::logger::{init_file_logging, set_level, Level};
use degree_planner::{debug, error, info, warn};
use std::fs;
use tempfile::TempDir;

#[test]
fn level_parse_accepts_valid() {
    assert_eq!("error".parse::<Level>(), Ok(Level::Error));
    assert_eq!("WARNING".parse::<Level>(), Ok(Level::Warn));
    assert_eq!("info".parse::<Level>(), Ok(Level::Info));
    assert_eq!(" debug ".parse::<Level>(), Ok(Level::Debug));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!("chatty".parse::<Level>().is_err());
    assert!("".parse::<Level>().is_err());
}

#[test]
fn errors_reach_the_log_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("logs").join("degreeplan.log");

    set_level(Level::Debug);
    assert!(init_file_logging(&path));
    warn!("could not save 'plannedCourses'");
    error!("catalog missing");
    info!("catalog loaded");
    debug!("planner state loaded");

    // Other tests change the global level concurrently; errors always pass.
    let content = fs::read_to_string(&path).expect("log file should exist");
    assert!(content.contains("[ERROR] catalog missing"));
    assert!(!content.contains("[ERROR] could not save"));
}
