//! Integration tests for catalog loading and browsing

use degree_planner::core::search::{search, CourseQuery};
use degree_planner::{get_version, CourseCatalog, PlannerError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples/catalog/psychology.json")
}

#[test]
fn version_is_not_empty() {
    assert!(!get_version().trim().is_empty());
}

#[test]
fn test_load_sample_catalog() {
    let catalog = CourseCatalog::load(sample_path()).expect("sample catalog should load");

    assert_eq!(catalog.all_courses().len(), 20);
    assert_eq!(catalog.degree_ids().collect::<Vec<_>>(), ["psychology_ba", "psychology_bs"]);

    let intro = catalog.find_course("PSY 201").expect("PSY 201 is in the catalog");
    assert_eq!(intro.title, "General Psychology");
    assert_eq!(intro.credits, 4);
    assert!(!intro.has_prerequisites());
}

#[test]
fn test_single_string_terms_offered() {
    let catalog = CourseCatalog::load(sample_path()).unwrap();

    assert!(catalog.term_offerings().is_offered("HDFS 311", "Winter 2026"));
    assert!(!catalog.term_offerings().is_offered("HDFS 311", "Fall 2025"));
}

#[test]
fn test_missing_catalog_is_a_load_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = CourseCatalog::load(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, PlannerError::DataLoad { .. }));
}

#[test]
fn test_malformed_catalog_is_a_load_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.json");
    fs::write(&path, r#"{"courses": [ {"course_code": "PSY 201"} "#).unwrap();

    let err = CourseCatalog::load(&path).unwrap_err();
    assert!(matches!(err, PlannerError::DataLoad { .. }));
}

#[test]
fn test_search_by_text_category_and_term() {
    let catalog = CourseCatalog::bundled().unwrap();

    let writing = search(&catalog, &CourseQuery::default().category("writing"));
    let codes: Vec<&str> = writing.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, ["WR 121", "WR 324", "WR 327"]);

    let winter_writing = search(
        &catalog,
        &CourseQuery::default().category("writing").term("Winter 2026"),
    );
    assert_eq!(winter_writing.len(), 3);

    let fall_writing = search(
        &catalog,
        &CourseQuery::default().category("writing").term("Fall"),
    );
    assert_eq!(fall_writing.len(), 2);

    let statistics = search(&catalog, &CourseQuery::default().text("statistic"));
    assert!(statistics.iter().any(|c| c.code == "ST 351"));
}
