//! Integration tests for the planner store against the bundled catalog

use degree_planner::core::storage::{COMPLETED_KEY, PLANNED_KEY};
use degree_planner::{CourseCatalog, FileStorage, MemoryStorage, PlannerError, PlannerStore};
use std::fs;
use tempfile::TempDir;

fn catalog() -> CourseCatalog {
    CourseCatalog::bundled().expect("bundled catalog should load")
}

#[test]
fn test_prerequisites_unlock_after_completion() {
    let catalog = catalog();
    let mut store = PlannerStore::open(&catalog, MemoryStorage::new());

    assert!(store.are_prerequisites_met("PSY 201"));
    assert!(!store.are_prerequisites_met("PSY 202"));

    store.mark_completed("PSY 201").unwrap();
    assert!(store.are_prerequisites_met("PSY 202"));
}

#[test]
fn test_alternative_prerequisites() {
    let catalog = catalog();
    let mut store = PlannerStore::open(&catalog, MemoryStorage::new());

    assert!(!store.are_prerequisites_met("ST 351"));
    store.mark_completed("MTH 111").unwrap();
    assert!(store.are_prerequisites_met("ST 351"));

    // PSY 303 needs PSY 201, PSY 202 and one of ST 351 / PSY 310
    store.mark_completed("PSY 201").unwrap();
    store.mark_completed("PSY 202").unwrap();
    assert_eq!(store.unmet_prerequisites("PSY 303").len(), 1);
    store.mark_completed("ST 351").unwrap();
    assert!(store.unmet_prerequisites("PSY 303").is_empty());
}

#[test]
fn test_unknown_course_has_no_prerequisites_and_no_credits() {
    let catalog = catalog();
    let store = PlannerStore::open(&catalog, MemoryStorage::new());

    assert!(store.are_prerequisites_met("XYZ 999"));
    assert_eq!(store.calculate_credits(["XYZ 999"]), 0);
    assert_eq!(store.calculate_credits(["PSY 201", "XYZ 999"]), 4);
}

#[test]
fn test_progress_after_first_course() {
    let catalog = catalog();
    let mut store = PlannerStore::open(&catalog, MemoryStorage::new());

    store.mark_completed("PSY 201").unwrap();
    let progress = store.progress();

    assert_eq!(progress.total_credits, 180);
    assert_eq!(progress.completed_credits, 4);
    assert_eq!(progress.completed_percentage, 2);
    assert_eq!(progress.planned_credits, 0);
    assert_eq!(progress.remaining_credits, 176);
}

#[test]
fn test_planned_credits_exclude_completed() {
    let catalog = catalog();
    let mut store = PlannerStore::open(&catalog, MemoryStorage::new());

    store.add_to_plan("PSY 201", "Fall 2025").unwrap();
    store.add_to_plan("WR 121", "Fall 2025").unwrap();
    assert_eq!(store.progress().planned_credits, 8);

    store.mark_completed("PSY 201").unwrap();
    let progress = store.progress();
    assert_eq!(progress.completed_credits, 4);
    assert_eq!(progress.planned_credits, 4);
}

#[test]
fn test_add_then_remove_restores_plan() {
    let catalog = catalog();
    let mut store = PlannerStore::open(&catalog, MemoryStorage::new());
    let before = store.planned().clone();

    store.add_to_plan("PSY 201", "Fall 2025").unwrap();
    assert_eq!(store.planned_term_of("PSY 201"), Some("Fall 2025"));

    store.remove_from_plan("PSY 201", "Fall 2025").unwrap();
    assert_eq!(store.planned(), &before);
}

#[test]
fn test_mark_completed_is_idempotent() {
    let catalog = catalog();
    let mut store = PlannerStore::open(&catalog, MemoryStorage::new());

    store.mark_completed("PSY 201").unwrap();
    let once = store.completed().clone();
    store.mark_completed("PSY 201").unwrap();

    assert_eq!(store.completed(), &once);
    assert_eq!(store.completed().len(), 1);
}

#[test]
fn test_replanning_moves_course() {
    let catalog = catalog();
    let mut store = PlannerStore::open(&catalog, MemoryStorage::new());

    store.add_to_plan("WR 121", "Fall 2025").unwrap();
    store.add_to_plan("WR 121", "Spring 2026").unwrap();

    assert_eq!(store.planned_term_of("WR 121"), Some("Spring 2026"));
    assert_eq!(store.planned_in("Fall 2025").count(), 0);
}

#[test]
fn test_completion_removes_from_plan() {
    let catalog = catalog();
    let mut store = PlannerStore::open(&catalog, MemoryStorage::new());

    store.add_to_plan("MTH 111", "Winter 2026").unwrap();
    store.mark_completed("MTH 111").unwrap();

    assert!(store.is_completed("MTH 111"));
    assert!(store.planned_term_of("MTH 111").is_none());
    assert_eq!(store.term_credits("Winter 2026"), 0);
}

#[test]
fn test_recommendations_follow_prerequisites() {
    let catalog = catalog();
    let mut store = PlannerStore::open(&catalog, MemoryStorage::new());

    let codes = |store: &PlannerStore<'_, MemoryStorage>| -> Vec<String> {
        store
            .recommendations("psychology_bs")
            .unwrap()
            .into_iter()
            .map(|r| r.course.code.clone())
            .collect()
    };

    let initial = codes(&store);
    assert!(initial.contains(&"PSY 201".to_string()));
    assert!(!initial.contains(&"PSY 202".to_string()));

    store.mark_completed("PSY 201").unwrap();
    store.add_to_plan("WR 121", "Fall 2025").unwrap();
    let next = codes(&store);
    assert!(next.contains(&"PSY 202".to_string()));
    assert!(!next.contains(&"PSY 201".to_string()));
    assert!(!next.contains(&"WR 121".to_string()));
}

#[test]
fn test_recommendations_unknown_degree() {
    let catalog = catalog();
    let store = PlannerStore::open(&catalog, MemoryStorage::new());

    let err = store.recommendations("basket_weaving").unwrap_err();
    assert!(matches!(err, PlannerError::NotFound { .. }));
}

#[test]
fn test_category_progress_counts_listed_courses() {
    let catalog = catalog();
    let mut store = PlannerStore::open(&catalog, MemoryStorage::new());

    store.mark_completed("WR 121").unwrap();
    store.add_to_plan("WR 327", "Fall 2025").unwrap();

    let categories = store.category_progress("psychology_bs").unwrap();
    let writing = categories.iter().find(|c| c.id == "writing").unwrap();

    assert_eq!(writing.completed_credits, 4);
    assert_eq!(writing.planned_credits, 3);
    assert_eq!(writing.remaining_credits, 0);
    assert!(!writing.is_satisfied());
}

#[test]
fn test_file_storage_survives_reopen() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let catalog = catalog();

    {
        let mut store = PlannerStore::open(&catalog, FileStorage::new(dir.path()));
        store.mark_completed("PSY 201").unwrap();
        store.add_to_plan("PSY 202", "Winter 2026").unwrap();
    }

    let store = PlannerStore::open(&catalog, FileStorage::new(dir.path()));
    assert!(store.is_completed("PSY 201"));
    assert_eq!(store.planned_term_of("PSY 202"), Some("Winter 2026"));
    assert!(dir.path().join(format!("{COMPLETED_KEY}.json")).exists());
    assert!(dir.path().join(format!("{PLANNED_KEY}.json")).exists());
}

#[test]
fn test_corrupt_file_falls_back_to_empty() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = FileStorage::new(dir.path());
    fs::write(storage.entry_path(COMPLETED_KEY), "not json at all").unwrap();
    fs::write(
        storage.entry_path(PLANNED_KEY),
        r#"{"Fall 2025": ["WR 121"]}"#,
    )
    .unwrap();

    let catalog = catalog();
    let store = PlannerStore::open(&catalog, storage);

    assert!(store.completed().is_empty());
    assert_eq!(store.planned_term_of("WR 121"), Some("Fall 2025"));
}

#[test]
fn test_unwritable_directory_reports_write_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let blocker = dir.path().join("state");
    fs::write(&blocker, "a file where the directory should be").unwrap();

    let catalog = catalog();
    let mut store = PlannerStore::open(&catalog, FileStorage::new(&blocker));
    let err = store.mark_completed("PSY 201").unwrap_err();

    assert!(matches!(err, PlannerError::PersistenceWrite { .. }));
    assert!(store.is_completed("PSY 201"));
}

#[test]
fn test_what_if_does_not_change_state() {
    let catalog = catalog();
    let store = PlannerStore::open(&catalog, MemoryStorage::new());

    let simulated = store.simulate_completion(["PSY 201", "PSY 202", "XYZ 999"]);
    assert_eq!(simulated.completed_credits, 8);
    assert!(store.completed().is_empty());
}
