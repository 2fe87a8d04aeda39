//! GPA command handler

use degree_planner::config::Config;
use degree_planner::core::gpa::{compute_gpa, grade_sheet, Grade};
use std::collections::{BTreeMap, BTreeSet};

use super::{load_catalog, open_store};

/// Print a grade sheet for completed courses and the resulting GPA
pub fn run(config: &Config, grades: &[(String, Grade)], excludes: &[String]) {
    let catalog = load_catalog(config);
    let store = open_store(&catalog, config);

    if store.completed().is_empty() {
        println!("No completed courses yet. Mark some with `degreeplan complete <CODE>`.");
        return;
    }

    let grades: BTreeMap<String, Grade> = grades.iter().cloned().collect();
    let excluded: BTreeSet<String> = excludes.iter().cloned().collect();
    for code in grades.keys().chain(&excluded) {
        if !store.is_completed(code) {
            eprintln!("⚠ {code} is not completed; ignored");
        }
    }

    let sheet = grade_sheet(store.completed(), &grades, &excluded);

    println!("\n=== GPA ===\n");
    for entry in &sheet {
        let credits = catalog.find_course(&entry.code).map_or(0, |c| c.credits);
        let included = if entry.included { "" } else { "  (excluded)" };
        println!("  {:<10} {:>2} cr  {:<2}{included}", entry.code, credits, entry.grade.letter());
    }

    match compute_gpa(&catalog, &sheet) {
        Some(gpa) => println!("\nGPA: {gpa:.2}"),
        None => println!("\nGPA: n/a (no credits included)"),
    }
}
