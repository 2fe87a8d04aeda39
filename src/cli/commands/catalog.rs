//! Catalog browsing: `courses`, `course` and `offerings`

use degree_planner::config::Config;
use degree_planner::core::models::term::season_of;
use degree_planner::core::models::{Course, Season};
use degree_planner::core::search::{search, CourseQuery};
use degree_planner::{verbose, CourseCatalog, FileStorage, PlannerStore};

use super::{load_catalog, open_store};

/// Status marker for a course in listings
fn status(store: &PlannerStore<'_, FileStorage>, code: &str) -> String {
    if store.is_completed(code) {
        "completed".to_string()
    } else if let Some(term) = store.planned_term_of(code) {
        format!("planned {term}")
    } else if store.are_prerequisites_met(code) {
        "available".to_string()
    } else {
        "locked".to_string()
    }
}

fn offered(course: &Course) -> String {
    if course.terms_offered.is_empty() {
        "-".to_string()
    } else {
        course
            .terms_offered
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// List catalog courses matching the filters
pub fn run_courses(
    config: &Config,
    text: Option<String>,
    category: Option<String>,
    term: Option<String>,
) {
    let catalog = load_catalog(config);
    let store = open_store(&catalog, config);
    let query = CourseQuery {
        text,
        category,
        term,
    };

    let found = search(&catalog, &query);
    if found.is_empty() {
        println!("No courses match.");
        return;
    }

    for course in &found {
        println!(
            "{:<10} {:>2} cr  {:<45} [{}]",
            course.code,
            course.credits,
            course.title,
            status(&store, &course.code)
        );
        verbose!("           offered: {}", offered(course));
    }
    println!("\n{} of {} courses", found.len(), catalog.all_courses().len());
}

/// Show one course in detail
pub fn run_course(config: &Config, code: &str) {
    let catalog = load_catalog(config);
    let course = match catalog.require_course(code) {
        Ok(course) => course,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };
    let store = open_store(&catalog, config);

    println!("\n=== {} - {} ===\n", course.code, course.title);
    if !course.description.is_empty() {
        println!("{}\n", course.description);
    }
    println!("Credits:        {}", course.credits);
    println!("Offered:        {}", offered(course));
    if !course.requirement_categories.is_empty() {
        let categories: Vec<&str> = course.requirement_categories.iter().map(String::as_str).collect();
        println!("Fulfils:        {}", categories.join(", "));
    }
    println!("Status:         {}", status(&store, &course.code));

    if course.has_prerequisites() {
        println!("\nPrerequisites:");
        let unmet = store.unmet_prerequisites(&course.code);
        for expr in &course.prerequisites {
            let mark = if unmet.contains(&expr) { "✗" } else { "✓" };
            println!("  {mark} {expr}");
        }
    } else {
        println!("\nPrerequisites:  none");
    }
}

/// Print the season → courses index
pub fn run_offerings(config: &Config, term: Option<&str>) {
    let catalog = load_catalog(config);

    match term {
        Some(label) => {
            let Some(season) = season_of(label) else {
                eprintln!("✗ Unknown term '{label}' (expected a season or e.g. \"Fall 2025\")");
                std::process::exit(1);
            };
            print_season(&catalog, season);
        }
        None => {
            for season in Season::ALL {
                print_season(&catalog, season);
            }
        }
    }
}

fn print_season(catalog: &CourseCatalog, season: Season) {
    let codes = catalog.term_offerings().codes_for(season.label());
    println!("\n{season} ({} courses)", codes.len());
    for code in codes {
        let title = catalog.find_course(code).map_or("", |c| c.title.as_str());
        println!("  {code:<10} {title}");
    }
}
