//! CLI command handlers for `degreeplan`.
//!
//! Each command is implemented in its own submodule. Handlers print `✓`/`✗`
//! lines and exit non-zero on failures the user has to act on.

pub mod catalog;
pub mod config;
pub mod export;
pub mod gpa;
pub mod notes;
pub mod plan;
pub mod progress;

use degree_planner::config::Config;
use degree_planner::core::models::DEFAULT_TOTAL_CREDITS;
use degree_planner::{error, info, warn};
use degree_planner::{CourseCatalog, FileStorage, PlannerError, PlannerStore};

/// Load the configured catalog, or exit if it cannot be loaded.
pub fn load_catalog(config: &Config) -> CourseCatalog {
    let loaded = config
        .catalog_path()
        .map_or_else(CourseCatalog::bundled, CourseCatalog::load);

    match loaded {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("{e}");
            eprintln!("✗ {e}");
            eprintln!("  Fix the catalog file or point `paths.catalog` at a valid one, then run the command again.");
            std::process::exit(1);
        }
    }
}

/// Open the planner store over the configured data directory.
///
/// The credit target is the configured `total_credits` when non-zero,
/// otherwise the configured degree's own total.
pub fn open_store<'c>(catalog: &'c CourseCatalog, config: &Config) -> PlannerStore<'c, FileStorage> {
    let data_dir = config.data_dir();
    info!("Planner data directory: {}", data_dir.display());

    let total_credits = if config.planner.total_credits > 0 {
        config.planner.total_credits
    } else {
        catalog
            .degree_requirement(&config.planner.degree)
            .map_or(DEFAULT_TOTAL_CREDITS, |d| d.total_credits)
    };

    PlannerStore::open(catalog, FileStorage::new(data_dir)).with_total_credits(total_credits)
}

/// Report the outcome of a mutation.
///
/// A failed save is a warning: the change holds for this run only.
pub fn report_saved(result: Result<(), PlannerError>, done: &str) {
    match result {
        Ok(()) => println!("✓ {done}"),
        Err(e @ PlannerError::PersistenceWrite { .. }) => {
            warn!("{e}");
            println!("✓ {done}");
            eprintln!("⚠ Saved unsuccessfully; this change will be lost when the program exits: {e}");
        }
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

/// Configured degree id, or exit with the list of valid ids.
pub fn require_degree<'a>(catalog: &CourseCatalog, config: &'a Config) -> &'a str {
    let degree = config.planner.degree.as_str();
    if catalog.degree_requirement(degree).is_err() {
        let known: Vec<&str> = catalog.degree_ids().collect();
        eprintln!("✗ Unknown degree '{degree}'. Available: {}", known.join(", "));
        std::process::exit(1);
    }
    degree
}
