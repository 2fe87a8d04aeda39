//! Read-only reports: `progress`, `recommend` and `what-if`

use degree_planner::config::Config;
use degree_planner::core::progress::{CategoryProgress, ProgressSnapshot};
use degree_planner::verbose;

use super::{load_catalog, open_store, require_degree};

const BAR_WIDTH: usize = 30;

/// Text progress bar for a percentage (capped at 100)
fn bar(percent: u32) -> String {
    let filled = (percent.min(100) as usize * BAR_WIDTH + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn print_snapshot(snapshot: &ProgressSnapshot) {
    println!("Total credits required: {}", snapshot.total_credits);
    println!(
        "  Completed  {:>4} cr  {:>3}%  {}",
        snapshot.completed_credits,
        snapshot.completed_percentage,
        bar(snapshot.completed_percentage)
    );
    println!(
        "  Planned    {:>4} cr  {:>3}%  {}",
        snapshot.planned_credits,
        snapshot.planned_percentage,
        bar(snapshot.planned_percentage)
    );
    println!(
        "  Remaining  {:>4} cr  {:>3}%",
        snapshot.remaining_credits, snapshot.remaining_percentage
    );
}

fn print_category(category: &CategoryProgress) {
    let mark = if category.is_satisfied() { "✓" } else { " " };
    println!(
        "  {mark} {:<36} {:>3}/{:<3} cr  {}  (+{} planned)",
        category.name,
        category.completed_credits,
        category.required_credits,
        bar(category.completed_percentage),
        category.planned_credits
    );
    verbose!(
        "      with planned: {}%, still needed: {} cr",
        category.planned_percentage,
        category.remaining_credits
    );
}

/// Print degree progress, optionally per category
pub fn run_progress(config: &Config, categories: bool) {
    let catalog = load_catalog(config);
    let store = open_store(&catalog, config);

    println!("\n=== Degree Progress ===\n");
    print_snapshot(&store.progress());

    if let Some(term) = store.graduation_term() {
        println!("\nLast planned term: {term}");
    }

    if categories {
        let degree = require_degree(&catalog, config);
        match store.category_progress(degree) {
            Ok(all) => {
                println!("\nRequirements ({degree}):");
                for category in &all {
                    print_category(category);
                }
            }
            Err(e) => eprintln!("✗ {e}"),
        }
    }
}

/// Print eligible courses per unmet category
pub fn run_recommend(config: &Config, limit: Option<usize>) {
    let catalog = load_catalog(config);
    let store = open_store(&catalog, config);
    let degree = require_degree(&catalog, config);

    let recommendations = match store.recommendations(degree) {
        Ok(recs) => recs,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    if recommendations.is_empty() {
        println!("No eligible courses to recommend right now.");
        return;
    }

    println!("\n=== Recommended Courses ===\n");
    for rec in recommendations.iter().take(limit.unwrap_or(usize::MAX)) {
        println!(
            "  {:<10} {:>2} cr  {:<40} {}",
            rec.course.code, rec.course.credits, rec.course.title, rec.reason
        );
    }
}

/// Print progress as if `codes` were completed
pub fn run_what_if(config: &Config, codes: &[String]) {
    let catalog = load_catalog(config);
    let store = open_store(&catalog, config);

    for code in codes.iter().filter(|c| !catalog.contains(c)) {
        eprintln!("⚠ Unknown course '{code}' counts for nothing");
    }

    let current = store.progress();
    let simulated = store.simulate_completion(codes);

    println!("\n=== Current ===\n");
    print_snapshot(&current);
    println!("\n=== If completed: {} ===\n", codes.join(", "));
    print_snapshot(&simulated);
    println!(
        "\n+{} credits completed, +{}%",
        simulated
            .completed_credits
            .saturating_sub(current.completed_credits),
        simulated
            .completed_percentage
            .saturating_sub(current.completed_percentage)
    );
}
