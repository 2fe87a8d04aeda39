//! State-changing commands: `complete`, `uncomplete` and `plan ...`

use crate::args::PlanSubcommand;
use degree_planner::config::Config;
use degree_planner::core::models::term::{compare_labels, season_of};
use degree_planner::core::models::Term;
use degree_planner::{debug, CourseCatalog, FileStorage, PlannerStore};

use super::{load_catalog, open_store, report_saved};

/// Mark each code completed; exits 1 after the loop if any code was unknown
pub fn run_complete(config: &Config, codes: &[String]) {
    let catalog = load_catalog(config);
    let mut store = open_store(&catalog, config);
    let mut failed = false;

    for code in codes {
        if !catalog.contains(code) {
            eprintln!("✗ Unknown course '{code}'");
            failed = true;
            continue;
        }
        let was_planned = store.planned_term_of(code).map(str::to_string);
        let result = store.mark_completed(code);
        let done = was_planned.map_or_else(
            || format!("Marked {code} completed"),
            |term| format!("Marked {code} completed (removed from {term})"),
        );
        report_saved(result, &done);
    }
    if failed {
        std::process::exit(1);
    }
}

/// Remove each code from the completed set; exits 1 after the loop if any was not completed
pub fn run_uncomplete(config: &Config, codes: &[String]) {
    let catalog = load_catalog(config);
    let mut store = open_store(&catalog, config);
    let mut failed = false;

    for code in codes {
        if !store.is_completed(code) {
            eprintln!("✗ {code} is not marked completed");
            failed = true;
            continue;
        }
        let result = store.unmark_completed(code);
        report_saved(result, &format!("Unmarked {code}"));
    }
    if failed {
        std::process::exit(1);
    }
}

/// Dispatch `plan` subcommands
pub fn run(subcommand: PlanSubcommand, config: &Config) {
    let catalog = load_catalog(config);
    let mut store = open_store(&catalog, config);

    match subcommand {
        PlanSubcommand::Add { code, term, force } => {
            handle_add(&catalog, &mut store, &code, &term, force);
        }
        PlanSubcommand::Remove { code, term } => {
            let term = stored_term(&term);
            if store.planned_in(&term).all(|c| *c != code) {
                eprintln!("✗ {code} is not planned in {term}");
                std::process::exit(1);
            }
            let result = store.remove_from_plan(&code, &term);
            report_saved(result, &format!("Removed {code} from {term}"));
        }
        PlanSubcommand::Move { code, from, to } => {
            let from = stored_term(&from);
            let to = canonical_term(&to);
            if store.planned_in(&from).all(|c| *c != code) {
                eprintln!("✗ {code} is not planned in {from}");
                std::process::exit(1);
            }
            if !catalog.term_offerings().is_offered(&code, &to) {
                eprintln!("⚠ {code} is not usually offered in {to}");
            }
            let result = store.move_in_plan(&code, &from, &to);
            report_saved(result, &format!("Moved {code} from {from} to {to}"));
        }
        PlanSubcommand::Show { upcoming, summer } => handle_show(config, &store, upcoming, summer),
    }
}

/// Parse and re-format a term label, exiting on malformed input
fn canonical_term(label: &str) -> String {
    match label.parse::<Term>() {
        Ok(term) => term.to_string(),
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

/// Term label as it is stored: "Season Year" labels are normalized, anything
/// else (e.g. a hand-edited "Transfer" entry) is kept as typed.
fn stored_term(label: &str) -> String {
    label
        .parse::<Term>()
        .map_or_else(|_| label.trim().to_string(), |term| term.to_string())
}

fn handle_add(
    catalog: &CourseCatalog,
    store: &mut PlannerStore<'_, FileStorage>,
    code: &str,
    term: &str,
    force: bool,
) {
    let term = canonical_term(term);

    if !catalog.contains(code) {
        eprintln!("✗ Unknown course '{code}'");
        std::process::exit(1);
    }
    if store.is_completed(code) {
        eprintln!("✗ {code} is already completed");
        std::process::exit(1);
    }

    let mut blocked = false;
    let unmet = store.unmet_prerequisites(code);
    if !unmet.is_empty() {
        let missing: Vec<String> = unmet.iter().map(ToString::to_string).collect();
        eprintln!("✗ Prerequisites not met for {code}: {}", missing.join(", "));
        blocked = true;
    }
    if !catalog.term_offerings().is_offered(code, &term) {
        let season = season_of(&term).map_or("that season", |s| s.label());
        eprintln!("✗ {code} is not offered in {season}");
        blocked = true;
    }
    if blocked {
        if !force {
            eprintln!("  Use --force to plan it anyway.");
            std::process::exit(1);
        }
        debug!("Planning {code} in {term} despite warnings (--force)");
    }

    let previous = store.planned_term_of(code).map(str::to_string);
    let result = store.add_to_plan(code, &term);
    let done = match previous {
        Some(prev) if prev != term => format!("Moved {code} from {prev} to {term}"),
        _ => format!("Planned {code} in {term}"),
    };
    report_saved(result, &done);
    println!("  {term}: {} credits planned", store.term_credits(&term));
}

fn handle_show(config: &Config, store: &PlannerStore<'_, FileStorage>, upcoming: usize, summer: bool) {
    let state = store.state();
    let mut terms: Vec<String> = state
        .terms_chronological()
        .into_iter()
        .map(str::to_string)
        .collect();

    if upcoming > 0 {
        match config.planner.start_term.parse::<Term>() {
            Ok(start) => {
                for term in Term::upcoming(start, upcoming, summer) {
                    let label = term.to_string();
                    if !terms.contains(&label) {
                        terms.push(label);
                    }
                }
                terms.sort_by(|a, b| compare_labels(a, b));
            }
            Err(e) => eprintln!("⚠ Cannot list upcoming terms from start_term: {e}"),
        }
    }

    if terms.is_empty() {
        println!("No courses planned yet. Try `degreeplan plan add <CODE> <TERM>`.");
        return;
    }

    for term in &terms {
        let courses = store.planned_courses_in(term);
        println!("\n{term} ({} credits)", store.term_credits(term));
        if courses.is_empty() {
            println!("  (nothing planned)");
        }
        for course in courses {
            let mark = if store.are_prerequisites_met(&course.code) { " " } else { "!" };
            println!("  {mark} {:<10} {:>2} cr  {}", course.code, course.credits, course.title);
        }
        let unknown: Vec<&String> = store
            .planned_in(term)
            .filter(|code| !store.catalog().contains(code))
            .collect();
        for code in unknown {
            println!("  ? {code:<10}     (not in catalog)");
        }
    }

    if let Some(last) = store.graduation_term() {
        println!("\nLast planned term: {last}");
    }
}
