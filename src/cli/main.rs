//! Command-line interface entry point for `degreeplan`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use degree_planner::config::Config;
use degree_planner::info;
use degree_planner::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins over config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse::<Level>().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Courses {
            search,
            category,
            term,
        } => commands::catalog::run_courses(&config, search, category, term),
        Command::Course { code } => commands::catalog::run_course(&config, &code),
        Command::Offerings { term } => commands::catalog::run_offerings(&config, term.as_deref()),
        Command::Complete { codes } => commands::plan::run_complete(&config, &codes),
        Command::Uncomplete { codes } => commands::plan::run_uncomplete(&config, &codes),
        Command::Plan { subcommand } => commands::plan::run(subcommand, &config),
        Command::Progress { categories } => commands::progress::run_progress(&config, categories),
        Command::Recommend { limit } => commands::progress::run_recommend(&config, limit),
        Command::WhatIf { codes } => commands::progress::run_what_if(&config, &codes),
        Command::Gpa { grades, excludes } => commands::gpa::run(&config, &grades, &excludes),
        Command::Notes { subcommand } => commands::notes::run(subcommand, &config),
        Command::Export { format, output } => {
            commands::export::run(&config, format.into(), output);
        }
    }
}
