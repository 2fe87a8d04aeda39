//! CLI argument definitions for `degreeplan`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use degree_planner::config::ConfigOverrides;
use degree_planner::core::export::ExportFormat;
use degree_planner::core::gpa::Grade;
use degree_planner::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Export format argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ExportFormatArg {
    /// One row per planned course
    Csv,
    /// Full snapshot with progress
    Json,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Csv => Self::Csv,
            ExportFormatArg::Json => Self::Json,
        }
    }
}

/// Parse a `CODE=GRADE` pair such as `PSY 201=B+`
///
/// # Errors
/// Returns a message if the `=` is missing or the grade is not on the scale.
pub fn parse_grade_assignment(s: &str) -> Result<(String, Grade), String> {
    let (code, grade) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected CODE=GRADE, got '{s}'"))?;
    let code = code.trim();
    if code.is_empty() {
        return Err(format!("missing course code in '{s}'"));
    }
    let grade = grade.parse::<Grade>().map_err(|e| e.to_string())?;
    Ok((code.to_string(), grade))
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `degree`, `data_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum PlanSubcommand {
    /// Plan a course in a term (e.g., `plan add "PSY 202" "Fall 2025"`).
    ///
    /// Refuses unknown and completed courses. Unmet prerequisites and
    /// off-season terms are refused unless `--force` is given.
    Add {
        /// Course code
        #[arg(value_name = "CODE")]
        code: String,
        /// Term label, "Season Year"
        #[arg(value_name = "TERM")]
        term: String,
        /// Plan even if prerequisites are unmet or the course is not offered that season
        #[arg(long)]
        force: bool,
    },
    /// Remove a course from a term.
    Remove {
        /// Course code
        #[arg(value_name = "CODE")]
        code: String,
        /// Term label
        #[arg(value_name = "TERM")]
        term: String,
    },
    /// Move a planned course to another term.
    Move {
        /// Course code
        #[arg(value_name = "CODE")]
        code: String,
        /// Current term
        #[arg(value_name = "FROM")]
        from: String,
        /// New term
        #[arg(value_name = "TO")]
        to: String,
    },
    /// Show the plan term by term.
    Show {
        /// Also list this many upcoming terms from the configured start term
        #[arg(long, value_name = "N", default_value_t = 0)]
        upcoming: usize,
        /// Include summer terms in the upcoming list
        #[arg(long)]
        summer: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum NotesSubcommand {
    /// Print the saved notes.
    Show,
    /// Add a line to the notes.
    Add {
        /// Text to append
        #[arg(value_name = "TEXT", num_args = 1..)]
        text: Vec<String>,
    },
    /// Replace the notes with new text.
    Set {
        /// New notes text
        #[arg(value_name = "TEXT", num_args = 1..)]
        text: Vec<String>,
    },
    /// Delete all notes.
    Clear,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// List or search the course catalog.
    Courses {
        /// Case-insensitive text to look for in code, title or description
        #[arg(short, long, value_name = "TEXT")]
        search: Option<String>,
        /// Requirement category id or display category
        #[arg(short, long, value_name = "CATEGORY")]
        category: Option<String>,
        /// Season or term the course must be offered in
        #[arg(short, long, value_name = "TERM")]
        term: Option<String>,
    },
    /// Show one course and whether its prerequisites are met.
    Course {
        /// Course code
        #[arg(value_name = "CODE")]
        code: String,
    },
    /// Show which courses are offered in each season.
    Offerings {
        /// Season or term to show (all seasons when omitted)
        #[arg(value_name = "TERM")]
        term: Option<String>,
    },
    /// Mark courses as completed.
    Complete {
        /// Course codes
        #[arg(value_name = "CODES", num_args = 1..)]
        codes: Vec<String>,
    },
    /// Remove courses from the completed list.
    Uncomplete {
        /// Course codes
        #[arg(value_name = "CODES", num_args = 1..)]
        codes: Vec<String>,
    },
    /// Plan courses by term.
    Plan {
        #[command(subcommand)]
        subcommand: PlanSubcommand,
    },
    /// Show credit progress toward the degree.
    Progress {
        /// Also show progress per requirement category
        #[arg(long)]
        categories: bool,
    },
    /// Suggest eligible courses for unmet requirements.
    Recommend {
        /// Show at most this many suggestions
        #[arg(short = 'n', long, value_name = "N")]
        limit: Option<usize>,
    },
    /// Show progress as if the given courses were completed. Nothing is saved.
    WhatIf {
        /// Course codes to simulate
        #[arg(value_name = "CODES", num_args = 1..)]
        codes: Vec<String>,
    },
    /// Compute GPA over completed courses (grade A unless overridden).
    Gpa {
        /// Grade for a course, as CODE=GRADE (repeatable)
        #[arg(short, long = "grade", value_name = "CODE=GRADE", value_parser = parse_grade_assignment)]
        grades: Vec<(String, Grade)>,
        /// Leave a course out of the GPA (repeatable)
        #[arg(short, long = "exclude", value_name = "CODE")]
        excludes: Vec<String>,
    },
    /// Keep free-text notes next to the plan.
    ///
    /// If no subcommand is provided, prints the notes.
    Notes {
        #[command(subcommand)]
        subcommand: Option<NotesSubcommand>,
    },
    /// Export the plan.
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormatArg,
        /// Output file (defaults to the configured exports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "degreeplan",
    about = "Degree planner command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config catalog file
    #[arg(long = "config-catalog", value_name = "FILE")]
    pub config_catalog: Option<PathBuf>,

    /// Override config catalog file (short form)
    #[arg(long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Override config data directory
    #[arg(long = "config-data-dir", value_name = "DIR")]
    pub config_data_dir: Option<PathBuf>,

    /// Override config data directory (short form)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override config exports directory
    #[arg(long = "config-exports-dir", value_name = "DIR")]
    pub config_exports_dir: Option<PathBuf>,

    /// Override config degree id
    #[arg(long = "config-degree", value_name = "ID")]
    pub config_degree: Option<String>,

    /// Override config degree id (short form)
    #[arg(long = "degree", value_name = "ID")]
    pub degree: Option<String>,

    /// Override the degree credit target
    #[arg(long = "total-credits", value_name = "CREDITS")]
    pub total_credits: Option<u32>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--catalog`) take precedence over long-form
    /// flags (e.g., `--config-catalog`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            catalog: path_string(self.catalog.as_ref().or(self.config_catalog.as_ref())),
            data_dir: path_string(self.data_dir.as_ref().or(self.config_data_dir.as_ref())),
            exports_dir: path_string(self.config_exports_dir.as_ref()),
            degree: self.degree.clone().or_else(|| self.config_degree.clone()),
            total_credits: self.total_credits,
        }
    }
}
