//! Plan export to CSV and JSON
//!
//! Exporters only read planner state; they never mutate the store.

use crate::core::catalog::CourseCatalog;
use crate::core::error::PlannerError;
use crate::core::models::{PlannedCourses, PlannerState};
use crate::core::progress::ProgressSnapshot;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// One row per planned course
    Csv,
    /// Full planner snapshot with progress
    Json,
}

impl ExportFormat {
    /// File extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Exporter for this format
    #[must_use]
    pub fn exporter(self) -> Box<dyn PlanExporter> {
        match self {
            Self::Csv => Box::new(CsvExporter),
            Self::Json => Box::new(JsonExporter),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(PlannerError::Export(format!("Unknown export format: {s}"))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Everything an exporter may read
#[derive(Debug, Clone, Copy)]
pub struct ExportContext<'a> {
    /// Catalog used to resolve codes
    pub catalog: &'a CourseCatalog,
    /// Planner state being exported
    pub state: &'a PlannerState,
    /// Progress at export time
    pub progress: ProgressSnapshot,
    /// Export timestamp
    pub exported_at: DateTime<Utc>,
}

impl<'a> ExportContext<'a> {
    /// Context stamped with the current time
    #[must_use]
    pub fn new(catalog: &'a CourseCatalog, state: &'a PlannerState, progress: ProgressSnapshot) -> Self {
        Self {
            catalog,
            state,
            progress,
            exported_at: Utc::now(),
        }
    }

    /// Override the timestamp
    #[must_use]
    pub const fn at(mut self, exported_at: DateTime<Utc>) -> Self {
        self.exported_at = exported_at;
        self
    }
}

/// Renders a planner snapshot into a document
pub trait PlanExporter {
    /// Render the export document
    ///
    /// # Errors
    /// Returns [`PlannerError::Export`] if serialization fails.
    fn render(&self, ctx: &ExportContext) -> Result<String, PlannerError>;
}

/// Render with `exporter` and write the result to `path`, creating parent directories.
///
/// # Errors
/// Returns [`PlannerError::Export`] if rendering or writing fails.
pub fn export_to_file(
    exporter: &dyn PlanExporter,
    ctx: &ExportContext,
    path: &Path,
) -> Result<(), PlannerError> {
    let content = exporter.render(ctx)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| PlannerError::Export(format!("{}: {e}", parent.display())))?;
    }
    fs::write(path, content).map_err(|e| PlannerError::Export(format!("{}: {e}", path.display())))
}

/// CSV with one row per known planned course, terms in chronological order
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl CsvExporter {
    const HEADER: &'static str = "Term,Course Code,Course Title,Credits,Prerequisites";
}

impl PlanExporter for CsvExporter {
    fn render(&self, ctx: &ExportContext) -> Result<String, PlannerError> {
        let mut out = String::from(Self::HEADER);
        out.push('\n');

        for term in ctx.state.terms_chronological() {
            for course in ctx
                .state
                .planned_in(term)
                .filter_map(|code| ctx.catalog.find_course(code))
            {
                let prerequisites = course
                    .prerequisites
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                writeln!(
                    out,
                    "{},{},{},{},{}",
                    csv_field(term),
                    csv_field(&course.code),
                    quoted(&course.title),
                    course.credits,
                    quoted(&prerequisites)
                )
                .map_err(|e| PlannerError::Export(e.to_string()))?;
            }
        }
        Ok(out)
    }
}

/// Always-quoted CSV field
fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// CSV field, quoted only when it has to be
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        quoted(value)
    } else {
        value.to_string()
    }
}

/// Pretty JSON snapshot of the plan
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSnapshot<'a> {
    planned_courses: &'a PlannedCourses,
    completed_courses: &'a BTreeSet<String>,
    export_date: String,
    progress: ProgressSnapshot,
}

impl PlanExporter for JsonExporter {
    fn render(&self, ctx: &ExportContext) -> Result<String, PlannerError> {
        let snapshot = JsonSnapshot {
            planned_courses: ctx.state.planned(),
            completed_courses: ctx.state.completed(),
            export_date: ctx.exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            progress: ctx.progress,
        };
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Course, PrerequisiteExpr};
    use crate::core::progress::compute_progress;
    use chrono::TimeZone;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn catalog() -> CourseCatalog {
        let intro = Course::new("PSY 201".to_string(), "General Psychology".to_string(), 4);
        let mut second = Course::new("PSY 202".to_string(), "Mind, \"Brain\" and Behavior".to_string(), 4);
        second.add_prerequisite(PrerequisiteExpr::parse("PSY 201"));
        second.add_prerequisite(PrerequisiteExpr::parse("MTH 105 or MTH 111"));
        let writing = Course::new("WR 121".to_string(), "Academic Writing".to_string(), 3);
        CourseCatalog::from_parts(vec![intro, second, writing], BTreeMap::new()).unwrap()
    }

    fn state() -> PlannerState {
        let mut state = PlannerState::new();
        state.mark_completed("PSY 201");
        state.add_to_plan("WR 121", "Winter 2026");
        state.add_to_plan("PSY 202", "Fall 2025");
        state.add_to_plan("XYZ 999", "Fall 2025");
        state
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("json".parse::<ExportFormat>().unwrap().extension(), "json");
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_csv_rows_in_term_order_with_escaping() {
        let catalog = catalog();
        let state = state();
        let progress = compute_progress(&catalog, state.completed(), state.planned(), 180);
        let csv = CsvExporter
            .render(&ExportContext::new(&catalog, &state, progress))
            .unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            [
                "Term,Course Code,Course Title,Credits,Prerequisites",
                "Fall 2025,PSY 202,\"Mind, \"\"Brain\"\" and Behavior\",4,\"PSY 201; MTH 105 or MTH 111\"",
                "Winter 2026,WR 121,\"Academic Writing\",3,\"\"",
            ]
        );
    }

    #[test]
    fn test_json_snapshot_shape() {
        let catalog = catalog();
        let state = state();
        let progress = compute_progress(&catalog, state.completed(), state.planned(), 180);
        let at = Utc.with_ymd_and_hms(2025, 9, 1, 12, 0, 0).unwrap();
        let json = JsonExporter
            .render(&ExportContext::new(&catalog, &state, progress).at(at))
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["exportDate"], "2025-09-01T12:00:00.000Z");
        assert_eq!(value["completedCourses"], serde_json::json!(["PSY 201"]));
        assert_eq!(
            value["plannedCourses"]["Fall 2025"],
            serde_json::json!(["PSY 202", "XYZ 999"])
        );
        assert_eq!(value["progress"]["completedCredits"], 4);
        assert_eq!(value["progress"]["plannedCredits"], 7);
        assert_eq!(value["progress"]["totalCredits"], 180);
        assert!(value["progress"].get("completed_credits").is_none());
    }

    #[test]
    fn test_export_to_file_creates_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("exports").join("plan.csv");
        let catalog = catalog();
        let state = state();
        let progress = compute_progress(&catalog, state.completed(), state.planned(), 180);

        export_to_file(
            ExportFormat::Csv.exporter().as_ref(),
            &ExportContext::new(&catalog, &state, progress),
            &path,
        )
        .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Term,Course Code"));
    }
}
