//! GPA calculation over completed courses

use crate::core::catalog::CourseCatalog;
use crate::core::error::PlannerError;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Letter grade on a 4.0 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Grade {
    /// A+
    APlus,
    /// A
    #[default]
    A,
    /// A-
    AMinus,
    /// B+
    BPlus,
    /// B
    B,
    /// B-
    BMinus,
    /// C+
    CPlus,
    /// C
    C,
    /// C-
    CMinus,
    /// D+
    DPlus,
    /// D
    D,
    /// D-
    DMinus,
    /// F
    F,
}

impl Grade {
    /// Every grade, best first
    pub const ALL: [Self; 13] = [
        Self::APlus,
        Self::A,
        Self::AMinus,
        Self::BPlus,
        Self::B,
        Self::BMinus,
        Self::CPlus,
        Self::C,
        Self::CMinus,
        Self::DPlus,
        Self::D,
        Self::DMinus,
        Self::F,
    ];

    /// Grade points
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::APlus | Self::A => 4.0,
            Self::AMinus => 3.7,
            Self::BPlus => 3.3,
            Self::B => 3.0,
            Self::BMinus => 2.7,
            Self::CPlus => 2.3,
            Self::C => 2.0,
            Self::CMinus => 1.7,
            Self::DPlus => 1.3,
            Self::D => 1.0,
            Self::DMinus => 0.7,
            Self::F => 0.0,
        }
    }

    /// Letter form (e.g., "B+")
    #[must_use]
    pub const fn letter(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::DMinus => "D-",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl FromStr for Grade {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|g| g.letter() == wanted)
            .ok_or_else(|| PlannerError::InvalidGrade(s.to_string()))
    }
}

/// Grade assigned to one completed course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeEntry {
    /// Course code
    pub code: String,
    /// Grade earned
    pub grade: Grade,
    /// Whether the course counts toward the GPA
    pub included: bool,
}

/// One entry per completed course: grade A and included unless overridden.
///
/// Overrides for codes that are not completed are ignored.
#[must_use]
pub fn grade_sheet(
    completed: &BTreeSet<String>,
    grades: &BTreeMap<String, Grade>,
    excluded: &BTreeSet<String>,
) -> Vec<GradeEntry> {
    completed
        .iter()
        .map(|code| GradeEntry {
            code: code.clone(),
            grade: grades.get(code).copied().unwrap_or_default(),
            included: !excluded.contains(code),
        })
        .collect()
}

/// Credit-weighted GPA of the included entries.
///
/// Unknown courses are skipped. `None` when no credits are included.
#[must_use]
pub fn compute_gpa(catalog: &CourseCatalog, entries: &[GradeEntry]) -> Option<f64> {
    let (points, credits) = entries
        .iter()
        .filter(|e| e.included)
        .filter_map(|e| catalog.find_course(&e.code).map(|c| (c.credits, e.grade)))
        .fold((0.0, 0.0), |(points, credits), (c, grade)| {
            let c = f64::from(c);
            (points + c * grade.points(), credits + c)
        });

    (credits > 0.0).then(|| points / credits)
}
