//! Error taxonomy for the planner core

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the planner core.
///
/// Pure evaluators (prerequisites, credits, progress) never produce these;
/// they resolve missing data to conservative defaults instead.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// The course catalog could not be loaded. Fatal for the session.
    #[error("failed to load catalog {path}: {reason}")]
    DataLoad {
        /// Catalog location
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// A stored snapshot entry could not be read or parsed.
    #[error("could not read stored '{key}': {reason}")]
    PersistenceRead {
        /// Storage key of the entry
        key: String,
        /// What went wrong
        reason: String,
    },

    /// A mutation was applied in memory but could not be saved.
    #[error("could not save '{key}': {reason}")]
    PersistenceWrite {
        /// Storage key of the entry
        key: String,
        /// What went wrong
        reason: String,
    },

    /// A lookup by id found nothing.
    #[error("{kind} not found: '{id}'")]
    NotFound {
        /// What was looked up ("course", "degree", ...)
        kind: &'static str,
        /// The id that was requested
        id: String,
    },

    /// A term label did not parse as "Season Year".
    #[error("invalid term '{0}' (expected e.g. \"Fall 2025\")")]
    InvalidTerm(String),

    /// A letter grade was not on the grade scale.
    #[error("invalid grade '{0}'")]
    InvalidGrade(String),

    /// Exporting the plan failed.
    #[error("export failed: {0}")]
    Export(String),
}

impl PlannerError {
    /// Shorthand for a missing course.
    #[must_use]
    pub fn course_not_found(code: &str) -> Self {
        Self::NotFound {
            kind: "course",
            id: code.to_string(),
        }
    }

    /// Shorthand for a missing degree requirement.
    #[must_use]
    pub fn degree_not_found(id: &str) -> Self {
        Self::NotFound {
            kind: "degree",
            id: id.to_string(),
        }
    }

    /// Whether the session can continue after this error.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::DataLoad { .. })
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(error: serde_json::Error) -> Self {
        Self::Export(error.to_string())
    }
}
