//! Course model

use super::PrerequisiteExpr;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// Represents a course in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course code (e.g., "PSY 201")
    #[serde(rename = "course_code", alias = "code")]
    pub code: String,

    /// Course title (e.g., "General Psychology")
    #[serde(default)]
    pub title: String,

    /// Catalog description
    #[serde(default)]
    pub description: String,

    /// Credit value (always positive once loaded)
    pub credits: u32,

    /// Prerequisite expressions; all must hold
    #[serde(default)]
    pub prerequisites: Vec<PrerequisiteExpr>,

    /// Seasons the course is usually offered in (e.g., "Fall", "Winter")
    #[serde(default, deserialize_with = "one_or_many")]
    pub terms_offered: BTreeSet<String>,

    /// Requirement category ids this course can fulfil
    #[serde(default, deserialize_with = "one_or_many")]
    pub requirement_categories: BTreeSet<String>,

    /// Display grouping from the catalog (e.g., "Psychology")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Course {
    /// Create a new course with no prerequisites or offerings
    ///
    /// # Arguments
    /// * `code` - Course code
    /// * `title` - Course title
    /// * `credits` - Credit value
    #[must_use]
    pub const fn new(code: String, title: String, credits: u32) -> Self {
        Self {
            code,
            title,
            description: String::new(),
            credits,
            prerequisites: Vec::new(),
            terms_offered: BTreeSet::new(),
            requirement_categories: BTreeSet::new(),
            category: None,
        }
    }

    /// Add a prerequisite expression, skipping exact duplicates
    pub fn add_prerequisite(&mut self, expr: PrerequisiteExpr) {
        if !self.prerequisites.contains(&expr) {
            self.prerequisites.push(expr);
        }
    }

    /// Record a season the course is offered in
    pub fn add_term_offered(&mut self, season: &str) {
        self.terms_offered.insert(season.trim().to_string());
    }

    /// Record a requirement category the course fulfils
    pub fn add_requirement_category(&mut self, category_id: &str) {
        self.requirement_categories.insert(category_id.to_string());
    }

    /// Whether the course has any prerequisite expressions
    #[must_use]
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }

    /// Whether the course is offered in `season` (case-insensitive)
    #[must_use]
    pub fn is_offered_in(&self, season: &str) -> bool {
        self.terms_offered
            .iter()
            .any(|t| t.eq_ignore_ascii_case(season))
    }

    /// Whether the course counts toward `category_id`
    #[must_use]
    pub fn fulfils(&self, category_id: &str) -> bool {
        self.requirement_categories.contains(category_id)
    }
}

/// Catalog files carry either a single string or a list for set-valued fields.
fn one_or_many<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    let values = match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    };
    Ok(values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect())
}
