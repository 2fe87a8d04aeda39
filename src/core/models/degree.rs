//! Degree requirement model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Credit target used when a degree does not state its own.
pub const DEFAULT_TOTAL_CREDITS: u32 = 180;

const fn default_total_credits() -> u32 {
    DEFAULT_TOTAL_CREDITS
}

/// A named bucket of a degree's requirements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementCategory {
    /// Display name (e.g., "Psychology Core")
    #[serde(default)]
    pub name: String,

    /// Credits needed to satisfy the category
    #[serde(default)]
    pub required_credits: u32,

    /// Explicit qualifying course codes, if the catalog lists them
    #[serde(default)]
    pub courses: Vec<String>,
}

impl RequirementCategory {
    /// Create a category with no explicit course list
    #[must_use]
    pub const fn new(name: String, required_credits: u32) -> Self {
        Self {
            name,
            required_credits,
            courses: Vec::new(),
        }
    }

    /// Whether `code` is on this category's explicit course list
    #[must_use]
    pub fn lists(&self, code: &str) -> bool {
        self.courses.iter().any(|c| c == code)
    }
}

/// Requirement structure for one degree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeRequirement {
    /// Degree name (e.g., "Psychology BS")
    #[serde(default)]
    pub name: String,

    /// Credits needed to graduate
    #[serde(default = "default_total_credits")]
    pub total_credits: u32,

    /// Categories keyed by category id
    #[serde(default)]
    pub categories: BTreeMap<String, RequirementCategory>,
}

impl DegreeRequirement {
    /// Create a degree with the default credit target and no categories
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            total_credits: DEFAULT_TOTAL_CREDITS,
            categories: BTreeMap::new(),
        }
    }

    /// Add or replace a category
    pub fn add_category(&mut self, id: String, category: RequirementCategory) {
        self.categories.insert(id, category);
    }

    /// Look up a category by id
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&RequirementCategory> {
        self.categories.get(id)
    }

    /// Sum of all category credit thresholds
    #[must_use]
    pub fn categorized_credits(&self) -> u32 {
        self.categories
            .values()
            .fold(0_u32, |acc, c| acc.saturating_add(c.required_credits))
    }
}
