//! Term offering index: which courses run in which season

use crate::core::models::{term::season_of, Course};
use std::collections::BTreeMap;

/// Season label → course codes offered that season, in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermOfferings {
    by_season: BTreeMap<String, Vec<String>>,
}

impl TermOfferings {
    /// Group `courses` by every entry of their `terms_offered` set
    #[must_use]
    pub fn build(courses: &[Course]) -> Self {
        let mut by_season: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for course in courses {
            for season in &course.terms_offered {
                by_season
                    .entry(season.clone())
                    .or_default()
                    .push(course.code.clone());
            }
        }
        Self { by_season }
    }

    /// Codes offered for `label`, which may be a season ("Fall") or a term ("Fall 2025")
    #[must_use]
    pub fn codes_for(&self, label: &str) -> &[String] {
        self.resolve(label).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether `code` is offered in the season of `label`
    #[must_use]
    pub fn is_offered(&self, code: &str, label: &str) -> bool {
        self.codes_for(label).iter().any(|c| c == code)
    }

    /// Season labels present in the index
    pub fn seasons(&self) -> impl Iterator<Item = &str> {
        self.by_season.keys().map(String::as_str)
    }

    /// The underlying mapping
    #[must_use]
    pub const fn as_map(&self) -> &BTreeMap<String, Vec<String>> {
        &self.by_season
    }

    /// Whether no course lists any offering
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_season.is_empty()
    }

    fn resolve(&self, label: &str) -> Option<&Vec<String>> {
        if let Some(codes) = self.by_season.get(label.trim()) {
            return Some(codes);
        }
        let season = season_of(label)?;
        self.by_season
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(season.label()))
            .map(|(_, codes)| codes)
    }
}
