//! Catalog search

use crate::core::catalog::CourseCatalog;
use crate::core::models::term::season_of;
use crate::core::models::Course;

/// Filters for [`search`]; unset filters match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseQuery {
    /// Case-insensitive substring of code, title or description
    pub text: Option<String>,
    /// Requirement category id, or display category name
    pub category: Option<String>,
    /// Season or full term label the course must be offered in
    pub term: Option<String>,
}

impl CourseQuery {
    /// Query matching every course
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to courses whose text contains `text`
    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    /// Restrict to courses in `category`
    #[must_use]
    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Restrict to courses offered in `term`
    #[must_use]
    pub fn term(mut self, term: &str) -> Self {
        self.term = Some(term.to_string());
        self
    }

    /// Whether `course` passes every set filter
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        self.matches_text(course) && self.matches_category(course) && self.matches_term(course)
    }

    fn matches_text(&self, course: &Course) -> bool {
        let Some(needle) = self.text.as_deref().map(str::trim).filter(|t| !t.is_empty()) else {
            return true;
        };
        let needle = needle.to_lowercase();
        [&course.code, &course.title, &course.description]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_category(&self, course: &Course) -> bool {
        self.category.as_deref().map_or(true, |category| {
            course.fulfils(category)
                || course
                    .category
                    .as_deref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(category))
        })
    }

    fn matches_term(&self, course: &Course) -> bool {
        self.term.as_deref().map_or(true, |label| {
            season_of(label).map_or_else(
                || course.is_offered_in(label.trim()),
                |season| course.is_offered_in(season.label()),
            )
        })
    }
}

/// Courses matching `query`, in catalog order
#[must_use]
pub fn search<'c>(catalog: &'c CourseCatalog, query: &CourseQuery) -> Vec<&'c Course> {
    catalog
        .all_courses()
        .iter()
        .filter(|course| query.matches(course))
        .collect()
}
