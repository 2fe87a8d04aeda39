//! Planner state: completed courses and courses planned by term

use super::term::compare_labels;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Courses planned per term label
pub type PlannedCourses = BTreeMap<String, BTreeSet<String>>;

/// The student's mutable planning state.
///
/// Invariants maintained by every method:
/// - a course code is planned in at most one term;
/// - a completed code is not planned in any term;
/// - no term maps to an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerState {
    completed: BTreeSet<String>,
    planned: PlannedCourses,
}

impl PlannerState {
    /// Create an empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from possibly inconsistent parts, repairing the invariants.
    ///
    /// Completed codes are dropped from planned terms, and a code planned in
    /// several terms is kept only in the earliest one.
    #[must_use]
    pub fn from_parts(completed: BTreeSet<String>, planned: PlannedCourses) -> Self {
        let mut state = Self { completed, planned };
        state.repair();
        state
    }

    /// Completed course codes
    #[must_use]
    pub const fn completed(&self) -> &BTreeSet<String> {
        &self.completed
    }

    /// Planned course codes by term
    #[must_use]
    pub const fn planned(&self) -> &PlannedCourses {
        &self.planned
    }

    /// Courses planned in `term` (empty when the term has none)
    pub fn planned_in<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a String> + 'a {
        self.planned.get(term).into_iter().flatten()
    }

    /// Whether `code` has been completed
    #[must_use]
    pub fn is_completed(&self, code: &str) -> bool {
        self.completed.contains(code)
    }

    /// The term `code` is planned in, if any
    #[must_use]
    pub fn planned_term_of(&self, code: &str) -> Option<&str> {
        self.planned
            .iter()
            .find(|(_, codes)| codes.contains(code))
            .map(|(term, _)| term.as_str())
    }

    /// Every planned code that is not also completed
    #[must_use]
    pub fn planned_codes(&self) -> BTreeSet<&str> {
        self.planned
            .values()
            .flatten()
            .filter(|code| !self.completed.contains(*code))
            .map(String::as_str)
            .collect()
    }

    /// Term labels with planned courses, in chronological order
    #[must_use]
    pub fn terms_chronological(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.planned.keys().map(String::as_str).collect();
        terms.sort_by(|a, b| compare_labels(a, b));
        terms
    }

    /// Mark `code` completed, removing it from any planned term.
    ///
    /// Returns `true` if the state changed.
    pub fn mark_completed(&mut self, code: &str) -> bool {
        let removed = self.remove_everywhere(code, None);
        let inserted = self.completed.insert(code.to_string());
        inserted || removed
    }

    /// Remove `code` from the completed set. Planning is not restored.
    ///
    /// Returns `true` if the state changed.
    pub fn unmark_completed(&mut self, code: &str) -> bool {
        self.completed.remove(code)
    }

    /// Plan `code` in `term`, moving it out of any other term.
    ///
    /// Completion status is not checked. Returns `true` if the state changed.
    pub fn add_to_plan(&mut self, code: &str, term: &str) -> bool {
        if self.planned.get(term).is_some_and(|codes| codes.contains(code)) {
            return false;
        }
        self.remove_everywhere(code, Some(term));
        self.planned
            .entry(term.to_string())
            .or_default()
            .insert(code.to_string());
        true
    }

    /// Remove `code` from `term`. Returns `true` if it was planned there.
    pub fn remove_from_plan(&mut self, code: &str, term: &str) -> bool {
        let Some(codes) = self.planned.get_mut(term) else {
            return false;
        };
        let removed = codes.remove(code);
        if codes.is_empty() {
            self.planned.remove(term);
        }
        removed
    }

    /// Remove `code` from every planned term except `keep`.
    fn remove_everywhere(&mut self, code: &str, keep: Option<&str>) -> bool {
        let mut removed = false;
        for (term, codes) in &mut self.planned {
            if Some(term.as_str()) != keep {
                removed |= codes.remove(code);
            }
        }
        self.planned.retain(|_, codes| !codes.is_empty());
        removed
    }

    /// Repair invariants. Returns the number of planned entries dropped.
    pub fn repair(&mut self) -> usize {
        let mut dropped = 0;
        let mut seen: BTreeSet<String> = BTreeSet::new();

        let mut terms: Vec<String> = self.planned.keys().cloned().collect();
        terms.sort_by(|a, b| compare_labels(a, b));

        for term in terms {
            if let Some(codes) = self.planned.get_mut(&term) {
                let before = codes.len();
                codes.retain(|code| !self.completed.contains(code) && seen.insert(code.clone()));
                dropped += before - codes.len();
            }
        }
        self.planned.retain(|_, codes| !codes.is_empty());
        dropped
    }
}
