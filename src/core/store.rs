//! Planner state store: owns the student's state and persists every change
//!
//! The store borrows the catalog for the session and owns its storage
//! backend. Mutators apply the change in memory first and then write the full
//! snapshot; a failed write is reported but never rolls the change back.

use crate::core::catalog::CourseCatalog;
use crate::core::credits::calculate_credits;
use crate::core::error::PlannerError;
use crate::core::models::{
    Course, PlannedCourses, PlannerState, PrerequisiteExpr, Term, DEFAULT_TOTAL_CREDITS,
};
use crate::core::offerings::TermOfferings;
use crate::core::prerequisites;
use crate::core::progress::{self, CategoryProgress, ProgressSnapshot};
use crate::core::recommend::{self, Recommendation};
use crate::core::storage::{Storage, COMPLETED_KEY, PLANNED_KEY};
use crate::{debug, info, warn};
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;

/// Mutable planner state bound to a catalog and a storage backend
#[derive(Debug)]
pub struct PlannerStore<'c, S: Storage> {
    catalog: &'c CourseCatalog,
    storage: S,
    state: PlannerState,
    total_credits: u32,
}

impl<'c, S: Storage> PlannerStore<'c, S> {
    /// Open a store, hydrating state from `storage`.
    ///
    /// Each entry is read on its own. A missing entry is empty; an entry that
    /// cannot be read or parsed is logged and treated as empty. Opening never fails.
    pub fn open(catalog: &'c CourseCatalog, storage: S) -> Self {
        let completed: BTreeSet<String> = read_entry(&storage, COMPLETED_KEY);
        let planned: PlannedCourses = read_entry(&storage, PLANNED_KEY);

        let stored_entries = planned_entry_count(&planned);
        let state = PlannerState::from_parts(completed, planned);
        let dropped = stored_entries - planned_entry_count(state.planned());
        if dropped > 0 {
            info!("Dropped {dropped} stale planned entries while loading saved state");
        }

        debug!(
            "Planner state loaded: {} completed, {} planned terms",
            state.completed().len(),
            state.planned().len()
        );

        Self {
            catalog,
            storage,
            state,
            total_credits: DEFAULT_TOTAL_CREDITS,
        }
    }

    /// Set the degree credit target used by [`progress`](Self::progress)
    #[must_use]
    pub const fn with_total_credits(mut self, total_credits: u32) -> Self {
        self.total_credits = total_credits;
        self
    }

    // ---- read-only accessors ----

    /// The catalog this store evaluates against
    #[must_use]
    pub const fn catalog(&self) -> &'c CourseCatalog {
        self.catalog
    }

    /// Current state snapshot
    #[must_use]
    pub const fn state(&self) -> &PlannerState {
        &self.state
    }

    /// Completed course codes
    #[must_use]
    pub const fn completed(&self) -> &BTreeSet<String> {
        self.state.completed()
    }

    /// Planned course codes by term
    #[must_use]
    pub const fn planned(&self) -> &PlannedCourses {
        self.state.planned()
    }

    /// Courses planned in `term`
    pub fn planned_in<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a String> + 'a {
        self.state.planned_in(term)
    }

    /// Whether `code` is completed
    #[must_use]
    pub fn is_completed(&self, code: &str) -> bool {
        self.state.is_completed(code)
    }

    /// Term `code` is planned in, if any
    #[must_use]
    pub fn planned_term_of(&self, code: &str) -> Option<&str> {
        self.state.planned_term_of(code)
    }

    /// Degree credit target in use
    #[must_use]
    pub const fn total_credits(&self) -> u32 {
        self.total_credits
    }

    /// The storage backend
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    // ---- mutators ----

    /// Mark `code` completed; completion supersedes any planned term.
    ///
    /// # Errors
    /// [`PlannerError::PersistenceWrite`] if the change could not be saved.
    /// The in-memory state is updated either way.
    pub fn mark_completed(&mut self, code: &str) -> Result<(), PlannerError> {
        if self.state.mark_completed(code) {
            debug!("Marked {code} completed");
        }
        self.persist()
    }

    /// Remove `code` from the completed set.
    ///
    /// # Errors
    /// [`PlannerError::PersistenceWrite`] if the change could not be saved.
    pub fn unmark_completed(&mut self, code: &str) -> Result<(), PlannerError> {
        if self.state.unmark_completed(code) {
            debug!("Unmarked {code} as completed");
        }
        self.persist()
    }

    /// Plan `code` in `term`, moving it out of any other term.
    ///
    /// Prerequisites and completion are not checked here; callers decide.
    ///
    /// # Errors
    /// [`PlannerError::PersistenceWrite`] if the change could not be saved.
    pub fn add_to_plan(&mut self, code: &str, term: &str) -> Result<(), PlannerError> {
        if self.state.add_to_plan(code, term) {
            debug!("Planned {code} in {term}");
        }
        self.persist()
    }

    /// Remove `code` from `term`.
    ///
    /// # Errors
    /// [`PlannerError::PersistenceWrite`] if the change could not be saved.
    pub fn remove_from_plan(&mut self, code: &str, term: &str) -> Result<(), PlannerError> {
        if self.state.remove_from_plan(code, term) {
            debug!("Removed {code} from {term}");
        }
        self.persist()
    }

    /// Move `code` from `from` to `to` with a single save.
    ///
    /// # Errors
    /// [`PlannerError::PersistenceWrite`] if the change could not be saved.
    pub fn move_in_plan(&mut self, code: &str, from: &str, to: &str) -> Result<(), PlannerError> {
        if from != to {
            self.state.remove_from_plan(code, from);
            self.state.add_to_plan(code, to);
            debug!("Moved {code} from {from} to {to}");
        }
        self.persist()
    }

    /// Write the full snapshot, one entry per key.
    ///
    /// Both entries are attempted; the first failure is returned.
    fn persist(&mut self) -> Result<(), PlannerError> {
        let completed = serde_json::to_string(self.state.completed());
        let planned = serde_json::to_string(self.state.planned());

        let mut first_error = None;
        for (key, payload) in [(COMPLETED_KEY, completed), (PLANNED_KEY, planned)] {
            let result = payload
                .map_err(|e| e.to_string())
                .and_then(|json| self.storage.write(key, &json).map_err(|e| e.to_string()));
            if let Err(reason) = result {
                warn!("Saving '{key}' failed; changes are kept for this session only: {reason}");
                first_error.get_or_insert(PlannerError::PersistenceWrite {
                    key: key.to_string(),
                    reason,
                });
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    // ---- derived queries ----

    /// Whether the prerequisites of `code` are met by the completed set
    #[must_use]
    pub fn are_prerequisites_met(&self, code: &str) -> bool {
        prerequisites::are_prerequisites_met(self.catalog, code, self.state.completed())
    }

    /// Prerequisite expressions of `code` not yet satisfied
    #[must_use]
    pub fn unmet_prerequisites(&self, code: &str) -> Vec<&'c PrerequisiteExpr> {
        prerequisites::unmet_prerequisites(self.catalog, code, self.state.completed())
    }

    /// Credit sum of `codes`; unknown codes count zero
    #[must_use]
    pub fn calculate_credits<I, T>(&self, codes: I) -> u32
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        calculate_credits(self.catalog, codes)
    }

    /// Credits planned in `term`
    #[must_use]
    pub fn term_credits(&self, term: &str) -> u32 {
        calculate_credits(self.catalog, self.state.planned_in(term))
    }

    /// Season → offered course codes
    #[must_use]
    pub const fn term_offerings(&self) -> &'c TermOfferings {
        self.catalog.term_offerings()
    }

    /// Degree-wide credit progress
    #[must_use]
    pub fn progress(&self) -> ProgressSnapshot {
        progress::compute_progress(
            self.catalog,
            self.state.completed(),
            self.state.planned(),
            self.total_credits,
        )
    }

    /// Progress as if `extra` were also completed; the store is not changed
    #[must_use]
    pub fn simulate_completion<I, T>(&self, extra: I) -> ProgressSnapshot
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut completed = self.state.completed().clone();
        completed.extend(extra.into_iter().map(|c| c.as_ref().to_string()));
        progress::compute_progress(
            self.catalog,
            &completed,
            self.state.planned(),
            self.total_credits,
        )
    }

    /// Per-category progress for `degree_id`
    ///
    /// # Errors
    /// [`PlannerError::NotFound`] if the degree is unknown.
    pub fn category_progress(&self, degree_id: &str) -> Result<Vec<CategoryProgress>, PlannerError> {
        let degree = self.catalog.degree_requirement(degree_id)?;
        Ok(progress::compute_degree_categories(
            self.catalog,
            degree,
            self.state.completed(),
            self.state.planned(),
        ))
    }

    /// Eligible, not yet completed or planned courses per category of `degree_id`
    ///
    /// # Errors
    /// [`PlannerError::NotFound`] if the degree is unknown.
    pub fn recommendations(&self, degree_id: &str) -> Result<Vec<Recommendation<'c>>, PlannerError> {
        let degree = self.catalog.degree_requirement(degree_id)?;
        Ok(recommend::recommend(self.catalog, degree, &self.state))
    }

    /// Latest term that still has planned courses
    #[must_use]
    pub fn graduation_term(&self) -> Option<Term> {
        self.state
            .planned()
            .iter()
            .filter(|(_, codes)| !codes.is_empty())
            .filter_map(|(label, _)| label.parse::<Term>().ok())
            .max()
    }

    /// Catalog records of the courses planned in `term`; unknown codes are skipped
    #[must_use]
    pub fn planned_courses_in(&self, term: &str) -> Vec<&'c Course> {
        self.state
            .planned_in(term)
            .filter_map(|code| self.catalog.find_course(code))
            .collect()
    }
}

fn planned_entry_count(planned: &PlannedCourses) -> usize {
    planned.values().map(BTreeSet::len).sum()
}

/// Read and decode one entry, falling back to the empty value on any problem.
fn read_entry<S, T>(storage: &S, key: &str) -> T
where
    S: Storage,
    T: DeserializeOwned + Default,
{
    let decoded = storage
        .read(key)
        .map_err(|e| e.to_string())
        .and_then(|raw| {
            raw.map_or(Ok(T::default()), |json| {
                serde_json::from_str(&json).map_err(|e| e.to_string())
            })
        });

    decoded.unwrap_or_else(|reason| {
        let error = PlannerError::PersistenceRead {
            key: key.to_string(),
            reason,
        };
        warn!("{error}; starting from an empty value");
        T::default()
    })
}
