//! Progress toward the degree credit target and its requirement categories

use crate::core::catalog::CourseCatalog;
use crate::core::credits::calculate_credits;
use crate::core::models::{Course, DegreeRequirement, PlannedCourses, RequirementCategory};
use serde::Serialize;
use std::collections::BTreeSet;

/// Credit split against a degree's total
///
/// Each percentage is rounded on its own, so the three need not sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    /// Degree credit target
    pub total_credits: u32,
    /// Credits from completed courses
    pub completed_credits: u32,
    /// Credits from planned courses not already completed
    pub planned_credits: u32,
    /// Credits neither completed nor planned (never negative)
    pub remaining_credits: u32,
    /// `completed_credits / total_credits`, as a rounded percentage
    pub completed_percentage: u32,
    /// `planned_credits / total_credits`, as a rounded percentage
    pub planned_percentage: u32,
    /// `remaining_credits / total_credits`, as a rounded percentage
    pub remaining_percentage: u32,
}

/// Progress within one requirement category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProgress {
    /// Category id
    pub id: String,
    /// Category display name
    pub name: String,
    /// Credits the category needs
    pub required_credits: u32,
    /// Completed credits counting toward the category
    pub completed_credits: u32,
    /// Planned (not completed) credits counting toward the category
    pub planned_credits: u32,
    /// `completed_credits + planned_credits`
    pub total_credits: u32,
    /// Completed share of the requirement, capped at 100
    pub completed_percentage: u32,
    /// Completed-plus-planned share of the requirement, capped at 100
    pub planned_percentage: u32,
    /// Credits still unaccounted for (never negative)
    pub remaining_credits: u32,
}

impl CategoryProgress {
    /// Whether completed credits alone meet the requirement
    #[must_use]
    pub const fn is_satisfied(&self) -> bool {
        self.completed_credits >= self.required_credits
    }
}

/// Round `part / whole` to a whole percentage, half away from zero.
///
/// A zero `whole` yields 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percentage(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (f64::from(part) / f64::from(whole) * 100.0).round() as u32
}

/// Planned codes across all terms, minus anything already completed
fn outstanding_planned<'a>(
    completed: &BTreeSet<String>,
    planned: &'a PlannedCourses,
) -> BTreeSet<&'a str> {
    planned
        .values()
        .flatten()
        .filter(|code| !completed.contains(*code))
        .map(String::as_str)
        .collect()
}

/// Split the degree target into completed, planned and remaining credits
#[must_use]
pub fn compute_progress(
    catalog: &CourseCatalog,
    completed: &BTreeSet<String>,
    planned: &PlannedCourses,
    total_credits: u32,
) -> ProgressSnapshot {
    let completed_credits = calculate_credits(catalog, completed);
    let planned_credits = calculate_credits(catalog, outstanding_planned(completed, planned));
    let remaining_credits = total_credits
        .saturating_sub(completed_credits)
        .saturating_sub(planned_credits);

    ProgressSnapshot {
        total_credits,
        completed_credits,
        planned_credits,
        remaining_credits,
        completed_percentage: percentage(completed_credits, total_credits),
        planned_percentage: percentage(planned_credits, total_credits),
        remaining_percentage: percentage(remaining_credits, total_credits),
    }
}

/// Whether `course` counts toward `category`
pub(crate) fn counts_toward(course: &Course, id: &str, category: &RequirementCategory) -> bool {
    course.fulfils(id) || category.lists(&course.code)
}

/// Progress within a single requirement category
#[must_use]
pub fn compute_category_progress(
    catalog: &CourseCatalog,
    id: &str,
    category: &RequirementCategory,
    completed: &BTreeSet<String>,
    planned: &PlannedCourses,
) -> CategoryProgress {
    let relevant = |code: &&str| {
        catalog
            .find_course(code)
            .is_some_and(|course| counts_toward(course, id, category))
    };

    let completed_credits = calculate_credits(
        catalog,
        completed.iter().map(String::as_str).filter(relevant),
    );
    let planned_credits = calculate_credits(
        catalog,
        outstanding_planned(completed, planned).into_iter().filter(relevant),
    );
    let total_credits = completed_credits.saturating_add(planned_credits);
    let required = category.required_credits;

    CategoryProgress {
        id: id.to_string(),
        name: category.name.clone(),
        required_credits: required,
        completed_credits,
        planned_credits,
        total_credits,
        completed_percentage: percentage(completed_credits, required).min(100),
        planned_percentage: percentage(total_credits, required).min(100),
        remaining_credits: required.saturating_sub(total_credits),
    }
}

/// Progress for every category of `degree`, ordered by category id
#[must_use]
pub fn compute_degree_categories(
    catalog: &CourseCatalog,
    degree: &DegreeRequirement,
    completed: &BTreeSet<String>,
    planned: &PlannedCourses,
) -> Vec<CategoryProgress> {
    degree
        .categories
        .iter()
        .map(|(id, category)| compute_category_progress(catalog, id, category, completed, planned))
        .collect()
}
