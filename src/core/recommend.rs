//! Course recommendations per requirement category

use crate::core::catalog::CourseCatalog;
use crate::core::models::{Course, DegreeRequirement, PlannerState};
use crate::core::prerequisites::are_prerequisites_met;
use crate::core::progress::counts_toward;
use serde::Serialize;

/// A course the student could take next, and the category it serves
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation<'c> {
    /// Recommended course
    pub course: &'c Course,
    /// Requirement category id
    pub category_id: String,
    /// Human-readable reason
    pub reason: String,
}

/// Eligible courses for every category of `degree`.
///
/// A course is eligible when it is neither completed nor planned and its
/// prerequisites are met. It appears once per category it counts toward.
/// The result is stable-sorted by credits, lightest first.
#[must_use]
pub fn recommend<'c>(
    catalog: &'c CourseCatalog,
    degree: &DegreeRequirement,
    state: &PlannerState,
) -> Vec<Recommendation<'c>> {
    let planned = state.planned_codes();
    let eligible: Vec<&Course> = catalog
        .all_courses()
        .iter()
        .filter(|c| !state.is_completed(&c.code) && !planned.contains(c.code.as_str()))
        .filter(|c| are_prerequisites_met(catalog, &c.code, state.completed()))
        .collect();

    let mut picks = Vec::new();
    for (id, category) in &degree.categories {
        let name = if category.name.is_empty() { id } else { &category.name };
        picks.extend(
            eligible
                .iter()
                .copied()
                .filter(|course| counts_toward(course, id, category))
                .map(|course| Recommendation {
                    course,
                    category_id: id.clone(),
                    reason: format!("Fulfills {name} requirement"),
                }),
        );
    }

    picks.sort_by_key(|r| r.course.credits);
    picks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{PrerequisiteExpr, RequirementCategory};
    use std::collections::BTreeMap;

    fn fixture() -> (CourseCatalog, DegreeRequirement) {
        let mut intro = Course::new("PSY 201".to_string(), String::new(), 4);
        intro.add_requirement_category("core");
        let mut second = Course::new("PSY 202".to_string(), String::new(), 4);
        second.add_prerequisite(PrerequisiteExpr::parse("PSY 201"));
        second.add_requirement_category("core");
        let mut lab = Course::new("PSY 210".to_string(), String::new(), 2);
        lab.add_requirement_category("core");
        lab.add_requirement_category("lab");
        let writing = Course::new("WR 121".to_string(), String::new(), 3);

        let mut degree = DegreeRequirement::new("Psychology BS".to_string());
        degree.add_category("core".to_string(), RequirementCategory::new("Psychology Core".to_string(), 12));
        degree.add_category("lab".to_string(), RequirementCategory::new(String::new(), 2));
        let mut writing_req = RequirementCategory::new("Writing".to_string(), 3);
        writing_req.courses.push("WR 121".to_string());
        degree.add_category("writing".to_string(), writing_req);

        let catalog =
            CourseCatalog::from_parts(vec![intro, second, lab, writing], BTreeMap::new()).unwrap();
        (catalog, degree)
    }

    fn codes<'a>(recs: &'a [Recommendation<'_>]) -> Vec<(&'a str, &'a str)> {
        recs.iter()
            .map(|r| (r.course.code.as_str(), r.category_id.as_str()))
            .collect()
    }

    #[test]
    fn test_fresh_student() {
        let (catalog, degree) = fixture();
        let recs = recommend(&catalog, &degree, &PlannerState::new());

        assert_eq!(
            codes(&recs),
            [
                ("PSY 210", "core"),
                ("PSY 210", "lab"),
                ("WR 121", "writing"),
                ("PSY 201", "core"),
            ]
        );
        assert_eq!(recs[0].reason, "Fulfills Psychology Core requirement");
        assert_eq!(recs[1].reason, "Fulfills lab requirement");
    }

    #[test]
    fn test_completed_and_planned_are_excluded() {
        let (catalog, degree) = fixture();
        let mut state = PlannerState::new();
        state.mark_completed("PSY 201");
        state.add_to_plan("WR 121", "Fall 2025");

        let recs = recommend(&catalog, &degree, &state);
        let listed: Vec<&str> = recs.iter().map(|r| r.course.code.as_str()).collect();

        assert!(listed.contains(&"PSY 202"));
        assert!(!listed.contains(&"PSY 201"));
        assert!(!listed.contains(&"WR 121"));
    }
}
