//! Prerequisite evaluation
//!
//! A course's prerequisite list is a conjunction of expressions; each
//! expression is a single course or an OR-group of alternatives. Courses the
//! catalog does not know are treated as having no prerequisites, so external
//! or transfer courses never block planning.

use crate::core::catalog::CourseCatalog;
use crate::core::models::PrerequisiteExpr;
use std::collections::BTreeSet;

/// Whether every prerequisite expression of `code` is satisfied by `completed`
#[must_use]
pub fn are_prerequisites_met(
    catalog: &CourseCatalog,
    code: &str,
    completed: &BTreeSet<String>,
) -> bool {
    catalog.find_course(code).map_or(true, |course| {
        course
            .prerequisites
            .iter()
            .all(|expr| expr.is_satisfied_by(completed))
    })
}

/// Prerequisite expressions of `code` that `completed` does not satisfy
///
/// Empty for unknown courses and for courses whose prerequisites are met.
#[must_use]
pub fn unmet_prerequisites<'c>(
    catalog: &'c CourseCatalog,
    code: &str,
    completed: &BTreeSet<String>,
) -> Vec<&'c PrerequisiteExpr> {
    catalog.find_course(code).map_or_else(Vec::new, |course| {
        course
            .prerequisites
            .iter()
            .filter(|expr| !expr.is_satisfied_by(completed))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Course;
    use std::collections::BTreeMap;

    fn catalog() -> CourseCatalog {
        let intro = Course::new("PSY 201".to_string(), "General Psychology".to_string(), 4);
        let mut second = Course::new("PSY 202".to_string(), "General Psychology II".to_string(), 4);
        second.add_prerequisite(PrerequisiteExpr::parse("PSY 201"));
        let mut methods = Course::new("PSY 301".to_string(), "Research Methods".to_string(), 4);
        methods.add_prerequisite(PrerequisiteExpr::parse("PSY 202"));
        methods.add_prerequisite(PrerequisiteExpr::parse("ST 201 or ST 351"));
        CourseCatalog::from_parts(vec![intro, second, methods], BTreeMap::new()).unwrap()
    }

    fn done(codes: &[&str]) -> BTreeSet<String> {
        codes.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_no_prerequisites_always_met() {
        let catalog = catalog();
        assert!(are_prerequisites_met(&catalog, "PSY 201", &done(&[])));
        assert!(are_prerequisites_met(&catalog, "PSY 201", &done(&["PSY 999"])));
    }

    #[test]
    fn test_simple_prerequisite() {
        let catalog = catalog();
        assert!(!are_prerequisites_met(&catalog, "PSY 202", &done(&[])));
        assert!(are_prerequisites_met(&catalog, "PSY 202", &done(&["PSY 201"])));
    }

    #[test]
    fn test_and_across_or_within() {
        let catalog = catalog();
        assert!(!are_prerequisites_met(&catalog, "PSY 301", &done(&["PSY 202"])));
        assert!(!are_prerequisites_met(&catalog, "PSY 301", &done(&["ST 201"])));
        assert!(are_prerequisites_met(&catalog, "PSY 301", &done(&["PSY 202", "ST 201"])));
        assert!(are_prerequisites_met(&catalog, "PSY 301", &done(&["PSY 202", "ST 351"])));
        assert!(are_prerequisites_met(
            &catalog,
            "PSY 301",
            &done(&["PSY 202", "ST 201", "ST 351"])
        ));
    }

    #[test]
    fn test_unknown_course_is_not_blocked() {
        let catalog = catalog();
        assert!(are_prerequisites_met(&catalog, "XYZ 999", &done(&[])));
        assert!(unmet_prerequisites(&catalog, "XYZ 999", &done(&[])).is_empty());
    }

    #[test]
    fn test_unmet_lists_remaining_expressions() {
        let catalog = catalog();
        let unmet = unmet_prerequisites(&catalog, "PSY 301", &done(&["PSY 202"]));
        assert_eq!(unmet.len(), 1);
        assert_eq!(unmet[0].to_string(), "ST 201 or ST 351");
    }
}
