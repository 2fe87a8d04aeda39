//! Credit aggregation

use crate::core::catalog::CourseCatalog;

/// Sum the credits of `codes`, resolving each against the catalog.
///
/// Codes the catalog does not know contribute nothing. Every occurrence in
/// `codes` is counted, so callers pass deduplicated input when that matters.
/// The sum saturates at `u32::MAX`.
#[must_use]
pub fn calculate_credits<I, S>(catalog: &CourseCatalog, codes: I) -> u32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    codes
        .into_iter()
        .filter_map(|code| catalog.find_course(code.as_ref()))
        .fold(0_u32, |acc, course| acc.saturating_add(course.credits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Course;
    use std::collections::BTreeMap;

    fn catalog() -> CourseCatalog {
        CourseCatalog::from_parts(
            vec![
                Course::new("PSY 201".to_string(), String::new(), 4),
                Course::new("PSY 202".to_string(), String::new(), 4),
                Course::new("WR 121".to_string(), String::new(), 3),
            ],
            BTreeMap::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(calculate_credits(&catalog(), Vec::<String>::new()), 0);
    }

    #[test]
    fn test_sum_is_order_independent() {
        let catalog = catalog();
        let forward = calculate_credits(&catalog, ["PSY 201", "WR 121", "PSY 202"]);
        let backward = calculate_credits(&catalog, ["PSY 202", "WR 121", "PSY 201"]);
        assert_eq!(forward, 11);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_unknown_codes_contribute_zero() {
        let catalog = catalog();
        assert_eq!(calculate_credits(&catalog, ["XYZ 999"]), 0);
        assert_eq!(calculate_credits(&catalog, ["XYZ 999", "WR 121"]), 3);
    }

    #[test]
    fn test_huge_credit_values_saturate() {
        let catalog = CourseCatalog::from_json(
            r#"{
                "courses": [
                    {"course_code": "BIG 1", "title": "", "credits": 3000000000},
                    {"course_code": "BIG 2", "title": "", "credits": 3000000000}
                ],
                "degree_requirements": {}
            }"#,
        )
        .unwrap();

        assert_eq!(calculate_credits(&catalog, ["BIG 1", "BIG 2"]), u32::MAX);
        assert_eq!(calculate_credits(&catalog, ["BIG 1"]), 3_000_000_000);
    }
}
