//! Prerequisite expressions

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Separator between alternatives in the textual form ("PSY 201 or PSY 202").
const OR_SEPARATOR: &str = " or ";

/// One entry of a course's prerequisite list.
///
/// A course's expressions are combined with AND; the alternatives inside an
/// [`PrerequisiteExpr::AnyOf`] group are combined with OR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPrerequisite", into = "String")]
pub enum PrerequisiteExpr {
    /// A single required course code
    Course(String),
    /// Any one of these course codes satisfies the expression
    AnyOf(Vec<String>),
}

impl PrerequisiteExpr {
    /// Build an expression from a list of alternatives.
    ///
    /// Blank entries are dropped and a single alternative collapses to
    /// [`PrerequisiteExpr::Course`].
    #[must_use]
    pub fn from_alternatives<I, S>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut codes: Vec<String> = alternatives
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if codes.len() == 1 {
            Self::Course(codes.remove(0))
        } else {
            Self::AnyOf(codes)
        }
    }

    /// Parse the textual form used by catalog files.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::from_alternatives(text.split(OR_SEPARATOR))
    }

    /// All course codes mentioned by this expression.
    #[must_use]
    pub fn codes(&self) -> &[String] {
        match self {
            Self::Course(code) => std::slice::from_ref(code),
            Self::AnyOf(codes) => codes,
        }
    }

    /// Whether `completed` satisfies this expression.
    ///
    /// An empty OR-group is never satisfied.
    #[must_use]
    pub fn is_satisfied_by(&self, completed: &BTreeSet<String>) -> bool {
        match self {
            Self::Course(code) => completed.contains(code),
            Self::AnyOf(codes) => codes.iter().any(|c| completed.contains(c)),
        }
    }
}

impl fmt::Display for PrerequisiteExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.codes().join(OR_SEPARATOR))
    }
}

impl From<PrerequisiteExpr> for String {
    fn from(expr: PrerequisiteExpr) -> Self {
        expr.to_string()
    }
}

/// Accepted on-disk shapes: `"A"`, `"A or B"`, or `["A", "B"]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrerequisite {
    Text(String),
    Group(Vec<String>),
}

impl From<RawPrerequisite> for PrerequisiteExpr {
    fn from(raw: RawPrerequisite) -> Self {
        match raw {
            RawPrerequisite::Text(text) => Self::parse(&text),
            RawPrerequisite::Group(codes) => Self::from_alternatives(codes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(codes: &[&str]) -> BTreeSet<String> {
        codes.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_single_code() {
        assert_eq!(
            PrerequisiteExpr::parse("PSY 201"),
            PrerequisiteExpr::Course("PSY 201".to_string())
        );
    }

    #[test]
    fn test_parse_or_group_trims_alternatives() {
        let expr = PrerequisiteExpr::parse("PSY 201  or  MTH 111 ");
        assert_eq!(
            expr,
            PrerequisiteExpr::AnyOf(vec!["PSY 201".to_string(), "MTH 111".to_string()])
        );
        assert_eq!(expr.to_string(), "PSY 201 or MTH 111");
    }

    #[test]
    fn test_deserialize_both_shapes() {
        let exprs: Vec<PrerequisiteExpr> =
            serde_json::from_str(r#"["PSY 201", "ST 201 or ST 351", ["MTH 105", "MTH 111"]]"#)
                .unwrap();
        assert_eq!(exprs[0].codes(), ["PSY 201"]);
        assert_eq!(exprs[1].codes(), ["ST 201", "ST 351"]);
        assert_eq!(exprs[2].codes(), ["MTH 105", "MTH 111"]);
    }

    #[test]
    fn test_serializes_as_text() {
        let expr = PrerequisiteExpr::AnyOf(vec!["A 1".to_string(), "B 2".to_string()]);
        assert_eq!(serde_json::to_string(&expr).unwrap(), r#""A 1 or B 2""#);
    }

    #[test]
    fn test_satisfaction() {
        let group = PrerequisiteExpr::parse("A 1 or B 2");
        assert!(!group.is_satisfied_by(&set(&[])));
        assert!(group.is_satisfied_by(&set(&["A 1"])));
        assert!(group.is_satisfied_by(&set(&["B 2"])));
        assert!(group.is_satisfied_by(&set(&["A 1", "B 2"])));
        assert!(!group.is_satisfied_by(&set(&["C 3"])));
    }

    #[test]
    fn test_empty_group_is_unsatisfiable() {
        let empty = PrerequisiteExpr::from_alternatives(Vec::<String>::new());
        assert!(!empty.is_satisfied_by(&set(&["A 1"])));
    }
}
