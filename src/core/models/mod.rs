//! Data models for the degree planner

pub mod course;
pub mod degree;
pub mod prerequisite;
pub mod state;
pub mod term;

pub use course::Course;
pub use degree::{DegreeRequirement, RequirementCategory, DEFAULT_TOTAL_CREDITS};
pub use prerequisite::PrerequisiteExpr;
pub use state::{PlannedCourses, PlannerState};
pub use term::{Season, Term};
