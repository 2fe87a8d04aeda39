//! Degree planner library
//!
//! Tracks completed courses, plans courses by term, checks prerequisites and
//! reports credit progress toward a degree. The `degreeplan` binary is a thin
//! front end over this crate.

pub mod core;
pub mod logger;

pub use crate::core::catalog::CourseCatalog;
pub use crate::core::config;
pub use crate::core::error::PlannerError;
pub use crate::core::get_version;
pub use crate::core::storage::{FileStorage, MemoryStorage, Storage};
pub use crate::core::store::PlannerStore;
