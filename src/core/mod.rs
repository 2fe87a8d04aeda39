//! Core planner functionality shared by the library and the CLI

pub mod catalog;
pub mod config;
pub mod credits;
pub mod error;
pub mod export;
pub mod gpa;
pub mod models;
pub mod notes;
pub mod offerings;
pub mod prerequisites;
pub mod progress;
pub mod recommend;
pub mod search;
pub mod storage;
pub mod store;

/// Returns the current version of the degree planner crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
