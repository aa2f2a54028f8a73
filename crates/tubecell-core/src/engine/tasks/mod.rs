//! Feasibility checks run against a single candidate structure.
//!
//! Each task reads a [`crate::core::models::view::StructureView`] and returns a small report;
//! the caller decides how the reports combine into a verdict.

pub mod boundary;
pub mod connectivity;
