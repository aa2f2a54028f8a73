//! # Engine Module
//!
//! The validation layer of tubecell: everything that decides whether a candidate structure is
//! an acceptable unit cell, plus the configuration and plumbing shared by evaluations.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Lattice dimensions, energy coefficients and the boundary
//!   policy, assembled through a builder
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events for batch runs
//! - **Error Handling** ([`error`]) - [`error::EngineError`], the union of every failure an
//!   evaluation can report
//! - **Tasks** ([`tasks`]) - The feasibility checks: one connected cluster inside the cell, and
//!   bonds across the axial and circumferential cell boundaries
//!
//! Tasks take a [`crate::core::models::view::StructureView`] and return plain report values;
//! they hold no state between calls.

pub mod config;
pub mod error;
pub mod progress;
pub mod tasks;
