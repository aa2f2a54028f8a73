//! # tubecell Core Library
//!
//! Structure analysis for carbon-nanotube unit cells, built to sit underneath an external
//! evolutionary search. A candidate structure is an occupancy vector over the sites of a
//! honeycomb lattice rolled into a cylinder; this crate scores it and decides whether it is a
//! physically sensible, tileable unit cell.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless lattice geometry (periodic and axially bounded),
//!   the occupancy model, motif decomposition and the linear coordination-energy model.
//!
//! - **[`engine`]: The Validators.** Configuration, error types, progress reporting and the
//!   feasibility tasks (single connected cluster, bonds across the axial and circumferential
//!   cell boundaries).
//!
//! - **[`workflows`]: The Public API.** The [`workflows::evaluate::Evaluator`] that exposes
//!   the fitness function and feasibility predicate consumed by the search engine, plus batch
//!   evaluation.
//!
//! Every evaluation is a pure function of the occupancy vector and immutable configuration, so
//! candidates can be evaluated concurrently without synchronisation.

pub mod core;
pub mod engine;
pub mod workflows;
