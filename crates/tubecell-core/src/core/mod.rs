//! # Core Module
//!
//! The stateless building blocks of tubecell: where sites are, which sites are bonded, which
//! sites hold atoms, and what a structure's coordination energy is.
//!
//! ## Architecture
//!
//! - **Lattice Geometry** ([`lattice`]) - Two-sublattice honeycomb index arithmetic on a
//!   cylinder, periodic or open along the tube axis
//! - **Structure Models** ([`models`]) - Occupancy vectors and lattice-aware structure views
//! - **Energy Model** ([`energy`]) - Motif decomposition, per-class coefficients and scoring
//!
//! Nothing in this module caches derived data; histograms and neighbor sets are recomputed on
//! every call.

pub mod energy;
pub mod lattice;
pub mod models;
