//! # Models Module
//!
//! The structure representation shared by every evaluation.
//!
//! - [`occupancy`] - [`occupancy::Occupancy`], the candidate genome: one flag per lattice site
//!   marking whether it holds an atom, with the plain-text genome format
//! - [`view`] - [`view::StructureView`], an occupancy checked against a lattice, answering
//!   which atoms exist and which of them are bonded to a given site
//!
//! The occupancy is owned by the caller (the search engine); everything here only borrows it.

pub mod occupancy;
pub mod view;
