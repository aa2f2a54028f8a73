//! # Energy Module
//!
//! The linear coordination-energy model used as the fitness of a candidate structure.
//!
//! ## Overview
//!
//! Every atom is classified by how many of its bonded neighbor sites are occupied on the
//! periodic lattice. The four classes are:
//!
//! | class | occupied neighbors | coefficient |
//! |-------|--------------------|-------------|
//! | 0     | none               | `isolated`  |
//! | 1     | one                | `terminal`  |
//! | 2     | two                | `chain`     |
//! | 3     | three              | `junction`  |
//!
//! The energy of a structure is the coefficient-weighted class histogram divided by the number
//! of atoms, so structures of different sizes are compared per atom.
//!
//! ## Key Components
//!
//! - [`params`] - [`params::EnergyCoefficients`] and their TOML file format
//! - [`motif`] - [`motif::MotifDecomposer`] producing a [`motif::MotifHistogram`]
//! - [`scoring`] - [`scoring::EnergyModel`], the normalised linear score
//!
//! ```ignore
//! use tubecell::core::energy::{params::EnergyCoefficients, scoring::EnergyModel};
//!
//! let model = EnergyModel::new(EnergyCoefficients::from_array([0.0, -1.5, -3.2, -4.8]));
//! let energy = model.score(&view)?;
//! ```

pub mod motif;
pub mod params;
pub mod scoring;
