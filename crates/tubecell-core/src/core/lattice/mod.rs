//! # Lattice Module
//!
//! Index arithmetic for the honeycomb lattice of a nanotube unit cell.
//!
//! ## Layout
//!
//! A unit cell with `n_phi` circumferential repeats and `n_z` axial repeats has
//! `N = 2 * n_phi * n_z` sites. Site `i` decomposes column-major into a [`geometry::Site`]:
//!
//! ```text
//! i = column * (2 * n_z) + row        column in [0, n_phi), row in [0, 2 * n_z)
//! ```
//!
//! Even rows hold sublattice A, odd rows sublattice B; the axial level of a site is
//! `row / 2`. A-sites sit at integer circumferential offsets and B-sites half a column to the
//! right, so every diagonal move shifts the site by half a column.
//!
//! ## Key Components
//!
//! - [`direction`] - The six named moves, the sublattice basis and the delta table
//! - [`geometry`] - [`geometry::LatticeGeometry`], parameterised by an
//!   [`geometry::AxialBoundary`] policy (periodic tube or isolated cell)
//!
//! ```ignore
//! use tubecell::core::lattice::geometry::LatticeGeometry;
//!
//! let periodic = LatticeGeometry::periodic(6, 2)?;
//! let bounded = periodic.bounded_view();
//! assert_eq!(periodic.neighbors(0)?.len(), 3);
//! ```

pub mod direction;
pub mod geometry;
