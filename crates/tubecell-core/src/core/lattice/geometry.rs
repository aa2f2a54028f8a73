use super::direction::{Direction, Sublattice};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LatticeError {
    #[error("Degenerate lattice: n_phi = {n_phi}, n_z = {n_z} (both must be positive)")]
    DegenerateLattice { n_phi: usize, n_z: usize },

    #[error("Lattice index {index} out of range for a lattice of {len} sites")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Occupancy has {actual} sites but the lattice has {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// How moves along the tube axis behave at the ends of the unit cell.
///
/// The circumference is always closed; only the axis has a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AxialBoundary {
    /// Rows wrap modulo `2 * n_z`: the cell is one period of an infinite tube.
    #[default]
    Periodic,
    /// Moves past the first or last row have no target: the cell is analysed in isolation.
    Open,
}

/// A lattice site in `(column, row)` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Site {
    pub column: usize,
    pub row: usize,
}

impl Site {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    #[inline]
    pub const fn sublattice(&self) -> Sublattice {
        Sublattice::of_row(self.row)
    }

    #[inline]
    pub const fn level(&self) -> usize {
        self.row / 2
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(column {}, row {}, sublattice {})",
            self.column,
            self.row,
            self.sublattice()
        )
    }
}

/// Honeycomb lattice wrapped on a cylinder of `n_phi` columns and `n_z` axial levels.
///
/// Periodic and bounded lattices are the same type; they differ only in [`AxialBoundary`].
/// The value is small and `Copy`, and is meant to be built once at startup and passed by
/// value or reference to every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LatticeGeometry {
    n_phi: usize,
    n_z: usize,
    axial: AxialBoundary,
}

impl LatticeGeometry {
    pub fn new(n_phi: usize, n_z: usize, axial: AxialBoundary) -> Result<Self, LatticeError> {
        if n_phi == 0 || n_z == 0 {
            return Err(LatticeError::DegenerateLattice { n_phi, n_z });
        }
        Ok(Self { n_phi, n_z, axial })
    }

    pub fn periodic(n_phi: usize, n_z: usize) -> Result<Self, LatticeError> {
        Self::new(n_phi, n_z, AxialBoundary::Periodic)
    }

    pub fn bounded(n_phi: usize, n_z: usize) -> Result<Self, LatticeError> {
        Self::new(n_phi, n_z, AxialBoundary::Open)
    }

    /// The same lattice under a different axial policy.
    pub fn with_axial_boundary(self, axial: AxialBoundary) -> Self {
        Self { axial, ..self }
    }

    pub fn periodic_view(self) -> Self {
        self.with_axial_boundary(AxialBoundary::Periodic)
    }

    pub fn bounded_view(self) -> Self {
        self.with_axial_boundary(AxialBoundary::Open)
    }

    #[inline]
    pub fn n_phi(&self) -> usize {
        self.n_phi
    }

    #[inline]
    pub fn n_z(&self) -> usize {
        self.n_z
    }

    #[inline]
    pub fn axial_boundary(&self) -> AxialBoundary {
        self.axial
    }

    /// Rows per column, `2 * n_z`.
    #[inline]
    pub fn rows(&self) -> usize {
        2 * self.n_z
    }

    /// Number of sites, `N = 2 * n_phi * n_z`.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_phi * self.rows()
    }

    pub fn check_index(&self, index: usize) -> Result<(), LatticeError> {
        if index < self.len() {
            Ok(())
        } else {
            Err(LatticeError::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }

    pub fn site(&self, index: usize) -> Result<Site, LatticeError> {
        self.check_index(index)?;
        Ok(self.site_unchecked(index))
    }

    pub fn index(&self, site: Site) -> Result<usize, LatticeError> {
        if site.column >= self.n_phi || site.row >= self.rows() {
            return Err(LatticeError::IndexOutOfRange {
                index: site.column * self.rows() + site.row,
                len: self.len(),
            });
        }
        Ok(self.index_unchecked(site))
    }

    #[inline]
    pub(crate) fn site_unchecked(&self, index: usize) -> Site {
        let rows = self.rows();
        Site::new(index / rows, index % rows)
    }

    #[inline]
    pub(crate) fn index_unchecked(&self, site: Site) -> usize {
        site.column * self.rows() + site.row
    }

    /// Moves one step from `index`. `None` only for axial moves off an open cell.
    pub fn step(&self, index: usize, direction: Direction) -> Result<Option<usize>, LatticeError> {
        let site = self.site(index)?;
        Ok(self
            .step_site(site, direction)
            .map(|target| self.index_unchecked(target)))
    }

    pub(crate) fn step_site(&self, site: Site, direction: Direction) -> Option<Site> {
        let (dc, dr) = direction.delta(site.sublattice());
        let column = (site.column as isize + dc).rem_euclid(self.n_phi as isize) as usize;
        let rows = self.rows() as isize;
        let row = site.row as isize + dr;
        let row = match self.axial {
            AxialBoundary::Periodic => row.rem_euclid(rows),
            AxialBoundary::Open if (0..rows).contains(&row) => row,
            AxialBoundary::Open => return None,
        };
        Some(Site::new(column, row as usize))
    }

    /// Whether a move leaves the cell through its top, into the next axial copy.
    pub(crate) fn crosses_axial_boundary(&self, site: Site, direction: Direction) -> bool {
        let (_, dr) = direction.delta(site.sublattice());
        site.row as isize + dr >= self.rows() as isize
    }

    /// Whether a move wraps from the last column round to the first.
    pub(crate) fn crosses_circumferential_boundary(
        &self,
        site: Site,
        direction: Direction,
    ) -> bool {
        let (dc, _) = direction.delta(site.sublattice());
        site.column as isize + dc >= self.n_phi as isize
    }

    pub fn right(&self, index: usize) -> Result<usize, LatticeError> {
        // Circumferential moves always wrap, so there is always a target.
        let site = self.site(index)?;
        let column = (site.column + 1) % self.n_phi;
        Ok(self.index_unchecked(Site::new(column, site.row)))
    }

    pub fn left(&self, index: usize) -> Result<usize, LatticeError> {
        let site = self.site(index)?;
        let column = (site.column + self.n_phi - 1) % self.n_phi;
        Ok(self.index_unchecked(Site::new(column, site.row)))
    }

    pub fn up_right(&self, index: usize) -> Result<Option<usize>, LatticeError> {
        self.step(index, Direction::UpRight)
    }

    pub fn down_right(&self, index: usize) -> Result<Option<usize>, LatticeError> {
        self.step(index, Direction::DownRight)
    }

    pub fn up_left(&self, index: usize) -> Result<Option<usize>, LatticeError> {
        match self.up_right(index)? {
            Some(target) => self.left(target).map(Some),
            None => Ok(None),
        }
    }

    pub fn down_left(&self, index: usize) -> Result<Option<usize>, LatticeError> {
        match self.down_right(index)? {
            Some(target) => self.left(target).map(Some),
            None => Ok(None),
        }
    }

    /// Sites bonded to `index`: at most three, ascending, without duplicates.
    ///
    /// On lattices with a single column or a single level two bond directions can reach the
    /// same site; it is reported once.
    pub fn neighbors(&self, index: usize) -> Result<Vec<usize>, LatticeError> {
        let site = self.site(index)?;
        Ok(self.neighbor_indices(site))
    }

    pub(crate) fn neighbor_indices(&self, site: Site) -> Vec<usize> {
        let mut neighbors: Vec<usize> = site
            .sublattice()
            .bonds()
            .into_iter()
            .filter_map(|direction| self.step_site(site, direction))
            .map(|target| self.index_unchecked(target))
            .collect();
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors
    }
}
