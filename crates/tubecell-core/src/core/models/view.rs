use super::occupancy::Occupancy;
use crate::core::lattice::geometry::{AxialBoundary, LatticeError, LatticeGeometry, Site};

/// An occupancy read through a lattice whose size it has been checked against.
#[derive(Debug, Clone, Copy)]
pub struct StructureView<'a> {
    geometry: LatticeGeometry,
    occupancy: &'a Occupancy,
}

impl<'a> StructureView<'a> {
    pub fn new(geometry: LatticeGeometry, occupancy: &'a Occupancy) -> Result<Self, LatticeError> {
        if occupancy.len() != geometry.len() {
            return Err(LatticeError::LengthMismatch {
                expected: geometry.len(),
                actual: occupancy.len(),
            });
        }
        Ok(Self {
            geometry,
            occupancy,
        })
    }

    /// The same structure seen through a lattice with a different axial policy.
    pub fn with_axial_boundary(&self, axial: AxialBoundary) -> Self {
        Self {
            geometry: self.geometry.with_axial_boundary(axial),
            occupancy: self.occupancy,
        }
    }

    pub fn periodic(&self) -> Self {
        self.with_axial_boundary(AxialBoundary::Periodic)
    }

    pub fn bounded(&self) -> Self {
        self.with_axial_boundary(AxialBoundary::Open)
    }

    #[inline]
    pub fn geometry(&self) -> &LatticeGeometry {
        &self.geometry
    }

    #[inline]
    pub fn occupancy(&self) -> &'a Occupancy {
        self.occupancy
    }

    pub fn atoms(&self) -> Vec<usize> {
        self.occupancy.atoms()
    }

    pub fn atom_count(&self) -> usize {
        self.occupancy.atom_count()
    }

    pub fn is_occupied(&self, index: usize) -> Result<bool, LatticeError> {
        self.geometry.check_index(index)?;
        Ok(self.occupancy.is_occupied(index))
    }

    /// Occupied sites bonded to `index` under this view's axial policy.
    pub fn neighbor_atoms(&self, index: usize) -> Result<Vec<usize>, LatticeError> {
        let mut neighbors = self.geometry.neighbors(index)?;
        neighbors.retain(|&j| self.occupancy.is_occupied(j));
        Ok(neighbors)
    }

    pub fn neighbor_atom_count(&self, index: usize) -> Result<usize, LatticeError> {
        let site = self.geometry.site(index)?;
        Ok(self.occupied_neighbor_count(site))
    }

    pub(crate) fn occupied_neighbor_count(&self, site: Site) -> usize {
        self.geometry
            .neighbor_indices(site)
            .into_iter()
            .filter(|&j| self.occupancy.is_occupied(j))
            .count()
    }
}
