use super::params::MOTIF_CLASSES;
use crate::core::models::view::StructureView;
use std::fmt;
use std::ops::Index;

/// Atom counts by coordination: bucket `k` holds the atoms with exactly `k` occupied
/// neighbors on the periodic lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MotifHistogram {
    counts: [usize; MOTIF_CLASSES],
}

impl MotifHistogram {
    pub const fn new(counts: [usize; MOTIF_CLASSES]) -> Self {
        Self { counts }
    }

    #[inline]
    pub fn counts(&self) -> [usize; MOTIF_CLASSES] {
        self.counts
    }

    /// Number of atoms the histogram was built from.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.counts.iter().copied()
    }
}

impl Index<usize> for MotifHistogram {
    type Output = usize;

    fn index(&self, neighbors: usize) -> &usize {
        &self.counts[neighbors]
    }
}

impl fmt::Display for MotifHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [n0, n1, n2, n3] = self.counts;
        write!(f, "[n0={n0}, n1={n1}, n2={n2}, n3={n3}]")
    }
}

pub struct MotifDecomposer;

impl MotifDecomposer {
    /// Classifies every atom of `view` by its occupied neighbors.
    ///
    /// Neighbors are always counted on the periodic lattice, whatever the axial policy of the
    /// view: an atom bonded across the cell boundary is bonded in the infinite tube.
    pub fn decompose(view: &StructureView<'_>) -> MotifHistogram {
        let periodic = view.periodic();
        let geometry = periodic.geometry();
        let mut counts = [0; MOTIF_CLASSES];
        for index in view.atoms() {
            let site = geometry.site_unchecked(index);
            counts[periodic.occupied_neighbor_count(site)] += 1;
        }
        MotifHistogram::new(counts)
    }
}
