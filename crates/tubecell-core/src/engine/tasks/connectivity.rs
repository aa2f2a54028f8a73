use crate::core::models::view::StructureView;
use tracing::{instrument, trace};

/// Cluster structure of the occupied sites, with bonds taken inside the unit cell only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectivityReport {
    pub sites: usize,
    pub atoms: usize,
    /// Connected groups of atoms.
    pub clusters: usize,
}

impl ConnectivityReport {
    /// Components of the graph over all sites, where every empty site is a component on its
    /// own.
    pub fn components(&self) -> usize {
        self.clusters + (self.sites - self.atoms)
    }

    /// `atoms + components == 1 + sites`: exactly one cluster, and at least one atom.
    pub fn is_connected(&self) -> bool {
        self.atoms + self.components() == 1 + self.sites
    }
}

struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    /// Merges the sets of `i` and `j`; `false` when they were already one set.
    fn union(&mut self, i: usize, j: usize) -> bool {
        let (root_i, root_j) = (self.find(i), self.find(j));
        if root_i == root_j {
            return false;
        }
        match self.rank[root_i].cmp(&self.rank[root_j]) {
            std::cmp::Ordering::Less => self.parent[root_i] = root_j,
            std::cmp::Ordering::Greater => self.parent[root_j] = root_i,
            std::cmp::Ordering::Equal => {
                self.parent[root_j] = root_i;
                self.rank[root_i] += 1;
            }
        }
        true
    }
}

/// Counts atom clusters on the axially bounded lattice, whatever the policy of `view`.
///
/// Bonds into the next axial copy of the cell do not join atoms here; those are what the
/// boundary checks look at.
#[instrument(level = "trace", skip_all, name = "connectivity_task")]
pub fn run(view: &StructureView<'_>) -> ConnectivityReport {
    let bounded = view.bounded();
    let geometry = bounded.geometry();
    let occupancy = view.occupancy();
    let atoms = view.atoms();

    let mut sets = DisjointSet::new(geometry.len());
    let mut clusters = atoms.len();
    for &i in &atoms {
        let site = geometry.site_unchecked(i);
        for j in geometry.neighbor_indices(site) {
            if j > i && occupancy.is_occupied(j) && sets.union(i, j) {
                clusters -= 1;
            }
        }
    }

    trace!(atoms = atoms.len(), clusters, "Cluster count computed.");
    ConnectivityReport {
        sites: geometry.len(),
        atoms: atoms.len(),
        clusters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lattice::geometry::{LatticeGeometry, Site};
    use crate::core::models::occupancy::Occupancy;

    fn report(g: LatticeGeometry, atoms: &[usize]) -> ConnectivityReport {
        let occ = Occupancy::from_atoms(g.len(), atoms).unwrap();
        run(&StructureView::new(g, &occ).unwrap())
    }

    #[test]
    fn disjoint_set_merges_and_detects_cycles() {
        let mut sets = DisjointSet::new(5);
        assert!(sets.union(0, 1));
        assert!(sets.union(3, 4));
        assert!(sets.union(1, 4));
        assert!(!sets.union(0, 3));
        assert_eq!(sets.find(0), sets.find(4));
        assert_ne!(sets.find(2), sets.find(0));
    }

    #[test]
    fn smallest_full_tube_is_one_cluster() {
        let g = LatticeGeometry::periodic(2, 1).unwrap();
        let r = report(g, &[0, 1, 2, 3]);
        assert_eq!(r.clusters, 1);
        assert_eq!(r.components(), 1);
        assert!(r.is_connected());
    }

    #[test]
    fn empty_structure_is_not_connected() {
        let g = LatticeGeometry::periodic(3, 2).unwrap();
        let r = report(g, &[]);
        assert_eq!(r.clusters, 0);
        assert_eq!(r.components(), g.len());
        assert!(!r.is_connected());
    }

    #[test]
    fn single_atom_is_one_cluster() {
        let g = LatticeGeometry::periodic(3, 2).unwrap();
        assert!(report(g, &[5]).is_connected());
    }

    #[test]
    fn separated_atoms_are_separate_clusters() {
        let g = LatticeGeometry::periodic(4, 3).unwrap();
        let a = g.index(Site::new(0, 2)).unwrap();
        let b = g.index(Site::new(2, 2)).unwrap();
        let r = report(g, &[a, b]);
        assert_eq!(r.clusters, 2);
        assert!(!r.is_connected());
    }

    #[test]
    fn bonds_across_the_axial_boundary_do_not_connect() {
        let g = LatticeGeometry::periodic(3, 2).unwrap();
        let top = g.index(Site::new(0, 3)).unwrap();
        let across = g.up_right(top).unwrap().unwrap();
        let r = report(g, &[top, across]);
        assert_eq!(r.clusters, 2);
        assert!(!r.is_connected());
    }

    #[test]
    fn bonds_around_the_circumference_connect() {
        let g = LatticeGeometry::periodic(3, 2).unwrap();
        let last_b = g.index(Site::new(2, 1)).unwrap();
        let wrapped = g.down_right(last_b).unwrap().unwrap();
        assert_eq!(g.site(wrapped).unwrap().column, 0);
        assert!(report(g, &[last_b, wrapped]).is_connected());
    }

    #[test]
    fn zigzag_ring_around_the_tube_is_one_cluster() {
        // Rows 0 and 1 of every column form a closed ring through up-right and down-right bonds.
        let g = LatticeGeometry::periodic(6, 2).unwrap();
        let atoms: Vec<usize> = (0..g.n_phi())
            .flat_map(|column| [Site::new(column, 0), Site::new(column, 1)])
            .map(|site| g.index(site).unwrap())
            .collect();
        let r = report(g, &atoms);
        assert_eq!(r.atoms, 12);
        assert!(r.is_connected());
    }

    #[test]
    fn result_does_not_depend_on_the_view_policy() {
        let g = LatticeGeometry::periodic(3, 2).unwrap();
        let occ = Occupancy::from_atoms(g.len(), &[3, 4]).unwrap();
        let periodic = StructureView::new(g, &occ).unwrap();
        assert_eq!(run(&periodic), run(&periodic.bounded()));
    }
}
