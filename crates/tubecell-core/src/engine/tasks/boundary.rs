use crate::core::lattice::direction::Direction;
use crate::core::lattice::geometry::{LatticeGeometry, Site};
use crate::core::models::view::StructureView;
use crate::engine::config::BoundaryPolicy;
use itertools::Itertools;
use tracing::{instrument, trace};

/// Right-leaning bonds of a boundary site: the ones that point towards the next copy of the
/// cell along either boundary.
const ANCHOR_BONDS: [Direction; 2] = [Direction::UpRight, Direction::DownRight];

/// Bonds across one boundary of the unit cell, as seen from the sites on that boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundaryReport {
    /// Occupied boundary sites with at least one bond direction leaving the cell.
    pub boundary_atoms: usize,
    /// Boundary atoms with an occupied periodic neighbor up-right or down-right.
    pub anchored_atoms: usize,
    /// Distinct occupied sites reached by bonds that leave the cell, summed over boundary atoms.
    pub crossing_bonds: usize,
}

impl BoundaryReport {
    /// At least one bond must cross the boundary. `EveryAtom` also rejects boundary atoms that
    /// dangle towards the neighboring cell.
    pub fn satisfies(&self, policy: BoundaryPolicy) -> bool {
        if self.crossing_bonds == 0 {
            return false;
        }
        match policy {
            BoundaryPolicy::EveryAtom => self.anchored_atoms == self.boundary_atoms,
            BoundaryPolicy::AnyBond => true,
        }
    }
}

fn scan<I, F>(view: &StructureView<'_>, sites: I, crosses: F) -> BoundaryReport
where
    I: IntoIterator<Item = Site>,
    F: Fn(&LatticeGeometry, Site, Direction) -> bool,
{
    let periodic = view.periodic();
    let geometry = periodic.geometry();
    let occupancy = view.occupancy();
    let occupied = |site: &Site| occupancy.is_occupied(geometry.index_unchecked(*site));

    let mut report = BoundaryReport::default();
    for site in sites.into_iter().filter(occupied) {
        let bonds = site.sublattice().bonds();
        let outward: Vec<Direction> = bonds
            .into_iter()
            .filter(|&direction| crosses(geometry, site, direction))
            .collect();
        if outward.is_empty() {
            continue;
        }
        report.boundary_atoms += 1;

        // On one-column or one-level cells two bonds can land on the same site.
        report.crossing_bonds += outward
            .iter()
            .filter_map(|&direction| geometry.step_site(site, direction))
            .filter(occupied)
            .unique()
            .count();

        let anchored = ANCHOR_BONDS
            .into_iter()
            .filter(|direction| bonds.contains(direction))
            .filter_map(|direction| geometry.step_site(site, direction))
            .any(|target| occupied(&target));
        if anchored {
            report.anchored_atoms += 1;
        }
    }
    report
}

/// Bonds from the last axial level (rows `2 * n_z - 2` and `2 * n_z - 1`) into the first level
/// of the next copy along the tube. Only the last level is scanned.
#[instrument(level = "trace", skip_all, name = "axial_boundary_task")]
pub fn axial(view: &StructureView<'_>) -> BoundaryReport {
    let geometry = view.geometry();
    let rows = geometry.rows();
    let last_level = (0..geometry.n_phi())
        .cartesian_product(rows - 2..rows)
        .map(|(column, row)| Site::new(column, row));
    let report = scan(view, last_level, LatticeGeometry::crosses_axial_boundary);
    trace!(?report, "Axial boundary scanned.");
    report
}

/// Bonds from the last column that wrap around to column 0. Only the last column is scanned.
#[instrument(level = "trace", skip_all, name = "circumferential_boundary_task")]
pub fn circumferential(view: &StructureView<'_>) -> BoundaryReport {
    let geometry = view.geometry();
    let column = geometry.n_phi() - 1;
    let last_column = (0..geometry.rows()).map(|row| Site::new(column, row));
    let report = scan(
        view,
        last_column,
        LatticeGeometry::crosses_circumferential_boundary,
    );
    trace!(?report, "Circumferential boundary scanned.");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::occupancy::Occupancy;

    fn view_of<'a>(g: LatticeGeometry, occ: &'a Occupancy) -> StructureView<'a> {
        StructureView::new(g, occ).unwrap()
    }

    fn occupancy(g: &LatticeGeometry, sites: &[Site]) -> Occupancy {
        let atoms: Vec<usize> = sites.iter().map(|&s| g.index(s).unwrap()).collect();
        Occupancy::from_atoms(g.len(), &atoms).unwrap()
    }

    #[test]
    fn smallest_full_tube_is_bonded_across_both_boundaries() {
        let g = LatticeGeometry::periodic(2, 1).unwrap();
        let occ = Occupancy::filled(g.len());
        let view = view_of(g, &occ);

        let axial_report = axial(&view);
        assert_eq!(
            axial_report,
            BoundaryReport {
                boundary_atoms: 2,
                anchored_atoms: 2,
                crossing_bonds: 2
            }
        );
        let circumferential_report = circumferential(&view);
        assert_eq!(
            circumferential_report,
            BoundaryReport {
                boundary_atoms: 1,
                anchored_atoms: 1,
                crossing_bonds: 1
            }
        );
        for policy in [BoundaryPolicy::EveryAtom, BoundaryPolicy::AnyBond] {
            assert!(axial_report.satisfies(policy));
            assert!(circumferential_report.satisfies(policy));
        }
    }

    #[test]
    fn empty_structure_satisfies_no_policy() {
        let g = LatticeGeometry::periodic(3, 2).unwrap();
        let occ = Occupancy::empty(g.len());
        let view = view_of(g, &occ);
        for policy in [BoundaryPolicy::EveryAtom, BoundaryPolicy::AnyBond] {
            assert!(!axial(&view).satisfies(policy));
            assert!(!circumferential(&view).satisfies(policy));
        }
    }

    #[test]
    fn lone_boundary_atom_has_nothing_to_bond_to() {
        let g = LatticeGeometry::periodic(3, 2).unwrap();
        let occ = occupancy(&g, &[Site::new(2, 3)]);
        let view = view_of(g, &occ);
        let expected = BoundaryReport {
            boundary_atoms: 1,
            anchored_atoms: 0,
            crossing_bonds: 0,
        };
        assert_eq!(axial(&view), expected);
        assert_eq!(circumferential(&view), expected);
        assert!(!axial(&view).satisfies(BoundaryPolicy::AnyBond));
    }

    #[test]
    fn a_sites_never_bond_across_either_boundary() {
        let g = LatticeGeometry::periodic(3, 2).unwrap();
        let occ = occupancy(&g, &[Site::new(2, 2), Site::new(2, 0)]);
        let view = view_of(g, &occ);
        assert_eq!(axial(&view), BoundaryReport::default());
        assert_eq!(circumferential(&view), BoundaryReport::default());
    }

    #[test]
    fn axial_bond_from_the_top_b_row_is_found() {
        let g = LatticeGeometry::periodic(3, 2).unwrap();
        let occ = occupancy(&g, &[Site::new(0, 3), Site::new(1, 0)]);
        let report = axial(&view_of(g, &occ));
        assert_eq!(
            report,
            BoundaryReport {
                boundary_atoms: 1,
                anchored_atoms: 1,
                crossing_bonds: 1
            }
        );
        assert!(report.satisfies(BoundaryPolicy::EveryAtom));
    }

    #[test]
    fn policies_differ_when_only_some_boundary_atoms_are_bonded() {
        // (0, 3) bonds across to (1, 0); (1, 3) would need (2, 0), which is empty.
        let g = LatticeGeometry::periodic(3, 2).unwrap();
        let occ = occupancy(&g, &[Site::new(0, 3), Site::new(1, 0), Site::new(1, 3)]);
        let report = axial(&view_of(g, &occ));
        assert_eq!(
            report,
            BoundaryReport {
                boundary_atoms: 2,
                anchored_atoms: 1,
                crossing_bonds: 1
            }
        );
        assert!(report.satisfies(BoundaryPolicy::AnyBond));
        assert!(!report.satisfies(BoundaryPolicy::EveryAtom));
    }

    #[test]
    fn boundary_atom_bonded_inside_the_cell_is_anchored() {
        // Every site but (1, 0). The up-right bond of (0, 3) lands on the vacancy, but its
        // down-right neighbor (1, 2) holds it to the cell.
        let g = LatticeGeometry::periodic(3, 2).unwrap();
        let vacancy = g.index(Site::new(1, 0)).unwrap();
        let occ = Occupancy::new((0..g.len()).map(|i| i != vacancy).collect());
        let view = view_of(g, &occ);

        let axial_report = axial(&view);
        assert_eq!(
            axial_report,
            BoundaryReport {
                boundary_atoms: 3,
                anchored_atoms: 3,
                crossing_bonds: 2
            }
        );
        assert!(axial_report.satisfies(BoundaryPolicy::EveryAtom));

        let circumferential_report = circumferential(&view);
        assert_eq!(
            circumferential_report,
            BoundaryReport {
                boundary_atoms: 2,
                anchored_atoms: 2,
                crossing_bonds: 4
            }
        );
        assert!(circumferential_report.satisfies(BoundaryPolicy::EveryAtom));
    }

    #[test]
    fn anchored_atoms_alone_do_not_bond_the_boundary() {
        // (0, 3) is held by (1, 2) but nothing reaches into the next cell.
        let g = LatticeGeometry::periodic(3, 2).unwrap();
        let occ = occupancy(&g, &[Site::new(0, 3), Site::new(1, 2)]);
        let report = axial(&view_of(g, &occ));
        assert_eq!(
            report,
            BoundaryReport {
                boundary_atoms: 1,
                anchored_atoms: 1,
                crossing_bonds: 0
            }
        );
        assert!(!report.satisfies(BoundaryPolicy::EveryAtom));
        assert!(!report.satisfies(BoundaryPolicy::AnyBond));
    }

    #[test]
    fn circumferential_bond_wraps_to_the_first_column() {
        let g = LatticeGeometry::periodic(3, 2).unwrap();
        let occ = occupancy(&g, &[Site::new(2, 1), Site::new(0, 0)]);
        let report = circumferential(&view_of(g, &occ));
        assert_eq!(
            report,
            BoundaryReport {
                boundary_atoms: 1,
                anchored_atoms: 1,
                crossing_bonds: 1
            }
        );
    }

    #[test]
    fn atoms_away_from_the_boundary_are_ignored() {
        let g = LatticeGeometry::periodic(4, 3).unwrap();
        let occ = occupancy(&g, &[Site::new(1, 1), Site::new(1, 2), Site::new(0, 3)]);
        let view = view_of(g, &occ);
        assert_eq!(axial(&view), BoundaryReport::default());
        assert_eq!(circumferential(&view), BoundaryReport::default());
    }

    #[test]
    fn scan_uses_periodic_bonds_on_a_bounded_view() {
        let g = LatticeGeometry::bounded(3, 2).unwrap();
        let occ = occupancy(&g, &[Site::new(0, 3), Site::new(1, 0)]);
        assert!(axial(&view_of(g, &occ)).satisfies(BoundaryPolicy::EveryAtom));
    }
}
