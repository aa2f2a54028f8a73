use crate::cli::NeighborsArgs;
use crate::config;
use crate::error::Result;
use tracing::info;
use tubecell::core::lattice::direction::Direction;
use tubecell::core::lattice::geometry::{LatticeError, LatticeGeometry};
use tubecell::engine::error::EngineError;

pub fn run(args: NeighborsArgs) -> Result<()> {
    let geometry = config::build_lattice(&args.config)?;
    info!(
        n_phi = geometry.n_phi(),
        n_z = geometry.n_z(),
        site = args.site,
        "Describing lattice site."
    );
    let text = describe_site(&geometry, args.site, args.direction).map_err(EngineError::from)?;
    println!("{}", text);
    Ok(())
}

fn target(step: Option<usize>) -> String {
    step.map_or_else(|| "-".to_string(), |index| index.to_string())
}

/// Moves from `index` on the periodic and the axially bounded lattice, and its bonded sites.
pub fn describe_site(
    periodic: &LatticeGeometry,
    index: usize,
    direction: Option<Direction>,
) -> std::result::Result<String, LatticeError> {
    let site = periodic.site(index)?;
    let bounded = periodic.bounded_view();

    let mut lines = vec![
        format!("Site {}: {}, level {}", index, site, site.level()),
        format!(
            "Lattice: n_phi = {}, n_z = {} ({} sites)",
            periodic.n_phi(),
            periodic.n_z(),
            periodic.len()
        ),
        format!("{:<12} {:>9} {:>9}", "move", "periodic", "bounded"),
    ];

    let directions = direction.map_or_else(|| Direction::ALL.to_vec(), |d| vec![d]);
    let bonds = site.sublattice().bonds();
    for d in directions {
        let marker = if bonds.contains(&d) { "  bond" } else { "" };
        lines.push(format!(
            "{:<12} {:>9} {:>9}{}",
            d.name(),
            target(periodic.step(index, d)?),
            target(bounded.step(index, d)?),
            marker
        ));
    }

    if direction.is_none() {
        lines.push(format!("Bonded (periodic): {:?}", periodic.neighbors(index)?));
        lines.push(format!("Bonded (bounded):  {:?}", bounded.neighbors(index)?));
    }
    Ok(lines.join("\n"))
}
