use serde::Serialize;
use std::io::Write;
use tubecell::engine::config::BoundaryPolicy;
use tubecell::workflows::evaluate::Evaluation;

#[derive(Debug, Serialize)]
struct ReportRow {
    index: usize,
    atoms: usize,
    n0: usize,
    n1: usize,
    n2: usize,
    n3: usize,
    connected: bool,
    axial: bool,
    circumferential: bool,
    feasible: bool,
    fitness: Option<f64>,
}

/// Writes one CSV row per evaluation, in input order.
pub fn write_report<W: Write>(
    writer: W,
    evaluations: &[Evaluation],
    policy: BoundaryPolicy,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (index, evaluation) in evaluations.iter().enumerate() {
        let [n0, n1, n2, n3] = evaluation.histogram.counts();
        csv_writer.serialize(ReportRow {
            index,
            atoms: evaluation.atoms,
            n0,
            n1,
            n2,
            n3,
            connected: evaluation.connectivity.is_connected(),
            axial: evaluation.axial.satisfies(policy),
            circumferential: evaluation.circumferential.satisfies(policy),
            feasible: evaluation.feasible,
            fitness: evaluation.fitness,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
