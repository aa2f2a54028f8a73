use crate::cli::EvaluateArgs;
use crate::config;
use crate::error::{CliError, Result};
use crate::report;
use crate::utils::genomes::{self, GenomeRecord};
use crate::utils::progress::CliProgressHandler;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};
use tubecell::core::models::occupancy::Occupancy;
use tubecell::engine::progress::ProgressReporter;
use tubecell::workflows::evaluate::{self, BatchSummary, Evaluator};

pub fn run(args: EvaluateArgs, show_progress: bool) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = config::build_config(&args.config)?;
    let evaluator = Evaluator::new(&config)?;

    info!("Loading genomes from {:?}", &args.input);
    let records = genomes::read_genomes(&args.input)?;
    check_lengths(&records, evaluator.geometry().len(), &args.input)?;
    if records.is_empty() {
        warn!("Genome file contains no genomes.");
        eprintln!("Warning: no genomes found in {}", args.input.display());
        return Ok(());
    }
    let (lines, genomes): (Vec<usize>, Vec<Occupancy>) = records
        .into_iter()
        .map(|record| (record.line, record.occupancy))
        .unzip();

    let progress_handler = CliProgressHandler::new(show_progress);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let evaluations = evaluate::run_batch(&evaluator, &genomes, &reporter)?;

    match &args.output {
        Some(path) => {
            info!("Writing report to {:?}", path);
            let file = BufWriter::new(File::create(path)?);
            report::write_report(file, &evaluations, evaluator.policy())?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            report::write_report(&mut handle, &evaluations, evaluator.policy())?;
            handle.flush()?;
        }
    }

    let summary = BatchSummary::from_evaluations(&evaluations);
    eprintln!("{}", format_summary(&summary, &lines, &genomes));
    Ok(())
}

fn check_lengths(records: &[GenomeRecord], sites: usize, path: &Path) -> Result<()> {
    match records.iter().find(|record| record.occupancy.len() != sites) {
        Some(record) => Err(CliError::FileParsing {
            path: path.to_path_buf(),
            source: anyhow::anyhow!(
                "line {}: genome has {} sites but the lattice has {}",
                record.line,
                record.occupancy.len(),
                sites
            ),
        }),
        None => Ok(()),
    }
}

fn format_summary(summary: &BatchSummary, lines: &[usize], genomes: &[Occupancy]) -> String {
    let header = format!(
        "Evaluated {} genome(s): {} feasible, {} infeasible.",
        summary.evaluated,
        summary.feasible,
        summary.evaluated - summary.feasible
    );
    match summary.best {
        Some((index, fitness)) => format!(
            "{}\n✓ Best feasible genome: #{} (line {}), fitness {:.6}\n  {}",
            header, index, lines[index], fitness, genomes[index]
        ),
        None => format!("{}\nNo feasible genome found.", header),
    }
}
