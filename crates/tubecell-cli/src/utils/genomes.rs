use crate::error::{CliError, Result};
use std::path::Path;
use tracing::debug;
use tubecell::core::models::occupancy::Occupancy;

/// A genome together with the 1-based line it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomeRecord {
    pub line: usize,
    pub occupancy: Occupancy,
}

/// One genome per line; blank lines and lines starting with `#` are skipped.
pub fn parse_genomes(content: &str, path: &Path) -> Result<Vec<GenomeRecord>> {
    content
        .lines()
        .enumerate()
        .map(|(i, text)| (i + 1, text.trim()))
        .filter(|(_, text)| !text.is_empty() && !text.starts_with('#'))
        .map(|(line, text)| {
            text.parse::<Occupancy>()
                .map(|occupancy| GenomeRecord { line, occupancy })
                .map_err(|e| CliError::FileParsing {
                    path: path.to_path_buf(),
                    source: anyhow::Error::new(e).context(format!("line {}", line)),
                })
        })
        .collect()
}

pub fn read_genomes(path: &Path) -> Result<Vec<GenomeRecord>> {
    let content = std::fs::read_to_string(path)?;
    let genomes = parse_genomes(&content, path)?;
    debug!(count = genomes.len(), "Read genomes from {:?}", path);
    Ok(genomes)
}
