pub mod genomes;
pub mod progress;
