use thiserror::Error;

use super::config::ConfigError;
use crate::core::energy::params::ParamLoadError;
use crate::core::energy::scoring::ScoringError;
use crate::core::lattice::geometry::LatticeError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Lattice error: {source}")]
    Lattice {
        #[from]
        source: LatticeError,
    },

    #[error("Energy scoring failed: {source}")]
    Scoring {
        #[from]
        source: ScoringError,
    },

    #[error("Failed to load energy parameters: {source}")]
    Params {
        #[from]
        source: ParamLoadError,
    },
}
