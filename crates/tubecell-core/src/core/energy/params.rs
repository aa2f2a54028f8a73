use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Number of coordination classes an atom can fall into on the honeycomb lattice.
pub const MOTIF_CLASSES: usize = 4;

/// Per-class energy contributions, indexed by the number of occupied neighbors.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EnergyCoefficients {
    pub isolated: f64,
    pub terminal: f64,
    pub chain: f64,
    pub junction: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CoefficientsFile {
    coefficients: EnergyCoefficients,
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

impl EnergyCoefficients {
    pub const fn from_array(values: [f64; MOTIF_CLASSES]) -> Self {
        Self {
            isolated: values[0],
            terminal: values[1],
            chain: values[2],
            junction: values[3],
        }
    }

    pub const fn as_array(&self) -> [f64; MOTIF_CLASSES] {
        [self.isolated, self.terminal, self.chain, self.junction]
    }

    /// Coefficient of the class with `neighbors` occupied neighbors.
    pub fn get(&self, neighbors: usize) -> Option<f64> {
        self.as_array().get(neighbors).copied()
    }

    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|c| c.is_finite())
    }

    /// Reads a `[coefficients]` table with `isolated`, `terminal`, `chain` and `junction` keys.
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: CoefficientsFile = toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Ok(file.coefficients)
    }
}

impl From<[f64; MOTIF_CLASSES]> for EnergyCoefficients {
    fn from(values: [f64; MOTIF_CLASSES]) -> Self {
        Self::from_array(values)
    }
}
