use crate::core::energy::params::{EnergyCoefficients, MOTIF_CLASSES};
use crate::core::lattice::geometry::LatticeGeometry;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Degenerate lattice: n_phi = {n_phi}, n_z = {n_z} (both must be positive)")]
    DegenerateLattice { n_phi: usize, n_z: usize },

    #[error("Energy coefficients must be finite, got {values:?}")]
    InvalidCoefficients { values: [f64; MOTIF_CLASSES] },

    #[error("Unknown boundary policy '{0}'. Expected 'every-atom' or 'any-bond'.")]
    UnknownBoundaryPolicy(String),
}

/// How strictly the boundary checks read "the cell is bonded to its periodic copy".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundaryPolicy {
    /// Every occupied boundary site that could bond across the boundary has an occupied
    /// up-right or down-right neighbor, and at least one bond crosses the boundary.
    #[default]
    EveryAtom,
    /// At least one bond crosses the boundary.
    AnyBond,
}

impl fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EveryAtom => write!(f, "every-atom"),
            Self::AnyBond => write!(f, "any-bond"),
        }
    }
}

impl FromStr for BoundaryPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "every-atom" | "every_atom" => Ok(Self::EveryAtom),
            "any-bond" | "any_bond" => Ok(Self::AnyBond),
            _ => Err(ConfigError::UnknownBoundaryPolicy(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatticeConfig {
    pub n_phi: usize,
    pub n_z: usize,
}

impl LatticeConfig {
    /// The periodic lattice these dimensions describe.
    pub fn geometry(&self) -> Result<LatticeGeometry, ConfigError> {
        LatticeGeometry::periodic(self.n_phi, self.n_z).map_err(|_| {
            ConfigError::DegenerateLattice {
                n_phi: self.n_phi,
                n_z: self.n_z,
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyConfig {
    pub coefficients: EnergyCoefficients,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationConfig {
    pub boundary_policy: BoundaryPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationConfig {
    pub lattice: LatticeConfig,
    pub energy: EnergyConfig,
    pub validation: ValidationConfig,
}

#[derive(Default)]
pub struct EvaluationConfigBuilder {
    n_phi: Option<usize>,
    n_z: Option<usize>,
    coefficients: Option<EnergyCoefficients>,
    boundary_policy: Option<BoundaryPolicy>,
}

impl EvaluationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn n_phi(mut self, n_phi: usize) -> Self {
        self.n_phi = Some(n_phi);
        self
    }
    pub fn n_z(mut self, n_z: usize) -> Self {
        self.n_z = Some(n_z);
        self
    }
    pub fn coefficients(mut self, coefficients: EnergyCoefficients) -> Self {
        self.coefficients = Some(coefficients);
        self
    }
    pub fn boundary_policy(mut self, policy: BoundaryPolicy) -> Self {
        self.boundary_policy = Some(policy);
        self
    }

    pub fn build(self) -> Result<EvaluationConfig, ConfigError> {
        let n_phi = self.n_phi.ok_or(ConfigError::MissingParameter("n_phi"))?;
        let n_z = self.n_z.ok_or(ConfigError::MissingParameter("n_z"))?;
        let lattice = LatticeConfig { n_phi, n_z };
        lattice.geometry()?;

        let coefficients = self
            .coefficients
            .ok_or(ConfigError::MissingParameter("coefficients"))?;
        if !coefficients.is_finite() {
            return Err(ConfigError::InvalidCoefficients {
                values: coefficients.as_array(),
            });
        }

        Ok(EvaluationConfig {
            lattice,
            energy: EnergyConfig { coefficients },
            validation: ValidationConfig {
                boundary_policy: self.boundary_policy.unwrap_or_default(),
            },
        })
    }
}
