use super::motif::{MotifDecomposer, MotifHistogram};
use super::params::EnergyCoefficients;
use crate::core::models::view::StructureView;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Cannot score a structure with no atoms: the per-atom energy is undefined")]
    EmptyStructure,
}

/// Linear coordination-energy model, normalised per atom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyModel {
    coefficients: EnergyCoefficients,
}

impl EnergyModel {
    pub fn new(coefficients: EnergyCoefficients) -> Self {
        Self { coefficients }
    }

    #[inline]
    pub fn coefficients(&self) -> &EnergyCoefficients {
        &self.coefficients
    }

    /// Per-atom energy of `view`. Higher is fitter.
    pub fn score(&self, view: &StructureView<'_>) -> Result<f64, ScoringError> {
        self.score_histogram(&MotifDecomposer::decompose(view))
    }

    pub fn score_histogram(&self, histogram: &MotifHistogram) -> Result<f64, ScoringError> {
        let atoms = histogram.total();
        if atoms == 0 {
            return Err(ScoringError::EmptyStructure);
        }
        Ok(self.total_energy(histogram) / atoms as f64)
    }

    /// Unnormalised energy: the coefficient-weighted sum of the histogram.
    pub fn total_energy(&self, histogram: &MotifHistogram) -> f64 {
        histogram
            .iter()
            .zip(self.coefficients.as_array())
            .map(|(count, coefficient)| count as f64 * coefficient)
            .sum()
    }
}
