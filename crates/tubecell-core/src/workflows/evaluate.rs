use crate::core::energy::motif::{MotifDecomposer, MotifHistogram};
use crate::core::energy::scoring::EnergyModel;
use crate::core::lattice::geometry::{LatticeError, LatticeGeometry};
use crate::core::models::occupancy::Occupancy;
use crate::core::models::view::StructureView;
use crate::engine::config::{BoundaryPolicy, EvaluationConfig};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks::boundary::{self, BoundaryReport};
use crate::engine::tasks::connectivity::{self, ConnectivityReport};
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fitness reported for structures that must never win a selection.
pub const INFEASIBLE_FITNESS: f64 = f64::NEG_INFINITY;

/// Maps a genome to a score; higher is better.
pub trait FitnessFunction {
    fn fitness(&self, occupancy: &Occupancy) -> Result<f64, EngineError>;
}

/// Decides whether a genome may enter the population at all.
pub trait FeasibilityPredicate {
    fn is_feasible(&self, occupancy: &Occupancy) -> Result<bool, EngineError>;
}

/// Everything known about one structure after evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub atoms: usize,
    pub histogram: MotifHistogram,
    pub connectivity: ConnectivityReport,
    pub axial: BoundaryReport,
    pub circumferential: BoundaryReport,
    pub feasible: bool,
    /// Per-atom energy, `None` for a structure with no atoms.
    pub fitness: Option<f64>,
}

impl Evaluation {
    pub fn fitness_or_worst(&self) -> f64 {
        match self.fitness {
            Some(fitness) if self.feasible => fitness,
            _ => INFEASIBLE_FITNESS,
        }
    }
}

/// The fitness function and feasibility predicate for one lattice and energy model.
///
/// Immutable once built and shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluator {
    geometry: LatticeGeometry,
    model: EnergyModel,
    policy: BoundaryPolicy,
}

impl Evaluator {
    pub fn new(config: &EvaluationConfig) -> Result<Self, EngineError> {
        let geometry = config.lattice.geometry()?;
        let model = EnergyModel::new(config.energy.coefficients);
        debug!(
            n_phi = geometry.n_phi(),
            n_z = geometry.n_z(),
            sites = geometry.len(),
            policy = %config.validation.boundary_policy,
            "Evaluator initialized."
        );
        Ok(Self::from_parts(
            geometry,
            model,
            config.validation.boundary_policy,
        ))
    }

    pub fn from_parts(geometry: LatticeGeometry, model: EnergyModel, policy: BoundaryPolicy) -> Self {
        Self {
            geometry: geometry.periodic_view(),
            model,
            policy,
        }
    }

    #[inline]
    pub fn geometry(&self) -> &LatticeGeometry {
        &self.geometry
    }

    #[inline]
    pub fn model(&self) -> &EnergyModel {
        &self.model
    }

    #[inline]
    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    pub fn view<'a>(&self, occupancy: &'a Occupancy) -> Result<StructureView<'a>, LatticeError> {
        StructureView::new(self.geometry, occupancy)
    }

    pub fn evaluate(&self, occupancy: &Occupancy) -> Result<Evaluation, EngineError> {
        let view = self.view(occupancy)?;
        let histogram = MotifDecomposer::decompose(&view);
        let connectivity = connectivity::run(&view);
        let axial = boundary::axial(&view);
        let circumferential = boundary::circumferential(&view);
        let feasible = connectivity.is_connected()
            && axial.satisfies(self.policy)
            && circumferential.satisfies(self.policy);
        let fitness = match histogram.total() {
            0 => None,
            _ => Some(self.model.score_histogram(&histogram)?),
        };
        Ok(Evaluation {
            atoms: view.atom_count(),
            histogram,
            connectivity,
            axial,
            circumferential,
            feasible,
            fitness,
        })
    }

    fn check_feasible(&self, view: &StructureView<'_>) -> bool {
        boundary::axial(view).satisfies(self.policy)
            && boundary::circumferential(view).satisfies(self.policy)
            && connectivity::run(view).is_connected()
    }

    /// The fitness of feasible structures and [`INFEASIBLE_FITNESS`] for everything else,
    /// including the empty structure.
    pub fn fitness_or_worst(&self, occupancy: &Occupancy) -> Result<f64, EngineError> {
        let view = self.view(occupancy)?;
        if !self.check_feasible(&view) {
            return Ok(INFEASIBLE_FITNESS);
        }
        Ok(self.model.score(&view)?)
    }
}

impl FeasibilityPredicate for Evaluator {
    /// One connected cluster inside the cell, bonded to its copies along and around the tube.
    fn is_feasible(&self, occupancy: &Occupancy) -> Result<bool, EngineError> {
        let view = self.view(occupancy)?;
        Ok(self.check_feasible(&view))
    }
}

impl FitnessFunction for Evaluator {
    /// Per-atom coordination energy. Only meaningful for feasible structures; the empty
    /// structure is an error.
    fn fitness(&self, occupancy: &Occupancy) -> Result<f64, EngineError> {
        let view = self.view(occupancy)?;
        Ok(self.model.score(&view)?)
    }
}

/// Counts and the best feasible entry of a batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchSummary {
    pub evaluated: usize,
    pub feasible: usize,
    /// Index and fitness of the fittest feasible structure; the first one wins ties.
    pub best: Option<(usize, f64)>,
}

impl BatchSummary {
    pub fn from_evaluations(evaluations: &[Evaluation]) -> Self {
        let mut best: Option<(usize, f64)> = None;
        for (index, evaluation) in evaluations.iter().enumerate() {
            if !evaluation.feasible {
                continue;
            }
            let Some(fitness) = evaluation.fitness else {
                continue;
            };
            if best.is_none_or(|(_, current)| fitness > current) {
                best = Some((index, fitness));
            }
        }
        Self {
            evaluated: evaluations.len(),
            feasible: evaluations.iter().filter(|e| e.feasible).count(),
            best,
        }
    }
}

/// Evaluates every genome, returning results in input order.
///
/// Fails on the first genome that does not fit the lattice.
#[instrument(skip_all, name = "batch_evaluation_workflow")]
pub fn run_batch(
    evaluator: &Evaluator,
    genomes: &[Occupancy],
    reporter: &ProgressReporter,
) -> Result<Vec<Evaluation>, EngineError> {
    info!(genomes = genomes.len(), "Evaluating structures.");
    reporter.report(Progress::TaskStart {
        total_steps: genomes.len() as u64,
    });
    reporter.report(Progress::Message(format!(
        "Evaluating {} structure(s)...",
        genomes.len()
    )));

    #[cfg(not(feature = "parallel"))]
    let iterator = genomes.iter();

    #[cfg(feature = "parallel")]
    let iterator = genomes.par_iter();

    let evaluations = iterator
        .map(|genome| {
            let evaluation = evaluator.evaluate(genome);
            reporter.report(Progress::TaskIncrement);
            evaluation
        })
        .collect::<Result<Vec<_>, _>>();

    reporter.report(Progress::TaskFinish);
    let evaluations = evaluations?;

    let summary = BatchSummary::from_evaluations(&evaluations);
    info!(
        evaluated = summary.evaluated,
        feasible = summary.feasible,
        "Batch evaluation complete."
    );
    Ok(evaluations)
}
