//! Uniform entry points over both solvers.

use crate::aco::{AcoConfig, AcoRunner};
use crate::error::TspError;
use crate::exact::ExactRunner;
use crate::matrix::DistanceMatrix;
use crate::tour::Solution;

/// A distance matrix together with the ant colony tuning parameters.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Params {
    pub matrix: DistanceMatrix,
    pub config: AcoConfig,
}

impl Params {
    pub fn new(matrix: DistanceMatrix, config: AcoConfig) -> Self {
        Self { matrix, config }
    }
}

/// Solves `matrix` exactly. See [`ExactRunner::run`].
pub fn exact_solve(matrix: &DistanceMatrix) -> Solution {
    ExactRunner::run(matrix).solution()
}

/// Solves `params.matrix` with the ant colony.
///
/// Fails with [`TspError::NoTourConstructed`] when zero iterations leave
/// nothing to return.
pub fn ant_colony_solve(params: &Params) -> Result<Solution, TspError> {
    run_ant_colony(&params.matrix, &params.config)
}

fn run_ant_colony(matrix: &DistanceMatrix, config: &AcoConfig) -> Result<Solution, TspError> {
    AcoRunner::run(matrix, config)?
        .solution()
        .ok_or(TspError::NoTourConstructed)
}

/// Which solver to run.
#[derive(Debug, Clone)]
pub enum Algorithm {
    BruteForce,
    AntColony(AcoConfig),
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BruteForce => "brute force",
            Algorithm::AntColony(_) => "ant colony",
        }
    }

    pub fn execute(&self, matrix: &DistanceMatrix) -> Result<Solution, TspError> {
        match self {
            Algorithm::BruteForce => Ok(exact_solve(matrix)),
            Algorithm::AntColony(config) => run_ant_colony(matrix, config),
        }
    }
}
