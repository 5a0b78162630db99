//! Exhaustive enumeration loop.

use super::config::ExactConfig;
use super::permutation::next_permutation;
use crate::error::TspError;
use crate::matrix::DistanceMatrix;
use crate::tour::{Solution, Tour};

/// Result of an exact solve.
#[derive(Debug, Clone)]
pub struct ExactResult {
    /// The first minimum-length tour in lexicographic order.
    pub best: Tour,

    /// Length of `best`. Zero for instances with fewer than two cities.
    pub best_length: u64,

    /// Number of permutations scored.
    pub permutations: u64,
}

impl ExactResult {
    pub fn solution(&self) -> Solution {
        Solution {
            tour: self.best.clone(),
            length: self.best_length,
        }
    }
}

/// Enumerates every permutation of the cities and keeps the shortest tour.
pub struct ExactRunner;

impl ExactRunner {
    /// Solves without a size limit.
    ///
    /// The zero-city matrix yields the empty tour and the one-city matrix
    /// yields `[0]`, both with length 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::DistanceMatrix;
    /// use u_tsp::exact::ExactRunner;
    ///
    /// let dm = DistanceMatrix::from_rows(vec![
    ///     vec![0, 10, 15, 20],
    ///     vec![10, 0, 35, 25],
    ///     vec![15, 35, 0, 30],
    ///     vec![20, 25, 30, 0],
    /// ])
    /// .unwrap();
    /// let result = ExactRunner::run(&dm);
    /// assert_eq!(result.best_length, 80);
    /// ```
    pub fn run(matrix: &DistanceMatrix) -> ExactResult {
        let n = matrix.size();
        tracing::debug!(cities = n, "starting exact enumeration");

        let mut current: Vec<usize> = (0..n).collect();
        let mut best = current.clone();
        let mut best_length = u64::MAX;
        let mut permutations = 0u64;

        // Fewer than two cities: the identity is the only permutation and
        // scores 0, so the loop body runs exactly once.
        loop {
            let tour = Tour::new(current.clone());
            let length = tour.length(matrix);
            permutations += 1;
            if length < best_length {
                best_length = length;
                best.clone_from(&current);
            }
            if !next_permutation(&mut current) {
                break;
            }
        }

        tracing::debug!(cities = n, permutations, best_length, "exact enumeration finished");

        ExactResult {
            best: Tour::new(best),
            best_length,
            permutations,
        }
    }

    /// Solves after checking the instance against `config`.
    pub fn run_with_config(
        matrix: &DistanceMatrix,
        config: &ExactConfig,
    ) -> Result<ExactResult, TspError> {
        config.check_size(matrix.size())?;
        Ok(Self::run(matrix))
    }
}
