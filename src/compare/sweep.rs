//! Grid search over ant colony parameters against the exact optimum.

use crate::aco::{AcoConfig, AcoRunner};
use crate::error::TspError;
use crate::exact::ExactRunner;
use crate::matrix::DistanceMatrix;

/// Outcome of one parameter combination.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepRow {
    pub alpha: f64,
    #[cfg_attr(feature = "serde", serde(rename = "r"))]
    pub evaporation_rate: f64,
    #[cfg_attr(feature = "serde", serde(rename = "days"))]
    pub iterations: usize,
    #[cfg_attr(feature = "serde", serde(rename = "elite"))]
    pub elite_multiplier: f64,
    /// Best length found by the colony.
    pub distance: u64,
    /// How far `distance` lies above the exact optimum.
    #[cfg_attr(feature = "serde", serde(rename = "mistake"))]
    pub error: u64,
}

impl SweepRow {
    /// Returns `true` if the colony matched the exact optimum.
    pub fn is_optimal(&self) -> bool {
        self.error == 0
    }
}

/// Parameter values to combine. Beta is tied to alpha as `1 - alpha`.
///
/// # Examples
///
/// ```
/// use u_tsp::compare::ParameterGrid;
///
/// let grid = ParameterGrid::default();
/// assert_eq!(grid.alphas.len(), 11);
/// assert_eq!(grid.evaporation_rates.len(), 8);
/// assert_eq!(grid.combinations(), 11 * 8 * 5 * 21);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterGrid {
    /// Pheromone exponents. Values above 1 give a negative beta and fail
    /// validation.
    pub alphas: Vec<f64>,
    pub evaporation_rates: Vec<f64>,
    pub iterations: Vec<usize>,
    pub elite_multipliers: Vec<f64>,
    /// Ants per iteration, shared by every combination.
    pub ants: usize,
}

impl Default for ParameterGrid {
    fn default() -> Self {
        Self {
            alphas: Self::stride(0.0, 1.0, 0.1),
            evaporation_rates: Self::stride(0.0, 0.7, 0.1),
            iterations: vec![1, 5, 10, 50, 100],
            elite_multipliers: Self::stride(0.0, 2.0, 0.1),
            ants: 10,
        }
    }
}

impl ParameterGrid {
    /// Evenly spaced values from `start` through `end` inclusive.
    ///
    /// Returns an empty list for a non-positive `step` or `end < start`.
    pub fn stride(start: f64, end: f64, step: f64) -> Vec<f64> {
        if step <= 0.0 || end < start {
            return Vec::new();
        }
        let count = ((end - start) / step + 1e-9).floor() as usize + 1;
        (0..count).map(|k| start + k as f64 * step).collect()
    }

    /// Number of combinations the sweep will run.
    pub fn combinations(&self) -> usize {
        self.alphas.len()
            * self.evaporation_rates.len()
            * self.iterations.len()
            * self.elite_multipliers.len()
    }

    /// Runs the colony once per combination on `matrix`.
    ///
    /// With a `seed`, combination `k` runs with seed `seed + k`, so the whole
    /// sweep is reproducible.
    pub fn sweep(
        &self,
        matrix: &DistanceMatrix,
        seed: Option<u64>,
    ) -> Result<Vec<SweepRow>, TspError> {
        let optimum = ExactRunner::run(matrix).best_length;
        tracing::debug!(
            combinations = self.combinations(),
            optimum,
            "starting parameter sweep"
        );

        let mut rows = Vec::with_capacity(self.combinations());
        let mut index = 0u64;
        for &alpha in &self.alphas {
            for &evaporation_rate in &self.evaporation_rates {
                for &iterations in &self.iterations {
                    for &elite_multiplier in &self.elite_multipliers {
                        let mut config = AcoConfig::default()
                            .with_ants(self.ants)
                            .with_alpha(alpha)
                            .with_beta(1.0 - alpha)
                            .with_evaporation_rate(evaporation_rate)
                            .with_iterations(iterations)
                            .with_elite_multiplier(elite_multiplier);
                        config.seed = seed.map(|s| s.wrapping_add(index));
                        index += 1;

                        let result = AcoRunner::run(matrix, &config)?;
                        let distance = result
                            .solution()
                            .ok_or(TspError::NoTourConstructed)?
                            .length;
                        rows.push(SweepRow {
                            alpha,
                            evaporation_rate,
                            iterations,
                            elite_multiplier,
                            distance,
                            error: distance.saturating_sub(optimum),
                        });
                    }
                }
            }
        }
        Ok(rows)
    }
}
