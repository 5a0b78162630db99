//! Wall-clock comparison of the two solvers.

use std::time::{Duration, Instant};

use rand::Rng;

use super::algorithm::Algorithm;
use crate::aco::AcoConfig;
use crate::error::TspError;
use crate::matrix::DistanceMatrix;

/// Solve times for one instance size, in milliseconds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingRow {
    #[cfg_attr(feature = "serde", serde(rename = "len"))]
    pub size: usize,
    #[cfg_attr(feature = "serde", serde(rename = "bruteforce"))]
    pub brute_force_ms: f64,
    #[cfg_attr(feature = "serde", serde(rename = "ant"))]
    pub ant_colony_ms: f64,
}

/// Total wall time of `runs` consecutive executions.
pub fn measure(
    algorithm: &Algorithm,
    matrix: &DistanceMatrix,
    runs: usize,
) -> Result<Duration, TspError> {
    let start = Instant::now();
    for _ in 0..runs {
        algorithm.execute(matrix)?;
    }
    Ok(start.elapsed())
}

/// Times both solvers on one random matrix per size, with entries in
/// `1..=100`.
pub fn timing_table<R: Rng>(
    sizes: &[usize],
    runs: usize,
    config: &AcoConfig,
    rng: &mut R,
) -> Result<Vec<TimingRow>, TspError> {
    let ant_colony = Algorithm::AntColony(config.clone());
    sizes
        .iter()
        .map(|&size| {
            let matrix = DistanceMatrix::random(size, 1..=100, &mut *rng);
            let brute_force = measure(&Algorithm::BruteForce, &matrix, runs)?;
            let ant = measure(&ant_colony, &matrix, runs)?;
            tracing::debug!(
                size,
                brute_force_ms = as_ms(brute_force),
                ant_colony_ms = as_ms(ant),
                "timed instance"
            );
            Ok(TimingRow {
                size,
                brute_force_ms: as_ms(brute_force),
                ant_colony_ms: as_ms(ant),
            })
        })
        .collect()
}

fn as_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
