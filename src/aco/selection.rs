//! Probabilistic choice of the next city.
//!
//! An ant at city `c` weighs each unvisited candidate `j` by
//! `pheromone(c, j)^alpha * (1 / distance(c, j))^beta` and samples one in
//! proportion to those weights. The degenerate outcomes (no positive weight,
//! overflowing weights) are explicit variants of [`CandidateWeights`] so the
//! fallback never depends on how a cumulative-sum loop happens to end.

use super::pheromone::PheromoneField;
use crate::matrix::DistanceMatrix;
use crate::random::RandomSource;

/// Selection weights of the unvisited candidates from one city.
#[derive(Debug, Clone, PartialEq)]
pub enum CandidateWeights {
    /// Ordinary case: the weights sum to a positive finite total.
    Weighted {
        /// `(city, weight)` for each unvisited city, in index order.
        candidates: Vec<(usize, f64)>,
        total: f64,
    },

    /// The weights overflowed; the heaviest candidate (first among ties) wins.
    Unbounded(usize),

    /// Every remaining weight is zero or undefined. The first unvisited
    /// city is chosen.
    NoPositiveWeight(usize),

    /// Every city has been visited.
    Exhausted,
}

impl CandidateWeights {
    /// Computes the weights of all cities not yet in `visited`.
    pub fn compute(
        current: usize,
        visited: &[bool],
        pheromone: &PheromoneField,
        matrix: &DistanceMatrix,
        alpha: f64,
        beta: f64,
    ) -> Self {
        let candidates: Vec<(usize, f64)> = (0..matrix.size())
            .filter(|&j| !visited[j])
            .map(|j| {
                let visibility = 1.0 / matrix.get(current, j) as f64;
                let weight = pheromone.get(current, j).powf(alpha) * visibility.powf(beta);
                (j, if weight.is_nan() { 0.0 } else { weight })
            })
            .collect();

        let Some(&(first, _)) = candidates.first() else {
            return CandidateWeights::Exhausted;
        };

        let total: f64 = candidates.iter().map(|&(_, w)| w).sum();
        if total.is_infinite() {
            let heaviest = candidates
                .iter()
                .fold((first, f64::NEG_INFINITY), |best, &(j, w)| {
                    if w > best.1 {
                        (j, w)
                    } else {
                        best
                    }
                })
                .0;
            CandidateWeights::Unbounded(heaviest)
        } else if total > 0.0 {
            CandidateWeights::Weighted { candidates, total }
        } else {
            CandidateWeights::NoPositiveWeight(first)
        }
    }

    /// Picks a city.
    ///
    /// For [`Weighted`](CandidateWeights::Weighted) one value `r` is drawn
    /// from `[0, total)` and the first candidate whose cumulative weight
    /// reaches `r` is returned; if rounding leaves the cumulative sum short,
    /// the last candidate is returned. Returns `None` only when exhausted.
    pub fn pick<S: RandomSource>(&self, source: &mut S) -> Option<usize> {
        match self {
            CandidateWeights::Weighted { candidates, total } => {
                let r = source.uniform_real(0.0, *total);
                let mut cumulative = 0.0;
                for &(city, weight) in candidates {
                    cumulative += weight;
                    if cumulative >= r {
                        return Some(city);
                    }
                }
                candidates.last().map(|&(city, _)| city)
            }
            CandidateWeights::Unbounded(city) | CandidateWeights::NoPositiveWeight(city) => {
                Some(*city)
            }
            CandidateWeights::Exhausted => None,
        }
    }
}
