//! Ant colony execution loop.
//!
//! # Algorithm
//!
//! 1. Create a fresh pheromone field for the run
//! 2. At each iteration:
//!    a. Every ant builds a tour from a uniformly random start city
//!    b. Update the global best (strict improvement only)
//!    c. Co-occurrence deposit: every city pair gains `1 / length` from each
//!       ant whose tour contains both cities
//!    d. Evaporate the whole field
//!    e. Elite deposit on the edges of the global best tour
//! 3. Stop after the configured number of iterations
//!
//! The co-occurrence deposit rewards any pair of cities sharing a tour, not
//! only adjacent ones. It is a looser rule than textbook edge reinforcement
//! and is kept as-is.

use super::config::AcoConfig;
use super::pheromone::PheromoneField;
use super::selection::CandidateWeights;
use crate::error::TspError;
use crate::matrix::DistanceMatrix;
use crate::random::{create_rng, RandomSource};
use crate::tour::{Solution, Tour};

/// Result of an ant colony run.
#[derive(Debug, Clone)]
pub struct AcoResult {
    /// The best tour found over the whole run.
    ///
    /// Empty, with `best_length == u64::MAX`, when no tour was built because
    /// `iterations` was zero.
    pub best: Tour,

    /// Length of `best`.
    pub best_length: u64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Iteration at which the best tour was found.
    pub best_iteration: usize,

    /// Best length after each iteration. Non-increasing.
    pub cost_history: Vec<u64>,
}

impl AcoResult {
    /// The best tour and its length, or `None` if no tour was built.
    pub fn solution(&self) -> Option<Solution> {
        (self.best_length != u64::MAX).then(|| Solution {
            tour: self.best.clone(),
            length: self.best_length,
        })
    }
}

/// Executes the ant colony optimizer.
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the colony with a generator seeded from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::DistanceMatrix;
    /// use u_tsp::aco::{AcoConfig, AcoRunner};
    ///
    /// let dm = DistanceMatrix::from_rows(vec![
    ///     vec![0, 10, 15, 20],
    ///     vec![10, 0, 35, 25],
    ///     vec![15, 35, 0, 30],
    ///     vec![20, 25, 30, 0],
    /// ])
    /// .unwrap();
    /// let config = AcoConfig::default().with_seed(42);
    /// let result = AcoRunner::run(&dm, &config).unwrap();
    /// assert!(result.best_length >= 80);
    /// assert!(result.best.is_permutation_of(4));
    /// ```
    pub fn run(matrix: &DistanceMatrix, config: &AcoConfig) -> Result<AcoResult, TspError> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_source(matrix, config, &mut rng)
    }

    /// Runs the colony drawing every random value from `source`.
    ///
    /// Fails before any work if the configuration is invalid or, with
    /// `beta > 0`, if two distinct cities are at distance zero.
    pub fn run_with_source<S: RandomSource>(
        matrix: &DistanceMatrix,
        config: &AcoConfig,
        source: &mut S,
    ) -> Result<AcoResult, TspError> {
        config.validate_for(matrix)?;

        let n = matrix.size();
        tracing::debug!(
            cities = n,
            ants = config.ants,
            iterations = config.iterations,
            "starting ant colony run"
        );

        if n == 0 {
            return Ok(AcoResult {
                best: Tour::default(),
                best_length: 0,
                iterations: 0,
                best_iteration: 0,
                cost_history: Vec::new(),
            });
        }

        let mut colony = Colony::new(matrix, config);
        let mut best = Tour::default();
        let mut best_length = u64::MAX;
        let mut best_iteration = 0;
        let mut cost_history = Vec::with_capacity(config.iterations);

        for iteration in 0..config.iterations {
            let mut ants = Vec::with_capacity(config.ants);
            for _ in 0..config.ants {
                let tour = colony.construct_tour(source);
                let length = tour.length(matrix);
                if length < best_length {
                    tracing::trace!(iteration, length, "new global best");
                    best = tour.clone();
                    best_length = length;
                    best_iteration = iteration;
                }
                ants.push((tour, length));
            }

            colony.deposit_co_occurrence(&ants);
            colony.pheromone.evaporate(config.evaporation_rate);
            if !colony
                .pheromone
                .reinforce_best_tour(&best, config.elite_multiplier, best_length)
            {
                tracing::trace!(iteration, "zero best length, elite deposit skipped");
            }

            cost_history.push(best_length);
        }

        tracing::debug!(
            cities = n,
            best_length,
            best_iteration,
            "ant colony run finished"
        );

        Ok(AcoResult {
            best,
            best_length,
            iterations: cost_history.len(),
            best_iteration,
            cost_history,
        })
    }
}

/// State of one run. The pheromone field lives and dies with it.
struct Colony<'a> {
    matrix: &'a DistanceMatrix,
    config: &'a AcoConfig,
    pheromone: PheromoneField,
}

impl<'a> Colony<'a> {
    fn new(matrix: &'a DistanceMatrix, config: &'a AcoConfig) -> Self {
        Self {
            matrix,
            config,
            pheromone: PheromoneField::new(matrix.size(), config.initial_pheromone),
        }
    }

    /// Builds one ant's tour. Requires at least one city.
    fn construct_tour<S: RandomSource>(&self, source: &mut S) -> Tour {
        let n = self.matrix.size();
        let mut visited = vec![false; n];
        let mut path = Vec::with_capacity(n);

        let mut current = source.uniform_index(n);
        visited[current] = true;
        path.push(current);

        for _ in 1..n {
            let weights = CandidateWeights::compute(
                current,
                &visited,
                &self.pheromone,
                self.matrix,
                self.config.alpha,
                self.config.beta,
            );
            if matches!(weights, CandidateWeights::NoPositiveWeight(_)) {
                tracing::trace!(current, "no positive selection weight, using fallback");
            }
            let Some(next) = weights.pick(source) else {
                break;
            };
            visited[next] = true;
            path.push(next);
            current = next;
        }

        Tour::new(path)
    }

    /// Adds, for every unordered city pair, the sum of `1 / length` over the
    /// ants whose tour contains both cities. Zero-length tours contribute
    /// nothing.
    fn deposit_co_occurrence(&mut self, ants: &[(Tour, u64)]) {
        let n = self.matrix.size();
        let members: Vec<(Vec<bool>, f64)> = ants
            .iter()
            .filter(|(_, length)| *length > 0)
            .map(|(tour, length)| {
                let mut contains = vec![false; n];
                for &city in tour.cities() {
                    contains[city] = true;
                }
                (contains, 1.0 / *length as f64)
            })
            .collect();

        for i in 0..n {
            for j in (i + 1)..n {
                let deposit: f64 = members
                    .iter()
                    .filter(|(contains, _)| contains[i] && contains[j])
                    .map(|&(_, share)| share)
                    .sum();
                if deposit > 0.0 {
                    self.pheromone.reinforce_edge(i, j, deposit);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_cities() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0, 10, 15, 20],
            vec![10, 0, 35, 25],
            vec![15, 35, 0, 30],
            vec![20, 25, 30, 0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_four_city_converges() {
        let dm = four_cities();
        let config = AcoConfig::default()
            .with_ants(10)
            .with_alpha(1.0)
            .with_beta(2.0)
            .with_evaporation_rate(0.5)
            .with_elite_multiplier(2.0)
            .with_iterations(50)
            .with_seed(42);

        let result = AcoRunner::run(&dm, &config).expect("valid run");
        // 500 tours over only 3 distinct undirected cycles.
        assert_eq!(result.best_length, 80);
        assert_eq!(result.best.length(&dm), 80);
        assert!(result.best.is_permutation_of(4));
        assert_eq!(result.iterations, 50);
        assert_eq!(result.cost_history.len(), 50);
    }

    #[test]
    fn test_cost_history_non_increasing() {
        let mut rng = create_rng(3);
        let dm = DistanceMatrix::random(8, 1..=100, &mut rng);
        let config = AcoConfig::default().with_iterations(30).with_seed(9);
        let result = AcoRunner::run(&dm, &config).expect("valid run");

        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best length history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
        assert_eq!(result.cost_history.last(), Some(&result.best_length));
        assert_eq!(result.cost_history[result.best_iteration], result.best_length);
    }

    #[test]
    fn test_seeded_runs_reproducible() {
        let mut rng = create_rng(11);
        let dm = DistanceMatrix::random(7, 1..=50, &mut rng);
        let config = AcoConfig::default().with_iterations(10).with_seed(5);
        let a = AcoRunner::run(&dm, &config).expect("valid run");
        let b = AcoRunner::run(&dm, &config).expect("valid run");
        assert_eq!(a.best, b.best);
        assert_eq!(a.cost_history, b.cost_history);
    }

    #[test]
    fn test_single_city() {
        let dm = DistanceMatrix::from_rows(vec![vec![0]]).expect("valid");
        let config = AcoConfig::default().with_iterations(3).with_seed(1);
        let result = AcoRunner::run(&dm, &config).expect("valid run");
        assert_eq!(result.best.cities(), &[0]);
        assert_eq!(result.best_length, 0);
        assert_eq!(result.cost_history, vec![0, 0, 0]);
    }

    #[test]
    fn test_empty_matrix() {
        let dm = DistanceMatrix::from_rows(Vec::new()).expect("valid");
        let result = AcoRunner::run(&dm, &AcoConfig::default().with_seed(1)).expect("valid run");
        assert!(result.best.is_empty());
        assert_eq!(
            result.solution(),
            Some(Solution {
                tour: Tour::default(),
                length: 0
            })
        );
    }

    #[test]
    fn test_zero_iterations() {
        let dm = four_cities();
        let config = AcoConfig::default().with_iterations(0).with_seed(1);
        let result = AcoRunner::run(&dm, &config).expect("valid run");
        assert_eq!(result.iterations, 0);
        assert!(result.solution().is_none());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let dm = four_cities();
        let err = AcoRunner::run(&dm, &AcoConfig::default().with_ants(0)).unwrap_err();
        assert!(matches!(err, TspError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_zero_distance() {
        let dm = DistanceMatrix::from_rows(vec![vec![0, 1, 1], vec![1, 0, 0], vec![1, 1, 0]])
            .expect("valid");
        let err = AcoRunner::run(&dm, &AcoConfig::default().with_seed(1)).unwrap_err();
        assert_eq!(err, TspError::ZeroDistance { from: 1, to: 2 });
    }

    #[test]
    fn test_full_evaporation_still_builds_tours() {
        // Rate 1 with no elite deposit leaves an all-zero field, so every
        // step after the first iteration takes the no-positive-weight branch.
        let dm = four_cities();
        let config = AcoConfig::default()
            .with_evaporation_rate(1.0)
            .with_elite_multiplier(0.0)
            .with_iterations(5)
            .with_seed(2);
        let result = AcoRunner::run(&dm, &config).expect("valid run");
        assert!(result.best.is_permutation_of(4));
        assert!(result.best_length >= 80);
    }

    #[test]
    fn test_co_occurrence_deposit() {
        let dm = four_cities();
        let config = AcoConfig::default().with_initial_pheromone(0.0);
        let mut colony = Colony::new(&dm, &config);
        let ants = vec![
            (Tour::new(vec![0, 1, 3, 2]), 80u64),
            (Tour::new(vec![0, 2, 1, 3]), 95u64),
        ];
        colony.deposit_co_occurrence(&ants);

        let expected = 1.0 / 80.0 + 1.0 / 95.0;
        for i in 0..4 {
            for j in 0..4 {
                let value = colony.pheromone.get(i, j);
                if i == j {
                    assert_eq!(value, 0.0);
                } else {
                    // Every pair co-occurs in both full tours.
                    assert!((value - expected).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_co_occurrence_skips_zero_length() {
        let dm = DistanceMatrix::from_rows(vec![vec![0]]).expect("valid");
        let config = AcoConfig::default().with_initial_pheromone(1.0);
        let mut colony = Colony::new(&dm, &config);
        colony.deposit_co_occurrence(&[(Tour::new(vec![0]), 0)]);
        assert!((colony.pheromone.get(0, 0) - 1.0).abs() < 1e-12);
    }
}
