//! Ant colony configuration.

use crate::error::TspError;
use crate::matrix::DistanceMatrix;

/// Configuration for the elitist Ant Colony Optimizer.
///
/// # Examples
///
/// ```
/// use u_tsp::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_ants(20)
///     .with_alpha(1.0)
///     .with_beta(2.0)
///     .with_evaporation_rate(0.5)
///     .with_elite_multiplier(2.0)
///     .with_iterations(100)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of ants constructing a tour in each iteration. Must be positive.
    pub ants: usize,

    /// Fraction of pheromone removed after each iteration, in `[0, 1]`.
    ///
    /// 0 disables evaporation; 1 wipes the field before elite reinforcement.
    pub evaporation_rate: f64,

    /// Pheromone influence exponent.
    pub alpha: f64,

    /// Visibility (inverse distance) influence exponent.
    pub beta: f64,

    /// Strength of the extra deposit on the best tour found so far.
    ///
    /// Each of its edges receives `elite_multiplier / best_length` per iteration.
    pub elite_multiplier: f64,

    /// Number of iterations. There is no early exit.
    pub iterations: usize,

    /// Pheromone value every city pair starts with.
    pub initial_pheromone: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            ants: 10,
            evaporation_rate: 0.5,
            alpha: 1.0,
            beta: 2.0,
            elite_multiplier: 2.0,
            iterations: 50,
            initial_pheromone: 1.0,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_ants(mut self, n: usize) -> Self {
        self.ants = n;
        self
    }

    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_elite_multiplier(mut self, multiplier: f64) -> Self {
        self.elite_multiplier = multiplier;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_initial_pheromone(mut self, value: f64) -> Self {
        self.initial_pheromone = value;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.ants == 0 {
            return Err("ants must be positive".into());
        }
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            return Err(format!(
                "evaporation_rate must be in [0, 1], got {}",
                self.evaporation_rate
            ));
        }
        for (name, value) in [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("elite_multiplier", self.elite_multiplier),
            ("initial_pheromone", self.initial_pheromone),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be finite and non-negative, got {value}"));
            }
        }
        Ok(())
    }

    /// Validates the configuration against a concrete instance.
    ///
    /// With `beta > 0` every off-diagonal distance must be positive, since
    /// visibility is its reciprocal.
    pub fn validate_for(&self, matrix: &DistanceMatrix) -> Result<(), TspError> {
        self.validate().map_err(TspError::InvalidConfig)?;
        if self.beta > 0.0 {
            if let Some((from, to)) = matrix.zero_distance_pair() {
                return Err(TspError::ZeroDistance { from, to });
            }
        }
        Ok(())
    }
}
