//! Exact solver configuration.

use crate::error::TspError;

/// Configuration for the exhaustive solver.
///
/// Enumeration costs O(N!) tour evaluations. No limit is enforced unless the
/// caller sets one.
///
/// # Examples
///
/// ```
/// use u_tsp::exact::ExactConfig;
///
/// let config = ExactConfig::default().with_max_cities(10);
/// assert_eq!(config.max_cities, Some(10));
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExactConfig {
    /// Largest instance the solver accepts. `None` = unbounded.
    pub max_cities: Option<usize>,
}

impl ExactConfig {
    /// Sets an upper bound on the number of cities.
    pub fn with_max_cities(mut self, n: usize) -> Self {
        self.max_cities = Some(n);
        self
    }

    /// Checks that an instance of `cities` cities is within the limit.
    pub fn check_size(&self, cities: usize) -> Result<(), TspError> {
        match self.max_cities {
            Some(limit) if cities > limit => Err(TspError::IntractableSize { cities, limit }),
            _ => Ok(()),
        }
    }
}
