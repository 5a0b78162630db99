//! Pheromone field owned by a single colony run.

use crate::tour::Tour;

/// A dense n×n matrix of non-negative pheromone values.
///
/// Deposits are always applied to both directions of an edge, so the field
/// stays symmetric even when the distance matrix is not. Entries never go
/// negative: evaporation rates are clamped to `[0, 1]` and negative or NaN
/// deposits are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneField {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneField {
    /// Creates a field with every entry, self pairs included, set to `initial`.
    pub fn new(size: usize, initial: f64) -> Self {
        Self {
            data: vec![initial.max(0.0); size * size],
            size,
        }
    }

    /// Returns the pheromone on the edge `from -> to`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Iterates all entries in row-major order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().copied()
    }

    /// Multiplies every entry by `1 - rate`.
    pub fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate.clamp(0.0, 1.0);
        for value in &mut self.data {
            *value *= keep;
        }
    }

    /// Adds `amount` to both `(i, j)` and `(j, i)`.
    ///
    /// For a self pair the single entry receives the amount twice.
    pub fn reinforce_edge(&mut self, i: usize, j: usize, amount: f64) {
        let amount = amount.max(0.0);
        self.data[i * self.size + j] += amount;
        self.data[j * self.size + i] += amount;
    }

    /// Adds `amount` to every edge of the closed tour, both directions.
    pub fn reinforce_tour(&mut self, tour: &Tour, amount: f64) {
        for (from, to) in tour.edges() {
            self.reinforce_edge(from, to, amount);
        }
    }

    /// Elite deposit: `elite_multiplier / tour_length` on every edge of the
    /// closed tour.
    ///
    /// A zero tour length would divide by zero; the deposit is skipped and
    /// `false` is returned.
    pub fn reinforce_best_tour(
        &mut self,
        tour: &Tour,
        elite_multiplier: f64,
        tour_length: u64,
    ) -> bool {
        if tour_length == 0 {
            return false;
        }
        self.reinforce_tour(tour, elite_multiplier / tour_length as f64);
        true
    }
}
