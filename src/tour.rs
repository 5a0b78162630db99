//! Closed tours and their lengths.

use crate::matrix::DistanceMatrix;

/// An ordered visiting sequence of city indices, implicitly closed: the last
/// city connects back to the first.
///
/// Tours are produced by the solvers and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour(Vec<usize>);

impl Tour {
    pub fn new(cities: Vec<usize>) -> Self {
        Self(cities)
    }

    pub fn cities(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the directed edges of the closed tour, including the edge
    /// from the last city back to the first.
    ///
    /// A single-city tour yields the self edge `(c, c)`; an empty tour yields
    /// nothing.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.0.len();
        (0..n).map(move |k| (self.0[k], self.0[(k + 1) % n]))
    }

    /// Sum of consecutive edge costs plus the closing edge.
    ///
    /// Zero for tours with fewer than two cities.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::{DistanceMatrix, Tour};
    ///
    /// let dm = DistanceMatrix::from_rows(vec![
    ///     vec![0, 10, 15, 20],
    ///     vec![10, 0, 35, 25],
    ///     vec![15, 35, 0, 30],
    ///     vec![20, 25, 30, 0],
    /// ])
    /// .unwrap();
    /// assert_eq!(Tour::new(vec![0, 1, 3, 2]).length(&dm), 80);
    /// ```
    pub fn length(&self, matrix: &DistanceMatrix) -> u64 {
        if self.0.len() < 2 {
            return 0;
        }
        self.edges().map(|(from, to)| matrix.get(from, to)).sum()
    }

    /// Returns `true` if the tour visits every city of `0..n` exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.0.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &city in &self.0 {
            if city >= n || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }
}

impl From<Vec<usize>> for Tour {
    fn from(cities: Vec<usize>) -> Self {
        Self(cities)
    }
}

/// A tour together with its length, as returned by either solver.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub tour: Tour,
    pub length: u64,
}
