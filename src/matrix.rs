//! Dense integer distance matrix.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::error::TspError;

/// A dense n×n matrix of non-negative integer travel costs, row-major.
///
/// Symmetry is not required. The diagonal is conventionally zero and is
/// never read by the solvers.
///
/// # Examples
///
/// ```
/// use u_tsp::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0, 10, 15],
///     vec![10, 0, 35],
///     vec![15, 35, 0],
/// ])
/// .unwrap();
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(0, 2), 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    data: Vec<u64>,
    size: usize,
}

impl DistanceMatrix {
    /// Builds a matrix from explicit rows.
    ///
    /// Fails if any row length differs from the row count or any entry is
    /// negative. An empty row list yields a matrix of size zero.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, TspError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (from, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(TspError::NonSquareMatrix {
                    row: from,
                    expected: size,
                    got: row.len(),
                });
            }
            for (to, value) in row.into_iter().enumerate() {
                let value = u64::try_from(value)
                    .map_err(|_| TspError::NegativeDistance { from, to, value })?;
                data.push(value);
            }
        }
        Ok(Self { data, size })
    }

    /// Creates a matrix from row-major data.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<u64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Generates a random matrix with off-diagonal entries drawn uniformly
    /// from `range` and a zero diagonal.
    ///
    /// # Panics
    ///
    /// Panics if `range` is empty.
    pub fn random<R: Rng>(size: usize, range: RangeInclusive<u64>, rng: &mut R) -> Self {
        let mut data = vec![0; size * size];
        for from in 0..size {
            for to in 0..size {
                if from != to {
                    data[from * size + to] = rng.random_range(range.clone());
                }
            }
        }
        Self { data, size }
    }

    /// Returns the cost of travelling from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.data[from * self.size + to]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` for the zero-city matrix.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if `get(i, j) == get(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| ((i + 1)..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// First off-diagonal entry equal to zero, scanning rows in order.
    pub fn zero_distance_pair(&self) -> Option<(usize, usize)> {
        (0..self.size)
            .flat_map(|from| (0..self.size).map(move |to| (from, to)))
            .find(|&(from, to)| from != to && self.get(from, to) == 0)
    }
}
