//! Error type shared by both solvers.

use thiserror::Error;

/// Errors returned by the solvers and the comparison harness.
///
/// Input-shape problems are detected before any algorithmic work starts.
/// Numeric degeneracies inside a run (zero tour length, all-zero selection
/// weights) are recovered locally and never surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TspError {
    /// A matrix row does not have as many entries as there are rows.
    #[error("distance matrix is not square: row {row} has {got} entries, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// A distance is negative.
    #[error("negative distance {value} from city {from} to city {to}")]
    NegativeDistance { from: usize, to: usize, value: i64 },

    /// Two distinct cities are at distance zero, which makes visibility infinite.
    #[error("zero distance between distinct cities {from} and {to}")]
    ZeroDistance { from: usize, to: usize },

    /// Solver parameters failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The exact solver was asked to enumerate more cities than the caller allows.
    #[error("{cities} cities exceed the exact solver limit of {limit}")]
    IntractableSize { cities: usize, limit: usize },

    /// The run finished without building a single tour (zero iterations).
    #[error("no tour was constructed")]
    NoTourConstructed,
}
