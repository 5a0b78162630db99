//! Small-instance Traveling Salesman Problem solvers.
//!
//! Two solvers share one input (a square integer [`DistanceMatrix`]) and one
//! output (a closed [`Tour`] with its length):
//!
//! - **Exact**: exhaustive lexicographic permutation enumeration. O(N!),
//!   intended for about ten cities or fewer. Serves as ground truth.
//! - **Ant Colony Optimization (ACO)**: probabilistic tour construction over
//!   an evolving pheromone field with evaporation and elitist reinforcement.
//!
//! The [`compare`] module runs both side by side: timings, parameter sweeps,
//! and (with the `csv` feature) CSV export.
//!
//! # Example
//!
//! ```
//! use u_tsp::DistanceMatrix;
//! use u_tsp::aco::{AcoConfig, AcoRunner};
//! use u_tsp::exact::ExactRunner;
//!
//! let dm = DistanceMatrix::from_rows(vec![
//!     vec![0, 10, 15, 20],
//!     vec![10, 0, 35, 25],
//!     vec![15, 35, 0, 30],
//!     vec![20, 25, 30, 0],
//! ])
//! .unwrap();
//!
//! let exact = ExactRunner::run(&dm);
//! let aco = AcoRunner::run(&dm, &AcoConfig::default().with_seed(42)).unwrap();
//! assert_eq!(exact.best_length, 80);
//! assert!(aco.best_length >= exact.best_length);
//! ```
//!
//! # Randomness
//!
//! The colony draws through [`RandomSource`], implemented for every
//! [`rand::Rng`]. Pass a seed in the config or supply your own source to
//! [`AcoRunner::run_with_source`](aco::AcoRunner::run_with_source).

pub mod aco;
pub mod compare;
mod error;
pub mod exact;
mod matrix;
pub mod random;
mod tour;

pub use error::TspError;
pub use matrix::DistanceMatrix;
pub use random::RandomSource;
pub use tour::{Solution, Tour};
