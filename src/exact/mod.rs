//! Exhaustive exact solver.
//!
//! Scores every permutation of the city indices, generated in lexicographic
//! order from the identity, and keeps the first shortest closed tour. The
//! cost is O(N!) tour evaluations, so it is only practical for roughly ten
//! cities or fewer; the solver serves as ground truth for the ant colony.

mod config;
mod permutation;
mod runner;

pub use config::ExactConfig;
pub use permutation::next_permutation;
pub use runner::{ExactResult, ExactRunner};
