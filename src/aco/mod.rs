//! Ant Colony Optimization (ACO) with elitist reinforcement.
//!
//! Simulated ants build tours city by city, choosing among unvisited cities
//! in proportion to `pheromone^alpha * visibility^beta`. After every
//! iteration the pheromone field receives a co-occurrence deposit from all
//! ants, evaporates, and the best tour found so far receives an extra elite
//! deposit. Each run owns a fresh [`PheromoneField`]; nothing persists
//! between runs.
//!
//! Randomness is drawn through [`RandomSource`](crate::random::RandomSource),
//! so runs can be made reproducible or fully scripted.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a Colony
//!   of Cooperating Agents"

mod config;
mod pheromone;
mod runner;
mod selection;

pub use config::AcoConfig;
pub use pheromone::PheromoneField;
pub use runner::{AcoResult, AcoRunner};
pub use selection::CandidateWeights;
