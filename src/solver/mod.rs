//! End-to-end tour solving.
//!
//! Points → [`DistanceMatrix`](crate::distance::DistanceMatrix) →
//! nearest-neighbor construction → 2-opt improvement → [`Solution`].

mod config;
mod runner;
mod solution;

pub use config::SolverConfig;
pub use runner::{solve, TourSolver};
pub use solution::{Itinerary, Solution, Stop};
