//! 2-opt local search.
//!
//! A first-improvement descent over segment reversals. Each scan walks the
//! move space in `(i, j)` order, applies the first move that shortens the
//! tour by more than `epsilon`, and restarts. The search ends when a full
//! scan finds nothing, leaving a 2-opt local optimum.
//!
//! # References
//!
//! - Croes, G.A. (1958). "A method for solving traveling salesman problems",
//!   *Operations Research* 6(6), 791-812.
//! - Johnson, D.S. & McGeoch, L.A. (1997). "The traveling salesman problem:
//!   A case study in local optimization", *Local Search in Combinatorial
//!   Optimization*, 215-310.

mod config;
mod runner;

pub use config::{Evaluation, TwoOptConfig};
pub use runner::{improve, two_opt_delta, StopReason, TwoOptResult, TwoOptRunner};
