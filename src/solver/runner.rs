//! Solve pipeline.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::config::SolverConfig;
use super::solution::Solution;
use crate::construct::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::geo::Point;
use crate::two_opt::TwoOptRunner;

/// Builds and improves a closed tour over geographic points.
pub struct TourSolver;

impl TourSolver {
    /// Solves the tour for `points`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for an invalid `config`, and
    /// [`Error::InvalidCoordinate`] for the first bad point when
    /// `validate_coordinates` is set.
    pub fn solve<L>(points: &[Point<L>], config: &SolverConfig) -> Result<Solution> {
        Self::solve_with_cancel(points, config, None)
    }

    /// Like [`solve`](Self::solve), with a cancellation flag forwarded to 2-opt.
    pub fn solve_with_cancel<L>(
        points: &[Point<L>],
        config: &SolverConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Solution> {
        config.validate()?;
        if config.validate_coordinates {
            check_coordinates(points)?;
        }
        let dist = DistanceMatrix::compute(points);
        Ok(Self::solve_validated(&dist, config, cancel))
    }

    /// Solves over a precomputed matrix.
    pub fn solve_matrix(dist: &DistanceMatrix, config: &SolverConfig) -> Result<Solution> {
        config.validate()?;
        Ok(Self::solve_validated(dist, config, None))
    }

    fn solve_validated(
        dist: &DistanceMatrix,
        config: &SolverConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Solution {
        let tour = nearest_neighbor(dist);
        let initial_length = tour.length(dist);

        let solution = if config.improve {
            let result = TwoOptRunner::search(tour, dist, &config.two_opt, cancel);
            Solution {
                tour: result.tour,
                length: result.length,
                initial_length,
                passes: result.passes,
                moves: result.moves,
                stop_reason: Some(result.stop_reason),
            }
        } else {
            Solution {
                tour,
                length: initial_length,
                initial_length,
                passes: 0,
                moves: 0,
                stop_reason: None,
            }
        };

        log::info!(
            "solved: n={} length_km={:.2} nearest_neighbor_km={:.2} moves={}",
            dist.size(),
            solution.length,
            solution.initial_length,
            solution.moves
        );
        solution
    }
}

/// Solves with [`SolverConfig::default`].
///
/// # Examples
///
/// ```
/// use u_geotour::geo::Point;
/// use u_geotour::solver::solve;
///
/// let points = vec![
///     Point::new("a", 0.0, 0.0),
///     Point::new("b", 0.0, 1.0),
///     Point::new("c", 1.0, 1.0),
///     Point::new("d", 1.0, 0.0),
/// ];
/// let solution = solve(&points).unwrap();
/// assert_eq!(solution.order(), &[0, 1, 2, 3]);
/// ```
pub fn solve<L>(points: &[Point<L>]) -> Result<Solution> {
    TourSolver::solve(points, &SolverConfig::default())
}

fn check_coordinates<L>(points: &[Point<L>]) -> Result<()> {
    match points.iter().position(|p| !p.is_valid()) {
        Some(index) => Err(Error::InvalidCoordinate {
            index,
            lat: points[index].lat(),
            lon: points[index].lon(),
        }),
        None => Ok(()),
    }
}
