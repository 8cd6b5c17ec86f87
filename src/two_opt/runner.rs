//! 2-opt execution engine.
//!
//! # Move
//!
//! For positions `1 <= i < j < N` with `j - i >= 2`, reverse `tour[i..j)`.
//! This removes edges `(t[i-1], t[i])` and `(t[j-1], t[j])` and reconnects
//! with `(t[i-1], t[j-1])` and `(t[i], t[j])`:
//!
//! ```text
//! delta = d(t[i-1], t[j-1]) + d(t[i], t[j]) - d(t[i-1], t[i]) - d(t[j-1], t[j])
//! ```
//!
//! Position 0 never moves and the closing edge `(t[N-1], t[0])` is never
//! exchanged.
//!
//! # Algorithm
//!
//! 1. Scan `(i, j)` in ascending order
//! 2. Apply the first move with `delta < -epsilon` and restart the scan
//! 3. Stop when a full scan accepts nothing, or a budget runs out
//!
//! # Complexity
//!
//! O(N²) candidates per scan; O(1) each with [`Evaluation::Incremental`],
//! O(N) each with [`Evaluation::FullRecompute`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use super::config::{Evaluation, TwoOptConfig};
use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::tour::{tour_length, Tour};

/// Why the improver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// A full scan found no improving move.
    LocalOptimum,
    /// `max_passes` scans were run.
    PassLimit,
    /// `time_limit_ms` elapsed.
    TimeLimit,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Result of a 2-opt run.
#[derive(Debug, Clone)]
pub struct TwoOptResult {
    /// The improved tour.
    pub tour: Tour,
    /// Length of `tour`, recomputed from the matrix after the search.
    pub length: f64,
    /// Length of the starting tour.
    pub initial_length: f64,
    /// Number of scans started.
    pub passes: usize,
    /// Number of accepted moves.
    pub moves: usize,
    /// Why the search ended.
    pub stop_reason: StopReason,
    /// Starting length followed by the length after every accepted move.
    pub length_history: Vec<f64>,
}

impl TwoOptResult {
    /// `true` if the search ended at a 2-opt local optimum.
    pub fn is_local_optimum(&self) -> bool {
        self.stop_reason == StopReason::LocalOptimum
    }
}

/// 2-opt runner.
pub struct TwoOptRunner;

impl TwoOptRunner {
    /// Improves `tour` until it is 2-opt optimal or a budget runs out.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `config` fails validation and
    /// [`Error::SizeMismatch`] if `tour` does not cover every point of `dist`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_geotour::distance::DistanceMatrix;
    /// use u_geotour::tour::Tour;
    /// use u_geotour::two_opt::{TwoOptConfig, TwoOptRunner};
    ///
    /// let s = std::f64::consts::SQRT_2;
    /// let dm = DistanceMatrix::from_data(4, vec![
    ///     0.0, 1.0, s, 1.0,
    ///     1.0, 0.0, 1.0, s,
    ///     s, 1.0, 0.0, 1.0,
    ///     1.0, s, 1.0, 0.0,
    /// ]).unwrap();
    ///
    /// let crossing = Tour::new(vec![0, 2, 1, 3]).unwrap();
    /// let result = TwoOptRunner::run(crossing, &dm, &TwoOptConfig::default()).unwrap();
    /// assert_eq!(result.tour.as_slice(), &[0, 1, 2, 3]);
    /// assert!((result.length - 4.0).abs() < 1e-12);
    /// ```
    pub fn run(tour: Tour, dist: &DistanceMatrix, config: &TwoOptConfig) -> Result<TwoOptResult> {
        Self::run_with_cancel(tour, dist, config, None)
    }

    /// Runs 2-opt with an optional cancellation flag.
    ///
    /// The flag is polled at the start of each scan; once set, the current
    /// tour is returned with [`StopReason::Cancelled`].
    pub fn run_with_cancel(
        tour: Tour,
        dist: &DistanceMatrix,
        config: &TwoOptConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<TwoOptResult> {
        config.validate()?;
        if tour.len() != dist.size() {
            return Err(Error::SizeMismatch {
                tour: tour.len(),
                matrix: dist.size(),
            });
        }
        Ok(Self::search(tour, dist, config, cancel))
    }

    /// Search loop over an already validated config and a tour sized to
    /// `dist`.
    pub(crate) fn search(
        tour: Tour,
        dist: &DistanceMatrix,
        config: &TwoOptConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> TwoOptResult {
        let start = Instant::now();
        let initial_length = tour.length(dist);
        let mut current = tour;
        let mut length = initial_length;
        let mut length_history = vec![initial_length];
        let mut passes = 0usize;
        let mut moves = 0usize;

        let stop_reason = loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    break StopReason::Cancelled;
                }
            }
            if config.max_passes.is_some_and(|max| passes >= max) {
                break StopReason::PassLimit;
            }
            if let Some(ms) = config.time_limit_ms {
                if start.elapsed().as_millis() >= u128::from(ms) {
                    break StopReason::TimeLimit;
                }
            }

            passes += 1;
            let accepted = match config.evaluation {
                Evaluation::Incremental => scan_incremental(&mut current, dist, config.epsilon)
                    .map(|delta| length + delta),
                Evaluation::FullRecompute => {
                    scan_full_recompute(&mut current, dist, length, config.epsilon)
                }
            };

            match accepted {
                Some(next) => {
                    moves += 1;
                    log::trace!("2-opt: move {moves} length_km {length:.6} -> {next:.6}");
                    length = next;
                    length_history.push(length);
                }
                None => break StopReason::LocalOptimum,
            }
        };

        // Report the exact length, not the running sum.
        let final_length = current.length(dist);
        log::debug!(
            "2-opt: n={} passes={passes} moves={moves} initial_km={initial_length:.3} final_km={final_length:.3} drift_km={:.3e} stop={stop_reason:?}",
            dist.size(),
            (final_length - length).abs(),
        );
        if stop_reason != StopReason::LocalOptimum {
            log::warn!("2-opt stopped before reaching a local optimum: {stop_reason:?}");
        }

        TwoOptResult {
            tour: current,
            length: final_length,
            initial_length,
            passes,
            moves,
            stop_reason,
            length_history,
        }
    }
}

/// Improves `tour` to a 2-opt local optimum with the default configuration.
///
/// # Errors
///
/// Returns [`Error::SizeMismatch`] if `tour` does not cover every point of
/// `dist`.
pub fn improve(tour: Tour, dist: &DistanceMatrix) -> Result<Tour> {
    TwoOptRunner::run(tour, dist, &TwoOptConfig::default()).map(|result| result.tour)
}

/// Length change from reversing `tour[i..j)`.
///
/// Negative values shorten the tour.
///
/// # Panics
///
/// Panics unless `1 <= i` and `j < tour.len()`.
#[inline]
pub fn two_opt_delta(tour: &[usize], dist: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let (a, b) = (tour[i - 1], tour[i]);
    let (c, d) = (tour[j - 1], tour[j]);
    dist.get(a, c) + dist.get(b, d) - dist.get(a, b) - dist.get(c, d)
}

/// Applies the first move with `delta < -epsilon`; returns its delta.
fn scan_incremental(tour: &mut Tour, dist: &DistanceMatrix, epsilon: f64) -> Option<f64> {
    let n = tour.len();
    for i in 1..n {
        for j in (i + 2)..n {
            let delta = two_opt_delta(tour.as_slice(), dist, i, j);
            if delta < -epsilon {
                tour.reverse_segment(i, j);
                return Some(delta);
            }
        }
    }
    None
}

/// Applies the first move whose full tour length beats `length - epsilon`;
/// returns the new length.
fn scan_full_recompute(
    tour: &mut Tour,
    dist: &DistanceMatrix,
    length: f64,
    epsilon: f64,
) -> Option<f64> {
    let n = tour.len();
    for i in 1..n {
        for j in (i + 2)..n {
            tour.reverse_segment(i, j);
            let candidate = tour_length(tour.as_slice(), dist);
            if candidate < length - epsilon {
                return Some(candidate);
            }
            tour.reverse_segment(i, j);
        }
    }
    None
}
