//! Nearest-neighbor tour construction.
//!
//! Starting at index 0, repeatedly extend the path to the closest
//! unvisited point. Candidates are scanned in ascending index order and
//! only a strictly shorter distance replaces the incumbent, so ties go to
//! the lowest index.
//!
//! # Complexity
//!
//! O(N²): N − 1 extensions, each scanning at most N candidates.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An analysis of
//! several heuristics for the traveling salesman problem",
//! *SIAM Journal on Computing* 6(3), 563-581.

use crate::distance::DistanceMatrix;
use crate::tour::Tour;

/// Builds a greedy nearest-neighbor tour over every point of `dist`.
///
/// Returns the empty tour for an empty matrix and `[0]` for a single point.
/// A finite distance always beats a NaN one; if every remaining candidate
/// is NaN the lowest unvisited index is taken, so the result is always a
/// permutation.
///
/// # Examples
///
/// ```
/// use u_geotour::construct::nearest_neighbor;
/// use u_geotour::distance::DistanceMatrix;
///
/// // 0 --1-- 1 --1-- 2, with 0..2 = 2
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 2.0,
///     1.0, 0.0, 1.0,
///     2.0, 1.0, 0.0,
/// ]).unwrap();
/// assert_eq!(nearest_neighbor(&dm).as_slice(), &[0, 1, 2]);
/// ```
pub fn nearest_neighbor(dist: &DistanceMatrix) -> Tour {
    let n = dist.size();
    if n == 0 {
        return Tour::default();
    }

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    order.push(0);
    visited[0] = true;

    let mut last = 0;
    for _ in 1..n {
        let row = dist.row(last);
        let mut next: Option<(usize, f64)> = None;
        for (j, &d) in row.iter().enumerate() {
            if visited[j] {
                continue;
            }
            let closer = match next {
                None => true,
                Some((_, best)) => d < best || (best.is_nan() && !d.is_nan()),
            };
            if closer {
                next = Some((j, d));
            }
        }
        // At least one point is unvisited on every iteration.
        let Some((j, _)) = next else { break };
        visited[j] = true;
        order.push(j);
        last = j;
    }

    let tour = Tour::from_permutation(order);
    log::debug!(
        "nearest neighbor: n={n} length_km={:.3}",
        tour.length(dist)
    );
    tour
}
