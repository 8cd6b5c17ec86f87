//! Solved tours and views for output writers.

use std::fmt;

use crate::geo::Point;
use crate::tour::Tour;
use crate::two_opt::StopReason;

/// A solved tour with its length and search statistics.
///
/// Indices in `tour` refer to the point slice the solution was computed
/// from. The accessor methods taking `points` expect that same slice and
/// panic if it is shorter.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Visit order as indices into the input points.
    pub tour: Tour,
    /// Total cyclic length in kilometers.
    pub length: f64,
    /// Length of the nearest-neighbor tour before improvement.
    pub initial_length: f64,
    /// 2-opt scans started (0 when improvement is disabled).
    pub passes: usize,
    /// Accepted 2-opt moves.
    pub moves: usize,
    /// Why 2-opt stopped; `None` when improvement is disabled.
    pub stop_reason: Option<StopReason>,
}

impl Solution {
    pub fn order(&self) -> &[usize] {
        self.tour.as_slice()
    }

    pub fn len(&self) -> usize {
        self.tour.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tour.is_empty()
    }

    /// Labels in visit order.
    pub fn labels<'a, L: 'a>(
        &'a self,
        points: &'a [Point<L>],
    ) -> impl Iterator<Item = &'a L> + 'a {
        self.tour.iter().map(move |&index| points[index].label())
    }

    /// Each visit with its 1-based ordinal and original index.
    pub fn stops<'a, L: 'a>(
        &'a self,
        points: &'a [Point<L>],
    ) -> impl Iterator<Item = Stop<'a, L>> + 'a {
        self.tour.iter().enumerate().map(move |(pos, &index)| Stop {
            ordinal: pos + 1,
            index,
            point: &points[index],
        })
    }

    /// A printable route listing.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_geotour::geo::Point;
    /// use u_geotour::solver::solve;
    ///
    /// let points = vec![
    ///     Point::new("Lisbon", 38.7223, -9.1393),
    ///     Point::new("Porto", 41.1579, -8.6291),
    /// ];
    /// let solution = solve(&points).unwrap();
    /// let text = solution.itinerary(&points).to_string();
    /// assert!(text.starts_with("1) Lisbon\n2) Porto\n"));
    /// assert!(text.contains("Total distance:"));
    /// ```
    pub fn itinerary<'a, L>(&'a self, points: &'a [Point<L>]) -> Itinerary<'a, L> {
        Itinerary {
            solution: self,
            points,
        }
    }
}

/// One visit of a solved tour.
#[derive(Debug)]
pub struct Stop<'a, L> {
    /// Position in the tour, starting at 1.
    pub ordinal: usize,
    /// Index of the point in the input slice.
    pub index: usize,
    pub point: &'a Point<L>,
}

/// `Display` adapter returned by [`Solution::itinerary`].
pub struct Itinerary<'a, L> {
    solution: &'a Solution,
    points: &'a [Point<L>],
}

impl<L: fmt::Display> fmt::Display for Itinerary<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stop in self.solution.stops(self.points) {
            writeln!(f, "{}) {}", stop.ordinal, stop.point.label())?;
        }
        write!(f, "Total distance: {:.2} km", self.solution.length)
    }
}
