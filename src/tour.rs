//! Tours and tour evaluation.

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};

/// A cyclic visiting order: a permutation of `[0, N)`.
///
/// The edge from the last stop back to the first is implicit.
///
/// # Examples
///
/// ```
/// use u_geotour::tour::Tour;
///
/// let tour = Tour::new(vec![2, 0, 1]).unwrap();
/// assert_eq!(tour.as_slice(), &[2, 0, 1]);
/// assert!(Tour::new(vec![0, 0, 1]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>", into = "Vec<usize>"))]
pub struct Tour(Vec<usize>);

impl Tour {
    /// Wraps `order` after checking that it is a permutation of `[0, N)`.
    pub fn new(order: Vec<usize>) -> Result<Self> {
        let n = order.len();
        let mut seen = vec![false; n];
        for (pos, &idx) in order.iter().enumerate() {
            if idx >= n {
                return Err(Error::not_a_permutation(format!(
                    "index {idx} at position {pos} is out of range for {n} stops"
                )));
            }
            if seen[idx] {
                return Err(Error::not_a_permutation(format!(
                    "index {idx} appears more than once"
                )));
            }
            seen[idx] = true;
        }
        Ok(Self(order))
    }

    /// The tour `0, 1, ..., n - 1`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// Callers guarantee `order` is a permutation.
    pub(crate) fn from_permutation(order: Vec<usize>) -> Self {
        debug_assert!(is_permutation(&order));
        Self(order)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// Total cyclic length in kilometers. See [`tour_length`].
    pub fn length(&self, dist: &DistanceMatrix) -> f64 {
        tour_length(&self.0, dist)
    }

    /// Reverses the stops at positions `[i, j)`.
    pub(crate) fn reverse_segment(&mut self, i: usize, j: usize) {
        self.0[i..j].reverse();
    }
}

impl AsRef<[usize]> for Tour {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl TryFrom<Vec<usize>> for Tour {
    type Error = Error;

    fn try_from(order: Vec<usize>) -> Result<Self> {
        Self::new(order)
    }
}

impl From<Tour> for Vec<usize> {
    fn from(tour: Tour) -> Self {
        tour.0
    }
}

impl<'a> IntoIterator for &'a Tour {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Sums `dist[t[k]][t[(k + 1) mod N]]` over the whole cycle.
///
/// Tours with fewer than two stops have length 0.
///
/// # Panics
///
/// Panics if `order` references an index outside the matrix.
///
/// # Examples
///
/// ```
/// use u_geotour::distance::DistanceMatrix;
/// use u_geotour::tour::tour_length;
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 3.0, 3.0, 0.0]).unwrap();
/// assert_eq!(tour_length(&[0, 1], &dm), 6.0);
/// assert_eq!(tour_length(&[0], &dm), 0.0);
/// ```
pub fn tour_length(order: &[usize], dist: &DistanceMatrix) -> f64 {
    let n = order.len();
    if n < 2 {
        return 0.0;
    }
    let closing = dist.get(order[n - 1], order[0]);
    order
        .windows(2)
        .map(|w| dist.get(w[0], w[1]))
        .sum::<f64>()
        + closing
}

fn is_permutation(order: &[usize]) -> bool {
    let mut seen = vec![false; order.len()];
    order.iter().all(|&idx| {
        idx < seen.len() && !std::mem::replace(&mut seen[idx], true)
    })
}
