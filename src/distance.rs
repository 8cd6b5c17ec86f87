//! Dense great-circle distance matrix.

use crate::error::{Error, Result};
use crate::geo::{haversine_km, Point};

/// A dense N×N matrix of distances in kilometers, stored row-major.
///
/// Row and column `i` correspond to the `i`-th input point. The matrix is
/// symmetric with a zero diagonal and is never mutated after construction.
///
/// # Examples
///
/// ```
/// use u_geotour::distance::DistanceMatrix;
/// use u_geotour::geo::Point;
///
/// let points = vec![
///     Point::new("a", 0.0, 0.0),
///     Point::new("b", 0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::compute(&points);
/// assert_eq!(dm.size(), 2);
/// assert_eq!(dm.get(0, 0), 0.0);
/// assert_eq!(dm.get(0, 1), dm.get(1, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes pairwise haversine distances for `points`.
    ///
    /// Only the upper triangle is evaluated; the lower triangle is mirrored
    /// so symmetry holds bit-for-bit. With the `parallel` feature the rows
    /// are evaluated on the rayon pool and the result is identical to the
    /// sequential build.
    pub fn compute<L>(points: &[Point<L>]) -> Self {
        let coords: Vec<(f64, f64)> = points.iter().map(Point::coords).collect();
        let size = coords.len();
        let upper = upper_triangle(&coords);

        let mut data = vec![0.0; size * size];
        for (i, row) in upper.into_iter().enumerate() {
            for (offset, d) in row.into_iter().enumerate() {
                let j = i + 1 + offset;
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }

        log::debug!("distance matrix: n={size}");
        Self { data, size }
    }

    /// Wraps an explicit row-major `size × size` table.
    ///
    /// The data must be square, exactly symmetric and zero on the diagonal.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(Error::invalid_matrix(format!(
                "expected {} entries for a {size}x{size} matrix, got {}",
                size * size,
                data.len()
            )));
        }
        let dm = Self { data, size };
        for i in 0..size {
            if dm.get(i, i) != 0.0 {
                return Err(Error::invalid_matrix(format!(
                    "diagonal entry ({i}, {i}) is {}",
                    dm.get(i, i)
                )));
            }
            for j in (i + 1)..size {
                if dm.get(i, j) != dm.get(j, i) {
                    return Err(Error::invalid_matrix(format!(
                        "entries ({i}, {j}) and ({j}, {i}) differ"
                    )));
                }
            }
        }
        Ok(dm)
    }

    /// Distance from `from` to `to` in kilometers.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// All distances from `from`, indexed by destination.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Number of points covered by this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if the matrix is symmetric within `tol`.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

/// Row `i` holds the distances from `i` to every `j > i`.
#[cfg(not(feature = "parallel"))]
fn upper_triangle(coords: &[(f64, f64)]) -> Vec<Vec<f64>> {
    (0..coords.len())
        .map(|i| upper_row(coords, i))
        .collect()
}

#[cfg(feature = "parallel")]
fn upper_triangle(coords: &[(f64, f64)]) -> Vec<Vec<f64>> {
    use rayon::prelude::*;

    (0..coords.len())
        .into_par_iter()
        .map(|i| upper_row(coords, i))
        .collect()
}

fn upper_row(coords: &[(f64, f64)], i: usize) -> Vec<f64> {
    coords[i + 1..]
        .iter()
        .map(|&to| haversine_km(coords[i], to))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point<&'static str>> {
        vec![
            Point::new("sw", 0.0, 0.0),
            Point::new("nw", 0.0, 1.0),
            Point::new("ne", 1.0, 1.0),
            Point::new("se", 1.0, 0.0),
        ]
    }

    #[test]
    fn test_empty_input() {
        let dm = DistanceMatrix::compute::<String>(&[]);
        assert_eq!(dm.size(), 0);
        assert!(dm.is_empty());
    }

    #[test]
    fn test_single_point() {
        let dm = DistanceMatrix::compute(&[Point::new("only", 10.0, 20.0)]);
        assert_eq!(dm.size(), 1);
        assert_eq!(dm.get(0, 0), 0.0);
    }

    #[test]
    fn test_matches_haversine() {
        let points = square();
        let dm = DistanceMatrix::compute(&points);
        for i in 0..points.len() {
            for j in 0..points.len() {
                let expected = if i == j {
                    0.0
                } else {
                    points[i].distance_km(&points[j])
                };
                assert!(
                    (dm.get(i, j) - expected).abs() < 1e-9,
                    "({i}, {j}): {} vs {expected}",
                    dm.get(i, j)
                );
            }
        }
    }

    #[test]
    fn test_symmetric_with_zero_diagonal() {
        let dm = DistanceMatrix::compute(&square());
        for i in 0..dm.size() {
            assert_eq!(dm.get(i, i), 0.0);
            for j in 0..dm.size() {
                assert_eq!(dm.get(i, j), dm.get(j, i));
            }
        }
        assert!(dm.is_symmetric(0.0));
    }

    #[test]
    fn test_duplicate_points_are_zero_apart() {
        let points = vec![Point::new("a", 5.0, 5.0), Point::new("b", 5.0, 5.0)];
        let dm = DistanceMatrix::compute(&points);
        assert_eq!(dm.get(0, 1), 0.0);
    }

    #[test]
    fn test_non_finite_input_propagates() {
        let points = vec![Point::new("a", f64::NAN, 0.0), Point::new("b", 1.0, 1.0)];
        let dm = DistanceMatrix::compute(&points);
        assert!(dm.get(0, 1).is_nan());
        assert_eq!(dm.get(0, 0), 0.0);
    }

    #[test]
    fn test_row() {
        let dm = DistanceMatrix::compute(&square());
        let row = dm.row(2);
        assert_eq!(row.len(), 4);
        assert_eq!(row[2], 0.0);
        assert_eq!(row[0], dm.get(2, 0));
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_rejects_wrong_length() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_err());
    }

    #[test]
    fn test_from_data_rejects_asymmetry() {
        let err = DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0, 0.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidMatrix(_)));
    }

    #[test]
    fn test_from_data_rejects_nonzero_diagonal() {
        assert!(DistanceMatrix::from_data(1, vec![3.0]).is_err());
    }
}
