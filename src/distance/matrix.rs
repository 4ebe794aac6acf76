//! Dense distance matrix between the depot and every stop.

use crate::models::{Coordinate, Stop};

use super::DistanceMetric;

/// A dense n×n stop-to-stop distance matrix stored in row-major order,
/// plus a row of depot-to-stop distances.
///
/// Stop indices are positions in the stop slice the matrix was built from.
///
/// # Examples
///
/// ```
/// use u_tourplan::models::{Coordinate, Stop};
/// use u_tourplan::distance::{DistanceMatrix, Haversine};
///
/// let stops = vec![
///     Stop::new("a", Coordinate::new(0.0, 1.0), "A"),
///     Stop::new("b", Coordinate::new(0.0, 2.0), "B"),
/// ];
/// let dm = DistanceMatrix::from_stops(Coordinate::new(0.0, 0.0), &stops, &Haversine::default());
/// assert_eq!(dm.size(), 2);
/// assert!((dm.from_depot(1) - 2.0 * dm.get(0, 1)).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    depot: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            depot: vec![0.0; size],
            size,
        }
    }

    /// Computes all pairwise distances with `metric`.
    ///
    /// Only the upper triangle is evaluated; the metric is symmetric.
    pub fn from_stops<M: DistanceMetric + ?Sized>(
        depot: Coordinate,
        stops: &[Stop],
        metric: &M,
    ) -> Self {
        let n = stops.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            dm.depot[i] = metric.distance(depot, stops[i].coordinate());
            for j in (i + 1)..n {
                let d = metric.distance(stops[i].coordinate(), stops[j].coordinate());
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a matrix from an explicit n×n grid and depot row.
    ///
    /// Returns `None` if the lengths don't match `size`.
    #[cfg(test)]
    pub(crate) fn from_data(size: usize, data: Vec<f64>, depot: Vec<f64>) -> Option<Self> {
        if data.len() != size * size || depot.len() != size {
            return None;
        }
        Some(Self { data, depot, size })
    }

    /// Returns the distance from stop `from` to stop `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Returns the distance from the depot to stop `to`.
    pub fn from_depot(&self, to: usize) -> f64 {
        self.depot[to]
    }

    /// Distance from `from` (the depot when `None`) to stop `to`.
    pub fn leg(&self, from: Option<usize>, to: usize) -> f64 {
        match from {
            Some(f) => self.get(f, to),
            None => self.from_depot(to),
        }
    }

    /// Sets the distance from stop `from` to stop `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of stops in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    #[cfg(test)]
    pub(crate) fn is_symmetric(&self, tol: f64) -> bool {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Haversine;

    fn sample() -> DistanceMatrix {
        let stops = vec![
            Stop::new("1", Coordinate::new(0.0, 1.0), "one"),
            Stop::new("2", Coordinate::new(0.0, 3.0), "two"),
            Stop::new("3", Coordinate::new(1.0, 1.0), "three"),
        ];
        DistanceMatrix::from_stops(Coordinate::new(0.0, 0.0), &stops, &Haversine::default())
    }

    #[test]
    fn test_from_stops() {
        let dm = sample();
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.get(1, 1), 0.0);
        assert!(dm.from_depot(1) > dm.from_depot(0));
        assert!((dm.get(0, 1) - 2.0 * dm.from_depot(0)).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric() {
        assert!(sample().is_symmetric(1e-12));
    }

    #[test]
    fn test_leg() {
        let dm = sample();
        assert_eq!(dm.leg(None, 2), dm.from_depot(2));
        assert_eq!(dm.leg(Some(0), 2), dm.get(0, 2));
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0], vec![1.0, 2.0])
            .expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.from_depot(1), 2.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0], vec![0.0, 0.0]).is_none());
        assert!(DistanceMatrix::from_data(2, vec![0.0; 4], vec![0.0]).is_none());
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
    }
}
