//! Open-path route cost.

use crate::distance::{DistanceMatrix, DistanceMetric};
use crate::models::Coordinate;

/// Evaluates the cost of open paths that start at the depot.
///
/// The cost is `depot → order[0] → … → order[n-1]`; there is no closing
/// edge back to the depot.
///
/// # Examples
///
/// ```
/// use u_tourplan::models::{Coordinate, Stop};
/// use u_tourplan::distance::{DistanceMatrix, Haversine};
/// use u_tourplan::evaluation::RouteCostEvaluator;
///
/// let stops = vec![
///     Stop::new("a", Coordinate::new(0.0, 1.0), "A"),
///     Stop::new("b", Coordinate::new(0.0, 2.0), "B"),
/// ];
/// let dm = DistanceMatrix::from_stops(Coordinate::new(0.0, 0.0), &stops, &Haversine::default());
/// let evaluator = RouteCostEvaluator::new(&dm);
///
/// assert_eq!(evaluator.cost(&[]), 0.0);
/// assert!((evaluator.cost(&[0, 1]) - dm.from_depot(1)).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteCostEvaluator<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> RouteCostEvaluator<'a> {
    /// Creates an evaluator over precomputed distances.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    pub fn distances(&self) -> &'a DistanceMatrix {
        self.distances
    }

    /// Total open-path cost of visiting stops in `order`.
    pub fn cost(&self, order: &[usize]) -> f64 {
        let Some((&first, _)) = order.split_first() else {
            return 0.0;
        };
        let mut total = self.distances.from_depot(first);
        for pair in order.windows(2) {
            total += self.distances.get(pair[0], pair[1]);
        }
        total
    }

    /// GA fitness of an order: `1 / (cost + 1)`. Higher is better.
    pub fn fitness(&self, order: &[usize]) -> f64 {
        1.0 / (self.cost(order) + 1.0)
    }
}

/// Open-path cost over raw coordinates, without a precomputed matrix.
///
/// # Examples
///
/// ```
/// use u_tourplan::models::Coordinate;
/// use u_tourplan::distance::{DistanceMetric, Haversine};
/// use u_tourplan::evaluation::path_cost;
///
/// let h = Haversine::default();
/// let depot = Coordinate::new(0.0, 0.0);
/// let stop = Coordinate::new(1.0, 1.0);
/// assert_eq!(path_cost(&h, depot, &[]), 0.0);
/// assert_eq!(path_cost(&h, depot, &[stop]), h.distance(depot, stop));
/// ```
pub fn path_cost<M: DistanceMetric + ?Sized>(
    metric: &M,
    depot: Coordinate,
    stops: &[Coordinate],
) -> f64 {
    let mut total = 0.0;
    let mut prev = depot;
    for &c in stops {
        total += metric.distance(prev, c);
        prev = c;
    }
    total
}
