//! Nearest-neighbor constructive heuristic.
//!
//! Builds an open path greedily: starting from the depot, always visit the
//! nearest unvisited stop.
//!
//! # Grouping preference
//!
//! When a [`GroupingMode`] other than `Off` is active, the distance used to
//! compare candidates is multiplied by a discount (0.7 by default) for stops
//! that qualify. The discount only affects selection; costs reported for the
//! resulting tour are always true distances.
//!
//! # Complexity
//!
//! O(n²) where n = number of stops.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::models::Stop;

/// Default selection multiplier for grouped candidates.
pub const DEFAULT_GROUPING_DISCOUNT: f64 = 0.7;

/// Which candidates receive the grouping discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingMode {
    /// No discount.
    Off,
    /// Every stop with a non-empty group label is discounted, whether or not
    /// it matches the group of the stop just visited.
    #[default]
    AnyLabeled,
    /// Only stops whose label equals the label of the stop just visited are
    /// discounted. Nothing is discounted on the first leg from the depot.
    MatchCurrent,
}

/// Parameters for the nearest-neighbor construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestNeighborParams {
    /// Grouping rule applied during selection.
    pub grouping: GroupingMode,
    /// Multiplier applied to a qualifying candidate's distance.
    pub discount: f64,
}

impl Default for NearestNeighborParams {
    fn default() -> Self {
        Self {
            grouping: GroupingMode::Off,
            discount: DEFAULT_GROUPING_DISCOUNT,
        }
    }
}

impl NearestNeighborParams {
    /// Plain nearest neighbor with no grouping preference.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Nearest neighbor with the given grouping rule and the default discount.
    pub fn grouped(grouping: GroupingMode) -> Self {
        Self {
            grouping,
            ..Self::default()
        }
    }

    fn is_discounted(&self, candidate: &Stop, previous: Option<&Stop>) -> bool {
        match self.grouping {
            GroupingMode::Off => false,
            GroupingMode::AnyLabeled => candidate.is_grouped(),
            GroupingMode::MatchCurrent => match (candidate.group(), previous.and_then(Stop::group)) {
                (Some(c), Some(p)) => c == p,
                _ => false,
            },
        }
    }
}

/// Constructs an open path over `stops` using the nearest-neighbor heuristic.
///
/// Returns stop indices in visiting order. Ties go to the candidate that
/// appears first in `stops`.
///
/// # Arguments
///
/// * `stops` — Stops to visit (the depot is not a stop)
/// * `distances` — Matrix built from the same `stops`
/// * `params` — Grouping preference
///
/// # Examples
///
/// ```
/// use u_tourplan::models::{Coordinate, Stop};
/// use u_tourplan::distance::{DistanceMatrix, Haversine};
/// use u_tourplan::constructive::{nearest_neighbor, NearestNeighborParams};
///
/// let stops = vec![
///     Stop::new("far", Coordinate::new(0.0, 2.0), "Far"),
///     Stop::new("near", Coordinate::new(0.0, 1.0), "Near"),
/// ];
/// let dm = DistanceMatrix::from_stops(Coordinate::new(0.0, 0.0), &stops, &Haversine::default());
///
/// let order = nearest_neighbor(&stops, &dm, &NearestNeighborParams::plain());
/// assert_eq!(order, vec![1, 0]);
/// ```
pub fn nearest_neighbor(
    stops: &[Stop],
    distances: &DistanceMatrix,
    params: &NearestNeighborParams,
) -> Vec<usize> {
    let n = stops.len();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut current: Option<usize> = None;

    while order.len() < n {
        let previous = current.map(|c| &stops[c]);
        let mut best: Option<(usize, f64)> = None;
        for i in 0..n {
            if visited[i] {
                continue;
            }
            let mut d = distances.leg(current, i);
            if params.is_discounted(&stops[i], previous) {
                d *= params.discount;
            }
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }

        match best {
            Some((next, _)) => {
                visited[next] = true;
                order.push(next);
                current = Some(next);
            }
            None => break,
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Haversine;
    use crate::models::Coordinate;

    fn matrix(stops: &[Stop]) -> DistanceMatrix {
        DistanceMatrix::from_stops(Coordinate::new(0.0, 0.0), stops, &Haversine::default())
    }

    fn line_stops() -> Vec<Stop> {
        vec![
            Stop::new("3", Coordinate::new(0.0, 3.0), "three"),
            Stop::new("1", Coordinate::new(0.0, 1.0), "one"),
            Stop::new("2", Coordinate::new(0.0, 2.0), "two"),
        ]
    }

    #[test]
    fn test_nn_follows_line() {
        let stops = line_stops();
        let order = nearest_neighbor(&stops, &matrix(&stops), &NearestNeighborParams::plain());
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_nn_empty() {
        let stops: Vec<Stop> = Vec::new();
        let order = nearest_neighbor(&stops, &matrix(&stops), &NearestNeighborParams::plain());
        assert!(order.is_empty());
    }

    #[test]
    fn test_nn_tie_goes_to_first() {
        // both one degree from the depot
        let stops = vec![
            Stop::new("north", Coordinate::new(1.0, 0.0), "N"),
            Stop::new("east", Coordinate::new(0.0, 1.0), "E"),
        ];
        let dm = matrix(&stops);
        assert_eq!(dm.from_depot(0), dm.from_depot(1));
        let order = nearest_neighbor(&stops, &dm, &NearestNeighborParams::plain());
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn test_any_labeled_discount_prefers_labeled_stop() {
        // labeled stop is 1.2° away, unlabeled 1.0°; 1.2 * 0.7 < 1.0
        let stops = vec![
            Stop::new("plain", Coordinate::new(0.0, 1.0), "plain"),
            Stop::new("tagged", Coordinate::new(0.0, -1.2), "tagged").with_group("trip-a"),
        ];
        let dm = matrix(&stops);
        let plain = nearest_neighbor(&stops, &dm, &NearestNeighborParams::plain());
        assert_eq!(plain, vec![0, 1]);
        let grouped = nearest_neighbor(
            &stops,
            &dm,
            &NearestNeighborParams::grouped(GroupingMode::AnyLabeled),
        );
        assert_eq!(grouped, vec![1, 0]);
    }

    #[test]
    fn test_any_labeled_ignores_label_match() {
        // after "a1" (group a), "b1" (group b) still gets the discount
        let stops = vec![
            Stop::new("a1", Coordinate::new(0.0, 1.0), "a1").with_group("a"),
            Stop::new("x", Coordinate::new(0.0, 2.0), "x"),
            Stop::new("b1", Coordinate::new(0.0, 2.2), "b1").with_group("b"),
        ];
        let dm = matrix(&stops);
        let order = nearest_neighbor(
            &stops,
            &dm,
            &NearestNeighborParams::grouped(GroupingMode::AnyLabeled),
        );
        assert_eq!(order, vec![0, 2, 1]);
    }

    #[test]
    fn test_match_current_only_discounts_same_group() {
        let stops = vec![
            Stop::new("a1", Coordinate::new(0.0, 1.0), "a1").with_group("a"),
            Stop::new("x", Coordinate::new(0.0, 2.0), "x"),
            Stop::new("b1", Coordinate::new(0.0, 2.2), "b1").with_group("b"),
            Stop::new("a2", Coordinate::new(0.0, 2.3), "a2").with_group("a"),
        ];
        let dm = matrix(&stops);
        let order = nearest_neighbor(
            &stops,
            &dm,
            &NearestNeighborParams::grouped(GroupingMode::MatchCurrent),
        );
        // from a1: x = 1.0°, b1 = 1.2° (no discount), a2 = 1.3° * 0.7 = 0.91°
        assert_eq!(order[..2], [0, 3]);
    }

    #[test]
    fn test_empty_label_is_not_discounted() {
        let stops = vec![
            Stop::new("plain", Coordinate::new(0.0, 1.0), "plain"),
            Stop::new("blank", Coordinate::new(0.0, -1.2), "blank").with_group(""),
        ];
        let dm = matrix(&stops);
        let order = nearest_neighbor(
            &stops,
            &dm,
            &NearestNeighborParams::grouped(GroupingMode::AnyLabeled),
        );
        assert_eq!(order, vec![0, 1]);
    }
}
