//! Open-path 2-opt improvement.
//!
//! # Algorithm
//!
//! For positions `i < j` with `j >= i + 2`, reversing the segment
//! `order[i..j]` only changes the edge entering position `i` and the edge
//! entering position `j`:
//!
//! ```text
//! delta = d(prev, order[j-1]) + d(order[i], order[j]) - d(prev, order[i]) - d(order[j-1], order[j])
//! ```
//!
//! where `prev` is the depot when `i == 0`. When `j == n` the segment runs to
//! the open end of the path and the second pair of terms vanishes.
//!
//! The first strictly improving move is applied and the scan restarts from
//! the beginning. The search stops when a full scan finds no improvement or
//! after `max_passes` scans.
//!
//! # Complexity
//!
//! O(n²) per scan; the number of scans is not bounded by n.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use tracing::warn;

use crate::distance::DistanceMatrix;
use crate::evaluation::RouteCostEvaluator;

/// Default cap on the number of 2-opt scans.
pub const DEFAULT_MAX_PASSES: usize = 100_000;

const IMPROVEMENT_EPSILON: f64 = 1e-10;

/// Applies 2-opt improvement to an open path (given as stop indices).
///
/// Returns the improved order and its total cost. The returned cost is never
/// greater than the cost of `order`.
///
/// # Arguments
///
/// * `order` — Stop indices in visiting order (depot excluded)
/// * `distances` — Distance matrix
/// * `max_passes` — Maximum number of scans before giving up
///
/// # Examples
///
/// ```
/// use u_tourplan::models::{Coordinate, Stop};
/// use u_tourplan::distance::{DistanceMatrix, Haversine};
/// use u_tourplan::evaluation::RouteCostEvaluator;
/// use u_tourplan::local_search::{two_opt_improve, DEFAULT_MAX_PASSES};
///
/// let stops = vec![
///     Stop::new("1", Coordinate::new(0.0, 1.0), "1"),
///     Stop::new("2", Coordinate::new(0.0, 2.0), "2"),
///     Stop::new("3", Coordinate::new(0.0, 3.0), "3"),
/// ];
/// let dm = DistanceMatrix::from_stops(Coordinate::new(0.0, 0.0), &stops, &Haversine::default());
///
/// let (improved, cost) = two_opt_improve(&[0, 2, 1], &dm, DEFAULT_MAX_PASSES);
/// assert_eq!(improved, vec![0, 1, 2]);
/// assert!((cost - RouteCostEvaluator::new(&dm).cost(&[0, 1, 2])).abs() < 1e-9);
/// ```
pub fn two_opt_improve(
    order: &[usize],
    distances: &DistanceMatrix,
    max_passes: usize,
) -> (Vec<usize>, f64) {
    let evaluator = RouteCostEvaluator::new(distances);
    let mut current = order.to_vec();
    let n = current.len();
    if n < 2 {
        let cost = evaluator.cost(&current);
        return (current, cost);
    }

    let mut passes = 0;
    'scan: loop {
        if passes >= max_passes {
            warn!(passes, stops = n, "2-opt pass limit reached");
            break;
        }
        passes += 1;

        for i in 0..n - 1 {
            for j in i + 2..=n {
                if two_opt_delta(&current, distances, i, j) < -IMPROVEMENT_EPSILON {
                    current[i..j].reverse();
                    continue 'scan;
                }
            }
        }
        break;
    }

    let cost = evaluator.cost(&current);
    (current, cost)
}

/// Cost change from reversing `order[i..j]`.
///
/// Before: prev - order[i] - ... - order[j-1] - order[j]
/// After:  prev - order[j-1] - ... - order[i] - order[j]
fn two_opt_delta(order: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let prev = if i == 0 { None } else { Some(order[i - 1]) };
    let first = order[i];
    let last = order[j - 1];

    let mut old_cost = distances.leg(prev, first);
    let mut new_cost = distances.leg(prev, last);
    if let Some(&next) = order.get(j) {
        old_cost += distances.get(last, next);
        new_cost += distances.get(first, next);
    }

    new_cost - old_cost
}
