//! Tour type: an ordered permutation of stop ids.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Stop;

/// An ordered sequence of stop ids visited from the depot.
///
/// A tour is an open path: it starts at the depot (not stored) and ends at
/// the last stop without returning.
///
/// # Examples
///
/// ```
/// use u_tourplan::models::{Coordinate, Stop, Tour};
///
/// let stops = vec![
///     Stop::new("a", Coordinate::new(1.0, 1.0), "A"),
///     Stop::new("b", Coordinate::new(2.0, 2.0), "B"),
/// ];
/// let tour = Tour::from_indices(&[1, 0], &stops);
/// assert_eq!(tour.stop_ids(), &["b".to_string(), "a".to_string()]);
/// assert!(tour.is_permutation_of(&stops));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tour {
    stop_ids: Vec<String>,
}

impl Tour {
    /// Creates a tour from stop ids.
    pub fn new(stop_ids: Vec<String>) -> Self {
        Self { stop_ids }
    }

    /// Creates a tour from positions into `stops`.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    pub fn from_indices(order: &[usize], stops: &[Stop]) -> Self {
        Self {
            stop_ids: order.iter().map(|&i| stops[i].id().to_string()).collect(),
        }
    }

    /// Tour of `stops` in their given order.
    pub fn as_given(stops: &[Stop]) -> Self {
        Self {
            stop_ids: stops.iter().map(|s| s.id().to_string()).collect(),
        }
    }

    pub fn stop_ids(&self) -> &[String] {
        &self.stop_ids
    }

    pub fn len(&self) -> usize {
        self.stop_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_ids.is_empty()
    }

    /// Returns `true` if this tour visits every stop exactly once and nothing
    /// else.
    pub fn is_permutation_of(&self, stops: &[Stop]) -> bool {
        if self.stop_ids.len() != stops.len() {
            return false;
        }
        let expected: HashSet<&str> = stops.iter().map(Stop::id).collect();
        let mut seen = HashSet::with_capacity(self.stop_ids.len());
        self.stop_ids
            .iter()
            .all(|id| expected.contains(id.as_str()) && seen.insert(id.as_str()))
    }
}

impl From<Tour> for Vec<String> {
    fn from(tour: Tour) -> Self {
        tour.stop_ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    fn stops() -> Vec<Stop> {
        vec![
            Stop::new("a", Coordinate::new(1.0, 1.0), "A"),
            Stop::new("b", Coordinate::new(2.0, 2.0), "B"),
            Stop::new("c", Coordinate::new(3.0, 3.0), "C"),
        ]
    }

    #[test]
    fn test_as_given() {
        let tour = Tour::as_given(&stops());
        assert_eq!(tour.len(), 3);
        assert_eq!(tour.stop_ids()[2], "c");
    }

    #[test]
    fn test_permutation_checks() {
        let s = stops();
        assert!(Tour::from_indices(&[2, 0, 1], &s).is_permutation_of(&s));
        // duplicate
        assert!(!Tour::from_indices(&[0, 0, 1], &s).is_permutation_of(&s));
        // omission
        assert!(!Tour::from_indices(&[0, 1], &s).is_permutation_of(&s));
        // foreign id
        let foreign = Tour::new(vec!["a".into(), "b".into(), "z".into()]);
        assert!(!foreign.is_permutation_of(&s));
    }

    #[test]
    fn test_serializes_as_list() {
        let tour = Tour::new(vec!["x".into(), "y".into()]);
        let json = serde_json::to_string(&tour).expect("serializable");
        assert_eq!(json, r#"["x","y"]"#);
    }
}
