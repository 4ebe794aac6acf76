//! Coordinate and stop types.

use serde::{Deserialize, Serialize};

/// A geographic position in decimal degrees.
///
/// Range is not enforced; callers filter unusable positions with
/// [`is_usable`](Coordinate::is_usable) before handing stops to the optimizer.
///
/// # Examples
///
/// ```
/// use u_tourplan::models::Coordinate;
///
/// let c = Coordinate::new(25.03, 121.56);
/// assert!(c.is_usable());
/// assert!(!Coordinate::new(0.0, 0.0).is_usable());
/// assert!(!Coordinate::new(f64::NAN, 121.56).is_usable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Returns `true` if both components are finite.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Returns `true` if the coordinate is finite and not the `(0, 0)`
    /// placeholder used for "no location recorded".
    pub fn is_usable(&self) -> bool {
        self.is_finite() && !(self.lat == 0.0 && self.lon == 0.0)
    }
}

/// A stop to be visited.
///
/// The optional group label is the trip/delivery category used for the
/// soft grouping preference of the nearest-neighbor construction. An empty
/// label is treated the same as no label.
///
/// # Examples
///
/// ```
/// use u_tourplan::models::{Coordinate, Stop};
///
/// let s = Stop::new("a", Coordinate::new(25.0, 121.5), "Warehouse A")
///     .with_group("morning");
/// assert_eq!(s.id(), "a");
/// assert_eq!(s.group(), Some("morning"));
///
/// let unlabeled = Stop::new("b", Coordinate::new(25.1, 121.5), "B").with_group("");
/// assert_eq!(unlabeled.group(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    id: String,
    coordinate: Coordinate,
    name: String,
    #[serde(default)]
    group: Option<String>,
}

impl Stop {
    /// Creates an unlabeled stop.
    pub fn new(id: impl Into<String>, coordinate: Coordinate, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            coordinate,
            name: name.into(),
            group: None,
        }
    }

    /// Sets the group label.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Group label, or `None` if absent or empty.
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref().filter(|g| !g.is_empty())
    }

    /// Returns `true` if the stop carries a non-empty group label.
    pub fn is_grouped(&self) -> bool {
        self.group().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_usable() {
        assert!(Coordinate::new(1.0, 0.0).is_usable());
        assert!(Coordinate::new(0.0, -1.0).is_usable());
        assert!(!Coordinate::new(0.0, 0.0).is_usable());
        assert!(!Coordinate::new(f64::INFINITY, 1.0).is_usable());
        assert!(!Coordinate::new(1.0, f64::NAN).is_usable());
    }

    #[test]
    fn test_stop_group() {
        let s = Stop::new("1", Coordinate::new(1.0, 1.0), "one");
        assert!(!s.is_grouped());
        let s = s.with_group("trip-a");
        assert!(s.is_grouped());
        assert_eq!(s.group(), Some("trip-a"));
    }

    #[test]
    fn test_stop_deserialize_without_group() {
        let json = r#"{"id":"7","coordinate":{"lat":1.5,"lon":2.5},"name":"seven"}"#;
        let s: Stop = serde_json::from_str(json).expect("valid stop");
        assert_eq!(s.id(), "7");
        assert_eq!(s.coordinate(), Coordinate::new(1.5, 2.5));
        assert_eq!(s.group(), None);
    }
}
