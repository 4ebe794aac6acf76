//! Great-circle distance.

use serde::{Deserialize, Serialize};

use crate::models::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A symmetric distance function between two coordinates.
///
/// Implementations must satisfy `distance(a, a) == 0` and
/// `distance(a, b) == distance(b, a)`.
pub trait DistanceMetric {
    /// Distance in kilometers from `a` to `b`.
    fn distance(&self, a: Coordinate, b: Coordinate) -> f64;
}

/// Haversine great-circle distance on a sphere.
///
/// # Examples
///
/// ```
/// use u_tourplan::models::Coordinate;
/// use u_tourplan::distance::{DistanceMetric, Haversine};
///
/// let h = Haversine::default();
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(0.0, 1.0);
/// // One degree of longitude on the equator is ~111.19 km
/// assert!((h.distance(a, b) - 111.19).abs() < 0.01);
/// assert_eq!(h.distance(a, a), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Haversine {
    radius_km: f64,
}

impl Haversine {
    /// Creates a metric for a sphere of the given radius.
    pub fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }
}

impl Default for Haversine {
    fn default() -> Self {
        Self::new(EARTH_RADIUS_KM)
    }
}

impl DistanceMetric for Haversine {
    fn distance(&self, a: Coordinate, b: Coordinate) -> f64 {
        let d_lat = (b.lat - a.lat).to_radians();
        let d_lon = (b.lon - a.lon).to_radians();
        let h = (d_lat / 2.0).sin().powi(2)
            + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
        // clamp guards asin against rounding slightly above 1 for antipodes
        2.0 * self.radius_km * h.sqrt().min(1.0).asin()
    }
}
