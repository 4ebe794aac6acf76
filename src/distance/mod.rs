//! Distance metric and distance matrix.
//!
//! Provides the haversine great-circle metric and a dense matrix of
//! precomputed depot and stop-to-stop distances.

mod haversine;
mod matrix;

pub use haversine::{DistanceMetric, Haversine, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
