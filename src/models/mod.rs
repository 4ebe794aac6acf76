//! Domain model types for stop sequencing.
//!
//! Provides geographic coordinates, stops with optional group labels, and
//! tours as ordered permutations of stop ids.

mod stop;
mod tour;

pub use stop::{Coordinate, Stop};
pub use tour::Tour;
