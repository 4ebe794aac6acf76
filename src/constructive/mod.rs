//! Constructive heuristics for building an initial stop order.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor with optional grouping preference, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::{
    nearest_neighbor, GroupingMode, NearestNeighborParams, DEFAULT_GROUPING_DISCOUNT,
};
