//! Route cost evaluation.
//!
//! Computes the open-path cost of a stop ordering from the depot.

mod evaluator;

pub use evaluator::{path_cost, RouteCostEvaluator};
