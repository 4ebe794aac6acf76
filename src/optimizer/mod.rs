//! Optimization orchestration.
//!
//! - [`Optimizer`] — Validates input, runs one strategy, computes savings
//! - [`OptimizerConfig`] — Depot, metric, cost constants, and strategy tuning
//! - [`Algorithm`] / [`OptimizeOptions`] — Per-call strategy selection
//! - [`OptimizationResult`] — Rounded result envelope
//!
//! Strategies:
//!
//! | Algorithm | Pipeline |
//! |---|---|
//! | `nearest_neighbor` | nearest neighbor → 2-opt |
//! | `genetic` | nearest neighbor seed → GA (nearest neighbor → 2-opt below `ga.min_stops`) |
//! | `simulated_annealing` | nearest neighbor seed → SA |

mod algorithm;
mod config;
mod orchestrator;
mod result;

pub use algorithm::{Algorithm, OptimizeOptions};
pub use config::OptimizerConfig;
pub use orchestrator::Optimizer;
pub use result::{round2, OptimizationResult, SavingsFactors};
