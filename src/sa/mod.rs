//! Simulated annealing over stop orders.
//!
//! Single-state search: swap-two-positions neighborhood, Metropolis
//! acceptance, geometric cooling.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
