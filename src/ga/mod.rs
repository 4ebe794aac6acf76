//! Genetic algorithm over stop orders.
//!
//! - [`TourChromosome`] — Permutation chromosome with fitness `1 / (cost + 1)`
//! - [`operators`] — Order crossover (OX), swap mutation, random permutations
//! - [`GaRunner`] — Elitist generational loop with top-half parent sampling
//!
//! # Reference
//!
//! Davis, L. (1985). "Applying Adaptive Algorithms to Epistatic Domains",
//! *IJCAI* 85, 162-164.

mod chromosome;
mod config;
pub mod operators;
mod runner;

pub use chromosome::TourChromosome;
pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
