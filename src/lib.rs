//! # u-tourplan
//!
//! Delivery stop sequencing: orders a set of geographic stops into an open
//! path from a depot, minimizing great-circle travel distance, and reports
//! the distance, time, and fuel saved against the given order.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Coordinate, Stop, Tour)
//! - [`distance`] — Haversine metric and distance matrix
//! - [`evaluation`] — Open-path cost evaluation
//! - [`constructive`] — Nearest-neighbor construction with grouping preference
//! - [`local_search`] — Open-path 2-opt
//! - [`ga`] — Genetic algorithm with order crossover
//! - [`sa`] — Simulated annealing
//! - [`optimizer`] — Strategy dispatch, configuration, and result envelope
//! - [`request`] — Stop selection, request model, and order merging
//! - [`random`] — Seedable random sources
//!
//! ## Example
//!
//! ```
//! use u_tourplan::models::{Coordinate, Stop};
//! use u_tourplan::optimizer::{Algorithm, OptimizeOptions, Optimizer, OptimizerConfig};
//! use u_tourplan::random::create_rng;
//!
//! let stops = vec![
//!     Stop::new("1", Coordinate::new(25.04, 121.52), "Market").with_group("morning"),
//!     Stop::new("2", Coordinate::new(25.01, 121.46), "Clinic"),
//!     Stop::new("3", Coordinate::new(25.06, 121.60), "School").with_group("morning"),
//!     Stop::new("4", Coordinate::new(24.99, 121.55), "Bakery"),
//!     Stop::new("5", Coordinate::new(25.08, 121.50), "Hotel"),
//! ];
//! let optimizer = Optimizer::new(OptimizerConfig::default()).unwrap();
//! let options = OptimizeOptions::new(Algorithm::Genetic).with_grouping(true);
//!
//! let result = optimizer.optimize_with_rng(&stops, &options, &mut create_rng(42)).unwrap();
//! assert!(result.optimized_order.is_permutation_of(&stops));
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod ga;
pub mod local_search;
pub mod models;
pub mod optimizer;
pub mod random;
pub mod request;
pub mod sa;

pub use error::{ConfigError, OptimizeError};
