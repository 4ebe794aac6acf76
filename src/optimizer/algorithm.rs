//! Strategy selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OptimizeError;
use crate::models::Coordinate;

/// Search strategy used to order the stops.
///
/// # Examples
///
/// ```
/// use u_tourplan::optimizer::Algorithm;
///
/// let a: Algorithm = "simulated_annealing".parse().unwrap();
/// assert_eq!(a, Algorithm::SimulatedAnnealing);
/// assert_eq!(Algorithm::default().as_str(), "nearest_neighbor");
/// assert!("dijkstra".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Nearest neighbor followed by 2-opt.
    #[default]
    NearestNeighbor,
    /// Genetic algorithm seeded with nearest neighbor.
    Genetic,
    /// Simulated annealing starting from nearest neighbor.
    SimulatedAnnealing,
}

impl Algorithm {
    /// Wire name of the strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::NearestNeighbor => "nearest_neighbor",
            Algorithm::Genetic => "genetic",
            Algorithm::SimulatedAnnealing => "simulated_annealing",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = OptimizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest_neighbor" => Ok(Algorithm::NearestNeighbor),
            "genetic" => Ok(Algorithm::Genetic),
            "simulated_annealing" => Ok(Algorithm::SimulatedAnnealing),
            other => Err(OptimizeError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Per-call options for [`Optimizer::optimize`](super::Optimizer::optimize).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OptimizeOptions {
    pub algorithm: Algorithm,
    /// Prefer stops with a group label during nearest-neighbor construction.
    pub prioritize_grouping: bool,
    /// Overrides the configured depot.
    pub depot: Option<Coordinate>,
}

impl OptimizeOptions {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    pub fn with_grouping(mut self, prioritize: bool) -> Self {
        self.prioritize_grouping = prioritize;
        self
    }

    pub fn with_depot(mut self, depot: Coordinate) -> Self {
        self.depot = Some(depot);
        self
    }
}
