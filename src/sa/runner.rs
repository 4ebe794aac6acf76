//! SA execution loop.

use rand::Rng;
use tracing::debug;

use crate::distance::DistanceMatrix;
use crate::error::ConfigError;
use crate::evaluation::RouteCostEvaluator;

use super::config::SaConfig;

/// Result of a simulated annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// Best order found.
    pub best: Vec<usize>,

    /// Cost of the best order.
    pub best_cost: f64,

    /// Total number of neighbor evaluations.
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,
}

/// Executes simulated annealing over stop orders.
///
/// The neighborhood swaps two uniformly random positions. Acceptance follows
/// the Metropolis criterion. The best order is copied out whenever the
/// current order beats it, so it never aliases the working state.
///
/// # Examples
///
/// ```
/// use u_tourplan::models::{Coordinate, Stop};
/// use u_tourplan::distance::{DistanceMatrix, Haversine};
/// use u_tourplan::evaluation::RouteCostEvaluator;
/// use u_tourplan::sa::{SaConfig, SaRunner};
/// use u_tourplan::random::create_rng;
///
/// let stops: Vec<Stop> = [3.0, 1.0, 4.0, 2.0]
///     .iter()
///     .map(|&lon| Stop::new(lon.to_string(), Coordinate::new(0.0, lon), ""))
///     .collect();
/// let dm = DistanceMatrix::from_stops(Coordinate::new(0.0, 0.0), &stops, &Haversine::default());
///
/// let seed = vec![0, 1, 2, 3];
/// let result = SaRunner::run(&dm, &seed, &SaConfig::default(), &mut create_rng(42)).unwrap();
/// assert!(result.best_cost <= RouteCostEvaluator::new(&dm).cost(&seed));
/// ```
pub struct SaRunner;

impl SaRunner {
    /// Runs SA starting from `initial` (usually the nearest-neighbor order).
    pub fn run<R: Rng>(
        distances: &DistanceMatrix,
        initial: &[usize],
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult, ConfigError> {
        config.validate()?;
        let evaluator = RouteCostEvaluator::new(distances);

        let mut current = initial.to_vec();
        let mut current_cost = evaluator.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let n = current.len();
        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        while temperature > config.min_temperature {
            if n >= 2 {
                let mut neighbor = current.clone();
                neighbor.swap(rng.random_range(0..n), rng.random_range(0..n));
                let neighbor_cost = evaluator.cost(&neighbor);
                let delta = neighbor_cost - current_cost;

                let accept = if delta < 0.0 {
                    improving_moves += 1;
                    true
                } else {
                    rng.random::<f64>() < (-delta / temperature).exp()
                };

                if accept {
                    current = neighbor;
                    current_cost = neighbor_cost;
                    accepted_moves += 1;
                }

                if current_cost < best_cost {
                    best.clone_from(&current);
                    best_cost = current_cost;
                }
            }

            iterations += 1;
            temperature *= config.cooling_factor;
        }

        debug!(
            iterations,
            accepted_moves, improving_moves, best_cost, "SA finished"
        );

        Ok(SaResult {
            best,
            best_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
        })
    }
}
