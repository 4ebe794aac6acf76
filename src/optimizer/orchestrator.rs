//! Strategy dispatch and savings computation.

use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, info, instrument};

use crate::constructive::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::error::OptimizeError;
use crate::evaluation::RouteCostEvaluator;
use crate::ga::GaRunner;
use crate::local_search::two_opt_improve;
use crate::models::{Stop, Tour};
use crate::sa::SaRunner;

use super::result::Savings;
use super::{Algorithm, OptimizationResult, OptimizeOptions, OptimizerConfig};

/// Orders stops from a depot and reports the savings over the given order.
///
/// Each call works on its own copies of the input; an `Optimizer` can be
/// shared freely.
///
/// # Examples
///
/// ```
/// use u_tourplan::models::{Coordinate, Stop};
/// use u_tourplan::optimizer::{Algorithm, OptimizeOptions, Optimizer, OptimizerConfig};
///
/// let optimizer = Optimizer::new(OptimizerConfig::default()).unwrap();
/// let stops = vec![
///     Stop::new("b", Coordinate::new(0.0, 2.0), "B"),
///     Stop::new("a", Coordinate::new(0.0, 1.0), "A"),
/// ];
/// let options = OptimizeOptions::new(Algorithm::NearestNeighbor)
///     .with_depot(Coordinate::new(0.0, 0.0));
///
/// let result = optimizer.optimize(&stops, &options).unwrap();
/// assert_eq!(result.optimized_order.stop_ids(), &["a".to_string(), "b".to_string()]);
/// assert!(result.distance_saved > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Optimizer {
    config: OptimizerConfig,
}

impl Optimizer {
    /// Creates an optimizer after validating `config`.
    pub fn new(config: OptimizerConfig) -> Result<Self, OptimizeError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Optimizes with an entropy-seeded random source.
    pub fn optimize(
        &self,
        stops: &[Stop],
        options: &OptimizeOptions,
    ) -> Result<OptimizationResult, OptimizeError> {
        self.optimize_with_rng(stops, options, &mut rand::rng())
    }

    /// Optimizes using the supplied random source.
    ///
    /// Fails without producing a result if fewer than 2 stops are given, a
    /// stop has a non-finite coordinate, or two stops share an id.
    #[instrument(skip_all, fields(stops = stops.len(), algorithm = %options.algorithm))]
    pub fn optimize_with_rng<R: Rng>(
        &self,
        stops: &[Stop],
        options: &OptimizeOptions,
        rng: &mut R,
    ) -> Result<OptimizationResult, OptimizeError> {
        if stops.len() < 2 {
            return Err(OptimizeError::InsufficientStops { found: stops.len() });
        }
        if let Some(stop) = stops.iter().find(|s| !s.coordinate().is_finite()) {
            return Err(OptimizeError::InvalidCoordinate {
                stop_id: stop.id().to_string(),
            });
        }

        let mut seen = HashSet::with_capacity(stops.len());
        if let Some(stop) = stops.iter().find(|s| !seen.insert(s.id())) {
            return Err(OptimizeError::DuplicateStop(stop.id().to_string()));
        }

        let depot = options.depot.unwrap_or(self.config.depot);
        let distances = DistanceMatrix::from_stops(depot, stops, &self.config.metric());
        let evaluator = RouteCostEvaluator::new(&distances);

        let given: Vec<usize> = (0..stops.len()).collect();
        let original_distance = evaluator.cost(&given);

        let order = self.dispatch(stops, &distances, options, rng)?;
        let optimized_distance = evaluator.cost(&order);

        let savings = Savings::compute(
            original_distance,
            optimized_distance,
            self.config.average_speed_kmh,
            self.config.fuel_liters_per_km,
        );
        info!(
            original_distance,
            optimized_distance,
            reduction_percent = savings.reduction_percent,
            "route optimized"
        );

        Ok(OptimizationResult::new(
            Tour::as_given(stops),
            Tour::from_indices(&order, stops),
            options.algorithm,
            savings,
        ))
    }

    fn dispatch<R: Rng>(
        &self,
        stops: &[Stop],
        distances: &DistanceMatrix,
        options: &OptimizeOptions,
        rng: &mut R,
    ) -> Result<Vec<usize>, OptimizeError> {
        let params = self.config.nearest_neighbor_params(options.prioritize_grouping);
        let seed = nearest_neighbor(stops, distances, &params);

        let order = match options.algorithm {
            Algorithm::Genetic if stops.len() >= self.config.ga.min_stops => {
                GaRunner::run(distances, &seed, &self.config.ga, rng)?
                    .best
                    .into_order()
            }
            Algorithm::SimulatedAnnealing => {
                SaRunner::run(distances, &seed, &self.config.sa, rng)?.best
            }
            Algorithm::Genetic | Algorithm::NearestNeighbor => {
                if options.algorithm == Algorithm::Genetic {
                    debug!(
                        stops = stops.len(),
                        min_stops = self.config.ga.min_stops,
                        "too few stops for GA, using nearest neighbor with 2-opt"
                    );
                }
                two_opt_improve(&seed, distances, self.config.two_opt_max_passes).0
            }
        };
        Ok(order)
    }
}
