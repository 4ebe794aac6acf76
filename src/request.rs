//! Request handling around the optimizer.
//!
//! Mirrors the service endpoint: pick the requested stops out of the full
//! collection, drop those without a usable location, run the optimizer, and
//! merge the recommended order back into the collection.

use std::collections::{HashMap, HashSet};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::OptimizeError;
use crate::models::{Coordinate, Stop, Tour};
use crate::optimizer::{Algorithm, OptimizationResult, OptimizeOptions, Optimizer};

/// Vehicle details sent with a request.
///
/// Accepted for completeness; fuel figures always use the configured
/// consumption rate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleInfo {
    pub name: Option<String>,
    pub plate: Option<String>,
    pub fuel_type: Option<String>,
}

/// An optimization request as received by the service.
///
/// # Examples
///
/// ```
/// use u_tourplan::optimizer::Algorithm;
/// use u_tourplan::request::OptimizationRequest;
///
/// let req: OptimizationRequest =
///     serde_json::from_str(r#"{"algorithm": "genetic", "prioritizeDelivery": true}"#).unwrap();
/// assert_eq!(req.algorithm, Algorithm::Genetic);
/// assert!(req.prioritize_delivery);
/// assert!(req.stop_ids.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizationRequest {
    /// Subset of stops to optimize; all stops when absent.
    pub stop_ids: Option<Vec<String>>,
    pub algorithm: Algorithm,
    pub prioritize_delivery: bool,
    pub start_location: Option<Coordinate>,
    pub vehicle: Option<VehicleInfo>,
}

impl OptimizationRequest {
    /// Optimizer options carried by this request.
    pub fn options(&self) -> OptimizeOptions {
        OptimizeOptions {
            algorithm: self.algorithm,
            prioritize_grouping: self.prioritize_delivery,
            depot: self.start_location,
        }
    }
}

/// Selects the stops a request refers to, in collection order, keeping only
/// stops with a usable coordinate.
///
/// Fails with [`OptimizeError::UnknownStop`] if a requested id is not in the
/// collection, and with [`OptimizeError::InsufficientStops`] if fewer than 2
/// usable stops remain.
pub fn select_stops(
    collection: &[Stop],
    request: &OptimizationRequest,
) -> Result<Vec<Stop>, OptimizeError> {
    let selected: Vec<&Stop> = match &request.stop_ids {
        None => collection.iter().collect(),
        Some(ids) => {
            let known: HashSet<&str> = collection.iter().map(Stop::id).collect();
            if let Some(missing) = ids.iter().find(|id| !known.contains(id.as_str())) {
                return Err(OptimizeError::UnknownStop(missing.clone()));
            }
            let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
            collection
                .iter()
                .filter(|s| wanted.contains(s.id()))
                .collect()
        }
    };

    let usable: Vec<Stop> = selected
        .into_iter()
        .filter(|s| s.coordinate().is_usable())
        .cloned()
        .collect();
    if usable.len() < 2 {
        return Err(OptimizeError::InsufficientStops {
            found: usable.len(),
        });
    }
    Ok(usable)
}

/// Returns the collection reordered: stops of `optimized` first, in that
/// order, followed by every other stop in its existing relative order.
///
/// Ids in `optimized` that are not in the collection are ignored.
///
/// # Examples
///
/// ```
/// use u_tourplan::models::{Coordinate, Stop, Tour};
/// use u_tourplan::request::apply_order;
///
/// let c = Coordinate::new(1.0, 1.0);
/// let collection = vec![
///     Stop::new("a", c, "A"),
///     Stop::new("b", c, "B"),
///     Stop::new("c", c, "C"),
///     Stop::new("d", c, "D"),
/// ];
/// let order = Tour::new(vec!["c".into(), "a".into()]);
/// let ids: Vec<String> = apply_order(&order, &collection)
///     .iter()
///     .map(|s| s.id().to_string())
///     .collect();
/// assert_eq!(ids, ["c", "a", "b", "d"]);
/// ```
pub fn apply_order(optimized: &Tour, collection: &[Stop]) -> Vec<Stop> {
    let by_id: HashMap<&str, &Stop> = collection.iter().map(|s| (s.id(), s)).collect();
    let mut placed: HashSet<&str> = HashSet::with_capacity(optimized.len());
    let mut ordered = Vec::with_capacity(collection.len());

    for id in optimized.stop_ids() {
        if let Some(&stop) = by_id.get(id.as_str()) {
            if placed.insert(stop.id()) {
                ordered.push(stop.clone());
            }
        }
    }
    ordered.extend(
        collection
            .iter()
            .filter(|s| !placed.contains(s.id()))
            .cloned(),
    );
    ordered
}

impl Optimizer {
    /// Handles a request against the full stop collection.
    pub fn handle(
        &self,
        collection: &[Stop],
        request: &OptimizationRequest,
    ) -> Result<OptimizationResult, OptimizeError> {
        self.handle_with_rng(collection, request, &mut rand::rng())
    }

    /// Handles a request using the supplied random source.
    #[instrument(skip_all, fields(collection = collection.len()))]
    pub fn handle_with_rng<R: Rng>(
        &self,
        collection: &[Stop],
        request: &OptimizationRequest,
        rng: &mut R,
    ) -> Result<OptimizationResult, OptimizeError> {
        let stops = select_stops(collection, request)?;
        if let Some(vehicle) = &request.vehicle {
            debug!(?vehicle, "vehicle metadata supplied");
        }
        self.optimize_with_rng(&stops, &request.options(), rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimizer::OptimizerConfig;
    use crate::random::create_rng;

    fn collection() -> Vec<Stop> {
        vec![
            Stop::new("depot", Coordinate::new(0.0, 0.0), "no location"),
            Stop::new("a", Coordinate::new(0.0, 3.0), "A"),
            Stop::new("b", Coordinate::new(0.0, 1.0), "B"),
            Stop::new("nan", Coordinate::new(f64::NAN, 1.0), "broken"),
            Stop::new("c", Coordinate::new(0.0, 2.0), "C"),
        ]
    }

    fn ids(stops: &[Stop]) -> Vec<&str> {
        stops.iter().map(Stop::id).collect()
    }

    #[test]
    fn test_select_all_filters_unusable() {
        let stops = select_stops(&collection(), &OptimizationRequest::default()).expect("valid");
        assert_eq!(ids(&stops), ["a", "b", "c"]);
    }

    #[test]
    fn test_select_subset_keeps_collection_order() {
        let req = OptimizationRequest {
            stop_ids: Some(vec!["c".into(), "a".into()]),
            ..Default::default()
        };
        let stops = select_stops(&collection(), &req).expect("valid");
        assert_eq!(ids(&stops), ["a", "c"]);
    }

    #[test]
    fn test_select_unknown_id() {
        let req = OptimizationRequest {
            stop_ids: Some(vec!["a".into(), "zzz".into()]),
            ..Default::default()
        };
        assert!(matches!(
            select_stops(&collection(), &req),
            Err(OptimizeError::UnknownStop(id)) if id == "zzz"
        ));
    }

    #[test]
    fn test_select_too_few_usable() {
        let req = OptimizationRequest {
            stop_ids: Some(vec!["a".into(), "nan".into(), "depot".into()]),
            ..Default::default()
        };
        assert!(matches!(
            select_stops(&collection(), &req),
            Err(OptimizeError::InsufficientStops { found: 1 })
        ));
    }

    #[test]
    fn test_request_defaults() {
        let req: OptimizationRequest = serde_json::from_str("{}").expect("valid");
        assert_eq!(req.algorithm, Algorithm::NearestNeighbor);
        assert!(!req.prioritize_delivery);
        assert!(req.start_location.is_none());
        let opts = req.options();
        assert!(!opts.prioritize_grouping);
    }

    #[test]
    fn test_request_with_vehicle_and_start() {
        let json = r#"{
            "stopIds": ["a", "b"],
            "algorithm": "simulated_annealing",
            "startLocation": {"lat": 0.0, "lon": 4.0},
            "vehicle": {"name": "Reefer 1", "plate": "ABC-123"}
        }"#;
        let req: OptimizationRequest = serde_json::from_str(json).expect("valid");
        assert_eq!(req.options().depot, Some(Coordinate::new(0.0, 4.0)));
        assert_eq!(req.vehicle.and_then(|v| v.plate).as_deref(), Some("ABC-123"));
    }

    #[test]
    fn test_handle_end_to_end() {
        let opt = Optimizer::new(OptimizerConfig::default().with_depot(Coordinate::new(0.0, 0.0)))
            .expect("valid");
        let result = opt
            .handle_with_rng(&collection(), &OptimizationRequest::default(), &mut create_rng(5))
            .expect("valid");
        assert_eq!(result.optimized_order.stop_ids(), ["b", "c", "a"]);

        let reordered = apply_order(&result.optimized_order, &collection());
        assert_eq!(ids(&reordered), ["b", "c", "a", "depot", "nan"]);
    }

    #[test]
    fn test_handle_rejects_duplicate_ids_in_collection() {
        let opt = Optimizer::new(OptimizerConfig::default().with_depot(Coordinate::new(0.0, 0.0)))
            .expect("valid");
        let mut stops = collection();
        stops.push(Stop::new("a", Coordinate::new(0.0, 4.0), "A again"));
        assert!(matches!(
            opt.handle_with_rng(&stops, &OptimizationRequest::default(), &mut create_rng(5)),
            Err(OptimizeError::DuplicateStop(id)) if id == "a"
        ));
    }

    #[test]
    fn test_apply_order_ignores_foreign_and_duplicate_ids() {
        let order = Tour::new(vec!["c".into(), "ghost".into(), "c".into()]);
        let reordered = apply_order(&order, &collection());
        assert_eq!(ids(&reordered), ["c", "depot", "a", "b", "nan"]);
    }
}
