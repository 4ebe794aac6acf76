use proptest::prelude::*;

use u_tourplan::constructive::{nearest_neighbor, NearestNeighborParams};
use u_tourplan::distance::{DistanceMatrix, DistanceMetric, Haversine};
use u_tourplan::evaluation::{path_cost, RouteCostEvaluator};
use u_tourplan::local_search::{two_opt_improve, DEFAULT_MAX_PASSES};
use u_tourplan::models::{Coordinate, Stop};
use u_tourplan::optimizer::{round2, Algorithm, OptimizeOptions, Optimizer, OptimizerConfig};
use u_tourplan::random::create_rng;
use u_tourplan::sa::{SaConfig, SaRunner};

const DEPOT: Coordinate = Coordinate {
    lat: 25.0,
    lon: 121.5,
};

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-89.0..89.0f64, -179.0..179.0f64).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
}

/// Stops scattered around the depot, some labeled.
fn stop_set(min: usize, max: usize) -> impl Strategy<Value = Vec<Stop>> {
    prop::collection::vec((-0.5..0.5f64, -0.5..0.5f64, prop::bool::ANY), min..=max).prop_map(
        |points| {
            points
                .into_iter()
                .enumerate()
                .map(|(i, (dlat, dlon, labeled))| {
                    let stop = Stop::new(
                        format!("s{i}"),
                        Coordinate::new(DEPOT.lat + dlat, DEPOT.lon + dlon),
                        format!("Stop {i}"),
                    );
                    if labeled {
                        stop.with_group("delivery")
                    } else {
                        stop
                    }
                })
                .collect()
        },
    )
}

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::NearestNeighbor),
        Just(Algorithm::Genetic),
        Just(Algorithm::SimulatedAnnealing),
    ]
}

fn optimizer() -> Optimizer {
    Optimizer::new(OptimizerConfig::default().with_depot(DEPOT)).expect("valid config")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn optimized_order_is_permutation(
        stops in stop_set(2, 50),
        algorithm in algorithm(),
        grouping in prop::bool::ANY,
        seed in any::<u64>(),
    ) {
        let options = OptimizeOptions::new(algorithm).with_grouping(grouping);
        let r = optimizer()
            .optimize_with_rng(&stops, &options, &mut create_rng(seed))
            .expect("valid input");
        prop_assert!(r.optimized_order.is_permutation_of(&stops));
        prop_assert!(r.original_order.is_permutation_of(&stops));
    }

    #[test]
    fn distance_saved_is_difference(
        stops in stop_set(2, 20),
        algorithm in algorithm(),
        seed in any::<u64>(),
    ) {
        let r = optimizer()
            .optimize_with_rng(&stops, &OptimizeOptions::new(algorithm), &mut create_rng(seed))
            .expect("valid input");
        prop_assert!((r.distance_saved - (r.original_distance - r.optimized_distance)).abs() < 1e-9);
        prop_assert_eq!(round2(r.distance_saved), r.distance_saved);
        prop_assert!(r.factors.distance_reduction_percent.is_finite());
    }

    #[test]
    fn haversine_is_zero_on_self_and_symmetric(a in coordinate(), b in coordinate()) {
        let h = Haversine::default();
        prop_assert_eq!(h.distance(a, a), 0.0);
        prop_assert_eq!(h.distance(a, b), h.distance(b, a));
        prop_assert!(h.distance(a, b) >= 0.0);
    }

    #[test]
    fn path_cost_of_single_stop_is_depot_leg(depot in coordinate(), c in coordinate()) {
        let h = Haversine::default();
        prop_assert_eq!(path_cost(&h, depot, &[]), 0.0);
        prop_assert_eq!(path_cost(&h, depot, &[c]), h.distance(depot, c));
    }

    #[test]
    fn two_opt_never_increases_cost(
        stops in stop_set(2, 30),
        shuffle_seed in any::<u64>(),
    ) {
        use rand::seq::SliceRandom;

        let dm = DistanceMatrix::from_stops(DEPOT, &stops, &Haversine::default());
        let ev = RouteCostEvaluator::new(&dm);
        let mut order: Vec<usize> = (0..stops.len()).collect();
        order.shuffle(&mut create_rng(shuffle_seed));

        let (improved, cost) = two_opt_improve(&order, &dm, DEFAULT_MAX_PASSES);
        prop_assert!(cost <= ev.cost(&order) + 1e-9);
        prop_assert!((cost - ev.cost(&improved)).abs() < 1e-9);
    }

    #[test]
    fn annealing_never_worse_than_nearest_neighbor(
        stops in stop_set(2, 25),
        seed in any::<u64>(),
    ) {
        let dm = DistanceMatrix::from_stops(DEPOT, &stops, &Haversine::default());
        let nn = nearest_neighbor(&stops, &dm, &NearestNeighborParams::plain());
        let nn_cost = RouteCostEvaluator::new(&dm).cost(&nn);
        let result = SaRunner::run(&dm, &nn, &SaConfig::default(), &mut create_rng(seed))
            .expect("valid config");
        prop_assert!(result.best_cost <= nn_cost);
    }

    #[test]
    fn genetic_below_five_stops_is_nearest_neighbor_with_two_opt(
        stops in stop_set(2, 4),
        grouping in prop::bool::ANY,
        seed in any::<u64>(),
    ) {
        let opt = optimizer();
        let dm = DistanceMatrix::from_stops(DEPOT, &stops, &opt.config().metric());
        let params = opt.config().nearest_neighbor_params(grouping);
        let nn = nearest_neighbor(&stops, &dm, &params);
        let (expected, _) = two_opt_improve(&nn, &dm, opt.config().two_opt_max_passes);
        let expected_ids: Vec<&str> = expected.iter().map(|&i| stops[i].id()).collect();

        let options = OptimizeOptions::new(Algorithm::Genetic).with_grouping(grouping);
        let r = opt
            .optimize_with_rng(&stops, &options, &mut create_rng(seed))
            .expect("valid input");
        prop_assert_eq!(r.optimized_order.stop_ids(), expected_ids.as_slice());
    }
}
