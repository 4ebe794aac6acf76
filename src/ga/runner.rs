//! GA evolutionary loop.
//!
//! [`GaRunner`] runs: seeding → evaluation → ranking → elitism →
//! crossover → mutation → repeat for a fixed number of generations.

use rand::Rng;
use tracing::debug;

use crate::distance::DistanceMatrix;
use crate::error::ConfigError;
use crate::evaluation::RouteCostEvaluator;

use super::chromosome::TourChromosome;
use super::config::GaConfig;
use super::operators::{order_crossover, random_permutation, swap_mutation};

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best individual of the final population.
    pub best: TourChromosome,

    /// Open-path cost of `best`.
    pub best_cost: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best fitness of each ranked generation, then of the final population.
    pub fitness_history: Vec<f64>,
}

/// Executes the genetic algorithm over stop orders.
///
/// # Examples
///
/// ```
/// use u_tourplan::models::{Coordinate, Stop};
/// use u_tourplan::distance::{DistanceMatrix, Haversine};
/// use u_tourplan::ga::{GaConfig, GaRunner};
/// use u_tourplan::random::create_rng;
///
/// let stops: Vec<Stop> = (1..=6)
///     .map(|i| Stop::new(i.to_string(), Coordinate::new(0.0, i as f64), ""))
///     .collect();
/// let dm = DistanceMatrix::from_stops(Coordinate::new(0.0, 0.0), &stops, &Haversine::default());
///
/// let mut rng = create_rng(42);
/// let seed = vec![0, 1, 2, 3, 4, 5];
/// let result = GaRunner::run(&dm, &seed, &GaConfig::default(), &mut rng).unwrap();
/// assert_eq!(result.best.order().len(), 6);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA seeded with `seed` (usually the nearest-neighbor order).
    ///
    /// The first individual is `seed`; the rest of the initial population are
    /// uniform random permutations of the same stops.
    pub fn run<R: Rng>(
        distances: &DistanceMatrix,
        seed: &[usize],
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult, ConfigError> {
        config.validate()?;
        let evaluator = RouteCostEvaluator::new(distances);
        let n = seed.len();

        let mut population: Vec<TourChromosome> = Vec::with_capacity(config.population_size);
        population.push(TourChromosome::new(seed.to_vec()));
        while population.len() < config.population_size {
            population.push(TourChromosome::new(random_permutation(n, rng)));
        }
        evaluate_population(&evaluator, &mut population);

        let parent_pool = (config.population_size / 2).max(1);
        let mut fitness_history = Vec::with_capacity(config.generations + 1);

        for generation in 0..config.generations {
            rank(&mut population);
            fitness_history.push(population[0].fitness());

            let mut next_gen: Vec<TourChromosome> = population[..config.elite_count].to_vec();
            while next_gen.len() < config.population_size {
                let a = &population[rng.random_range(0..parent_pool)];
                let b = &population[rng.random_range(0..parent_pool)];
                let mut child = TourChromosome::new(order_crossover(a.order(), b.order(), rng));
                if rng.random_bool(config.mutation_rate) {
                    swap_mutation(child.order_mut(), rng);
                }
                child.set_fitness(evaluator.fitness(child.order()));
                next_gen.push(child);
            }
            population = next_gen;

            if generation % 25 == 0 {
                debug!(generation, best_fitness = fitness_history[generation], "GA generation");
            }
        }

        rank(&mut population);
        fitness_history.push(population[0].fitness());

        let best = population.swap_remove(0);
        let best_cost = evaluator.cost(best.order());
        Ok(GaResult {
            best,
            best_cost,
            generations: config.generations,
            fitness_history,
        })
    }
}

fn evaluate_population(evaluator: &RouteCostEvaluator<'_>, population: &mut [TourChromosome]) {
    for individual in population.iter_mut() {
        individual.set_fitness(evaluator.fitness(individual.order()));
    }
}

/// Sorts by fitness, best first. The sort is stable, so earlier individuals
/// win ties.
fn rank(population: &mut [TourChromosome]) {
    population.sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));
}
