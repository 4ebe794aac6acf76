//! GA configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for the genetic algorithm.
///
/// # Examples
///
/// ```
/// use u_tourplan::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_generations(40)
///     .with_elite_count(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of individuals per generation.
    pub population_size: usize,

    /// Number of generations to evolve.
    pub generations: usize,

    /// Probability that an offspring receives a swap mutation.
    pub mutation_rate: f64,

    /// Number of best individuals copied unchanged into the next generation.
    pub elite_count: usize,

    /// Smallest stop count the GA runs on. Smaller inputs fall back to
    /// nearest neighbor followed by 2-opt.
    pub min_stops: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            mutation_rate: 0.1,
            elite_count: 5,
            min_stops: 5,
        }
    }
}

impl GaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    pub fn with_min_stops(mut self, n: usize) -> Self {
        self.min_stops = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::Invalid(
                "ga.population_size must be at least 2".into(),
            ));
        }
        if self.generations == 0 {
            return Err(ConfigError::Invalid(
                "ga.generations must be at least 1".into(),
            ));
        }
        if self.elite_count >= self.population_size {
            return Err(ConfigError::Invalid(
                "ga.elite_count must be smaller than ga.population_size".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::Invalid(
                "ga.mutation_rate must be within [0, 1]".into(),
            ));
        }
        Ok(())
    }
}
