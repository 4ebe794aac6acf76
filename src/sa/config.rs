//! SA configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for simulated annealing with geometric cooling.
///
/// The run performs one neighbor evaluation per temperature step and stops
/// once the temperature is no longer above `min_temperature`. With the
/// defaults that is about 1 380 iterations.
///
/// # Examples
///
/// ```
/// use u_tourplan::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_factor(0.99);
/// assert!(config.validate().is_ok());
/// assert!(config.iteration_count() > 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaConfig {
    /// Starting temperature.
    pub initial_temperature: f64,

    /// Multiplier applied to the temperature after every iteration, in (0, 1).
    pub cooling_factor: f64,

    /// The loop runs while the temperature is above this value.
    pub min_temperature: f64,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_factor: 0.995,
            min_temperature: 1.0,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, alpha: f64) -> Self {
        self.cooling_factor = alpha;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    /// Number of iterations this schedule performs.
    pub fn iteration_count(&self) -> usize {
        let mut t = self.initial_temperature;
        let mut count = 0;
        while t > self.min_temperature {
            t *= self.cooling_factor;
            count += 1;
        }
        count
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cooling_factor.is_nan() || self.cooling_factor <= 0.0 || self.cooling_factor >= 1.0 {
            return Err(ConfigError::Invalid(
                "sa.cooling_factor must be in (0, 1)".into(),
            ));
        }
        if !self.min_temperature.is_finite() || self.min_temperature <= 0.0 {
            return Err(ConfigError::Invalid(
                "sa.min_temperature must be positive".into(),
            ));
        }
        if !self.initial_temperature.is_finite() {
            return Err(ConfigError::Invalid(
                "sa.initial_temperature must be finite".into(),
            ));
        }
        Ok(())
    }
}
