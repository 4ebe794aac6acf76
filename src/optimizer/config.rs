//! Optimizer configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constructive::{GroupingMode, NearestNeighborParams, DEFAULT_GROUPING_DISCOUNT};
use crate::distance::{Haversine, EARTH_RADIUS_KM};
use crate::error::ConfigError;
use crate::ga::GaConfig;
use crate::local_search::DEFAULT_MAX_PASSES;
use crate::models::Coordinate;
use crate::sa::SaConfig;

/// Tuning constants and defaults for [`Optimizer`](super::Optimizer).
///
/// Every field has a default, so a JSON document only needs the values it
/// overrides.
///
/// # Examples
///
/// ```
/// use u_tourplan::optimizer::OptimizerConfig;
///
/// let config = OptimizerConfig::from_json_str(r#"{"average_speed_kmh": 30.0}"#).unwrap();
/// assert_eq!(config.average_speed_kmh, 30.0);
/// assert_eq!(config.fuel_liters_per_km, 0.12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Depot used when a request does not supply one.
    pub depot: Coordinate,

    /// Sphere radius for the haversine metric.
    pub earth_radius_km: f64,

    /// Average travel speed used to turn distance into time.
    pub average_speed_kmh: f64,

    /// Fuel consumption of a one-ton refrigerated lorry.
    pub fuel_liters_per_km: f64,

    /// Selection multiplier for grouped candidates in nearest neighbor.
    pub grouping_discount: f64,

    /// Which candidates the grouping discount applies to when grouping is on.
    pub grouping_mode: GroupingMode,

    /// Cap on 2-opt scans.
    pub two_opt_max_passes: usize,

    pub ga: GaConfig,

    pub sa: SaConfig,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            depot: Coordinate::new(25.0330, 121.5654),
            earth_radius_km: EARTH_RADIUS_KM,
            average_speed_kmh: 40.0,
            fuel_liters_per_km: 0.12,
            grouping_discount: DEFAULT_GROUPING_DISCOUNT,
            grouping_mode: GroupingMode::AnyLabeled,
            two_opt_max_passes: DEFAULT_MAX_PASSES,
            ga: GaConfig::default(),
            sa: SaConfig::default(),
        }
    }
}

impl OptimizerConfig {
    /// Parses a JSON configuration and validates it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn with_depot(mut self, depot: Coordinate) -> Self {
        self.depot = depot;
        self
    }

    pub fn with_earth_radius_km(mut self, radius: f64) -> Self {
        self.earth_radius_km = radius;
        self
    }

    pub fn with_average_speed_kmh(mut self, speed: f64) -> Self {
        self.average_speed_kmh = speed;
        self
    }

    pub fn with_fuel_liters_per_km(mut self, rate: f64) -> Self {
        self.fuel_liters_per_km = rate;
        self
    }

    pub fn with_grouping_discount(mut self, discount: f64) -> Self {
        self.grouping_discount = discount;
        self
    }

    pub fn with_grouping_mode(mut self, mode: GroupingMode) -> Self {
        self.grouping_mode = mode;
        self
    }

    pub fn with_two_opt_max_passes(mut self, passes: usize) -> Self {
        self.two_opt_max_passes = passes;
        self
    }

    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    pub fn with_sa(mut self, sa: SaConfig) -> Self {
        self.sa = sa;
        self
    }

    /// The distance metric described by this configuration.
    pub fn metric(&self) -> Haversine {
        Haversine::new(self.earth_radius_km)
    }

    /// Nearest-neighbor parameters for a request.
    pub fn nearest_neighbor_params(&self, prioritize_grouping: bool) -> NearestNeighborParams {
        NearestNeighborParams {
            grouping: if prioritize_grouping {
                self.grouping_mode
            } else {
                GroupingMode::Off
            },
            discount: self.grouping_discount,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.depot.is_finite() {
            return Err(ConfigError::Invalid("depot must be finite".into()));
        }
        positive("earth_radius_km", self.earth_radius_km)?;
        positive("average_speed_kmh", self.average_speed_kmh)?;
        if !self.fuel_liters_per_km.is_finite() || self.fuel_liters_per_km < 0.0 {
            return Err(ConfigError::Invalid(
                "fuel_liters_per_km must be non-negative".into(),
            ));
        }
        positive("grouping_discount", self.grouping_discount)?;
        self.ga.validate()?;
        self.sa.validate()?;
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be positive")))
    }
}
