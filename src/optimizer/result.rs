//! Optimization result envelope.

use serde::{Deserialize, Serialize};

use crate::models::Tour;

use super::Algorithm;

/// Efficiency figures derived from the savings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsFactors {
    /// `distanceSaved / originalDistance × 100`, or 0 when the original
    /// distance is 0.
    pub distance_reduction_percent: f64,
    /// Minutes saved.
    pub time_efficiency: f64,
    /// Litres of fuel saved.
    pub fuel_efficiency: f64,
}

/// Outcome of one optimization call.
///
/// Distances are kilometers. All numbers are rounded to two decimals.
/// `distance_saved` is the rounded difference of the two rounded distances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub original_order: Tour,
    pub optimized_order: Tour,
    pub original_distance: f64,
    pub optimized_distance: f64,
    pub distance_saved: f64,
    /// Minutes.
    pub time_saved: f64,
    /// Litres.
    pub fuel_saved: f64,
    pub algorithm: Algorithm,
    pub factors: SavingsFactors,
}

/// Unrounded savings figures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Savings {
    pub original_distance: f64,
    pub optimized_distance: f64,
    pub distance_saved: f64,
    pub time_saved_minutes: f64,
    pub fuel_saved_liters: f64,
    pub reduction_percent: f64,
}

impl Savings {
    pub(crate) fn compute(
        original_distance: f64,
        optimized_distance: f64,
        average_speed_kmh: f64,
        fuel_liters_per_km: f64,
    ) -> Self {
        let distance_saved = original_distance - optimized_distance;
        let reduction_percent = if original_distance > 0.0 {
            distance_saved / original_distance * 100.0
        } else {
            0.0
        };
        Self {
            original_distance,
            optimized_distance,
            distance_saved,
            time_saved_minutes: distance_saved / average_speed_kmh * 60.0,
            fuel_saved_liters: distance_saved * fuel_liters_per_km,
            reduction_percent,
        }
    }
}

impl OptimizationResult {
    pub(crate) fn new(
        original_order: Tour,
        optimized_order: Tour,
        algorithm: Algorithm,
        savings: Savings,
    ) -> Self {
        let original_distance = round2(savings.original_distance);
        let optimized_distance = round2(savings.optimized_distance);
        let time_saved = round2(savings.time_saved_minutes);
        let fuel_saved = round2(savings.fuel_saved_liters);
        Self {
            original_order,
            optimized_order,
            original_distance,
            optimized_distance,
            distance_saved: round2(original_distance - optimized_distance),
            time_saved,
            fuel_saved,
            algorithm,
            factors: SavingsFactors {
                distance_reduction_percent: round2(savings.reduction_percent),
                time_efficiency: time_saved,
                fuel_efficiency: fuel_saved,
            },
        }
    }

    /// Serializes the envelope as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
