//! Threshold-Band Status Classification
//!
//! ## Overview
//!
//! Each sensor parameter gets a discrete status badge independent of the
//! scoring curves: a reading is OPTIMAL inside the agronomic comfort band,
//! WARNING in the surrounding caution bands, CRITICAL everywhere else. The
//! dashboard renders these directly; the health index never looks at them.
//!
//! ## Band structure
//!
//! Every table carries one inclusive optimal range plus one or two inclusive
//! warning ranges:
//!
//! - **Enclosing-warning tables** (nitrogen, potassium, EC, sunlight): a
//!   single warning range that contains the optimal range, so the warning
//!   zone is whatever of it the optimal check did not already claim.
//! - **Split-warning tables** (phosphorus, pH, moisture, soil and ambient
//!   temperature, humidity): distinct low and high warning ranges abutting
//!   the optimal band on each side.
//!
//! Evaluation order is fixed: optimal first, then the warning ranges, then
//! critical as the catch-all. Shared boundary values therefore resolve to the
//! better status, and every real number maps to exactly one status with no
//! gaps - the catch-all makes the tables exhaustive by construction.
//!
//! ## Three range systems, on purpose
//!
//! The classifier bands are intentionally distinct from both the scoring
//! curve thresholds and the progress-bar ranges. Status badges answer "does
//! this need attention", the curves feed index math, the progress ranges are
//! display geometry. Do not unify them.

pub mod tables;

pub use tables::{
    AMBIENT_TEMPERATURE_THRESHOLDS, EC_THRESHOLDS, HUMIDITY_THRESHOLDS, NITROGEN_THRESHOLDS,
    PHOSPHORUS_THRESHOLDS, PH_THRESHOLDS, POTASSIUM_THRESHOLDS, SOIL_MOISTURE_THRESHOLDS,
    SOIL_TEMPERATURE_THRESHOLDS, SUNLIGHT_THRESHOLDS,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::params::{Parameter, SoilHealthInput};

/// Discrete per-parameter health status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Status {
    /// Reading inside the agronomic comfort band
    Optimal,
    /// Reading needs attention soon
    Warning,
    /// Reading needs intervention now
    Critical,
}

impl Status {
    /// Presentation tag for the dashboard's status badges.
    pub fn color_tag(&self) -> &'static str {
        match self {
            Status::Optimal => "green",
            Status::Warning => "yellow",
            Status::Critical => "red",
        }
    }
}

/// One inclusive numeric band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Inclusive lower bound
    pub min: f32,
    /// Inclusive upper bound
    pub max: f32,
}

impl Band {
    /// Inclusive containment check; false for NaN.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Per-parameter status table: one optimal band, one or two warning bands.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdTable {
    /// The comfort band, checked first
    pub optimal: Band,
    /// Caution band(s); may enclose the optimal band
    pub warning: &'static [Band],
}

impl ThresholdTable {
    /// Classify a reading. Optimal wins shared boundaries; anything outside
    /// all bands (including NaN) is critical.
    pub fn classify(&self, value: f32) -> Status {
        if self.optimal.contains(value) {
            Status::Optimal
        } else if self.warning.iter().any(|band| band.contains(value)) {
            Status::Warning
        } else {
            Status::Critical
        }
    }
}

impl Parameter {
    /// The status table for this parameter.
    pub fn thresholds(&self) -> &'static ThresholdTable {
        match self {
            Parameter::Nitrogen => &NITROGEN_THRESHOLDS,
            Parameter::Phosphorus => &PHOSPHORUS_THRESHOLDS,
            Parameter::Potassium => &POTASSIUM_THRESHOLDS,
            Parameter::Ph => &PH_THRESHOLDS,
            Parameter::ElectricalConductivity => &EC_THRESHOLDS,
            Parameter::SoilMoisture => &SOIL_MOISTURE_THRESHOLDS,
            Parameter::SoilTemperature => &SOIL_TEMPERATURE_THRESHOLDS,
            Parameter::AmbientTemperature => &AMBIENT_TEMPERATURE_THRESHOLDS,
            Parameter::Humidity => &HUMIDITY_THRESHOLDS,
            Parameter::SunlightIntensity => &SUNLIGHT_THRESHOLDS,
        }
    }
}

/// Classify one reading against its parameter's table.
///
/// EC is classified on the raw reading in µS/cm; do not pass the normalized
/// dS/m value used by the scorer.
pub fn classify_reading(parameter: Parameter, value: f32) -> Status {
    parameter.thresholds().classify(value)
}

/// Status badges for every channel of a soil probe snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SoilStatuses {
    /// Nitrogen badge
    pub nitrogen: Status,
    /// Phosphorus badge
    pub phosphorus: Status,
    /// Potassium badge
    pub potassium: Status,
    /// pH badge
    pub ph: Status,
    /// EC badge (raw µS/cm reading)
    pub electrical_conductivity: Status,
    /// Soil moisture badge
    pub soil_moisture: Status,
    /// Soil temperature badge
    pub soil_temperature: Status,
}

/// Classify all seven channels of a snapshot in one call.
pub fn classify_snapshot(input: &SoilHealthInput) -> SoilStatuses {
    SoilStatuses {
        nitrogen: classify_reading(Parameter::Nitrogen, input.nitrogen),
        phosphorus: classify_reading(Parameter::Phosphorus, input.phosphorus),
        potassium: classify_reading(Parameter::Potassium, input.potassium),
        ph: classify_reading(Parameter::Ph, input.ph),
        electrical_conductivity: classify_reading(
            Parameter::ElectricalConductivity,
            input.electrical_conductivity,
        ),
        soil_moisture: classify_reading(Parameter::SoilMoisture, input.soil_moisture),
        soil_temperature: classify_reading(Parameter::SoilTemperature, input.soil_temperature),
    }
}
