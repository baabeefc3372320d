//! Sensor Parameters and Input Records
//!
//! ## Overview
//!
//! The dashboard's data feed delivers readings keyed by parameter name
//! strings. Inside this crate those names become the closed [`Parameter`]
//! enum so threshold lookup and progress mapping dispatch over a `match`
//! instead of a string table; adapter code crosses that boundary exactly
//! once via [`FromStr`].
//!
//! [`SoilHealthInput`] is the value type the aggregator consumes: one soil
//! probe snapshot, seven numeric fields. It is created fresh per computation
//! and never persisted here; storage belongs to the farm service.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::ParamError;

/// The sensor quantities this crate classifies and displays.
///
/// The first seven are soil-probe channels and feed the health index; the
/// last three are ambient-station channels that only get status badges and
/// progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Parameter {
    /// Available nitrogen (mg/kg)
    Nitrogen,
    /// Available phosphorus (mg/kg)
    Phosphorus,
    /// Available potassium (mg/kg)
    Potassium,
    /// Soil pH (unitless, 0-14)
    Ph,
    /// Electrical conductivity (µS/cm or dS/m, see [`crate::units`])
    ElectricalConductivity,
    /// Volumetric soil moisture (%)
    SoilMoisture,
    /// Soil temperature (°C)
    SoilTemperature,
    /// Ambient air temperature (°C)
    AmbientTemperature,
    /// Relative humidity (%)
    Humidity,
    /// Sunlight intensity (lux)
    SunlightIntensity,
}

impl Parameter {
    /// All supported parameters, in display order.
    pub const ALL: [Parameter; 10] = [
        Parameter::Nitrogen,
        Parameter::Phosphorus,
        Parameter::Potassium,
        Parameter::Ph,
        Parameter::ElectricalConductivity,
        Parameter::SoilMoisture,
        Parameter::SoilTemperature,
        Parameter::AmbientTemperature,
        Parameter::Humidity,
        Parameter::SunlightIntensity,
    ];

    /// Canonical wire name, matching the dashboard's camelCase feed keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::Nitrogen => "nitrogen",
            Parameter::Phosphorus => "phosphorus",
            Parameter::Potassium => "potassium",
            Parameter::Ph => "ph",
            Parameter::ElectricalConductivity => "electricalConductivity",
            Parameter::SoilMoisture => "soilMoisture",
            Parameter::SoilTemperature => "soilTemperature",
            Parameter::AmbientTemperature => "ambientTemperature",
            Parameter::Humidity => "humidity",
            Parameter::SunlightIntensity => "sunlightIntensity",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Parameter {
    type Err = ParamError;

    /// Accepts both the dashboard's camelCase keys and snake_case aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nitrogen" => Ok(Parameter::Nitrogen),
            "phosphorus" => Ok(Parameter::Phosphorus),
            "potassium" => Ok(Parameter::Potassium),
            "ph" | "pH" => Ok(Parameter::Ph),
            "electricalConductivity" | "electrical_conductivity" => {
                Ok(Parameter::ElectricalConductivity)
            }
            "soilMoisture" | "soil_moisture" => Ok(Parameter::SoilMoisture),
            "soilTemperature" | "soil_temperature" => Ok(Parameter::SoilTemperature),
            "ambientTemperature" | "ambient_temperature" => Ok(Parameter::AmbientTemperature),
            "humidity" => Ok(Parameter::Humidity),
            "sunlightIntensity" | "sunlight_intensity" => Ok(Parameter::SunlightIntensity),
            _ => Err(ParamError::UnknownParameter),
        }
    }
}

/// One soil probe snapshot: the seven channels the health index consumes.
///
/// Plain immutable value type; fields are in the units the probe reports
/// (EC deliberately unit-ambiguous, resolved by [`crate::units::normalize_ec`]
/// inside the scorer). Non-finite fields are treated as missing readings by
/// the aggregator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SoilHealthInput {
    /// Available nitrogen (mg/kg)
    pub nitrogen: f32,
    /// Available phosphorus (mg/kg)
    pub phosphorus: f32,
    /// Available potassium (mg/kg)
    pub potassium: f32,
    /// Soil pH (unitless)
    pub ph: f32,
    /// Electrical conductivity, µS/cm or dS/m
    pub electrical_conductivity: f32,
    /// Volumetric soil moisture (%)
    pub soil_moisture: f32,
    /// Soil temperature (°C)
    pub soil_temperature: f32,
}
