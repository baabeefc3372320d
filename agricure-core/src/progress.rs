//! Progress-Bar Display Mapping
//!
//! Converts raw readings into the 0-100 percentages behind the dashboard's
//! per-sensor progress bars. These are pure display geometry: each parameter
//! gets a linear rescale over a plausible gauge range, unrelated to the
//! scoring curves and the status bands. A full bar means "top of the gauge",
//! not "healthy" - a maxed-out EC bar is in fact alarming.
//!
//! EC is mapped on the raw reading against a µS/cm gauge; the dS/m
//! normalization in [`crate::units`] is scoring-only. Temperatures share one
//! -10..50 °C gauge; moisture and humidity are already percentages.

use crate::params::Parameter;

/// Lower bound of the shared temperature gauge (°C).
const TEMP_GAUGE_MIN_C: f32 = -10.0;

/// Span of the shared temperature gauge (°C).
const TEMP_GAUGE_SPAN_C: f32 = 60.0;

/// Clamp a percentage to [0, 100]; NaN collapses to 0.
#[inline]
fn clamp_pct(pct: f32) -> f32 {
    if pct >= 100.0 {
        100.0
    } else if pct > 0.0 {
        pct
    } else {
        0.0
    }
}

/// Display percentage for a raw reading, clamped to [0, 100]. Total.
pub fn progress(parameter: Parameter, value: f32) -> f32 {
    let pct = match parameter {
        Parameter::Nitrogen => value / 300.0 * 100.0,
        Parameter::Phosphorus => value / 80.0 * 100.0,
        Parameter::Potassium => value / 350.0 * 100.0,
        Parameter::Ph => value / 14.0 * 100.0,
        Parameter::SoilMoisture | Parameter::Humidity => value,
        Parameter::ElectricalConductivity => value / 3000.0 * 100.0,
        Parameter::SoilTemperature | Parameter::AmbientTemperature => {
            (value - TEMP_GAUGE_MIN_C) / TEMP_GAUGE_SPAN_C * 100.0
        }
        Parameter::SunlightIntensity => value / 100_000.0 * 100.0,
    };
    clamp_pct(pct)
}
