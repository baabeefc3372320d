//! Electrical Conductivity Unit Normalization
//!
//! Soil EC probes in the field report in two units depending on vendor:
//! µS/cm (values in the hundreds to thousands for normal soil) and dS/m
//! (values below ~4 for the same soil). Readings arrive without unit
//! metadata, so the scorer detects the unit from magnitude and converts
//! everything to dS/m before curve evaluation.
//!
//! Only the scoring pipeline consumes the normalized value. The threshold
//! classifier and the progress mapper both deliberately work on the raw
//! reading against µS/cm-denominated tables; callers must not pre-convert
//! for them.

use crate::constants::agronomy::{EC_UNIT_DETECT_THRESHOLD, US_PER_DS};

/// Normalize an electrical conductivity reading to dS/m.
///
/// Values above [`EC_UNIT_DETECT_THRESHOLD`] are assumed to be µS/cm and
/// divided by 1000; values at or below it pass through unchanged, including
/// zero and negative readings from faulty probes. Total over all reals.
pub fn normalize_ec(raw: f32) -> f32 {
    if raw > EC_UNIT_DETECT_THRESHOLD {
        #[cfg(feature = "log")]
        log::debug!("EC reading {} treated as µS/cm, converted to dS/m", raw);
        raw / US_PER_DS
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ds_m_readings_pass_through() {
        assert_eq!(normalize_ec(5.0), 5.0);
        assert_eq!(normalize_ec(0.5), 0.5);
        assert_eq!(normalize_ec(0.0), 0.0);
        assert_eq!(normalize_ec(-1.0), -1.0);
    }

    #[test]
    fn us_cm_readings_convert() {
        assert_eq!(normalize_ec(11.0), 0.011);
        assert_eq!(normalize_ec(1200.0), 1.2);
        assert_eq!(normalize_ec(3000.0), 3.0);
    }

    #[test]
    fn detection_boundary_is_exclusive() {
        // Exactly 10 is still taken as dS/m; only strictly greater converts.
        assert_eq!(normalize_ec(10.0), 10.0);
        assert_eq!(normalize_ec(10.001), 10.001 / 1000.0);
    }
}
