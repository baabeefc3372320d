//! Agronomic Reference Values for Soil Scoring
//!
//! This module defines the threshold constants behind the soil health index:
//! the half-score points of the nutrient sigmoids, the optimum ranges of the
//! peak-shaped curves, the aggregation weights, and the electrical
//! conductivity unit heuristic.
//!
//! The values follow common soil test interpretation guides (Mehlich-3 /
//! ammonium-acetate extraction ranges for field crops) rounded to the precision
//! agronomists actually quote. They are reference data, not tuning knobs.

// ===== ELECTRICAL CONDUCTIVITY UNITS =====

/// Unit-detection threshold for electrical conductivity readings.
///
/// Field probes report EC either in µS/cm (typical soil readings are in the
/// hundreds to low thousands) or in dS/m (typical readings are below 4).
/// Any value above this threshold is assumed to be µS/cm and is converted
/// before scoring.
///
/// Known limitation: a legitimately saline soil measured in dS/m above this
/// threshold would be misread as µS/cm. Such soils are far outside the
/// product's target range, so the heuristic stands until a probe reports its
/// own units.
pub const EC_UNIT_DETECT_THRESHOLD: f32 = 10.0;

/// Microsiemens per centimeter in one decisiemens per meter.
pub const US_PER_DS: f32 = 1000.0;

// ===== NUTRIENT SIGMOID THRESHOLDS =====

/// Available nitrogen at which the suitability curve crosses 0.5 (mg/kg).
///
/// Medium soil-test nitrogen for field crops; below this, nitrogen limits
/// yield, above it returns diminish.
///
/// Source: extension-service soil test interpretation tables
pub const NITROGEN_HALF_SCORE_MG_KG: f32 = 25.0;

/// Available phosphorus at which the suitability curve crosses 0.5 (mg/kg).
///
/// Source: Mehlich-3 interpretation ranges for P
pub const PHOSPHORUS_HALF_SCORE_MG_KG: f32 = 15.0;

/// Available potassium at which the suitability curve crosses 0.5 (mg/kg).
///
/// Source: ammonium-acetate interpretation ranges for K
pub const POTASSIUM_HALF_SCORE_MG_KG: f32 = 80.0;

/// Slope of the more-is-better nutrient sigmoid.
///
/// Multiplied by 5 to form the curve exponent; 0.5 gives a gentle S-curve
/// that still saturates within one order of magnitude of the threshold.
pub const NUTRIENT_SIGMOID_SLOPE: f32 = 0.5;

// ===== SALINITY =====

/// Electrical conductivity at which the salinity score crosses 0.5 (dS/m).
///
/// 2 dS/m is the conventional boundary between non-saline and slightly
/// saline soil; sensitive crops already lose yield there.
///
/// Source: USDA salinity classes (saturated paste extract)
pub const EC_HALF_SCORE_DS_M: f32 = 2.0;

// ===== OPTIMUM RANGES (PEAK-SHAPED CURVES) =====

/// Lower bound of the optimum soil pH range.
///
/// Nutrient availability peaks between slightly acid and neutral; most
/// field crops do best here.
pub const PH_OPTIMUM_MIN: f32 = 6.0;

/// Upper bound of the optimum soil pH range.
pub const PH_OPTIMUM_MAX: f32 = 7.5;

/// Lower bound of the optimum volumetric soil moisture range (%).
pub const MOISTURE_OPTIMUM_MIN_PCT: f32 = 40.0;

/// Upper bound of the optimum volumetric soil moisture range (%).
pub const MOISTURE_OPTIMUM_MAX_PCT: f32 = 60.0;

/// Lower bound of the optimum soil temperature range (°C).
///
/// Root activity and microbial nutrient cycling slow sharply below this.
pub const SOIL_TEMP_OPTIMUM_MIN_C: f32 = 20.0;

/// Upper bound of the optimum soil temperature range (°C).
pub const SOIL_TEMP_OPTIMUM_MAX_C: f32 = 30.0;

// ===== AGGREGATION WEIGHTS =====
//
// The seven weights below must sum to exactly 1.0. The macronutrients and pH
// dominate because they are what a fertilizer recommendation can act on; EC,
// moisture, and temperature are context.

/// Index weight of the nitrogen score.
pub const WEIGHT_NITROGEN: f32 = 0.20;

/// Index weight of the phosphorus score.
pub const WEIGHT_PHOSPHORUS: f32 = 0.20;

/// Index weight of the potassium score.
pub const WEIGHT_POTASSIUM: f32 = 0.20;

/// Index weight of the pH score.
pub const WEIGHT_PH: f32 = 0.20;

/// Index weight of the salinity (EC) score.
pub const WEIGHT_EC: f32 = 0.10;

/// Index weight of the soil moisture score.
pub const WEIGHT_MOISTURE: f32 = 0.05;

/// Index weight of the soil temperature score.
pub const WEIGHT_SOIL_TEMP: f32 = 0.05;

// ===== HEALTH CATEGORY BREAKPOINTS =====

/// Overall index at or above which soil is rated Excellent.
pub const CATEGORY_EXCELLENT_MIN: u8 = 80;

/// Overall index at or above which soil is rated Good.
pub const CATEGORY_GOOD_MIN: u8 = 60;

/// Overall index at or above which soil is rated Poor; below is Very Poor.
pub const CATEGORY_POOR_MIN: u8 = 40;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let sum = WEIGHT_NITROGEN
            + WEIGHT_PHOSPHORUS
            + WEIGHT_POTASSIUM
            + WEIGHT_PH
            + WEIGHT_EC
            + WEIGHT_MOISTURE
            + WEIGHT_SOIL_TEMP;
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn optimum_ranges_are_ordered() {
        assert!(PH_OPTIMUM_MIN < PH_OPTIMUM_MAX);
        assert!(MOISTURE_OPTIMUM_MIN_PCT < MOISTURE_OPTIMUM_MAX_PCT);
        assert!(SOIL_TEMP_OPTIMUM_MIN_C < SOIL_TEMP_OPTIMUM_MAX_C);
    }
}
