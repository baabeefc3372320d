//! Soil Health Index Aggregation
//!
//! ## Overview
//!
//! Combines the seven curve scores of a probe snapshot into one 0-100 index
//! with a qualitative category and a recommendation key. This is the number
//! the dashboard headlines; the per-parameter status badges come from the
//! independent [`crate::thresholds`] tables.
//!
//! ## Algorithm
//!
//! ```text
//! for each weighted parameter:
//!     score  = curve(value)          // EC scored on the normalized dS/m value
//!     sum   += score * weight
//!     used  += weight
//! index = round(sum / used * 100)    // 0 when no weights were used
//! ```
//!
//! A non-finite field is a missing reading: its weight is left out of `used`
//! and its display score is 0, so one dead probe channel degrades the index
//! instead of poisoning it. With every channel missing the guard yields 0.
//!
//! ## Categories
//!
//! Fixed breakpoints on the rounded index: >=80 Excellent, >=60 Good,
//! >=40 Poor, below that Very Poor. Each category owns one recommendation
//! key; translation is the dashboard's concern (see [`crate::i18n`]).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::agronomy::{
    CATEGORY_EXCELLENT_MIN, CATEGORY_GOOD_MIN, CATEGORY_POOR_MIN, EC_HALF_SCORE_DS_M,
    MOISTURE_OPTIMUM_MAX_PCT, MOISTURE_OPTIMUM_MIN_PCT, NITROGEN_HALF_SCORE_MG_KG,
    PHOSPHORUS_HALF_SCORE_MG_KG, PH_OPTIMUM_MAX, PH_OPTIMUM_MIN, POTASSIUM_HALF_SCORE_MG_KG,
    SOIL_TEMP_OPTIMUM_MAX_C, SOIL_TEMP_OPTIMUM_MIN_C, WEIGHT_EC, WEIGHT_MOISTURE,
    WEIGHT_NITROGEN, WEIGHT_PH, WEIGHT_PHOSPHORUS, WEIGHT_POTASSIUM, WEIGHT_SOIL_TEMP,
};
use crate::i18n::Localizer;
use crate::params::SoilHealthInput;
use crate::scoring::{
    score_less_is_better, score_more_is_better, score_optimum, to_display_score,
};
use crate::units::normalize_ec;

/// Qualitative rating of the overall soil health index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HealthCategory {
    /// Index 80-100
    Excellent,
    /// Index 60-79
    Good,
    /// Index 40-59
    Poor,
    /// Index 0-39
    VeryPoor,
}

impl HealthCategory {
    /// Category for a rounded 0-100 index.
    pub fn from_score(score: u8) -> Self {
        if score >= CATEGORY_EXCELLENT_MIN {
            HealthCategory::Excellent
        } else if score >= CATEGORY_GOOD_MIN {
            HealthCategory::Good
        } else if score >= CATEGORY_POOR_MIN {
            HealthCategory::Poor
        } else {
            HealthCategory::VeryPoor
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            HealthCategory::Excellent => "Excellent",
            HealthCategory::Good => "Good",
            HealthCategory::Poor => "Poor",
            HealthCategory::VeryPoor => "Very Poor",
        }
    }

    /// Presentation tag for the dashboard's index gauge.
    pub fn color_tag(&self) -> &'static str {
        match self {
            HealthCategory::Excellent => "green",
            HealthCategory::Good => "lime",
            HealthCategory::Poor => "orange",
            HealthCategory::VeryPoor => "red",
        }
    }

    /// i18n key of the advisory sentence for this category.
    pub fn recommendation_key(&self) -> &'static str {
        match self {
            HealthCategory::Excellent => "recommendation.excellent",
            HealthCategory::Good => "recommendation.good",
            HealthCategory::Poor => "recommendation.poor",
            HealthCategory::VeryPoor => "recommendation.veryPoor",
        }
    }
}

/// Per-parameter display scores (0-100 integers).
///
/// EC is scored on the unit-normalized dS/m value; everything else on the
/// raw reading. A missing (non-finite) reading shows as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ParameterScores {
    /// Nitrogen suitability (0-100)
    pub nitrogen: u8,
    /// Phosphorus suitability (0-100)
    pub phosphorus: u8,
    /// Potassium suitability (0-100)
    pub potassium: u8,
    /// pH suitability (0-100)
    pub ph: u8,
    /// Salinity suitability from normalized EC (0-100)
    pub electrical_conductivity: u8,
    /// Soil moisture suitability (0-100)
    pub soil_moisture: u8,
    /// Soil temperature suitability (0-100)
    pub soil_temperature: u8,
}

/// Result of one health index computation. Derived, never stored; recompute
/// on every input change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SoilHealthResult {
    /// Weighted overall index, 0-100
    pub overall_score: u8,
    /// Qualitative rating of the index
    pub category: HealthCategory,
    /// Individual curve scores scaled to 0-100
    pub scores: ParameterScores,
    /// Advisory text for the category: the i18n key, or its translation when
    /// a localizer was supplied
    pub recommendation: &'static str,
}

/// One weighted term of the index.
struct WeightedScore {
    value: f32,
    score: f32,
    weight: f32,
}

/// Compute the soil health index for one probe snapshot.
///
/// The recommendation field carries the raw i18n key; use
/// [`compute_health_localized`] to resolve it in the same call. Total: any
/// snapshot, including all-NaN, produces a valid result.
pub fn compute_health(input: &SoilHealthInput) -> SoilHealthResult {
    compute_health_localized(input, &crate::i18n::NoLocalizer)
}

/// Compute the soil health index and localize the recommendation.
pub fn compute_health_localized(
    input: &SoilHealthInput,
    localizer: &impl Localizer,
) -> SoilHealthResult {
    let ec_normalized = normalize_ec(input.electrical_conductivity);

    let terms = [
        WeightedScore {
            value: input.nitrogen,
            score: score_more_is_better(input.nitrogen, NITROGEN_HALF_SCORE_MG_KG),
            weight: WEIGHT_NITROGEN,
        },
        WeightedScore {
            value: input.phosphorus,
            score: score_more_is_better(input.phosphorus, PHOSPHORUS_HALF_SCORE_MG_KG),
            weight: WEIGHT_PHOSPHORUS,
        },
        WeightedScore {
            value: input.potassium,
            score: score_more_is_better(input.potassium, POTASSIUM_HALF_SCORE_MG_KG),
            weight: WEIGHT_POTASSIUM,
        },
        WeightedScore {
            value: input.ph,
            score: score_optimum(input.ph, PH_OPTIMUM_MIN, PH_OPTIMUM_MAX),
            weight: WEIGHT_PH,
        },
        WeightedScore {
            value: ec_normalized,
            score: score_less_is_better(ec_normalized, EC_HALF_SCORE_DS_M),
            weight: WEIGHT_EC,
        },
        WeightedScore {
            value: input.soil_moisture,
            score: score_optimum(
                input.soil_moisture,
                MOISTURE_OPTIMUM_MIN_PCT,
                MOISTURE_OPTIMUM_MAX_PCT,
            ),
            weight: WEIGHT_MOISTURE,
        },
        WeightedScore {
            value: input.soil_temperature,
            score: score_optimum(
                input.soil_temperature,
                SOIL_TEMP_OPTIMUM_MIN_C,
                SOIL_TEMP_OPTIMUM_MAX_C,
            ),
            weight: WEIGHT_SOIL_TEMP,
        },
    ];

    let mut weighted_sum = 0.0f32;
    let mut weight_used = 0.0f32;
    let mut display = [0u8; 7];
    for (i, term) in terms.iter().enumerate() {
        if term.value.is_finite() {
            weighted_sum += term.score * term.weight;
            weight_used += term.weight;
            display[i] = to_display_score(term.score);
        }
        // Missing reading: weight omitted, display score stays 0.
    }

    let overall_score = if weight_used > 0.0 {
        libm::roundf(weighted_sum / weight_used * 100.0) as u8
    } else {
        0
    };
    let category = HealthCategory::from_score(overall_score);

    SoilHealthResult {
        overall_score,
        category,
        scores: ParameterScores {
            nitrogen: display[0],
            phosphorus: display[1],
            potassium: display[2],
            ph: display[3],
            electrical_conductivity: display[4],
            soil_moisture: display[5],
            soil_temperature: display[6],
        },
        recommendation: localizer.localize(category.recommendation_key()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Localizer;

    fn healthy_input() -> SoilHealthInput {
        SoilHealthInput {
            nitrogen: 190.0,
            phosphorus: 40.0,
            potassium: 220.0,
            ph: 6.8,
            electrical_conductivity: 0.5,
            soil_moisture: 50.0,
            soil_temperature: 25.0,
        }
    }

    #[test]
    fn category_breakpoints() {
        assert_eq!(HealthCategory::from_score(100), HealthCategory::Excellent);
        assert_eq!(HealthCategory::from_score(80), HealthCategory::Excellent);
        assert_eq!(HealthCategory::from_score(79), HealthCategory::Good);
        assert_eq!(HealthCategory::from_score(60), HealthCategory::Good);
        assert_eq!(HealthCategory::from_score(59), HealthCategory::Poor);
        assert_eq!(HealthCategory::from_score(40), HealthCategory::Poor);
        assert_eq!(HealthCategory::from_score(39), HealthCategory::VeryPoor);
        assert_eq!(HealthCategory::from_score(0), HealthCategory::VeryPoor);
    }

    #[test]
    fn healthy_snapshot_rates_excellent() {
        let result = compute_health(&healthy_input());
        assert!(result.overall_score >= 80, "got {}", result.overall_score);
        assert_eq!(result.category, HealthCategory::Excellent);
        assert_eq!(result.scores.ph, 100);
        assert_eq!(result.scores.soil_moisture, 100);
        assert_eq!(result.scores.soil_temperature, 100);
        assert_eq!(result.recommendation, "recommendation.excellent");
    }

    #[test]
    fn computation_is_deterministic() {
        let input = healthy_input();
        let a = compute_health(&input);
        let b = compute_health(&input);
        assert_eq!(a, b);
    }

    #[test]
    fn depleted_soil_rates_very_poor() {
        let result = compute_health(&SoilHealthInput {
            nitrogen: 2.0,
            phosphorus: 1.0,
            potassium: 5.0,
            ph: 4.0,
            electrical_conductivity: 9.0, // dS/m, heavily saline
            soil_moisture: 5.0,
            soil_temperature: 45.0,
        });
        assert!(result.overall_score < 40, "got {}", result.overall_score);
        assert_eq!(result.category, HealthCategory::VeryPoor);
        assert_eq!(result.recommendation, "recommendation.veryPoor");
    }

    #[test]
    fn missing_reading_reweights_the_index() {
        let mut input = healthy_input();
        input.nitrogen = f32::NAN;
        let result = compute_health(&input);
        // The dead channel shows 0 but does not drag the index down.
        assert_eq!(result.scores.nitrogen, 0);
        assert!(result.overall_score >= 80, "got {}", result.overall_score);
    }

    #[test]
    fn all_readings_missing_scores_zero() {
        let nan = f32::NAN;
        let result = compute_health(&SoilHealthInput {
            nitrogen: nan,
            phosphorus: nan,
            potassium: nan,
            ph: nan,
            electrical_conductivity: nan,
            soil_moisture: nan,
            soil_temperature: nan,
        });
        assert_eq!(result.overall_score, 0);
        assert_eq!(result.category, HealthCategory::VeryPoor);
    }

    #[test]
    fn ec_is_normalized_before_scoring() {
        let mut in_us_cm = healthy_input();
        in_us_cm.electrical_conductivity = 1200.0; // µS/cm
        let mut in_ds_m = healthy_input();
        in_ds_m.electrical_conductivity = 1.2; // same conductivity in dS/m

        let a = compute_health(&in_us_cm);
        let b = compute_health(&in_ds_m);
        assert_eq!(a.scores.electrical_conductivity, b.scores.electrical_conductivity);
        assert_eq!(a.overall_score, b.overall_score);

        // A naive unconverted computation would score 1200 "dS/m" as
        // hopelessly saline; the normalized term must not.
        assert!(a.scores.electrical_conductivity > 50);
    }

    struct UpperCaseKeys;
    impl Localizer for UpperCaseKeys {
        fn localize(&self, key: &'static str) -> &'static str {
            match key {
                "recommendation.excellent" => "EXCELLENT SOIL",
                _ => key,
            }
        }
    }

    #[test]
    fn localizer_resolves_recommendation() {
        let result = compute_health_localized(&healthy_input(), &UpperCaseKeys);
        assert_eq!(result.recommendation, "EXCELLENT SOIL");
    }
}
