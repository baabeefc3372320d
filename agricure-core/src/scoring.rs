//! Suitability Scoring Curves
//!
//! ## Overview
//!
//! Each soil parameter is mapped to a suitability score in [0, 1] by one of
//! three curve families, matching how the quantity affects crops:
//!
//! ### More-is-better (nitrogen, phosphorus, potassium)
//!
//! A logistic curve crossing 0.5 at the agronomic threshold:
//! ```text
//! score(x) = 1 / (1 + (x/t)^(-slope*5))
//!
//! Where:
//! - t = half-score threshold (mg/kg)
//! - slope = 0.5, giving exponent -2.5
//! ```
//! Non-positive readings score 0 outright; raising a non-positive base to a
//! fractional negative exponent is undefined, and zero nutrient is zero
//! suitability anyway.
//!
//! ### Less-is-better (salinity / electrical conductivity)
//!
//! A reciprocal cubic crossing 0.5 at the salinity threshold:
//! ```text
//! score(x) = 1 / (1 + (x/t)^3)
//! ```
//! Non-positive readings score 1: no measurable salts is the best case.
//!
//! ### Optimum-range (pH, soil moisture, soil temperature)
//!
//! A plateau at 1 inside the optimum band with linear fall-off outside:
//! ```text
//! score(x) = 1                               for min_opt <= x <= max_opt
//! score(x) = 1 - (min_opt - x)/(min_opt/2)   below, floored at 0
//! score(x) = 1 - (x - max_opt)/(max_opt/2)   above, floored at 0
//! ```
//! The fall-off denominator is half the boundary value itself, not a fixed
//! tolerance: parameters with larger optimum bounds decay more slowly per
//! unit of deviation. That scaling is intentional and calibrated against
//! field data; keep it.
//!
//! ## Totality
//!
//! Every curve is total over the reals and clamps to [0, 1]. There are no
//! error paths: a garbage reading produces a clamped boundary score, never a
//! panic or NaN (non-finite inputs collapse onto the nearest clamp bound).

use libm::powf;

use crate::constants::agronomy::NUTRIENT_SIGMOID_SLOPE;

/// Clamp a score to [0, 1].
///
/// Written with explicit comparisons so NaN falls out at 0 instead of
/// propagating.
#[inline]
pub(crate) fn clamp_unit(x: f32) -> f32 {
    if x >= 1.0 {
        1.0
    } else if x > 0.0 {
        x
    } else {
        0.0
    }
}

/// Sigmoid score for nutrients where more is better, 0.5 at `threshold`.
pub fn score_more_is_better(value: f32, threshold: f32) -> f32 {
    if value <= 0.0 {
        return 0.0;
    }
    let exponent = -NUTRIENT_SIGMOID_SLOPE * 5.0;
    clamp_unit(1.0 / (1.0 + powf(value / threshold, exponent)))
}

/// Reciprocal cubic score for quantities where less is better, 0.5 at `threshold`.
pub fn score_less_is_better(value: f32, threshold: f32) -> f32 {
    if value <= 0.0 {
        return 1.0;
    }
    clamp_unit(1.0 / (1.0 + powf(value / threshold, 3.0)))
}

/// Plateau score for quantities with an optimum band, 1.0 inside `[min_opt, max_opt]`.
pub fn score_optimum(value: f32, min_opt: f32, max_opt: f32) -> f32 {
    if value >= min_opt && value <= max_opt {
        1.0
    } else if value < min_opt {
        clamp_unit(1.0 - (min_opt - value) / (min_opt * 0.5))
    } else {
        // Above the band, or non-finite; the clamp absorbs NaN.
        clamp_unit(1.0 - (value - max_opt) / (max_opt * 0.5))
    }
}

/// Scale a unit score to the 0-100 integer range used for display.
pub fn to_display_score(score: f32) -> u8 {
    libm::roundf(clamp_unit(score) * 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn more_is_better_fixed_points() {
        // Zero or negative nutrient is zero suitability.
        assert_eq!(score_more_is_better(0.0, 25.0), 0.0);
        assert_eq!(score_more_is_better(-5.0, 25.0), 0.0);
        // The curve crosses exactly 0.5 at the threshold: (t/t)^-2.5 = 1.
        assert_eq!(score_more_is_better(25.0, 25.0), 0.5);
        assert_eq!(score_more_is_better(80.0, 80.0), 0.5);
    }

    #[test]
    fn more_is_better_is_monotonic() {
        let lo = score_more_is_better(10.0, 25.0);
        let mid = score_more_is_better(25.0, 25.0);
        let hi = score_more_is_better(100.0, 25.0);
        assert!(lo < mid && mid < hi);
        // Far above threshold the curve saturates towards 1.
        assert!(score_more_is_better(2500.0, 25.0) > 0.99);
    }

    #[test]
    fn less_is_better_fixed_points() {
        assert_eq!(score_less_is_better(0.0, 2.0), 1.0);
        assert_eq!(score_less_is_better(-0.3, 2.0), 1.0);
        assert_eq!(score_less_is_better(2.0, 2.0), 0.5);
        // Heavily saline soil scores close to 0.
        assert!(score_less_is_better(10.0, 2.0) < 0.01);
    }

    #[test]
    fn optimum_plateau_is_inclusive() {
        assert_eq!(score_optimum(6.5, 6.0, 7.5), 1.0);
        assert_eq!(score_optimum(6.0, 6.0, 7.5), 1.0);
        assert_eq!(score_optimum(7.5, 6.0, 7.5), 1.0);
        assert!(score_optimum(5.9, 6.0, 7.5) < 1.0);
        assert!(score_optimum(7.6, 6.0, 7.5) < 1.0);
    }

    #[test]
    fn optimum_falloff_scales_with_boundary() {
        // Below the band the score drops linearly, hitting 0 at min_opt/2
        // below... i.e. at min_opt - min_opt/2.
        assert_relative_eq!(score_optimum(4.5, 6.0, 7.5), 0.5);
        assert_eq!(score_optimum(3.0, 6.0, 7.5), 0.0);
        // Above the band it hits 0 at max_opt + max_opt/2.
        assert_relative_eq!(score_optimum(30.0 + 7.5, 20.0, 30.0), 0.5);
        assert_eq!(score_optimum(45.0, 20.0, 30.0), 0.0);
    }

    #[test]
    fn display_score_rounds() {
        assert_eq!(to_display_score(0.0), 0);
        assert_eq!(to_display_score(0.5), 50);
        assert_eq!(to_display_score(0.876), 88);
        assert_eq!(to_display_score(1.0), 100);
        // Out-of-range scores clamp before scaling.
        assert_eq!(to_display_score(1.7), 100);
        assert_eq!(to_display_score(-0.2), 0);
    }

    proptest! {
        #[test]
        fn sigmoid_scores_stay_in_unit_range(x in -1e7f32..1e7) {
            let s = score_more_is_better(x, 25.0);
            prop_assert!((0.0..=1.0).contains(&s));
            let s = score_less_is_better(x, 2.0);
            prop_assert!((0.0..=1.0).contains(&s));
        }

        #[test]
        fn optimum_scores_stay_in_unit_range(x in -1e7f32..1e7) {
            let s = score_optimum(x, 40.0, 60.0);
            prop_assert!((0.0..=1.0).contains(&s));
            prop_assert!(s.is_finite());
        }
    }
}
