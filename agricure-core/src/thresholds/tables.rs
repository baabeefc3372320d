//! Per-Parameter Status Band Tables
//!
//! Hand-authored agronomic reference bands, one table per sensor channel.
//! All bounds are inclusive; see [`super`] for evaluation order and the
//! enclosing/split warning-band structure. These are domain reference
//! values taken from soil test interpretation guides and greenhouse climate
//! setpoints, not tunables.

use super::{Band, ThresholdTable};

/// Nitrogen status bands (mg/kg).
///
/// Enclosing warning: 60-300 around an optimal 120-250. Below 60 crops are
/// visibly nitrogen-starved; above 300 risks lodging and leaching.
pub const NITROGEN_THRESHOLDS: ThresholdTable = ThresholdTable {
    optimal: Band { min: 120.0, max: 250.0 },
    warning: &[Band { min: 60.0, max: 300.0 }],
};

/// Phosphorus status bands (mg/kg).
///
/// Split warnings: 15-25 low, 50-70 high around an optimal 25-50.
pub const PHOSPHORUS_THRESHOLDS: ThresholdTable = ThresholdTable {
    optimal: Band { min: 25.0, max: 50.0 },
    warning: &[
        Band { min: 15.0, max: 25.0 },
        Band { min: 50.0, max: 70.0 },
    ],
};

/// Potassium status bands (mg/kg).
///
/// Enclosing warning: 80-350 around an optimal 150-300.
pub const POTASSIUM_THRESHOLDS: ThresholdTable = ThresholdTable {
    optimal: Band { min: 150.0, max: 300.0 },
    warning: &[Band { min: 80.0, max: 350.0 }],
};

/// Soil pH status bands (unitless).
///
/// Split warnings: 5.5-6.0 acid side, 7.5-8.0 alkaline side around the
/// 6.0-7.5 optimum most field crops want.
pub const PH_THRESHOLDS: ThresholdTable = ThresholdTable {
    optimal: Band { min: 6.0, max: 7.5 },
    warning: &[
        Band { min: 5.5, max: 6.0 },
        Band { min: 7.5, max: 8.0 },
    ],
};

/// Electrical conductivity status bands (µS/cm, raw probe reading).
///
/// Enclosing warning: 100-3000 around an optimal 200-1200. The classifier
/// deliberately uses the unconverted reading; the dS/m normalization in
/// [`crate::units`] applies to curve scoring only.
pub const EC_THRESHOLDS: ThresholdTable = ThresholdTable {
    optimal: Band { min: 200.0, max: 1200.0 },
    warning: &[Band { min: 100.0, max: 3000.0 }],
};

/// Volumetric soil moisture status bands (%).
///
/// Split warnings: 25-40 dry side, 60-75 wet side around an optimal 40-60.
pub const SOIL_MOISTURE_THRESHOLDS: ThresholdTable = ThresholdTable {
    optimal: Band { min: 40.0, max: 60.0 },
    warning: &[
        Band { min: 25.0, max: 40.0 },
        Band { min: 60.0, max: 75.0 },
    ],
};

/// Soil temperature status bands (°C).
///
/// Split warnings: 10-18 cold side, 30-35 hot side around an optimal 18-30.
pub const SOIL_TEMPERATURE_THRESHOLDS: ThresholdTable = ThresholdTable {
    optimal: Band { min: 18.0, max: 30.0 },
    warning: &[
        Band { min: 10.0, max: 18.0 },
        Band { min: 30.0, max: 35.0 },
    ],
};

/// Ambient air temperature status bands (°C).
///
/// Split warnings: 10-18 cold side, 32-40 hot side around an optimal 18-32.
pub const AMBIENT_TEMPERATURE_THRESHOLDS: ThresholdTable = ThresholdTable {
    optimal: Band { min: 18.0, max: 32.0 },
    warning: &[
        Band { min: 10.0, max: 18.0 },
        Band { min: 32.0, max: 40.0 },
    ],
};

/// Relative humidity status bands (%).
///
/// Split warnings: 25-40 dry side, 70-85 humid side around an optimal 40-70.
pub const HUMIDITY_THRESHOLDS: ThresholdTable = ThresholdTable {
    optimal: Band { min: 40.0, max: 70.0 },
    warning: &[
        Band { min: 25.0, max: 40.0 },
        Band { min: 70.0, max: 85.0 },
    ],
};

/// Sunlight intensity status bands (lux).
///
/// Enclosing warning: 15000-85000 around an optimal 30000-70000. Full
/// midday sun is ~100000 lux; heavy overcast is ~1000.
pub const SUNLIGHT_THRESHOLDS: ThresholdTable = ThresholdTable {
    optimal: Band { min: 30_000.0, max: 70_000.0 },
    warning: &[Band { min: 15_000.0, max: 85_000.0 }],
};

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TABLES: [&ThresholdTable; 10] = [
        &NITROGEN_THRESHOLDS,
        &PHOSPHORUS_THRESHOLDS,
        &POTASSIUM_THRESHOLDS,
        &PH_THRESHOLDS,
        &EC_THRESHOLDS,
        &SOIL_MOISTURE_THRESHOLDS,
        &SOIL_TEMPERATURE_THRESHOLDS,
        &AMBIENT_TEMPERATURE_THRESHOLDS,
        &HUMIDITY_THRESHOLDS,
        &SUNLIGHT_THRESHOLDS,
    ];

    #[test]
    fn bands_are_ordered() {
        for table in ALL_TABLES {
            assert!(table.optimal.min < table.optimal.max);
            for band in table.warning {
                assert!(band.min < band.max);
            }
        }
    }

    #[test]
    fn warning_bands_touch_the_optimal_band() {
        // Every table must leave no classification gap between warning and
        // optimal zones: each warning band either encloses the optimal band
        // or shares a boundary with it.
        for table in ALL_TABLES {
            let opt = table.optimal;
            match table.warning {
                [enclosing] => {
                    assert!(enclosing.min <= opt.min && enclosing.max >= opt.max);
                }
                [low, high] => {
                    assert_eq!(low.max, opt.min);
                    assert_eq!(high.min, opt.max);
                }
                other => panic!("unexpected warning band count: {}", other.len()),
            }
        }
    }
}
