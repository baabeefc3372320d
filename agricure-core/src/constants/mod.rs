//! Constants for the AgriCure Soil Analysis Core
//!
//! This module centralizes the numeric reference values used throughout the
//! scoring pipeline. All of them are agronomic domain constants, not tunables:
//! they come from extension-service soil test interpretation guides and from
//! the product's calibration against field trials. Changing one of these
//! changes what "healthy soil" means to every dashboard in the fleet.
//!
//! ## Organization
//!
//! - **Agronomy**: scoring thresholds, optimum ranges, and aggregation weights
//!
//! The classifier band tables live next to the classifier itself in
//! [`crate::thresholds::tables`] because they are consumed nowhere else.
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. When adding new constants, document units and provenance
//! 3. Use descriptive names that include units where ambiguity is possible

/// Agronomic scoring thresholds, optimum ranges, and index weights.
pub mod agronomy;

pub use agronomy::{
    EC_UNIT_DETECT_THRESHOLD, US_PER_DS,
    NITROGEN_HALF_SCORE_MG_KG, PHOSPHORUS_HALF_SCORE_MG_KG, POTASSIUM_HALF_SCORE_MG_KG,
    EC_HALF_SCORE_DS_M,
    PH_OPTIMUM_MIN, PH_OPTIMUM_MAX,
    MOISTURE_OPTIMUM_MIN_PCT, MOISTURE_OPTIMUM_MAX_PCT,
    SOIL_TEMP_OPTIMUM_MIN_C, SOIL_TEMP_OPTIMUM_MAX_C,
};
