//! Soil analysis engine for AgriCure
//!
//! Turns raw soil probe snapshots into the three read-outs the farmer
//! dashboard shows: a weighted 0-100 health index with a qualitative
//! category, per-sensor status badges, and per-sensor progress percentages.
//! All computation is pure and synchronous; data acquisition, persistence,
//! and the ML fertilizer service are upstream and downstream collaborators.
//!
//! Designed to run unchanged on field gateways: `no_std` capable, no
//! allocation, no panics - every function is total over its inputs.
//!
//! ```
//! use agricure_core::{compute_health, classify_snapshot, SoilHealthInput};
//!
//! let snapshot = SoilHealthInput {
//!     nitrogen: 150.0,
//!     phosphorus: 30.0,
//!     potassium: 200.0,
//!     ph: 6.8,
//!     electrical_conductivity: 800.0, // µS/cm, auto-detected
//!     soil_moisture: 48.0,
//!     soil_temperature: 24.0,
//! };
//!
//! let health = compute_health(&snapshot);
//! let badges = classify_snapshot(&snapshot);
//! assert!(health.overall_score <= 100);
//! # let _ = badges;
//! ```
//!
//! The same physical quantity is judged against three independent range
//! systems (scoring curves, status bands, progress gauges) because they
//! serve three different consumers; see the module docs before assuming
//! that is redundancy.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod errors;
pub mod health;
pub mod i18n;
pub mod params;
pub mod progress;
pub mod scoring;
pub mod thresholds;
pub mod units;

// Public API
pub use errors::{ParamError, ParamResult};
pub use health::{
    compute_health, compute_health_localized, HealthCategory, ParameterScores, SoilHealthResult,
};
pub use i18n::{Localizer, NoLocalizer};
pub use params::{Parameter, SoilHealthInput};
pub use progress::progress;
pub use scoring::{score_less_is_better, score_more_is_better, score_optimum};
pub use thresholds::{classify_reading, classify_snapshot, SoilStatuses, Status};
pub use units::normalize_ec;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
