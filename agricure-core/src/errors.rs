//! Error Types
//!
//! The scoring pipeline itself is total: curves clamp, guards cover the
//! degenerate arithmetic cases, and no function in `scoring`, `health`,
//! `thresholds`, or `progress` can fail. The only fallible surface is
//! turning a wire-format parameter name into the closed [`Parameter`] set,
//! which adapter code does once at the boundary.
//!
//! Errors are kept `Copy` and heap-free so the same code runs on field
//! gateways without an allocator.
//!
//! [`Parameter`]: crate::params::Parameter

use thiserror_no_std::Error;

/// Errors from parsing boundary input into the closed parameter set.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamError {
    /// Parameter name not in the supported sensor set
    #[error("unknown sensor parameter name")]
    UnknownParameter,
}

/// Result type for boundary parsing.
pub type ParamResult<T> = Result<T, ParamError>;
