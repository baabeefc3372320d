//! Localization Seam for Recommendation Text
//!
//! The aggregator selects a recommendation *key* per health category; the
//! translated sentence lives with the dashboard's i18n bundles, not here.
//! [`Localizer`] is the injection point: pass one to
//! [`crate::health::compute_health_localized`] to resolve keys at
//! computation time, or skip it and resolve keys downstream.
//!
//! Keys are `&'static str` on both sides so the seam works without an
//! allocator; translation tables on embedded gateways are static anyway.

/// Resolves a recommendation key to display text.
pub trait Localizer {
    /// Translate `key`, or return it unchanged when no translation exists.
    fn localize(&self, key: &'static str) -> &'static str;
}

/// Pass-through localizer: every key comes back verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocalizer;

impl Localizer for NoLocalizer {
    fn localize(&self, key: &'static str) -> &'static str {
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_localizer_returns_keys_verbatim() {
        assert_eq!(
            NoLocalizer.localize("recommendation.excellent"),
            "recommendation.excellent"
        );
    }
}
