//! Pricing strategy engine.
//!
//! Interchangeable algorithms that turn a base price into a sale price:
//!
//! - [`StandardPricing`]: fixed markup over the base price
//! - [`VolumePricing`]: tiered discounts by purchased quantity
//! - [`ExpiryDatePricing`]: progressive discounts as the expiry date approaches
//!
//! Callers hold a [`PricingContext`] and never need to know which strategy is
//! active. Strategies can also be built from configuration via [`StrategyConfig`].
//!
//! Strategies do not validate numeric input (negative base prices, markups
//! below -100%, unordered tiers or negative discount caps are computed as
//! given); callers validate upstream.

pub mod config;
pub mod context;
pub mod expiry;
pub mod standard;
pub mod strategy;
pub mod volume;

pub use config::{StrategyConfig, StrategyConfigError};
pub use context::PricingContext;
pub use expiry::ExpiryDatePricing;
pub use standard::StandardPricing;
pub use strategy::{PricingInput, PricingStrategy, StrategyInfo};
pub use volume::{PriceTier, VolumePricing};

#[cfg(test)]
pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
