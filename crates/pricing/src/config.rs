//! Strategy selection from configuration.
//!
//! ```json
//! { "kind": "standard", "markup": 0.3 }
//! { "kind": "volume", "tiers": [{ "threshold": 10, "discount": 0.05 }] }
//! { "kind": "expiry_date", "threshold_days": 90, "max_discount": 0.5 }
//! ```
//!
//! Omitted parameters take the strategy defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::expiry::{DEFAULT_MAX_DISCOUNT, DEFAULT_THRESHOLD_DAYS, ExpiryDatePricing};
use crate::standard::{DEFAULT_MARKUP, StandardPricing};
use crate::strategy::PricingStrategy;
use crate::volume::{DEFAULT_TIERS, PriceTier, VolumePricing};

#[derive(Debug, Error)]
#[error("invalid pricing strategy config: {0}")]
pub struct StrategyConfigError(#[from] serde_json::Error);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyConfig {
    Standard {
        #[serde(default = "default_markup")]
        markup: f64,
    },
    Volume {
        #[serde(default = "default_tiers")]
        tiers: Vec<PriceTier>,
    },
    ExpiryDate {
        #[serde(default = "default_threshold_days")]
        threshold_days: u32,
        #[serde(default = "default_max_discount")]
        max_discount: f64,
    },
}

fn default_markup() -> f64 {
    DEFAULT_MARKUP
}

fn default_tiers() -> Vec<PriceTier> {
    DEFAULT_TIERS.to_vec()
}

fn default_threshold_days() -> u32 {
    DEFAULT_THRESHOLD_DAYS
}

fn default_max_discount() -> f64 {
    DEFAULT_MAX_DISCOUNT
}

impl StrategyConfig {
    pub fn from_json(raw: &str) -> Result<Self, StrategyConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn into_strategy(self) -> Box<dyn PricingStrategy> {
        match self {
            StrategyConfig::Standard { markup } => Box::new(StandardPricing::new(markup)),
            StrategyConfig::Volume { tiers } => Box::new(VolumePricing::new(tiers)),
            StrategyConfig::ExpiryDate {
                threshold_days,
                max_discount,
            } => Box::new(ExpiryDatePricing::new(threshold_days, max_discount)),
        }
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        StrategyConfig::Standard {
            markup: DEFAULT_MARKUP,
        }
    }
}
