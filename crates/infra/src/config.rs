//! Environment configuration for the catalog.
//!
//! | variable                     | default                 |
//! |------------------------------|-------------------------|
//! | `PHARMACY_PRICING_STRATEGY`  | standard pricing, 30%   |
//! | `PHARMACY_EXPIRY_ALERT_DAYS` | `30`                    |
//! | `PHARMACY_LOG`               | `info`                  |
//!
//! Unset and empty variables both take the default.

use thiserror::Error;

use pharmacy_pricing::{StrategyConfig, StrategyConfigError};

pub const PRICING_STRATEGY_VAR: &str = "PHARMACY_PRICING_STRATEGY";
pub const EXPIRY_ALERT_DAYS_VAR: &str = "PHARMACY_EXPIRY_ALERT_DAYS";
pub const LOG_FILTER_VAR: &str = "PHARMACY_LOG";

pub const DEFAULT_EXPIRY_ALERT_DAYS: i64 = 30;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PHARMACY_PRICING_STRATEGY: {0}")]
    Strategy(#[from] StrategyConfigError),

    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidDays { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub pricing: StrategyConfig,
    pub expiry_alert_days: i64,
    pub log_filter: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            pricing: StrategyConfig::default(),
            expiry_alert_days: DEFAULT_EXPIRY_ALERT_DAYS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let pricing = match read(PRICING_STRATEGY_VAR) {
            Some(raw) => StrategyConfig::from_json(&raw)?,
            None => defaults.pricing,
        };

        let expiry_alert_days = match read(EXPIRY_ALERT_DAYS_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|days| *days >= 0)
                .ok_or(ConfigError::InvalidDays {
                    var: EXPIRY_ALERT_DAYS_VAR,
                    value: raw,
                })?,
            None => defaults.expiry_alert_days,
        };

        let log_filter = read(LOG_FILTER_VAR).unwrap_or(defaults.log_filter);

        Ok(Self {
            pricing,
            expiry_alert_days,
            log_filter,
        })
    }
}
