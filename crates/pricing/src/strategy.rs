use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pharmacy_core::ValueObject;
use pharmacy_products::Product;

/// Product context a strategy prices against.
///
/// `as_of` is the instant treated as "today" by date-sensitive strategies.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingInput {
    pub quantity: u32,
    pub expiry_date: Option<DateTime<Utc>>,
    pub as_of: DateTime<Utc>,
}

impl PricingInput {
    /// Single unit, no expiry date, priced as of now.
    pub fn new() -> Self {
        Self {
            quantity: 1,
            expiry_date: None,
            as_of: Utc::now(),
        }
    }

    /// Context for selling `quantity` units of `product`.
    pub fn for_product(product: &Product, quantity: u32) -> Self {
        Self {
            quantity,
            expiry_date: product.expiry_date(),
            as_of: Utc::now(),
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_expiry_date(mut self, expiry_date: DateTime<Utc>) -> Self {
        self.expiry_date = Some(expiry_date);
        self
    }

    pub fn as_of(mut self, as_of: DateTime<Utc>) -> Self {
        self.as_of = as_of;
        self
    }

    /// Quantity used for tier lookups; zero counts as a single unit.
    pub fn effective_quantity(&self) -> u32 {
        self.quantity.max(1)
    }
}

impl Default for PricingInput {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueObject for PricingInput {}

/// Display metadata for the active strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyInfo {
    pub name: String,
    pub description: String,
}

/// A pricing algorithm.
pub trait PricingStrategy: core::fmt::Debug + Send + Sync {
    /// Sale price for `base_price` under this strategy.
    fn calculate_price(&self, base_price: f64, input: &PricingInput) -> f64;

    fn name(&self) -> &str;

    fn description(&self) -> String;

    fn info(&self) -> StrategyInfo {
        StrategyInfo {
            name: self.name().to_string(),
            description: self.description(),
        }
    }
}

impl<S> PricingStrategy for Box<S>
where
    S: PricingStrategy + ?Sized,
{
    fn calculate_price(&self, base_price: f64, input: &PricingInput) -> f64 {
        (**self).calculate_price(base_price, input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}
