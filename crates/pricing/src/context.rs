use crate::standard::StandardPricing;
use crate::strategy::{PricingInput, PricingStrategy, StrategyInfo};

/// Holds the active pricing strategy and delegates price calculations to it.
#[derive(Debug)]
pub struct PricingContext {
    strategy: Box<dyn PricingStrategy>,
}

impl PricingContext {
    pub fn new(strategy: Box<dyn PricingStrategy>) -> Self {
        Self { strategy }
    }

    /// Replace the active strategy. Nothing else changes.
    pub fn set_strategy(&mut self, strategy: Box<dyn PricingStrategy>) {
        tracing::debug!(
            from = self.strategy.name(),
            to = strategy.name(),
            "pricing strategy changed"
        );
        self.strategy = strategy;
    }

    pub fn strategy(&self) -> &dyn PricingStrategy {
        self.strategy.as_ref()
    }

    pub fn calculate_price(&self, base_price: f64, input: &PricingInput) -> f64 {
        self.strategy.calculate_price(base_price, input)
    }

    pub fn strategy_info(&self) -> StrategyInfo {
        self.strategy.info()
    }
}

impl Default for PricingContext {
    fn default() -> Self {
        Self::new(Box::new(StandardPricing::default()))
    }
}
