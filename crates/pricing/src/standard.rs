use serde::{Deserialize, Serialize};

use crate::strategy::{PricingInput, PricingStrategy};

pub const DEFAULT_MARKUP: f64 = 0.30;

/// Fixed markup over the base price: `base × (1 + markup)`.
///
/// The markup is not bounded; a value below `-1.0` yields negative prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StandardPricing {
    markup: f64,
}

impl StandardPricing {
    pub fn new(markup: f64) -> Self {
        Self { markup }
    }

    pub fn markup(&self) -> f64 {
        self.markup
    }
}

impl Default for StandardPricing {
    fn default() -> Self {
        Self::new(DEFAULT_MARKUP)
    }
}

impl PricingStrategy for StandardPricing {
    fn calculate_price(&self, base_price: f64, _input: &PricingInput) -> f64 {
        base_price * (1.0 + self.markup)
    }

    fn name(&self) -> &str {
        "Standard Pricing"
    }

    fn description(&self) -> String {
        format!("Fixed {}% markup over cost", self.markup * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_close;

    #[test]
    fn applies_markup() {
        let strategy = StandardPricing::new(0.3);
        assert_close(strategy.calculate_price(100.0, &PricingInput::new()), 130.0);
    }

    #[test]
    fn default_markup_is_thirty_percent() {
        assert_eq!(StandardPricing::default().markup(), 0.30);
    }

    #[test]
    fn ignores_context() {
        let strategy = StandardPricing::new(0.5);
        let bulk = PricingInput::new().with_quantity(500);
        assert_close(strategy.calculate_price(10.0, &bulk), 15.0);
    }

    #[test]
    fn markup_below_minus_one_is_not_guarded() {
        let strategy = StandardPricing::new(-1.5);
        assert_close(strategy.calculate_price(100.0, &PricingInput::new()), -50.0);
    }

    #[test]
    fn description_mentions_percentage() {
        assert_eq!(
            StandardPricing::new(0.25).description(),
            "Fixed 25% markup over cost"
        );
    }
}
