use serde::{Deserialize, Serialize};

use pharmacy_core::time::days_until;

use crate::strategy::{PricingInput, PricingStrategy};

pub const DEFAULT_THRESHOLD_DAYS: u32 = 90;
pub const DEFAULT_MAX_DISCOUNT: f64 = 0.5;

/// Progressive discount for stock nearing its expiry date.
///
/// Within `threshold_days` of expiry the discount is
/// `min(1 − days_left / threshold_days, max_discount)`; outside the window, or
/// without an expiry date, the base price is returned. Already-expired stock
/// gets `max_discount`. A negative `max_discount` is applied as a surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpiryDatePricing {
    threshold_days: u32,
    max_discount: f64,
}

impl ExpiryDatePricing {
    pub fn new(threshold_days: u32, max_discount: f64) -> Self {
        Self {
            threshold_days,
            max_discount,
        }
    }

    pub fn threshold_days(&self) -> u32 {
        self.threshold_days
    }

    pub fn max_discount(&self) -> f64 {
        self.max_discount
    }
}

impl Default for ExpiryDatePricing {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD_DAYS, DEFAULT_MAX_DISCOUNT)
    }
}

impl PricingStrategy for ExpiryDatePricing {
    fn calculate_price(&self, base_price: f64, input: &PricingInput) -> f64 {
        let Some(expiry_date) = input.expiry_date else {
            return base_price;
        };

        let days_left = days_until(expiry_date, input.as_of);
        if days_left > i64::from(self.threshold_days) {
            return base_price;
        }

        let ratio = 1.0 - days_left as f64 / f64::from(self.threshold_days);
        let discount = ratio.min(self.max_discount);
        base_price * (1.0 - discount)
    }

    fn name(&self) -> &str {
        "Expiry Date Pricing"
    }

    fn description(&self) -> String {
        format!(
            "Progressive discounts for products expiring in less than {} days",
            self.threshold_days
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_close;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn today() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap()
    }

    fn expiring_in(days: i64) -> PricingInput {
        PricingInput::new()
            .as_of(today())
            .with_expiry_date(today() + Duration::days(days) + Duration::hours(1))
    }

    #[test]
    fn no_expiry_date_keeps_base_price() {
        let strategy = ExpiryDatePricing::default();
        assert_close(
            strategy.calculate_price(100.0, &PricingInput::new().as_of(today())),
            100.0,
        );
    }

    #[test]
    fn outside_threshold_keeps_base_price() {
        let strategy = ExpiryDatePricing::new(90, 0.5);
        assert_close(strategy.calculate_price(100.0, &expiring_in(91)), 100.0);
        assert_close(strategy.calculate_price(100.0, &expiring_in(365)), 100.0);
    }

    #[test]
    fn at_threshold_discount_is_zero() {
        let strategy = ExpiryDatePricing::new(90, 0.5);
        assert_close(strategy.calculate_price(100.0, &expiring_in(90)), 100.0);
    }

    #[test]
    fn discount_grows_as_expiry_approaches() {
        let strategy = ExpiryDatePricing::new(90, 0.5);
        // 1 - 60/90 = 1/3
        assert_close(
            strategy.calculate_price(90.0, &expiring_in(60)),
            90.0 * (1.0 - 1.0 / 3.0),
        );
        // 1 - 45/90 = 0.5, equal to the cap
        assert_close(strategy.calculate_price(100.0, &expiring_in(45)), 50.0);
    }

    #[test]
    fn expiring_today_is_capped_at_max_discount() {
        let strategy = ExpiryDatePricing::new(90, 0.5);
        assert_close(strategy.calculate_price(100.0, &expiring_in(0)), 50.0);
    }

    #[test]
    fn already_expired_is_capped_at_max_discount() {
        let strategy = ExpiryDatePricing::new(90, 0.5);
        let expired = PricingInput::new()
            .as_of(today())
            .with_expiry_date(today() - Duration::days(10));
        assert_close(strategy.calculate_price(100.0, &expired), 50.0);
    }

    #[test]
    fn partial_day_in_the_past_counts_as_a_full_day() {
        let strategy = ExpiryDatePricing::new(10, 1.0);
        let input = PricingInput::new()
            .as_of(today())
            .with_expiry_date(today() - Duration::hours(1));
        // days_left = -1 -> ratio 1.1, capped at 1.0
        assert_close(strategy.calculate_price(100.0, &input), 0.0);
    }

    #[test]
    fn zero_threshold_applies_max_discount_on_the_expiry_day() {
        // days_left / threshold_days is 0/0 here; the cap wins over NaN
        let strategy = ExpiryDatePricing::new(0, 0.5);
        let price = strategy.calculate_price(100.0, &expiring_in(0));
        assert!(!price.is_nan());
        assert_close(price, 50.0);
    }

    #[test]
    fn zero_threshold_discounts_expired_stock_and_nothing_else() {
        let strategy = ExpiryDatePricing::new(0, 0.5);
        let expired = PricingInput::new()
            .as_of(today())
            .with_expiry_date(today() - Duration::days(3));
        assert_close(strategy.calculate_price(100.0, &expired), 50.0);
        assert_close(strategy.calculate_price(100.0, &expiring_in(1)), 100.0);
    }

    #[test]
    fn negative_max_discount_becomes_a_surcharge() {
        let strategy = ExpiryDatePricing::new(90, -0.1);
        assert_close(strategy.calculate_price(100.0, &expiring_in(30)), 110.0);
    }

    #[test]
    fn description_mentions_threshold() {
        assert!(ExpiryDatePricing::new(30, 0.4).description().contains("30 days"));
    }
}
