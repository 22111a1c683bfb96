use serde::{Deserialize, Serialize};

use pharmacy_core::ValueObject;

use crate::strategy::{PricingInput, PricingStrategy};

/// Discount granted once the purchased quantity reaches `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    pub threshold: u32,
    pub discount: f64,
}

impl PriceTier {
    pub const fn new(threshold: u32, discount: f64) -> Self {
        Self {
            threshold,
            discount,
        }
    }
}

impl ValueObject for PriceTier {}

/// 10+ units: 5%, 50+: 10%, 100+: 15%.
pub const DEFAULT_TIERS: [PriceTier; 3] = [
    PriceTier::new(10, 0.05),
    PriceTier::new(50, 0.10),
    PriceTier::new(100, 0.15),
];

/// Tiered quantity discounts: `base × (1 − discount)`.
///
/// Tiers are scanned in the order given and must be sorted by ascending
/// threshold; the scan stops at the first tier above the quantity, so an
/// unsorted list can hide later tiers. Order is not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumePricing {
    tiers: Vec<PriceTier>,
}

impl VolumePricing {
    pub fn new(tiers: Vec<PriceTier>) -> Self {
        Self { tiers }
    }

    pub fn tiers(&self) -> &[PriceTier] {
        &self.tiers
    }

    /// Discount for `quantity`: that of the last tier reached before the scan
    /// meets a threshold above it, or zero.
    pub fn discount_for(&self, quantity: u32) -> f64 {
        let mut applicable = 0.0;
        for tier in &self.tiers {
            if quantity < tier.threshold {
                break;
            }
            applicable = tier.discount;
        }
        applicable
    }
}

impl Default for VolumePricing {
    fn default() -> Self {
        Self::new(DEFAULT_TIERS.to_vec())
    }
}

impl PricingStrategy for VolumePricing {
    fn calculate_price(&self, base_price: f64, input: &PricingInput) -> f64 {
        base_price * (1.0 - self.discount_for(input.effective_quantity()))
    }

    fn name(&self) -> &str {
        "Volume Pricing"
    }

    fn description(&self) -> String {
        "Tiered discounts based on the purchased quantity".to_string()
    }
}
