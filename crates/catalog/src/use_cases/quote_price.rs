use std::sync::Arc;

use serde::{Deserialize, Serialize};

use pharmacy_core::ProductId;
use pharmacy_pricing::{PricingContext, PricingInput, StrategyInfo};

use crate::error::{CatalogError, CatalogResult};
use crate::repository::ProductRepository;

/// Sale price of a stored product under the active pricing strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub product_id: ProductId,
    pub quantity: u32,
    pub base_price: f64,
    pub unit_price: f64,
    pub total: f64,
    pub strategy: StrategyInfo,
}

pub struct QuotePriceUseCase {
    products: Arc<dyn ProductRepository>,
}

impl QuotePriceUseCase {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    /// Price `quantity` units of a product, using its catalog price as the base.
    pub async fn execute(
        &self,
        pricing: &PricingContext,
        product_id: ProductId,
        quantity: u32,
    ) -> CatalogResult<PriceQuote> {
        let product = self
            .products
            .find_by_id(product_id)
            .await
            .map_err(|e| CatalogError::persistence("look up product", e))?
            .ok_or_else(|| CatalogError::not_found("product", product_id))?;

        let input = PricingInput::for_product(&product, quantity);
        let unit_price = pricing.calculate_price(product.price(), &input);

        Ok(PriceQuote {
            product_id,
            quantity,
            base_price: product.price(),
            unit_price,
            total: unit_price * f64::from(quantity),
            strategy: pricing.strategy_info(),
        })
    }
}
