//! In-memory catalog wiring (dev/test).

use std::sync::Arc;

use pharmacy_catalog::{
    CatalogError, CatalogResult, CreateProductRequest, CreateProductUseCase, CreatedProduct,
    InventoryAlerts, InventoryAlertsUseCase, ListProductsUseCase, PriceQuote, ProductFilter,
    ProductRepository, ProductSummary, QuotePriceUseCase,
};
use pharmacy_core::ProductId;
use pharmacy_parties::{NewSupplier, Supplier};
use pharmacy_pricing::{PricingContext, PricingStrategy, StrategyInfo};
use pharmacy_products::{Category, NewCategory};

use crate::config::CatalogConfig;
use crate::repository::{
    InMemoryCategoryStore, InMemoryProductRepository, InMemorySupplierStore, ReferenceStore,
};

pub struct InMemoryCatalog {
    products: Arc<InMemoryProductRepository>,
    categories: Arc<InMemoryCategoryStore>,
    suppliers: Arc<InMemorySupplierStore>,
    pricing: PricingContext,
    create_product: CreateProductUseCase,
    list_products: ListProductsUseCase,
    inventory_alerts: InventoryAlertsUseCase,
    quote_price: QuotePriceUseCase,
}

impl InMemoryCatalog {
    pub fn new(config: CatalogConfig) -> Self {
        let products = Arc::new(InMemoryProductRepository::new());
        let categories = Arc::new(InMemoryCategoryStore::new());
        let suppliers = Arc::new(InMemorySupplierStore::new());

        let create_product =
            CreateProductUseCase::new(products.clone(), categories.clone(), suppliers.clone());
        let list_products = ListProductsUseCase::new(products.clone());
        let inventory_alerts =
            InventoryAlertsUseCase::new(products.clone(), config.expiry_alert_days);
        let quote_price = QuotePriceUseCase::new(products.clone());

        let pricing = PricingContext::new(config.pricing.into_strategy());
        tracing::info!(
            strategy = pricing.strategy().name(),
            expiry_alert_days = config.expiry_alert_days,
            "catalog initialised"
        );

        Self {
            products,
            categories,
            suppliers,
            pricing,
            create_product,
            list_products,
            inventory_alerts,
            quote_price,
        }
    }

    /// Product repository shared by every use case of this catalog.
    pub fn products(&self) -> Arc<dyn ProductRepository> {
        self.products.clone()
    }

    pub fn register_category(&self, input: NewCategory) -> CatalogResult<Category> {
        let category = Category::create(input)?;
        self.categories
            .upsert(category.clone())
            .map_err(|e| CatalogError::persistence("save category", e))?;
        Ok(category)
    }

    pub fn register_supplier(&self, input: NewSupplier) -> CatalogResult<Supplier> {
        let supplier = Supplier::create(input)?;
        self.suppliers
            .upsert(supplier.clone())
            .map_err(|e| CatalogError::persistence("save supplier", e))?;
        Ok(supplier)
    }

    pub fn categories(&self) -> CatalogResult<Vec<Category>> {
        self.categories
            .list()
            .map_err(|e| CatalogError::persistence("list categories", e))
    }

    pub fn suppliers(&self) -> CatalogResult<Vec<Supplier>> {
        self.suppliers
            .list()
            .map_err(|e| CatalogError::persistence("list suppliers", e))
    }

    pub async fn create_product(
        &self,
        request: CreateProductRequest,
    ) -> CatalogResult<CreatedProduct> {
        self.create_product.execute(request).await
    }

    pub async fn list_products(&self, filter: ProductFilter) -> CatalogResult<Vec<ProductSummary>> {
        self.list_products.execute(filter).await
    }

    pub async fn inventory_alerts(&self) -> CatalogResult<InventoryAlerts> {
        self.inventory_alerts.execute().await
    }

    pub async fn quote_price(&self, product_id: ProductId, quantity: u32) -> CatalogResult<PriceQuote> {
        self.quote_price
            .execute(&self.pricing, product_id, quantity)
            .await
    }

    pub fn set_pricing_strategy(&mut self, strategy: Box<dyn PricingStrategy>) {
        self.pricing.set_strategy(strategy);
    }

    pub fn pricing_strategy(&self) -> StrategyInfo {
        self.pricing.strategy_info()
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}
