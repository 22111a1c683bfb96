//! Catalog application layer.
//!
//! ```text
//! ┌──────────────┐
//! │  Use cases   │  ← create / list products, alerts, price quotes
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐
//! │    Ports     │  ← ProductRepository, CategoryLookup, SupplierLookup
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐
//! │   Entities   │  ← pharmacy-products, pharmacy-parties
//! └──────────────┘
//! ```
//!
//! Adapters for the ports live in `pharmacy-infra`.

pub mod error;
pub mod repository;
pub mod use_cases;

pub use error::{CatalogError, CatalogResult};
pub use repository::{
    CategoryLookup, ProductRepository, RepositoryError, RepositoryResult, SupplierLookup,
};
pub use use_cases::create_product::{CreateProductRequest, CreateProductUseCase, CreatedProduct};
pub use use_cases::inventory_alerts::{
    AlertSeverity, ExpiryAlert, InventoryAlerts, InventoryAlertsUseCase, StockAlert,
};
pub use use_cases::list_products::{
    CategoryRef, ListProductsUseCase, ProductFilter, ProductSummary, SupplierRef,
};
pub use use_cases::quote_price::{PriceQuote, QuotePriceUseCase};
