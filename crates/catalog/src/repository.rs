//! Persistence ports consumed by the use cases.

use async_trait::async_trait;
use thiserror::Error;

use pharmacy_core::{CategoryId, ProductId, SupplierId};
use pharmacy_parties::Supplier;
use pharmacy_products::{Category, Product};

/// Storage adapter failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("storage failure: {0}")]
    Storage(String),

    #[error("storage lock poisoned")]
    LockPoisoned,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Product persistence.
///
/// Lookups return `None` or an empty list when nothing matches. `save` is an
/// upsert keyed by product id; `delete` of an unknown id is not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;

    async fn find_by_barcode(&self, barcode: &str) -> RepositoryResult<Option<Product>>;

    async fn find_by_sku(&self, sku: &str) -> RepositoryResult<Option<Product>>;

    async fn find_all(&self) -> RepositoryResult<Vec<Product>>;

    async fn find_by_category(&self, category_id: CategoryId) -> RepositoryResult<Vec<Product>>;

    async fn find_by_supplier(&self, supplier_id: SupplierId) -> RepositoryResult<Vec<Product>>;

    /// Products at or below their minimum stock.
    async fn find_low_stock(&self) -> RepositoryResult<Vec<Product>>;

    /// Products with an expiry date on or before now + `days` (expired included).
    async fn find_expiring_soon(&self, days: i64) -> RepositoryResult<Vec<Product>>;

    async fn save(&self, product: &Product) -> RepositoryResult<()>;

    async fn delete(&self, id: ProductId) -> RepositoryResult<()>;
}

/// Resolves categories referenced by products.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryLookup: Send + Sync {
    async fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}

/// Resolves suppliers referenced by products.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SupplierLookup: Send + Sync {
    async fn get_supplier_by_id(&self, id: SupplierId) -> RepositoryResult<Option<Supplier>>;
}
