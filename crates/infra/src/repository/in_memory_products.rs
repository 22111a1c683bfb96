use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use pharmacy_catalog::{ProductRepository, RepositoryError, RepositoryResult};
use pharmacy_core::{CategoryId, ProductId, SupplierId};
use pharmacy_products::Product;

/// In-memory product repository.
///
/// Intended for tests/dev. Queries scan every product; results are ordered by
/// product id, which for UUIDv7 ids is creation order.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn find_one<F>(&self, predicate: F) -> RepositoryResult<Option<Product>>
    where
        F: Fn(&Product) -> bool,
    {
        let products = self
            .products
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut matches: Vec<&Product> = products.values().filter(|p| predicate(p)).collect();
        matches.sort_by_key(|p| p.id_typed());
        Ok(matches.first().map(|p| (*p).clone()))
    }

    fn find_many<F>(&self, predicate: F) -> RepositoryResult<Vec<Product>>
    where
        F: Fn(&Product) -> bool,
    {
        let products = self
            .products
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut matches: Vec<Product> = products
            .values()
            .filter(|p| predicate(p))
            .cloned()
            .collect();
        matches.sort_by_key(|p| p.id_typed());
        Ok(matches)
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        let products = self
            .products
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(products.get(&id).cloned())
    }

    async fn find_by_barcode(&self, barcode: &str) -> RepositoryResult<Option<Product>> {
        self.find_one(|p| p.barcode() == Some(barcode))
    }

    async fn find_by_sku(&self, sku: &str) -> RepositoryResult<Option<Product>> {
        self.find_one(|p| p.sku() == sku)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Product>> {
        self.find_many(|_| true)
    }

    async fn find_by_category(&self, category_id: CategoryId) -> RepositoryResult<Vec<Product>> {
        self.find_many(|p| p.category_id() == category_id)
    }

    async fn find_by_supplier(&self, supplier_id: SupplierId) -> RepositoryResult<Vec<Product>> {
        self.find_many(|p| p.supplier_id() == supplier_id)
    }

    async fn find_low_stock(&self) -> RepositoryResult<Vec<Product>> {
        self.find_many(Product::is_low_stock)
    }

    async fn find_expiring_soon(&self, days: i64) -> RepositoryResult<Vec<Product>> {
        let now = Utc::now();
        self.find_many(|p| p.is_expiring_within(days, now))
    }

    async fn save(&self, product: &Product) -> RepositoryResult<()> {
        let mut products = self
            .products
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        products.insert(product.id_typed(), product.clone());
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> RepositoryResult<()> {
        let mut products = self
            .products
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        products.remove(&id);
        Ok(())
    }
}
