use std::sync::Arc;

use serde::{Deserialize, Serialize};

use pharmacy_core::{CategoryId, ProductId, SupplierId};
use pharmacy_products::Product;

use crate::error::{CatalogError, CatalogResult};
use crate::repository::ProductRepository;

/// Listing filter. Only one criterion applies, in the order category,
/// supplier, low stock; with none set every product is listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFilter {
    pub category_id: Option<CategoryId>,
    pub supplier_id: Option<SupplierId>,
    pub low_stock: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: CategoryId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierRef {
    pub id: SupplierId,
    pub name: String,
}

/// Listing row for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub stock: i64,
    pub category: CategoryRef,
    pub supplier: SupplierRef,
    pub requires_prescription: bool,
    pub is_low_stock: bool,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id_typed(),
            name: product.name().to_string(),
            sku: product.sku().to_string(),
            price: product.price(),
            stock: product.stock(),
            category: CategoryRef {
                id: product.category_id(),
                name: product.category().name().to_string(),
            },
            supplier: SupplierRef {
                id: product.supplier_id(),
                name: product.supplier().name().to_string(),
            },
            requires_prescription: product.requires_prescription(),
            is_low_stock: product.is_low_stock(),
        }
    }
}

pub struct ListProductsUseCase {
    products: Arc<dyn ProductRepository>,
}

impl ListProductsUseCase {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn execute(&self, filter: ProductFilter) -> CatalogResult<Vec<ProductSummary>> {
        let found = if let Some(category_id) = filter.category_id {
            self.products.find_by_category(category_id).await
        } else if let Some(supplier_id) = filter.supplier_id {
            self.products.find_by_supplier(supplier_id).await
        } else if filter.low_stock {
            self.products.find_low_stock().await
        } else {
            self.products.find_all().await
        };
        let products = found.map_err(|e| CatalogError::persistence("list products", e))?;

        tracing::debug!(count = products.len(), ?filter, "listed products");
        Ok(products.iter().map(ProductSummary::from).collect())
    }
}
