//! Register a new product in the catalog.
//!
//! ```text
//! request
//!   ↓
//! 1. SKU must be unused           → DuplicateSku
//!   ↓
//! 2. resolve category             → NotFound
//!   ↓
//! 3. resolve supplier             → NotFound
//!   ↓
//! 4. Product::create              → Validation
//!   ↓
//! 5. repository.save              → Persistence
//!   ↓
//! CreatedProduct { id, name, sku }
//! ```
//!
//! Nothing is written before step 5, so a failure at any step leaves storage
//! untouched.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pharmacy_core::{CategoryId, ProductId, SupplierId};
use pharmacy_products::{NewProduct, Product};

use crate::error::{CatalogError, CatalogResult};
use crate::repository::{CategoryLookup, ProductRepository, SupplierLookup};

/// Input of [`CreateProductUseCase::execute`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub sku: String,
    #[serde(default)]
    pub barcode: Option<String>,
    pub price: f64,
    pub cost: f64,
    pub stock: i64,
    pub min_stock: i64,
    pub max_stock: i64,
    #[serde(default)]
    pub location: Option<String>,
    pub category_id: CategoryId,
    pub supplier_id: SupplierId,
    #[serde(default)]
    pub requires_prescription: bool,
    #[serde(default)]
    pub expiry_date: Option<DateTime<Utc>>,
}

/// Output of [`CreateProductUseCase::execute`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedProduct {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
}

pub struct CreateProductUseCase {
    products: Arc<dyn ProductRepository>,
    categories: Arc<dyn CategoryLookup>,
    suppliers: Arc<dyn SupplierLookup>,
}

impl CreateProductUseCase {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        categories: Arc<dyn CategoryLookup>,
        suppliers: Arc<dyn SupplierLookup>,
    ) -> Self {
        Self {
            products,
            categories,
            suppliers,
        }
    }

    pub async fn execute(&self, request: CreateProductRequest) -> CatalogResult<CreatedProduct> {
        let existing = self
            .products
            .find_by_sku(&request.sku)
            .await
            .map_err(|e| CatalogError::persistence("look up product by SKU", e))?;
        if existing.is_some() {
            tracing::warn!(sku = %request.sku, "rejected duplicate SKU");
            return Err(CatalogError::DuplicateSku(request.sku));
        }

        let category = self
            .categories
            .get_category_by_id(request.category_id)
            .await
            .map_err(|e| CatalogError::persistence("look up category", e))?
            .ok_or_else(|| {
                tracing::warn!(category_id = %request.category_id, "unknown category");
                CatalogError::not_found("category", request.category_id)
            })?;

        let supplier = self
            .suppliers
            .get_supplier_by_id(request.supplier_id)
            .await
            .map_err(|e| CatalogError::persistence("look up supplier", e))?
            .ok_or_else(|| {
                tracing::warn!(supplier_id = %request.supplier_id, "unknown supplier");
                CatalogError::not_found("supplier", request.supplier_id)
            })?;

        let product = Product::create(NewProduct {
            name: request.name,
            description: request.description,
            sku: request.sku,
            barcode: request.barcode,
            price: request.price,
            cost: request.cost,
            stock: request.stock,
            min_stock: request.min_stock,
            max_stock: request.max_stock,
            location: request.location,
            category,
            supplier,
            requires_prescription: request.requires_prescription,
            expiry_date: request.expiry_date,
        })?;

        self.products
            .save(&product)
            .await
            .map_err(|e| CatalogError::persistence("save product", e))?;

        tracing::info!(
            product_id = %product.id_typed(),
            sku = product.sku(),
            "product created"
        );

        Ok(CreatedProduct {
            id: product.id_typed(),
            name: product.name().to_string(),
            sku: product.sku().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{
        MockCategoryLookup, MockProductRepository, MockSupplierLookup, RepositoryError,
    };
    use crate::use_cases::fixtures;
    use pharmacy_parties::Supplier;
    use pharmacy_products::Category;

    struct Harness {
        products: MockProductRepository,
        categories: MockCategoryLookup,
        suppliers: MockSupplierLookup,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                products: MockProductRepository::new(),
                categories: MockCategoryLookup::new(),
                suppliers: MockSupplierLookup::new(),
            }
        }

        fn with_references(mut self, category: Category, supplier: Supplier) -> Self {
            self.categories
                .expect_get_category_by_id()
                .returning(move |_| Ok(Some(category.clone())));
            self.suppliers
                .expect_get_supplier_by_id()
                .returning(move |_| Ok(Some(supplier.clone())));
            self
        }

        fn build(self) -> CreateProductUseCase {
            CreateProductUseCase::new(
                Arc::new(self.products),
                Arc::new(self.categories),
                Arc::new(self.suppliers),
            )
        }
    }

    fn request(category: &Category, supplier: &Supplier) -> CreateProductRequest {
        CreateProductRequest {
            name: "Ibuprofeno 400mg".to_string(),
            description: "Box of 30 tablets".to_string(),
            sku: "IBU-400".to_string(),
            barcode: None,
            price: 6.2,
            cost: 3.1,
            stock: 40,
            min_stock: 10,
            max_stock: 200,
            location: Some("B-1".to_string()),
            category_id: category.id_typed(),
            supplier_id: supplier.id_typed(),
            requires_prescription: false,
            expiry_date: None,
        }
    }

    #[tokio::test]
    async fn creates_and_saves_exactly_once() {
        let category = fixtures::category("Analgesics");
        let supplier = fixtures::supplier("Cofares");
        let request = request(&category, &supplier);
        let category_id = category.id_typed();

        let mut harness = Harness::new().with_references(category, supplier);
        harness
            .products
            .expect_find_by_sku()
            .withf(|sku| sku == "IBU-400")
            .times(1)
            .returning(|_| Ok(None));
        harness
            .products
            .expect_save()
            .withf(move |product| {
                product.sku() == "IBU-400" && product.category_id() == category_id
            })
            .times(1)
            .returning(|_| Ok(()));

        let created = harness.build().execute(request).await.unwrap();
        assert_eq!(created.name, "Ibuprofeno 400mg");
        assert_eq!(created.sku, "IBU-400");
    }

    #[tokio::test]
    async fn duplicate_sku_is_rejected_before_any_write() {
        let category = fixtures::category("Analgesics");
        let supplier = fixtures::supplier("Cofares");
        let request = request(&category, &supplier);

        let mut harness = Harness::new();
        harness
            .products
            .expect_find_by_sku()
            .returning(|_| Ok(Some(fixtures::product("Ibuprofeno 400mg", 40, 10))));
        harness.products.expect_save().never();
        harness.categories.expect_get_category_by_id().never();
        harness.suppliers.expect_get_supplier_by_id().never();

        let err = harness.build().execute(request).await.unwrap_err();
        assert_eq!(err, CatalogError::DuplicateSku("IBU-400".to_string()));
    }

    #[tokio::test]
    async fn missing_category_is_not_found() {
        let category = fixtures::category("Analgesics");
        let supplier = fixtures::supplier("Cofares");
        let request = request(&category, &supplier);

        let mut harness = Harness::new();
        harness.products.expect_find_by_sku().returning(|_| Ok(None));
        harness
            .categories
            .expect_get_category_by_id()
            .returning(|_| Ok(None));
        harness.suppliers.expect_get_supplier_by_id().never();
        harness.products.expect_save().never();

        let err = harness.build().execute(request).await.unwrap_err();
        assert_eq!(err, CatalogError::not_found("category", category.id_typed()));
    }

    #[tokio::test]
    async fn missing_supplier_is_not_found() {
        let category = fixtures::category("Analgesics");
        let supplier = fixtures::supplier("Cofares");
        let request = request(&category, &supplier);

        let mut harness = Harness::new();
        harness.products.expect_find_by_sku().returning(|_| Ok(None));
        harness
            .categories
            .expect_get_category_by_id()
            .returning(move |_| Ok(Some(category.clone())));
        harness
            .suppliers
            .expect_get_supplier_by_id()
            .returning(|_| Ok(None));
        harness.products.expect_save().never();

        let err = harness.build().execute(request).await.unwrap_err();
        assert_eq!(err, CatalogError::not_found("supplier", supplier.id_typed()));
    }

    #[tokio::test]
    async fn invalid_product_is_a_validation_error() {
        let category = fixtures::category("Analgesics");
        let supplier = fixtures::supplier("Cofares");
        let request = CreateProductRequest {
            min_stock: 50,
            max_stock: 20,
            ..request(&category, &supplier)
        };

        let mut harness = Harness::new().with_references(category, supplier);
        harness.products.expect_find_by_sku().returning(|_| Ok(None));
        harness.products.expect_save().never();

        let err = harness.build().execute(request).await.unwrap_err();
        assert_eq!(
            err,
            CatalogError::Validation("Maximum stock must be greater than minimum stock".to_string())
        );
    }

    #[tokio::test]
    async fn save_failure_is_wrapped_as_persistence() {
        let category = fixtures::category("Analgesics");
        let supplier = fixtures::supplier("Cofares");
        let request = request(&category, &supplier);

        let mut harness = Harness::new().with_references(category, supplier);
        harness.products.expect_find_by_sku().returning(|_| Ok(None));
        harness
            .products
            .expect_save()
            .times(1)
            .returning(|_| Err(RepositoryError::Storage("disk full".to_string())));

        let err = harness.build().execute(request).await.unwrap_err();
        assert_eq!(
            err,
            CatalogError::Persistence("failed to save product".to_string())
        );
    }

    #[test]
    fn request_deserializes_from_camel_case_json() {
        let category = fixtures::category("Analgesics");
        let supplier = fixtures::supplier("Cofares");
        let json = serde_json::json!({
            "name": "Loratadina 10mg",
            "sku": "LORA-10",
            "price": 3.5,
            "cost": 1.2,
            "stock": 5,
            "minStock": 10,
            "maxStock": 50,
            "categoryId": category.id_typed().to_string(),
            "supplierId": supplier.id_typed().to_string(),
        });

        let request: CreateProductRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.min_stock, 10);
        assert_eq!(request.description, "");
        assert!(!request.requires_prescription);
        assert_eq!(request.category_id, category.id_typed());
    }
}
