//! Shared test data for the use-case tests.

use chrono::{DateTime, Utc};

use pharmacy_parties::{ContactInfo, NewSupplier, Supplier};
use pharmacy_products::{Category, NewCategory, NewProduct, Product};

pub fn category(name: &str) -> Category {
    Category::create(NewCategory {
        name: name.to_string(),
        description: None,
        parent_id: None,
    })
    .unwrap()
}

pub fn supplier(name: &str) -> Supplier {
    Supplier::create(NewSupplier {
        name: name.to_string(),
        contact: ContactInfo::default(),
        tax_id: None,
        notes: None,
        is_active: true,
    })
    .unwrap()
}

pub fn product(name: &str, stock: i64, min_stock: i64) -> Product {
    product_with(name, stock, min_stock, None, category("Analgesics"), supplier("Cofares"))
}

pub fn expiring_product(name: &str, expiry_date: DateTime<Utc>) -> Product {
    product_with(
        name,
        40,
        10,
        Some(expiry_date),
        category("Antibiotics"),
        supplier("Cofares"),
    )
}

pub fn product_with(
    name: &str,
    stock: i64,
    min_stock: i64,
    expiry_date: Option<DateTime<Utc>>,
    category: Category,
    supplier: Supplier,
) -> Product {
    Product::create(NewProduct {
        name: name.to_string(),
        description: String::new(),
        sku: name.to_uppercase().replace(' ', "-"),
        barcode: None,
        price: 5.0,
        cost: 3.0,
        stock,
        min_stock,
        max_stock: min_stock + 100,
        location: None,
        category,
        supplier,
        requires_prescription: false,
        expiry_date,
    })
    .unwrap()
}
