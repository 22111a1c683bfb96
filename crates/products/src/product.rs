use chrono::{DateTime, Utc};

use pharmacy_core::time::days_from;
use pharmacy_core::validation::require_non_empty;
use pharmacy_core::{CategoryId, DomainError, DomainResult, Entity, ProductId, SupplierId};
use pharmacy_parties::Supplier;

use crate::category::Category;

/// Input for `Product::create` (everything except identity and timestamps).
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub sku: String,
    pub barcode: Option<String>,
    pub price: f64,
    pub cost: f64,
    pub stock: i64,
    pub min_stock: i64,
    pub max_stock: i64,
    pub location: Option<String>,
    pub category: Category,
    pub supplier: Supplier,
    pub requires_prescription: bool,
    pub expiry_date: Option<DateTime<Utc>>,
}

/// Full state of a product, used to rehydrate it from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductProps {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub sku: String,
    pub barcode: Option<String>,
    pub price: f64,
    pub cost: f64,
    pub stock: i64,
    pub min_stock: i64,
    pub max_stock: i64,
    pub location: Option<String>,
    pub category: Category,
    pub supplier: Supplier,
    pub requires_prescription: bool,
    pub expiry_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Entity: Product.
///
/// Invariants, checked on construction and by every mutator:
/// - name and SKU are non-blank
/// - `price > 0`, `cost >= 0`
/// - `stock >= 0`, `min_stock >= 0`, `max_stock > min_stock`
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    sku: String,
    barcode: Option<String>,
    price: f64,
    cost: f64,
    stock: i64,
    min_stock: i64,
    max_stock: i64,
    location: Option<String>,
    category: Category,
    supplier: Supplier,
    requires_prescription: bool,
    expiry_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Product {
    /// Factory: assigns a fresh id and sets both timestamps to now.
    pub fn create(input: NewProduct) -> DomainResult<Self> {
        let now = Utc::now();
        Self::restore(ProductProps {
            id: ProductId::new(),
            name: input.name,
            description: input.description,
            sku: input.sku,
            barcode: input.barcode,
            price: input.price,
            cost: input.cost,
            stock: input.stock,
            min_stock: input.min_stock,
            max_stock: input.max_stock,
            location: input.location,
            category: input.category,
            supplier: input.supplier,
            requires_prescription: input.requires_prescription,
            expiry_date: input.expiry_date,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a product from persisted state, re-checking its invariants.
    pub fn restore(props: ProductProps) -> DomainResult<Self> {
        Self::validate(&props)?;

        Ok(Self {
            id: props.id,
            name: props.name,
            description: props.description,
            sku: props.sku,
            barcode: props.barcode,
            price: props.price,
            cost: props.cost,
            stock: props.stock,
            min_stock: props.min_stock,
            max_stock: props.max_stock,
            location: props.location,
            category: props.category,
            supplier: props.supplier,
            requires_prescription: props.requires_prescription,
            expiry_date: props.expiry_date,
            created_at: props.created_at,
            updated_at: props.updated_at,
        })
    }

    fn validate(props: &ProductProps) -> DomainResult<()> {
        require_non_empty(&props.name, "Product name is required")?;
        require_non_empty(&props.sku, "SKU is required")?;
        ensure_positive_price(props.price)?;

        // Written as negated comparisons so NaN is rejected too.
        if !(props.cost >= 0.0) {
            return Err(DomainError::validation("Cost cannot be negative"));
        }
        if props.stock < 0 {
            return Err(DomainError::validation("Stock cannot be negative"));
        }
        if props.min_stock < 0 {
            return Err(DomainError::validation("Minimum stock cannot be negative"));
        }
        if props.max_stock <= props.min_stock {
            return Err(DomainError::validation(
                "Maximum stock must be greater than minimum stock",
            ));
        }
        Ok(())
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn barcode(&self) -> Option<&str> {
        self.barcode.as_deref()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn min_stock(&self) -> i64 {
        self.min_stock
    }

    pub fn max_stock(&self) -> i64 {
        self.max_stock
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn category_id(&self) -> CategoryId {
        self.category.id_typed()
    }

    pub fn supplier(&self) -> &Supplier {
        &self.supplier
    }

    pub fn supplier_id(&self) -> SupplierId {
        self.supplier.id_typed()
    }

    pub fn requires_prescription(&self) -> bool {
        self.requires_prescription
    }

    pub fn expiry_date(&self) -> Option<DateTime<Utc>> {
        self.expiry_date
    }

    /// Adjust stock by a signed delta (receipts positive, sales negative).
    pub fn update_stock(&mut self, delta: i64) -> DomainResult<()> {
        let new_stock = self
            .stock
            .checked_add(delta)
            .ok_or_else(|| DomainError::validation("Stock adjustment overflows"))?;
        if new_stock < 0 {
            return Err(DomainError::validation("Stock cannot be negative"));
        }

        self.stock = new_stock;
        self.touch();
        Ok(())
    }

    pub fn update_price(&mut self, price: f64) -> DomainResult<()> {
        ensure_positive_price(price)?;
        self.price = price;
        self.touch();
        Ok(())
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }

    pub fn is_over_stock(&self) -> bool {
        self.stock >= self.max_stock
    }

    pub fn profit(&self) -> f64 {
        self.price - self.cost
    }

    /// Profit as a percentage of the sale price. Defined because `price > 0`.
    pub fn profit_margin(&self) -> f64 {
        self.profit() / self.price * 100.0
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Expired when the expiry date lies strictly before `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date.is_some_and(|expiry| expiry < now)
    }

    /// Whether the product expires on or before `now + days`.
    ///
    /// Already-expired products are included. A horizon beyond the
    /// representable date range matches every dated product when `days` is
    /// positive and none when it is negative.
    pub fn is_expiring_within(&self, days: i64, now: DateTime<Utc>) -> bool {
        let Some(expiry) = self.expiry_date else {
            return false;
        };
        match days_from(now, days) {
            Some(horizon) => expiry <= horizon,
            None => days > 0,
        }
    }

    pub fn to_props(&self) -> ProductProps {
        ProductProps {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            sku: self.sku.clone(),
            barcode: self.barcode.clone(),
            price: self.price,
            cost: self.cost,
            stock: self.stock,
            min_stock: self.min_stock,
            max_stock: self.max_stock,
            location: self.location.clone(),
            category: self.category.clone(),
            supplier: self.supplier.clone(),
            requires_prescription: self.requires_prescription,
            expiry_date: self.expiry_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn ensure_positive_price(price: f64) -> DomainResult<()> {
    if !(price > 0.0) {
        return Err(DomainError::validation("Price must be greater than zero"));
    }
    Ok(())
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl TryFrom<ProductProps> for Product {
    type Error = DomainError;

    fn try_from(props: ProductProps) -> Result<Self, Self::Error> {
        Self::restore(props)
    }
}
