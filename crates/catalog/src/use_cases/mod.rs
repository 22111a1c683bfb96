pub mod create_product;
pub mod inventory_alerts;
pub mod list_products;
pub mod quote_price;

#[cfg(test)]
pub(crate) mod fixtures;
