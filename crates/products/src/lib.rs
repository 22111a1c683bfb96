//! Products domain module (catalog).
//!
//! This crate contains business rules for the pharmacy catalog: products and
//! the categories they are filed under, implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod category;
pub mod product;

pub use category::{Category, CategoryProps, NewCategory};
pub use product::{NewProduct, Product, ProductProps};
