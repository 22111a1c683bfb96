//! `pharmacy-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! strongly-typed identifiers, the domain error model, and the small set of
//! validation and calendar helpers shared by the catalog entities.

pub mod entity;
pub mod error;
pub mod id;
pub mod time;
pub mod validation;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, ProductId, SupplierId};
pub use value_object::ValueObject;
