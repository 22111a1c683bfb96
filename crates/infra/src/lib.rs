//! Infrastructure layer: in-memory adapters, configuration, catalog wiring.

pub mod catalog;
pub mod config;
pub mod repository;

pub use catalog::InMemoryCatalog;
pub use config::{CatalogConfig, ConfigError};
pub use repository::{
    InMemoryCategoryStore, InMemoryProductRepository, InMemoryReferenceStore,
    InMemorySupplierStore, ReferenceStore,
};
