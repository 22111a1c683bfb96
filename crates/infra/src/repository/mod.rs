//! In-memory adapters for the catalog ports.

pub mod in_memory_products;
pub mod reference_store;

pub use in_memory_products::InMemoryProductRepository;
pub use reference_store::{
    InMemoryCategoryStore, InMemoryReferenceStore, InMemorySupplierStore, ReferenceStore,
};
