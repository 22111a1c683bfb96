//! Parties domain module (suppliers).
//!
//! This crate contains business rules for the suppliers the pharmacy buys from,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod supplier;

pub use supplier::{ContactInfo, ContactInfoUpdate, NewSupplier, Supplier, SupplierProps};
