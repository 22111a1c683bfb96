//! Entity trait: identity + continuity across state changes.

use chrono::{DateTime, Utc};

/// Entity marker + minimal interface.
///
/// Every catalog entity carries an identifier and the pair of audit timestamps
/// maintained by its factory and mutators.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// When the entity was first created.
    fn created_at(&self) -> DateTime<Utc>;

    /// When the entity was last mutated (equal to `created_at` until then).
    fn updated_at(&self) -> DateTime<Utc>;
}
