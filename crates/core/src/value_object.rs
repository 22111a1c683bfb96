//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity** and are compared by their attribute
/// values. To "modify" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct PriceTier {
///     threshold: u32,
///     discount: f64,
/// }
///
/// impl ValueObject for PriceTier {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
