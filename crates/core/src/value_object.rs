//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - two value
/// objects with the same attributes are interchangeable. To "modify" one,
/// construct a new one. `TimeRange` and geographic coordinates are the
/// canonical examples in this domain.
pub trait ValueObject: Clone + PartialEq {}
