// Copyright 2025 Cowboy AI, LLC.

//! Value objects
//!
//! Value objects are immutable, compared by value, and updated by replacement.

use crate::value::{Record, Value};
use std::fmt::Debug;

/// Value Objects are immutable and compared by value
///
/// # Properties
/// - Immutable after creation
/// - No identity beyond their attributes
/// - Compared by structural equality
/// - Can be freely copied and shared
///
/// Implementors project themselves into a [`Record`] so the query engine can
/// compare them structurally and step into their fields.
///
/// ```rust
/// use domain_kit::{Record, ValueObject};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Address {
///     street: String,
///     city: String,
/// }
///
/// impl ValueObject for Address {
///     fn to_record(&self) -> Record {
///         Record::new("Address")
///             .with("street", &self.street)
///             .with("city", &self.city)
///     }
/// }
///
/// let a = Address { street: "2nd Avenue".into(), city: "New York".into() };
/// let b = a.clone();
/// assert!(a.equals(&b));
/// assert!(a.to_value().equals(&b.to_value()));
/// ```
pub trait ValueObject: Clone + PartialEq + Debug + Send + Sync {
    /// Structural projection of this value
    fn to_record(&self) -> Record;

    /// Tagged runtime value for queries
    fn to_value(&self) -> Value {
        Value::Object(self.to_record())
    }

    /// Structural equality
    fn equals(&self, other: &Self) -> bool {
        self.to_record().structural_eq(&other.to_record())
    }
}
