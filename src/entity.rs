// Copyright 2025 Cowboy AI, LLC.

//! Entity types with identity

use crate::query::Queryable;
use std::fmt::Display;
use std::hash::Hash;

/// Trait for domain entities with identity
///
/// Entities are domain objects whose identity persists across time. Two
/// entities are the same entity when their identities are equal, whatever
/// their other attributes say.
///
/// # Examples
///
/// ```rust
/// use domain_kit::{Entity, FieldAccessors, Identity, Queryable};
/// use std::sync::OnceLock;
///
/// struct Customer;
/// type CustomerId = Identity<String, Customer>;
///
/// #[derive(Debug, Clone)]
/// struct CustomerEntity {
///     id: CustomerId,
///     name: String,
/// }
///
/// impl Queryable for CustomerEntity {
///     fn accessors() -> &'static FieldAccessors<Self> {
///         static ACCESSORS: OnceLock<FieldAccessors<CustomerEntity>> = OnceLock::new();
///         ACCESSORS.get_or_init(|| {
///             FieldAccessors::new()
///                 .field("id", |c: &CustomerEntity| (&c.id).into())
///                 .field("name", |c: &CustomerEntity| (&c.name).into())
///         })
///     }
/// }
///
/// impl Entity for CustomerEntity {
///     type Id = CustomerId;
///
///     fn id(&self) -> &Self::Id {
///         &self.id
///     }
/// }
///
/// let a = CustomerEntity { id: CustomerId::new("1".into()), name: "Ann".into() };
/// let b = CustomerEntity { id: CustomerId::new("1".into()), name: "Anne".into() };
/// assert!(a.same_identity_as(&b));
/// ```
pub trait Entity: Queryable + Clone + Send + Sync {
    /// The identity type for this entity
    type Id: Clone + Eq + Hash + Display + Send + Sync;

    /// Get the entity's identity
    fn id(&self) -> &Self::Id;

    /// Entity equality: same identity
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }

    /// Human-readable entity type name used in error reports
    fn entity_type() -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}

/// Marker trait for aggregate roots
///
/// Aggregate roots are the consistency boundary and the unit a repository
/// stores. All changes to entities within an aggregate go through the root.
pub trait AggregateRoot: Entity {}
