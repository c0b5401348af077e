// Copyright 2025 Cowboy AI, LLC.

//! Identity types for entities

use crate::errors::{DomainError, DomainResult};
use crate::value::{Scalar, Value};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use uuid::Uuid;

/// A typed identity wrapping a scalar value
///
/// The marker type `M` brands the identity so that identities of different
/// entity kinds cannot be mixed up at compile time. Equality and hashing only
/// look at the wrapped value.
///
/// # Examples
///
/// ```rust
/// use domain_kit::Identity;
///
/// struct Order;
///
/// let a = Identity::<String, Order>::new("123".to_string());
/// let b = Identity::<String, Order>::new("123".to_string());
/// assert_eq!(a, b);
/// assert_eq!(a.value(), "123");
/// ```
pub struct Identity<V, M> {
    value: V,
    _brand: PhantomData<fn() -> M>,
}

impl<V, M> Identity<V, M> {
    /// Wrap a value
    pub fn new(value: V) -> Self {
        Self {
            value,
            _brand: PhantomData,
        }
    }

    /// Get the wrapped value
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Unwrap the value
    pub fn into_value(self) -> V {
        self.value
    }

    /// Compare with another identity of the same kind
    pub fn equals(&self, other: &Self) -> bool
    where
        V: PartialEq,
    {
        self.value == other.value
    }

    /// Re-brand as a different identity kind (use with caution)
    pub fn cast<N>(self) -> Identity<V, N> {
        Identity::new(self.value)
    }
}

impl<V: Clone, M> Clone for Identity<V, M> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<V: Copy, M> Copy for Identity<V, M> {}

impl<V: PartialEq, M> PartialEq for Identity<V, M> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: Eq, M> Eq for Identity<V, M> {}

impl<V: Hash, M> Hash for Identity<V, M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<V: fmt::Debug, M> fmt::Debug for Identity<V, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Identity").field(&self.value).finish()
    }
}

impl<V: fmt::Display, M> fmt::Display for Identity<V, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<V: Serialize, M> Serialize for Identity<V, M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, V: Deserialize<'de>, M> Deserialize<'de> for Identity<V, M> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        V::deserialize(deserializer).map(Self::new)
    }
}

impl<V: Clone + Into<Scalar>, M> From<&Identity<V, M>> for Value {
    fn from(id: &Identity<V, M>) -> Self {
        Value::Identity(id.value.clone().into())
    }
}

impl<V: Into<Scalar>, M> From<Identity<V, M>> for Value {
    fn from(id: Identity<V, M>) -> Self {
        Value::Identity(id.value.into())
    }
}

/// UUID-backed identity
pub type UuidIdentity<M> = Identity<Uuid, M>;

impl<M> Identity<Uuid, M> {
    /// Generate a new random identity
    pub fn generate() -> Self {
        Self::new(Uuid::new_v4())
    }

    /// Parse an identity from its textual form
    ///
    /// ```rust
    /// use domain_kit::UuidIdentity;
    ///
    /// struct User;
    ///
    /// assert!(UuidIdentity::<User>::parse("not-a-uuid").is_err());
    /// let id = UuidIdentity::<User>::parse("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
    /// assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
    /// ```
    pub fn parse(value: &str) -> DomainResult<Self> {
        Uuid::parse_str(value)
            .map(Self::new)
            .map_err(|_| DomainError::ValidationError(format!("{value} is not valid UUID")))
    }
}

impl<M> Default for Identity<Uuid, M> {
    fn default() -> Self {
        Self::generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct OrderMarker;
    struct CustomerMarker;

    type OrderId = Identity<String, OrderMarker>;

    #[test]
    fn test_equality_by_wrapped_value() {
        let a = OrderId::new("123".into());
        let b = OrderId::new("123".into());
        let c = OrderId::new("124".into());

        assert_eq!(a, b);
        assert!(a.equals(&b));
        assert_ne!(a, c);
    }

    #[test]
    fn test_hash_follows_value() {
        let mut set = HashSet::new();
        set.insert(OrderId::new("1".into()));
        set.insert(OrderId::new("1".into()));
        set.insert(OrderId::new("2".into()));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_uuid_identity_generation_is_unique() {
        let a = UuidIdentity::<CustomerMarker>::generate();
        let b = UuidIdentity::<CustomerMarker>::default();
        assert_ne!(a, b);
    }

    #[test]
    fn test_uuid_identity_rejects_garbage() {
        let err = UuidIdentity::<CustomerMarker>::parse("123").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: 123 is not valid UUID");
    }

    #[test]
    fn test_cast_keeps_value() {
        let id = UuidIdentity::<OrderMarker>::generate();
        let raw = *id.value();
        let cast: UuidIdentity<CustomerMarker> = id.cast();
        assert_eq!(*cast.value(), raw);
    }

    #[test]
    fn test_into_value_is_identity_tagged() {
        let id = OrderId::new("123".into());
        assert_eq!(Value::from(&id), Value::Identity(Scalar::from("123")));
        assert!(Value::from(&id).equals(&Value::from(OrderId::new("123".into()))));
        assert!(!Value::from(&id).equals(&Value::from("123")));
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = OrderId::new("abc".into());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc\"");
        let back: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
