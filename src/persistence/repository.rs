// Copyright 2025 Cowboy AI, LLC.

//! Repository abstraction for aggregate roots

use super::query_support::{QueryOptions, ResultSet};
use crate::entity::AggregateRoot;
use crate::errors::DomainResult;
use crate::query::Query;
use async_trait::async_trait;

/// Storage for one aggregate type
///
/// Implementations hand out copies: mutating an aggregate after `save` or
/// after `get` never affects what the repository holds until it is saved
/// again.
#[async_trait]
pub trait Repository<A: AggregateRoot>: Send + Sync {
    /// All stored aggregates, in insertion order
    async fn all(&self, options: QueryOptions) -> DomainResult<ResultSet<A>>;

    /// Insert or replace by identity
    async fn save(&self, aggregate: &A) -> DomainResult<()>;

    /// Load by identity, failing with `EntityNotFound` when absent
    async fn get(&self, id: &A::Id) -> DomainResult<A>;

    /// Check if an aggregate exists
    async fn exists(&self, id: &A::Id) -> DomainResult<bool>;

    /// Aggregates matching `query`, paginated after filtering
    async fn find(&self, query: &Query, options: QueryOptions) -> DomainResult<ResultSet<A>>;

    /// Remove by identity, failing with `EntityNotFound` when absent
    async fn delete(&self, id: &A::Id) -> DomainResult<()>;
}
