// Copyright 2025 Cowboy AI, LLC.

//! In-memory repository backed by an insertion-ordered map

use super::query_support::{QueryOptions, ResultSet};
use super::repository::Repository;
use crate::entity::AggregateRoot;
use crate::errors::{DomainError, DomainResult};
use crate::query::{Query, QueryProcessor};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory repository
///
/// Aggregates are stored by identity and listed in insertion order. Saving an
/// aggregate whose identity is already stored replaces it in place. Clones of
/// the repository share the same storage.
pub struct InMemoryRepository<A: AggregateRoot> {
    storage: Arc<RwLock<IndexMap<A::Id, A>>>,
    processor: QueryProcessor,
}

impl<A: AggregateRoot> InMemoryRepository<A> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(IndexMap::new())),
            processor: QueryProcessor::new(),
        }
    }

    /// Create a repository pre-populated with `aggregates`
    pub fn with_aggregates(aggregates: impl IntoIterator<Item = A>) -> Self {
        let storage = aggregates
            .into_iter()
            .map(|aggregate| (aggregate.id().clone(), aggregate))
            .collect();
        Self {
            storage: Arc::new(RwLock::new(storage)),
            processor: QueryProcessor::new(),
        }
    }

    /// Number of stored aggregates
    pub async fn len(&self) -> usize {
        self.storage.read().await.len()
    }

    /// Whether the repository is empty
    pub async fn is_empty(&self) -> bool {
        self.storage.read().await.is_empty()
    }

    async fn snapshot(&self) -> Vec<A> {
        self.storage.read().await.values().cloned().collect()
    }
}

impl<A: AggregateRoot> Default for InMemoryRepository<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: AggregateRoot> Clone for InMemoryRepository<A> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            processor: self.processor,
        }
    }
}

#[async_trait]
impl<A: AggregateRoot> Repository<A> for InMemoryRepository<A> {
    async fn all(&self, options: QueryOptions) -> DomainResult<ResultSet<A>> {
        Ok(options.apply(self.snapshot().await))
    }

    async fn save(&self, aggregate: &A) -> DomainResult<()> {
        let id = aggregate.id().clone();
        debug!(entity_type = A::entity_type(), %id, "saving aggregate");
        self.storage.write().await.insert(id, aggregate.clone());
        Ok(())
    }

    async fn get(&self, id: &A::Id) -> DomainResult<A> {
        self.storage
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(A::entity_type(), id))
    }

    async fn exists(&self, id: &A::Id) -> DomainResult<bool> {
        Ok(self.storage.read().await.contains_key(id))
    }

    async fn find(&self, query: &Query, options: QueryOptions) -> DomainResult<ResultSet<A>> {
        let snapshot = self.snapshot().await;
        let matches = self.processor.filter(query, snapshot)?;
        Ok(options.apply(matches))
    }

    async fn delete(&self, id: &A::Id) -> DomainResult<()> {
        match self.storage.write().await.shift_remove(id) {
            Some(_) => {
                debug!(entity_type = A::entity_type(), %id, "deleted aggregate");
                Ok(())
            }
            None => Err(DomainError::not_found(A::entity_type(), id)),
        }
    }
}
