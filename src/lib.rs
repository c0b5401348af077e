// Copyright 2025 Cowboy AI, LLC.

//! # Domain Kit
//!
//! Domain-Driven Design (DDD) building blocks with an in-memory query engine.
//!
//! This crate provides:
//! - **Identity**: Branded identifiers, so ids of different entities never mix
//! - **Entity**: Types with identity and lifecycle
//! - **Value Objects**: Types defined by their attributes
//! - **Aggregates**: Consistency boundaries stored through a [`Repository`]
//! - **Queries**: A predicate algebra evaluated by the [`QueryProcessor`]
//! - **Commands**: Undoable changes run by a [`Processor`], grouped by [`Transaction`]
//! - **Events**: Subscribable in-process notifications
//!
//! ## Querying
//!
//! Domain objects expose their fields through [`Queryable`]. Queries are
//! built with [`QueryBuilder`] or the `&`, `|` and `!` operators on [`Query`],
//! and evaluated against a slice or through [`Repository::find`]. Matches
//! always keep the order of the input collection.
//!
//! ## Design Principles
//!
//! 1. **Type Safety**: Phantom brands on identities
//! 2. **Tagged values**: Field values carry their kind, so equality never guesses
//! 3. **Order stability**: Every combinator preserves collection order
//! 4. **Explicit errors**: Unknown operators fail loudly with [`DomainError`]

#![warn(missing_docs)]

pub mod command_processor;
pub mod commands;
mod entity;
mod errors;
pub mod events;
mod identifiers;
pub mod persistence;
pub mod query;
mod value;
mod value_object;

// Re-export core types
pub use command_processor::{Processor, ProcessorConfig, ProcessorResult};
pub use commands::{Command, ExecutionStack, Revertible, Transaction};
pub use entity::{AggregateRoot, Entity};
pub use errors::{DomainError, DomainResult};
pub use events::{Event, SubscriptionId};
pub use identifiers::{Identity, UuidIdentity};
pub use persistence::{InMemoryRepository, Pagination, QueryOptions, Repository, ResultSet};
pub use query::{
    Binding, BoundPath, Expression, FieldAccessors, LogicalOperator, Operator, Predicate, Query,
    QueryBuilder, QueryProcessor, Queryable,
};
pub use value::{Record, Scalar, Value};
pub use value_object::ValueObject;
