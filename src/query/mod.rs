// Copyright 2025 Cowboy AI, LLC.

//! # Query Engine
//!
//! A small predicate algebra for filtering in-memory collections of domain
//! objects.
//!
//! ## Components
//!
//! - **Model**: [`Predicate`], [`Expression`] and the recursive [`Query`]
//! - **Builder**: [`QueryBuilder`] for fluent construction
//! - **Field access**: [`Queryable`] types expose a [`FieldAccessors`] map
//! - **Processor**: [`QueryProcessor`] evaluates a query over a slice

mod accessor;
mod builder;
mod model;
mod processor;
pub mod text;

pub use accessor::{BoundPath, FieldAccessors, Queryable};
pub use builder::QueryBuilder;
pub use model::{Binding, Expression, LogicalOperator, Operator, Predicate, Query};
pub use processor::QueryProcessor;
