// Copyright 2025 Cowboy AI, LLC.

//! # Persistence Layer
//!
//! Storage for aggregate roots behind an async [`Repository`] trait.
//!
//! ## Components
//!
//! - **Repository**: save, load, delete and query aggregates by identity
//! - **In-memory storage**: [`InMemoryRepository`], insertion ordered
//! - **Query support**: [`QueryOptions`] pagination and [`ResultSet`] pages

pub mod in_memory_repository;
pub mod query_support;
pub mod repository;

pub use in_memory_repository::InMemoryRepository;
pub use query_support::{Pagination, QueryOptions, ResultSet};
pub use repository::Repository;

#[cfg(test)]
mod tests;
