// Copyright 2025 Cowboy AI, LLC.

//! Fluent construction of query trees

use super::model::{Binding, Expression, LogicalOperator, Operator, Predicate, Query};
use crate::value::Value;

/// Builder for queries
///
/// Pure data construction: nothing is validated against an entity shape.
///
/// ```rust
/// use domain_kit::QueryBuilder;
///
/// let q = QueryBuilder::new();
/// let query = q.and([
///     q.eq("clientName", "John"),
///     q.lte("price", 150),
/// ]);
/// assert_eq!(query.kind(), "expression");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryBuilder;

impl QueryBuilder {
    /// Create a new query builder
    pub fn new() -> Self {
        Self
    }

    /* -------------------------------------------------------------------------- */
    /*                            Comparison Operators                            */
    /* -------------------------------------------------------------------------- */

    /// Raw predicate constructor
    pub fn op(&self, field: impl Into<Binding>, operator: Operator, value: impl Into<Value>) -> Query {
        Query::Predicate(Predicate::new(field, operator, value))
    }

    /// Field equals value
    pub fn eq(&self, field: impl Into<Binding>, value: impl Into<Value>) -> Query {
        self.op(field, Operator::Eq, value)
    }

    /// Field is greater than value
    pub fn gt(&self, field: impl Into<Binding>, value: impl Into<Value>) -> Query {
        self.op(field, Operator::Gt, value)
    }

    /// Field is greater than or equal to value
    pub fn gte(&self, field: impl Into<Binding>, value: impl Into<Value>) -> Query {
        self.op(field, Operator::Gte, value)
    }

    /// Field is less than value
    pub fn lt(&self, field: impl Into<Binding>, value: impl Into<Value>) -> Query {
        self.op(field, Operator::Lt, value)
    }

    /// Field is less than or equal to value
    pub fn lte(&self, field: impl Into<Binding>, value: impl Into<Value>) -> Query {
        self.op(field, Operator::Lte, value)
    }

    /// Field text (or some element of a text list) contains value
    pub fn contains(&self, field: impl Into<Binding>, value: impl Into<Value>) -> Query {
        self.op(field, Operator::Contains, value)
    }

    /// Field equals one of the values
    pub fn in_<I, T>(&self, field: impl Into<Binding>, values: I) -> Query
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.op(field, Operator::In, Value::list(values))
    }

    /* -------------------------------------------------------------------------- */
    /*                              Logical Operators                             */
    /* -------------------------------------------------------------------------- */

    /// Every query matches
    pub fn and(&self, queries: impl IntoIterator<Item = Query>) -> Query {
        Query::Expression(Expression::new(LogicalOperator::And, queries))
    }

    /// Any query matches
    pub fn or(&self, queries: impl IntoIterator<Item = Query>) -> Query {
        Query::Expression(Expression::new(LogicalOperator::Or, queries))
    }

    /// No query matches
    pub fn not(&self, queries: impl IntoIterator<Item = Query>) -> Query {
        Query::Expression(Expression::new(LogicalOperator::Not, queries))
    }
}
