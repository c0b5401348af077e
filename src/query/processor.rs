// Copyright 2025 Cowboy AI, LLC.

//! In-memory query evaluation
//!
//! Every node of a query tree is evaluated against the full entity list and
//! produces a match mask with one flag per entity. Logical operators combine
//! masks element-wise, so results always come back in the order of the input
//! list no matter how the tree is shaped.

use super::accessor::{BoundPath, Queryable};
use super::model::{Expression, LogicalOperator, Operator, Predicate, Query};
use super::text;
use crate::errors::{DomainError, DomainResult};
use crate::value::Value;
use std::cmp::Ordering;
use tracing::{debug, trace, warn};

type Mask = Vec<bool>;

/// Evaluates queries against in-memory entity lists
///
/// Stateless: it neither retains nor mutates the entities it is given, so one
/// processor can serve any number of concurrent read paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryProcessor;

impl QueryProcessor {
    /// Create a new processor
    pub fn new() -> Self {
        Self
    }

    /// Executes query against entities
    ///
    /// Returns the matching entities in their original relative order. The
    /// only error is an unknown operator somewhere in the tree.
    pub fn execute<'a, E: Queryable>(
        &self,
        query: &Query,
        entities: &'a [E],
    ) -> DomainResult<Vec<&'a E>> {
        let mask = self.evaluate(query, entities)?;
        let matches: Vec<&E> = entities
            .iter()
            .zip(&mask)
            .filter_map(|(entity, hit)| hit.then_some(entity))
            .collect();

        debug!(
            kind = query.kind(),
            total = entities.len(),
            matched = matches.len(),
            "executed query"
        );
        Ok(matches)
    }

    /// Owned variant of [`execute`](Self::execute): keeps the matching
    /// entities of `entities`, in order, and drops the rest
    pub fn filter<E: Queryable>(&self, query: &Query, entities: Vec<E>) -> DomainResult<Vec<E>> {
        let mask = self.evaluate(query, &entities)?;
        let total = entities.len();
        let matches: Vec<E> = entities
            .into_iter()
            .zip(mask)
            .filter_map(|(entity, hit)| hit.then_some(entity))
            .collect();

        debug!(
            kind = query.kind(),
            total,
            matched = matches.len(),
            "filtered entities"
        );
        Ok(matches)
    }

    /// Positions of the matching entities, ascending
    pub fn matching<E: Queryable>(&self, query: &Query, entities: &[E]) -> DomainResult<Vec<usize>> {
        let mask = self.evaluate(query, entities)?;
        Ok(mask
            .iter()
            .enumerate()
            .filter_map(|(index, hit)| hit.then_some(index))
            .collect())
    }

    /// Whether a single entity matches
    pub fn matches<E: Queryable>(&self, query: &Query, entity: &E) -> DomainResult<bool> {
        let mask = self.evaluate(query, std::slice::from_ref(entity))?;
        Ok(mask.first().copied().unwrap_or(false))
    }

    fn evaluate<E: Queryable>(&self, query: &Query, entities: &[E]) -> DomainResult<Mask> {
        match query {
            Query::Predicate(predicate) => self.process_predicate(predicate, entities),
            Query::Expression(expression) => self.process_expression(expression, entities),
        }
    }

    fn process_predicate<E: Queryable>(
        &self,
        predicate: &Predicate,
        entities: &[E],
    ) -> DomainResult<Mask> {
        let matcher = Matcher::bind(predicate.operator(), predicate.value())?;
        let path: BoundPath<'_, E> = E::accessors().bind(predicate.field());

        trace!(
            field = %predicate.field(),
            operator = %predicate.operator(),
            operand = %predicate.value(),
            "processing predicate"
        );

        Ok(entities
            .iter()
            .map(|entity| matcher.test(&path.resolve(entity)))
            .collect())
    }

    fn process_expression<E: Queryable>(
        &self,
        expression: &Expression,
        entities: &[E],
    ) -> DomainResult<Mask> {
        match expression.operator() {
            LogicalOperator::And => {
                let mut mask = vec![true; entities.len()];
                for query in expression.queries() {
                    let sub = self.evaluate(query, entities)?;
                    mask.iter_mut().zip(sub).for_each(|(m, s)| *m &= s);
                }
                Ok(mask)
            }
            LogicalOperator::Or => self.union(expression.queries(), entities),
            LogicalOperator::Not => {
                let mut mask = self.union(expression.queries(), entities)?;
                mask.iter_mut().for_each(|m| *m = !*m);
                Ok(mask)
            }
            LogicalOperator::Unknown(name) => {
                warn!(operator = %name, "rejecting query with invalid logical operator");
                Err(DomainError::invalid_operator(name.as_str()))
            }
        }
    }

    fn union<E: Queryable>(&self, queries: &[Query], entities: &[E]) -> DomainResult<Mask> {
        let mut mask = vec![false; entities.len()];
        for query in queries {
            let sub = self.evaluate(query, entities)?;
            mask.iter_mut().zip(sub).for_each(|(m, s)| *m |= s);
        }
        Ok(mask)
    }
}

/// A comparison operator with its operand prepared once per predicate
enum Matcher<'q> {
    Eq(&'q Value),
    Ordered(fn(Ordering) -> bool, &'q Value),
    /// Folded needle; `None` when the operand is not text and nothing can match
    Contains(Option<String>),
    /// Candidate list; `None` when the operand is not a list
    In(Option<&'q [Value]>),
}

impl<'q> Matcher<'q> {
    fn bind(operator: &Operator, operand: &'q Value) -> DomainResult<Self> {
        Ok(match operator {
            Operator::Eq => Matcher::Eq(operand),
            Operator::Gt => Matcher::Ordered(Ordering::is_gt, operand),
            Operator::Gte => Matcher::Ordered(Ordering::is_ge, operand),
            Operator::Lt => Matcher::Ordered(Ordering::is_lt, operand),
            Operator::Lte => Matcher::Ordered(Ordering::is_le, operand),
            Operator::Contains => Matcher::Contains(operand.as_text().map(text::fold)),
            Operator::In => Matcher::In(operand.as_list()),
            Operator::Unknown(name) => {
                warn!(operator = %name, "rejecting predicate with invalid operator");
                return Err(DomainError::invalid_operator(name.as_str()));
            }
        })
    }

    fn test(&self, field: &Value) -> bool {
        if let Matcher::Eq(operand) = self {
            return field.equals(operand);
        }
        if field.is_undefined() {
            return false;
        }

        match self {
            Matcher::Eq(_) => false,
            Matcher::Ordered(accept, operand) => field.compare(operand).is_some_and(accept),
            Matcher::Contains(None) => false,
            Matcher::Contains(Some(needle)) => match field {
                Value::List(items) => items.iter().any(|item| {
                    item.as_text()
                        .is_some_and(|text| text::contains_folded(text, needle))
                }),
                other => other
                    .as_text()
                    .is_some_and(|text| text::contains_folded(text, needle)),
            },
            Matcher::In(candidates) => candidates
                .is_some_and(|candidates| candidates.iter().any(|c| c.equals(field))),
        }
    }
}
