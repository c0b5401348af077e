// Copyright 2025 Cowboy AI, LLC.

//! Query model
//!
//! A [`Query`] is a tree: leaves are [`Predicate`]s comparing one field with
//! one operand, inner nodes are [`Expression`]s combining sub-queries with a
//! logical operator. The model carries no evaluation logic and never checks a
//! field path against an entity shape; paths are only resolved when the tree
//! is evaluated.

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

/// Comparison operators. These are used to compare a field with a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
    /// Type-aware equality
    Eq,
    /// Greater than
    Gt,
    /// Greater than or equal
    Gte,
    /// Less than
    Lt,
    /// Less than or equal
    Lte,
    /// Case- and diacritic-insensitive substring match
    Contains,
    /// Membership in an operand list
    In,
    /// Operator text that is not recognised; rejected at evaluation
    Unknown(String),
}

impl Operator {
    /// Wire name of the operator
    pub fn as_str(&self) -> &str {
        match self {
            Operator::Eq => "eq",
            Operator::Gt => "gt",
            Operator::Gte => "gte",
            Operator::Lt => "lt",
            Operator::Lte => "lte",
            Operator::Contains => "contains",
            Operator::In => "in",
            Operator::Unknown(name) => name,
        }
    }
}

impl From<&str> for Operator {
    fn from(name: &str) -> Self {
        match name {
            "eq" => Operator::Eq,
            "gt" => Operator::Gt,
            "gte" => Operator::Gte,
            "lt" => Operator::Lt,
            "lte" => Operator::Lte,
            "contains" => Operator::Contains,
            "in" => Operator::In,
            other => Operator::Unknown(other.to_string()),
        }
    }
}

impl From<String> for Operator {
    fn from(name: String) -> Self {
        Operator::from(name.as_str())
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.as_str().to_string()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical operators. These are used to combine multiple queries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogicalOperator {
    /// Every sub-query matches
    And,
    /// At least one sub-query matches
    Or,
    /// No sub-query matches
    Not,
    /// Operator text that is not recognised; rejected at evaluation
    Unknown(String),
}

impl LogicalOperator {
    /// Wire name of the operator
    pub fn as_str(&self) -> &str {
        match self {
            LogicalOperator::And => "and",
            LogicalOperator::Or => "or",
            LogicalOperator::Not => "not",
            LogicalOperator::Unknown(name) => name,
        }
    }
}

impl From<&str> for LogicalOperator {
    fn from(name: &str) -> Self {
        match name {
            "and" => LogicalOperator::And,
            "or" => LogicalOperator::Or,
            "not" => LogicalOperator::Not,
            other => LogicalOperator::Unknown(other.to_string()),
        }
    }
}

impl From<String> for LogicalOperator {
    fn from(name: String) -> Self {
        LogicalOperator::from(name.as_str())
    }
}

impl From<LogicalOperator> for String {
    fn from(op: LogicalOperator) -> Self {
        op.as_str().to_string()
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binding between an entity field and a query: a dotted field path such as
/// `deliveryAddress.street`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Binding {
    segments: Vec<String>,
}

impl Binding {
    /// Parse a dotted path
    pub fn new(path: &str) -> Self {
        Self {
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    /// Path segments, outermost first
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Rejoin the segments into the dotted path
    pub fn path(&self) -> String {
        self.segments.join(".")
    }
}

impl From<&str> for Binding {
    fn from(path: &str) -> Self {
        Binding::new(path)
    }
}

impl From<String> for Binding {
    fn from(path: String) -> Self {
        Binding::new(&path)
    }
}

impl From<&String> for Binding {
    fn from(path: &String) -> Self {
        Binding::new(path)
    }
}

impl From<Binding> for String {
    fn from(binding: Binding) -> Self {
        binding.path()
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// A predicate is a comparison between a field and a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    field: Binding,
    operator: Operator,
    value: Value,
}

impl Predicate {
    /// Create a predicate
    pub fn new(field: impl Into<Binding>, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// The field path being compared
    pub fn field(&self) -> &Binding {
        &self.field
    }

    /// The comparison operator
    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    /// The bound operand
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// A logical combination of sub-queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    operator: LogicalOperator,
    queries: Vec<Query>,
}

impl Expression {
    /// Create an expression
    pub fn new(operator: LogicalOperator, queries: impl IntoIterator<Item = Query>) -> Self {
        Self {
            operator,
            queries: queries.into_iter().collect(),
        }
    }

    /// The logical operator
    pub fn operator(&self) -> &LogicalOperator {
        &self.operator
    }

    /// The combined sub-queries
    pub fn queries(&self) -> &[Query] {
        &self.queries
    }
}

/// A predicate or an expression, recursively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Query {
    /// Single comparison
    Predicate(Predicate),
    /// Logical combination
    Expression(Expression),
}

impl Query {
    /// Short name of the node kind, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Query::Predicate(_) => "predicate",
            Query::Expression(_) => "expression",
        }
    }

    /// Parse a query tree from JSON
    pub fn from_json(json: &str) -> crate::DomainResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the query tree to JSON
    pub fn to_json(&self) -> crate::DomainResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn combine(self, operator: LogicalOperator, other: Query) -> Query {
        match self {
            Query::Expression(mut expr) if expr.operator == operator => {
                expr.queries.push(other);
                Query::Expression(expr)
            }
            lhs => Query::Expression(Expression::new(operator, [lhs, other])),
        }
    }
}

impl From<Predicate> for Query {
    fn from(predicate: Predicate) -> Self {
        Query::Predicate(predicate)
    }
}

impl From<Expression> for Query {
    fn from(expression: Expression) -> Self {
        Query::Expression(expression)
    }
}

impl BitAnd for Query {
    type Output = Query;

    fn bitand(self, rhs: Query) -> Query {
        self.combine(LogicalOperator::And, rhs)
    }
}

impl BitOr for Query {
    type Output = Query;

    fn bitor(self, rhs: Query) -> Query {
        self.combine(LogicalOperator::Or, rhs)
    }
}

impl Not for Query {
    type Output = Query;

    fn not(self) -> Query {
        Query::Expression(Expression::new(LogicalOperator::Not, [self]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("eq", Operator::Eq)]
    #[test_case("gt", Operator::Gt)]
    #[test_case("gte", Operator::Gte)]
    #[test_case("lt", Operator::Lt)]
    #[test_case("lte", Operator::Lte)]
    #[test_case("contains", Operator::Contains)]
    #[test_case("in", Operator::In)]
    fn test_operator_names(name: &str, op: Operator) {
        assert_eq!(Operator::from(name), op);
        assert_eq!(op.as_str(), name);
    }

    #[test]
    fn test_unknown_operators_are_preserved() {
        assert_eq!(
            LogicalOperator::from("xor"),
            LogicalOperator::Unknown("xor".into())
        );
        assert_eq!(LogicalOperator::from("xor").to_string(), "xor");
        assert_eq!(Operator::from("like"), Operator::Unknown("like".into()));
    }

    #[test]
    fn test_binding_segments() {
        let binding = Binding::from("deliveryAddress.street");
        assert_eq!(binding.segments(), ["deliveryAddress", "street"]);
        assert_eq!(binding.to_string(), "deliveryAddress.street");
    }

    #[test]
    fn test_operators_flatten_chains() {
        let a = Query::from(Predicate::new("a", Operator::Eq, 1));
        let b = Query::from(Predicate::new("b", Operator::Eq, 2));
        let c = Query::from(Predicate::new("c", Operator::Eq, 3));

        let chained = a.clone() & b.clone() & c.clone();
        assert_eq!(
            chained,
            Query::Expression(Expression::new(
                LogicalOperator::And,
                [a.clone(), b.clone(), c.clone()]
            ))
        );

        let mixed = (a.clone() | b.clone()) & !c.clone();
        match mixed {
            Query::Expression(expr) => {
                assert_eq!(expr.operator(), &LogicalOperator::And);
                assert_eq!(expr.queries().len(), 2);
            }
            other => panic!("expected expression, got {other:?}"),
        }
    }

    #[test]
    fn test_json_shape() {
        let query = Query::Expression(Expression::new(
            LogicalOperator::Or,
            [Query::from(Predicate::new("name", Operator::Eq, "John"))],
        ));
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "operator": "or",
                "queries": [{
                    "field": "name",
                    "operator": "eq",
                    "value": {"kind": "scalar", "value": {"kind": "text", "value": "John"}}
                }]
            })
        );
    }

    #[test]
    fn test_json_keeps_unknown_logical_operator() {
        let query = Query::from_json(r#"{"operator": "xor", "queries": []}"#).unwrap();
        match query {
            Query::Expression(expr) => {
                assert_eq!(expr.operator(), &LogicalOperator::Unknown("xor".into()))
            }
            other => panic!("expected expression, got {other:?}"),
        }
    }
}
