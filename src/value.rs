// Copyright 2025 Cowboy AI, LLC.

//! Runtime values seen by the query engine
//!
//! Every field an entity exposes to queries, and every operand bound into a
//! predicate, is converted once into a [`Value`]. The variant tag decides which
//! equality and ordering rules apply, so evaluation never has to inspect
//! concrete Rust types.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use uuid::Uuid;

/// A primitive value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Scalar {
    /// Boolean flag
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Text
    Text(String),
    /// Point in time
    Timestamp(DateTime<Utc>),
    /// UUID
    Uuid(Uuid),
}

impl Scalar {
    /// Strict equality.
    ///
    /// Values of different kinds are never equal, except integers and floats
    /// which share one numeric domain.
    pub fn strict_eq(&self, other: &Scalar) -> bool {
        match (self, other) {
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Text(a), Scalar::Text(b)) => a == b,
            (Scalar::Timestamp(a), Scalar::Timestamp(b)) => a == b,
            (Scalar::Uuid(a), Scalar::Uuid(b)) => a == b,
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::Int(a), Scalar::Float(b)) => (*a as f64) == *b,
            (Scalar::Float(a), Scalar::Int(b)) => *a == (*b as f64),
            (Scalar::Float(a), Scalar::Float(b)) => a == b,
            _ => false,
        }
    }

    /// Native ordering for orderable kinds: numbers, timestamps and text.
    ///
    /// Returns `None` for booleans, UUIDs, mismatched kinds and NaN.
    pub fn compare(&self, other: &Scalar) -> Option<Ordering> {
        match (self, other) {
            (Scalar::Int(a), Scalar::Int(b)) => Some(a.cmp(b)),
            (Scalar::Int(a), Scalar::Float(b)) => (*a as f64).partial_cmp(b),
            (Scalar::Float(a), Scalar::Int(b)) => a.partial_cmp(&(*b as f64)),
            (Scalar::Float(a), Scalar::Float(b)) => a.partial_cmp(b),
            (Scalar::Text(a), Scalar::Text(b)) => Some(a.cmp(b)),
            (Scalar::Timestamp(a), Scalar::Timestamp(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Borrow the text, if this is a text scalar
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(v) => write!(f, "{v}"),
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v}"),
            Scalar::Text(v) => write!(f, "{v}"),
            Scalar::Timestamp(v) => write!(f, "{}", v.to_rfc3339()),
            Scalar::Uuid(v) => write!(f, "{v}"),
        }
    }
}

/// Structural projection of a value object: a type name plus named fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Name of the value object type
    pub type_name: String,
    /// Field values by name, in declaration order
    pub fields: IndexMap<String, Value>,
}

impl Record {
    /// Create an empty record for a value object type
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Add a field
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Structural equality: same type, same field set, every field equal.
    pub fn structural_eq(&self, other: &Record) -> bool {
        self.type_name == other.type_name
            && self.fields.len() == other.fields.len()
            && self.fields.iter().all(|(name, value)| {
                other
                    .fields
                    .get(name)
                    .is_some_and(|theirs| value.equals(theirs))
            })
    }
}

/// Tagged runtime value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// A field path that did not resolve
    Undefined,
    /// An explicitly absent value (`None`)
    Null,
    /// Primitive value
    Scalar(Scalar),
    /// Wrapped identity value, compared by the wrapped scalar
    Identity(Scalar),
    /// Value object, compared structurally
    Object(Record),
    /// Sequence of values
    List(Vec<Value>),
}

impl Value {
    /// Build a list value from anything convertible into values
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Whether this value is the unresolved-path sentinel
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Borrow the text of a text scalar
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Scalar(scalar) => scalar.as_text(),
            _ => None,
        }
    }

    /// Borrow the elements of a list
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Type-aware equality.
    ///
    /// Value objects compare structurally, identities by their wrapped value,
    /// everything else strictly. Mismatched kinds are simply unequal.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Scalar(a), Value::Scalar(b)) => a.strict_eq(b),
            (Value::Identity(a), Value::Identity(b)) => a.strict_eq(b),
            (Value::Object(a), Value::Object(b)) => a.structural_eq(b),
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equals(y))
            }
            _ => false,
        }
    }

    /// Ordering between two orderable values of the same kind.
    ///
    /// Identities order by their wrapped scalar. Anything else is not orderable.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Scalar(a), Value::Scalar(b)) => a.compare(b),
            (Value::Identity(a), Value::Identity(b)) => a.compare(b),
            _ => None,
        }
    }

    /// Step one path segment into this value, consuming it.
    ///
    /// Records yield the named field, identities yield their wrapped scalar
    /// under `value`, lists accept a numeric index. Anything else is
    /// [`Value::Undefined`].
    pub fn into_field(self, segment: &str) -> Value {
        match self {
            Value::Object(mut record) => record
                .fields
                .shift_remove(segment)
                .unwrap_or(Value::Undefined),
            Value::Identity(scalar) if segment == "value" => Value::Scalar(scalar),
            Value::List(mut items) => match segment.parse::<usize>() {
                Ok(index) if index < items.len() => items.swap_remove(index),
                _ => Value::Undefined,
            },
            _ => Value::Undefined,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Scalar(scalar) | Value::Identity(scalar) => write!(f, "{scalar}"),
            Value::Object(record) => {
                write!(f, "{}(", record.type_name)?;
                for (i, (name, value)) in record.fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                write!(f, ")")
            }
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident as $conv:ty),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar::$variant(<$conv>::from(value))
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

scalar_from! {
    bool => Bool as bool,
    i8 => Int as i64,
    i16 => Int as i64,
    i32 => Int as i64,
    i64 => Int as i64,
    u8 => Int as i64,
    u16 => Int as i64,
    u32 => Int as i64,
    f32 => Float as f64,
    f64 => Float as f64,
    String => Text as String,
    &str => Text as String,
    DateTime<Utc> => Timestamp as DateTime<Utc>,
    Uuid => Uuid as Uuid,
}

/// Integers wider than `i64` stay `Int` while they fit and fall back to a
/// (possibly rounded) `Float` beyond that, so they still order and compare
/// against other numbers.
macro_rules! wide_int_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    i64::try_from(value).map_or(Scalar::Float(value as f64), Scalar::Int)
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

wide_int_from!(u64, usize, isize, i128, u128);

impl From<&String> for Scalar {
    fn from(value: &String) -> Self {
        Scalar::Text(value.clone())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Scalar(Scalar::from(value))
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        Value::Scalar(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::list(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
