// Copyright 2025 Cowboy AI, LLC.

//! Field access for query evaluation
//!
//! Each queryable type registers a string-keyed map of getters once. A field
//! path resolves its first segment through that map and every further segment
//! by stepping into the returned [`Value`]. Resolution never fails: a path that
//! does not resolve yields [`Value::Undefined`].

use super::model::Binding;
use crate::value::Value;
use std::collections::HashMap;
use std::fmt;

type Getter<E> = Box<dyn Fn(&E) -> Value + Send + Sync>;

/// Named getters for one entity type
pub struct FieldAccessors<E> {
    getters: HashMap<String, Getter<E>>,
}

impl<E> FieldAccessors<E> {
    /// Create an empty accessor map
    pub fn new() -> Self {
        Self {
            getters: HashMap::new(),
        }
    }

    /// Register a getter for a top-level field
    pub fn field<F>(mut self, name: impl Into<String>, getter: F) -> Self
    where
        F: Fn(&E) -> Value + Send + Sync + 'static,
    {
        self.getters.insert(name.into(), Box::new(getter));
        self
    }

    /// Whether a top-level field is registered
    pub fn contains(&self, name: &str) -> bool {
        self.getters.contains_key(name)
    }

    /// Registered top-level field names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.getters.keys().map(String::as_str)
    }

    /// Look up the getter for a path once, for repeated resolution
    pub fn bind<'a>(&'a self, binding: &'a Binding) -> BoundPath<'a, E> {
        let (head, rest) = match binding.segments().split_first() {
            Some((head, rest)) => (self.getters.get(head.as_str()), rest),
            None => (None, &[][..]),
        };
        BoundPath { head, rest }
    }

    /// Resolve a path against one entity
    pub fn resolve(&self, entity: &E, binding: &Binding) -> Value {
        self.bind(binding).resolve(entity)
    }
}

impl<E> Default for FieldAccessors<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for FieldAccessors<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("FieldAccessors")
            .field("fields", &names)
            .finish()
    }
}

/// A field path whose top-level getter has already been looked up
pub struct BoundPath<'a, E> {
    head: Option<&'a Getter<E>>,
    rest: &'a [String],
}

impl<E> BoundPath<'_, E> {
    /// Resolve the path against one entity
    pub fn resolve(&self, entity: &E) -> Value {
        let Some(getter) = self.head else {
            return Value::Undefined;
        };
        self.rest
            .iter()
            .fold(getter(entity), |value, segment| value.into_field(segment))
    }
}

/// Types whose fields can be addressed by query field paths
pub trait Queryable: Sized + 'static {
    /// The accessor map for this type, built once
    fn accessors() -> &'static FieldAccessors<Self>;

    /// Resolve a field path on this instance
    fn resolve(&self, binding: &Binding) -> Value {
        Self::accessors().resolve(self, binding)
    }
}
