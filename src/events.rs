// Copyright 2025 Cowboy AI, LLC.

//! In-process event with subscribable handlers

use crate::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

type Handler<A> = Box<dyn Fn(&A) + Send + Sync>;

/// Handle returned by [`Event::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Raw identifier
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscription:{}", self.0)
    }
}

/// A list of handlers notified with an argument of type `A`
///
/// # Examples
///
/// ```rust
/// use domain_kit::Event;
/// use std::sync::{Arc, Mutex};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
///
/// let mut renamed: Event<String> = Event::new();
/// let id = renamed.subscribe(move |name| sink.lock().unwrap().push(name.clone()));
///
/// renamed.notify(&"Ann".to_string());
/// renamed.unsubscribe(id).unwrap();
/// renamed.notify(&"Anne".to_string());
///
/// assert_eq!(*seen.lock().unwrap(), vec!["Ann".to_string()]);
/// ```
pub struct Event<A> {
    handlers: Vec<(SubscriptionId, Handler<A>)>,
    next_id: u64,
}

impl<A> Event<A> {
    /// Create an event with no subscribers
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    /// Add a handler; it is called after every handler subscribed before it
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: Fn(&A) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Remove a handler
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> DomainResult<()> {
        let index = self
            .handlers
            .iter()
            .position(|(candidate, _)| *candidate == id)
            .ok_or(DomainError::HandlerNotFound(id.0))?;
        drop(self.handlers.remove(index));
        Ok(())
    }

    /// Call every handler with `arg`, in subscription order
    pub fn notify(&self, arg: &A) {
        for (_, handler) in &self.handlers {
            handler(arg);
        }
    }

    /// Number of subscribed handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether nobody is subscribed
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<A> Default for Event<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for Event<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<u64> = self.handlers.iter().map(|(id, _)| id.0).collect();
        f.debug_struct("Event").field("subscriptions", &ids).finish()
    }
}
