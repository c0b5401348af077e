// Copyright 2025 Cowboy AI, LLC.

//! Undoable commands
//!
//! A command changes a context and knows how to take that change back. The
//! [`Processor`](crate::command_processor::Processor) runs commands and keeps
//! the successful ones on an [`ExecutionStack`] so they can be reverted later,
//! one at a time or a whole [`Transaction`] at once.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use uuid::Uuid;

/// A reversible change to a context of type `C`
///
/// # Examples
///
/// ```rust
/// use domain_kit::Command;
///
/// struct Deposit(i64);
///
/// impl Command<i64> for Deposit {
///     type Output = i64;
///     type Error = String;
///
///     fn execute(&mut self, balance: &mut i64) -> Result<i64, String> {
///         if self.0 <= 0 {
///             return Err("deposit must be positive".to_string());
///         }
///         *balance += self.0;
///         Ok(*balance)
///     }
///
///     fn revert(&mut self, balance: &mut i64) {
///         *balance -= self.0;
///     }
/// }
///
/// let mut balance = 10;
/// let mut deposit = Deposit(5);
/// assert_eq!(deposit.execute(&mut balance), Ok(15));
/// deposit.revert(&mut balance);
/// assert_eq!(balance, 10);
/// ```
pub trait Command<C> {
    /// Value produced by a successful execution
    type Output;

    /// Error produced by a failed execution
    type Error;

    /// Apply the change
    fn execute(&mut self, context: &mut C) -> Result<Self::Output, Self::Error>;

    /// Undo a previously successful [`execute`](Command::execute)
    fn revert(&mut self, context: &mut C);
}

/// The undo half of a command, with its result types erased
pub trait Revertible<C>: Send {
    /// Undo the command
    fn revert(&mut self, context: &mut C);
}

impl<C, T> Revertible<C> for T
where
    T: Command<C> + Send,
{
    fn revert(&mut self, context: &mut C) {
        Command::revert(self, context)
    }
}

/// Groups commands so they are reverted together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction(Uuid);

impl Transaction {
    /// Start a new transaction
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Transaction identifier
    pub fn id(&self) -> Uuid {
        self.0
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transaction:{}", self.0)
    }
}

impl From<Uuid> for Transaction {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

struct HistoryLine<C> {
    command: Box<dyn Revertible<C>>,
    transaction: Option<Transaction>,
}

/// History of executed commands, newest last
pub struct ExecutionStack<C> {
    lines: VecDeque<HistoryLine<C>>,
}

impl<C> ExecutionStack<C> {
    /// Create an empty stack
    pub fn new() -> Self {
        Self {
            lines: VecDeque::new(),
        }
    }

    /// Record an executed command
    pub fn push(&mut self, command: Box<dyn Revertible<C>>, transaction: Option<Transaction>) {
        self.lines.push_back(HistoryLine {
            command,
            transaction,
        });
    }

    /// Take the newest line, together with every adjacent line of the same
    /// transaction. Commands come back newest first.
    pub fn pop(&mut self) -> Vec<Box<dyn Revertible<C>>> {
        let Some(last) = self.lines.pop_back() else {
            return Vec::new();
        };

        let mut commands = vec![last.command];
        if let Some(transaction) = last.transaction {
            while self
                .lines
                .back()
                .is_some_and(|line| line.transaction == Some(transaction))
            {
                if let Some(line) = self.lines.pop_back() {
                    commands.push(line.command);
                }
            }
        }
        commands
    }

    /// Drop the oldest lines until at most `limit` remain; returns how many
    /// were dropped
    pub fn truncate_oldest(&mut self, limit: usize) -> usize {
        let excess = self.lines.len().saturating_sub(limit);
        self.lines.drain(..excess);
        excess
    }

    /// Transaction of the newest line, if any
    pub fn last_transaction(&self) -> Option<Transaction> {
        self.lines.back().and_then(|line| line.transaction)
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing can be reverted
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<C> Default for ExecutionStack<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for ExecutionStack<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionStack")
            .field("len", &self.lines.len())
            .field("last_transaction", &self.last_transaction())
            .finish()
    }
}
