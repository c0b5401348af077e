// Copyright 2025 Cowboy AI, LLC.

//! Undo-capable command processor

use crate::commands::{Command, ExecutionStack, Transaction};
use crate::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Processor configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Maximum number of history lines kept for undo; unbounded when `None`
    #[serde(default)]
    pub history_limit: Option<usize>,
}

impl ProcessorConfig {
    /// Unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` history lines
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }
}

/// Outcome of running a command through the [`Processor`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum ProcessorResult<O, E> {
    /// The command ran and succeeded
    Succeeded(O),
    /// The command ran and reported an error
    Failed(E),
}

impl<O, E> ProcessorResult<O, E> {
    /// The processor ran the command, whatever its outcome
    ///
    /// Always `true`: a result is only produced for a command that was run.
    /// A command the processor cannot accept does not type-check, so there is
    /// no "not executed" outcome to report.
    pub fn is_command_executed(&self) -> bool {
        true
    }

    /// The command succeeded
    pub fn is_command_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// Output of a successful command
    pub fn value(&self) -> Option<&O> {
        match self {
            Self::Succeeded(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    /// Error of a failed command
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Succeeded(_) => None,
            Self::Failed(error) => Some(error),
        }
    }

    /// Convert into a plain `Result`
    pub fn into_result(self) -> Result<O, E> {
        self.into()
    }
}

impl<O, E> From<Result<O, E>> for ProcessorResult<O, E> {
    fn from(result: Result<O, E>) -> Self {
        match result {
            Ok(value) => Self::Succeeded(value),
            Err(error) => Self::Failed(error),
        }
    }
}

impl<O, E> From<ProcessorResult<O, E>> for Result<O, E> {
    fn from(result: ProcessorResult<O, E>) -> Self {
        match result {
            ProcessorResult::Succeeded(value) => Ok(value),
            ProcessorResult::Failed(error) => Err(error),
        }
    }
}

/// Runs commands against a context it owns and reverts them on request
///
/// Only commands that succeed are recorded; a failed command left nothing to
/// undo. Commands executed with [`execute_in`](Processor::execute_in) under the
/// same [`Transaction`] are reverted as one unit when they are adjacent in the
/// history.
///
/// # Examples
///
/// ```rust
/// use domain_kit::{Command, Processor, Transaction};
///
/// struct Add(i32);
///
/// impl Command<i32> for Add {
///     type Output = i32;
///     type Error = ();
///
///     fn execute(&mut self, total: &mut i32) -> Result<i32, ()> {
///         *total += self.0;
///         Ok(*total)
///     }
///
///     fn revert(&mut self, total: &mut i32) {
///         *total -= self.0;
///     }
/// }
///
/// let mut processor = Processor::new(0);
/// processor.execute(Add(1));
///
/// let tx = Transaction::new();
/// processor.execute_in(&tx, Add(10));
/// processor.execute_in(&tx, Add(100));
/// assert_eq!(*processor.context(), 111);
///
/// assert_eq!(processor.revert().unwrap(), 2);
/// assert_eq!(*processor.context(), 1);
/// ```
#[derive(Debug)]
pub struct Processor<C> {
    context: C,
    history: ExecutionStack<C>,
    config: ProcessorConfig,
}

impl<C> Processor<C> {
    /// Create a processor with unbounded history
    pub fn new(context: C) -> Self {
        Self::with_config(context, ProcessorConfig::default())
    }

    /// Create a processor with the given configuration
    pub fn with_config(context: C, config: ProcessorConfig) -> Self {
        Self {
            context,
            history: ExecutionStack::new(),
            config,
        }
    }

    /// The context commands operate on
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Give back the context, discarding the history
    pub fn into_context(self) -> C {
        self.context
    }

    /// Current configuration
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Number of commands that can still be reverted
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Whether [`revert`](Processor::revert) has anything to undo
    pub fn can_revert(&self) -> bool {
        !self.history.is_empty()
    }

    /// Execute a command outside any transaction
    pub fn execute<T>(&mut self, command: T) -> ProcessorResult<T::Output, T::Error>
    where
        T: Command<C> + Send + 'static,
    {
        self.run(command, None)
    }

    /// Execute a command as part of `transaction`
    pub fn execute_in<T>(
        &mut self,
        transaction: &Transaction,
        command: T,
    ) -> ProcessorResult<T::Output, T::Error>
    where
        T: Command<C> + Send + 'static,
    {
        self.run(command, Some(*transaction))
    }

    /// Revert the newest command, or the newest transaction as a whole
    ///
    /// Returns the number of commands reverted.
    pub fn revert(&mut self) -> DomainResult<usize> {
        let transaction = self.history.last_transaction();
        let commands = self.history.pop();
        if commands.is_empty() {
            return Err(DomainError::NothingToRevert);
        }

        let count = commands.len();
        for mut command in commands {
            command.revert(&mut self.context);
        }

        debug!(
            reverted = count,
            transaction = ?transaction.map(|tx| tx.id()),
            remaining = self.history.len(),
            "reverted commands"
        );
        Ok(count)
    }

    fn run<T>(
        &mut self,
        mut command: T,
        transaction: Option<Transaction>,
    ) -> ProcessorResult<T::Output, T::Error>
    where
        T: Command<C> + Send + 'static,
    {
        let result = command.execute(&mut self.context);
        if result.is_err() {
            debug!(
                transaction = ?transaction.map(|tx| tx.id()),
                "command failed, not recorded"
            );
            return result.into();
        }

        self.history.push(Box::new(command), transaction);
        if let Some(limit) = self.config.history_limit {
            let dropped = self.history.truncate_oldest(limit);
            if dropped > 0 {
                debug!(dropped, limit, "discarded oldest history lines");
            }
        }

        debug!(
            transaction = ?transaction.map(|tx| tx.id()),
            history = self.history.len(),
            "executed command"
        );
        result.into()
    }
}
