// Copyright 2025 Cowboy AI, LLC.

//! Undo-capable processor driving a calculator

use domain_kit::{Command, DomainError, Processor, ProcessorConfig, Transaction};
use pretty_assertions::assert_eq;

#[derive(Debug, Default)]
struct Calculator {
    value: f64,
}

struct DivCommand {
    divisor: f64,
    previous: f64,
}

impl DivCommand {
    fn new(divisor: f64) -> Self {
        Self {
            divisor,
            previous: 0.0,
        }
    }
}

impl Command<Calculator> for DivCommand {
    type Output = f64;
    type Error = String;

    fn execute(&mut self, calculator: &mut Calculator) -> Result<f64, String> {
        if self.divisor == 0.0 {
            return Err("Cannot divide by zero.".to_string());
        }
        self.previous = calculator.value;
        calculator.value /= self.divisor;
        Ok(calculator.value)
    }

    fn revert(&mut self, calculator: &mut Calculator) {
        calculator.value = self.previous;
    }
}

fn processor() -> Processor<Calculator> {
    Processor::new(Calculator { value: 100.0 })
}

#[test]
fn executes_the_command() {
    let mut processor = processor();
    let result = processor.execute(DivCommand::new(2.0));

    assert!(result.is_command_executed());
    assert!(result.is_command_succeeded());
    assert_eq!(result.value(), Some(&50.0));
    assert_eq!(processor.context().value, 50.0);
}

#[test]
fn reports_command_failure() {
    let mut processor = processor();
    let result = processor.execute(DivCommand::new(0.0));

    assert!(result.is_command_executed());
    assert!(!result.is_command_succeeded());
    assert_eq!(result.error().map(String::as_str), Some("Cannot divide by zero."));
    assert_eq!(processor.context().value, 100.0);
}

#[test]
fn reverts_the_last_command() {
    let mut processor = processor();
    processor.execute(DivCommand::new(2.0));
    processor.execute(DivCommand::new(5.0));

    assert_eq!(processor.revert(), Ok(1));
    assert_eq!(processor.context().value, 50.0);
    assert_eq!(processor.revert(), Ok(1));
    assert_eq!(processor.context().value, 100.0);
}

#[test]
fn fails_when_nothing_to_revert() {
    let mut processor = processor();
    processor.execute(DivCommand::new(2.0));
    processor.revert().unwrap();

    let err = processor.revert().unwrap_err();
    assert_eq!(err, DomainError::NothingToRevert);
    assert_eq!(err.to_string(), "No command to revert.");
}

#[test]
fn failed_command_leaves_history_untouched() {
    let mut processor = processor();
    processor.execute(DivCommand::new(2.0));
    processor.execute(DivCommand::new(0.0));

    assert_eq!(processor.history_len(), 1);
    processor.revert().unwrap();
    assert_eq!(processor.context().value, 100.0);
}

#[test]
fn transaction_is_reverted_as_a_whole() {
    let mut processor = processor();
    let tx = Transaction::new();

    processor.execute(DivCommand::new(2.0));
    processor.execute_in(&tx, DivCommand::new(5.0));
    processor.execute_in(&tx, DivCommand::new(2.0));
    assert_eq!(processor.context().value, 5.0);

    assert_eq!(processor.revert(), Ok(2));
    assert_eq!(processor.context().value, 50.0);
}

#[test]
fn interleaved_transactions_revert_separately() {
    let mut processor = processor();
    let (first, second) = (Transaction::new(), Transaction::new());

    processor.execute_in(&first, DivCommand::new(2.0));
    processor.execute_in(&second, DivCommand::new(5.0));
    processor.execute_in(&first, DivCommand::new(10.0));

    assert_eq!(processor.revert(), Ok(1));
    assert_eq!(processor.context().value, 10.0);
    assert_eq!(processor.revert(), Ok(1));
    assert_eq!(processor.revert(), Ok(1));
    assert_eq!(processor.context().value, 100.0);
}

#[test]
fn history_limit_forgets_oldest_commands() {
    let config = ProcessorConfig::new().with_history_limit(1);
    let mut processor = Processor::with_config(Calculator { value: 100.0 }, config);

    processor.execute(DivCommand::new(2.0));
    processor.execute(DivCommand::new(5.0));

    assert_eq!(processor.revert(), Ok(1));
    assert_eq!(processor.context().value, 50.0);
    assert!(!processor.can_revert());
    assert_eq!(processor.into_context().value, 50.0);
}
