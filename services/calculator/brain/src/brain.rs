use std::sync::Arc;

use log::{debug, trace};

use crate::error::OperationError;
use crate::operation::{Operation, OperationTable, PendingBinaryOperation};

lazy_static! {
    static ref STANDARD_OPERATIONS: Arc<OperationTable> = Arc::new(OperationTable::standard());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrainState {
    /// Nothing entered yet
    Empty,
    HasValue,
    /// A binary operator was applied and its second operand is not entered
    PendingBinary,
    /// The second operand is entered and waits for `=`
    PendingWithOperand,
}

/// An accumulator driven by operand and operator keys
///
/// Binary operators are evaluated strictly left to right, applying a new binary
/// operator resolves the one that is pending first.
#[derive(Debug, Clone)]
pub struct CalculatorBrain {
    accumulator: Option<f64>,
    pending: Option<PendingBinaryOperation>,
    operations: Arc<OperationTable>,
}

impl CalculatorBrain {
    pub fn new() -> CalculatorBrain {
        Self::with_operations(STANDARD_OPERATIONS.clone())
    }

    pub fn with_operations(operations: Arc<OperationTable>) -> CalculatorBrain {
        CalculatorBrain {
            accumulator: None,
            pending: None,
            operations,
        }
    }

    pub fn set_operand(&mut self, operand: f64) {
        trace!("operand {}", operand);
        self.accumulator = Some(operand);
    }

    /// Applies `symbol`, silently ignoring it if it can't be applied
    pub fn perform_operation(&mut self, symbol: &str) {
        if let Err(e) = self.try_perform_operation(symbol) {
            debug!("Ignoring \"{}\": {}", symbol, e);
        }
    }

    /// Applies `symbol`, the brain is left untouched if this returns an error
    pub fn try_perform_operation(&mut self, symbol: &str) -> Result<(), OperationError> {
        let operation = self
            .operations
            .get(symbol)
            .ok_or_else(|| OperationError::UnknownSymbol(symbol.to_string()))?;

        trace!("operation \"{}\" in state {:?}", symbol, self.state());

        match operation {
            Operation::Constant(value) => {
                self.accumulator = Some(value);
                Ok(())
            }
            Operation::Unary(f) => {
                let operand = self.accumulator.ok_or(OperationError::MissingOperand)?;
                self.accumulator = Some(f(operand));
                Ok(())
            }
            Operation::Binary(f) => {
                let operand = self.accumulator.ok_or(OperationError::MissingOperand)?;
                let first_operand = match self.pending.take() {
                    Some(pending) => pending.perform(operand),
                    None => operand,
                };
                self.pending = Some(PendingBinaryOperation::new(f, first_operand));
                self.accumulator = None;
                Ok(())
            }
            Operation::Equals => self.perform_pending_binary_operation(),
        }
    }

    fn perform_pending_binary_operation(&mut self) -> Result<(), OperationError> {
        let pending = self.pending.ok_or(OperationError::NoPendingOperation)?;
        let operand = self.accumulator.ok_or(OperationError::MissingOperand)?;

        self.accumulator = Some(pending.perform(operand));
        self.pending = None;
        Ok(())
    }

    pub fn result(&self) -> Option<f64> {
        self.accumulator
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The first operand of the pending binary operation
    pub fn pending_operand(&self) -> Option<f64> {
        self.pending.map(|p| p.first_operand())
    }

    pub fn state(&self) -> BrainState {
        match (self.accumulator, self.pending) {
            (None, None) => BrainState::Empty,
            (Some(_), None) => BrainState::HasValue,
            (None, Some(_)) => BrainState::PendingBinary,
            (Some(_), Some(_)) => BrainState::PendingWithOperand,
        }
    }

    pub fn operations(&self) -> &OperationTable {
        &self.operations
    }
}

impl Default for CalculatorBrain {
    fn default() -> Self {
        Self::new()
    }
}
