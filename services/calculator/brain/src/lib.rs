#[macro_use]
extern crate lazy_static;

pub use brain::{BrainState, CalculatorBrain};
pub use error::OperationError;
pub use operation::{Operation, OperationTable, PendingBinaryOperation, Symbol};

mod brain;
mod error;
mod operation;
