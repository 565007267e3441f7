use derive_more::Display;

/// The reason an operation left the brain untouched
#[derive(Debug, Display, Clone, PartialEq)]
pub enum OperationError {
    #[display(fmt = "Unknown Symbol: {}", _0)]
    UnknownSymbol(String),

    #[display(fmt = "Missing Operand")]
    MissingOperand,

    #[display(fmt = "No Pending Operation")]
    NoPendingOperation,
}

impl std::error::Error for OperationError {}
