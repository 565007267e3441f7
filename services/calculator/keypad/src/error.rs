use derive_more::Display;

use calculator_brain::OperationError;
use telemetry::IsErr;

#[derive(Debug, Display)]
pub enum KeypadError {
    #[display(fmt = "Operation Error: {}", _0)]
    Operation(OperationError),

    #[display(fmt = "Config Error: {}", _0)]
    ConfigError(String),

    #[display(fmt = "IO Error: {}", _0)]
    IOError(String),
}

impl std::error::Error for KeypadError {}

// Missing operands are ordinary key sequences, not failures
impl IsErr for KeypadError {
    fn is_err(&self) -> bool {
        !matches!(
            self,
            KeypadError::Operation(OperationError::MissingOperand)
                | KeypadError::Operation(OperationError::NoPendingOperation)
        )
    }
}

impl From<OperationError> for KeypadError {
    fn from(e: OperationError) -> Self {
        KeypadError::Operation(e)
    }
}

impl From<figment::Error> for KeypadError {
    fn from(e: figment::Error) -> Self {
        KeypadError::ConfigError(e.to_string())
    }
}

impl From<std::io::Error> for KeypadError {
    fn from(e: std::io::Error) -> Self {
        KeypadError::IOError(e.to_string())
    }
}
