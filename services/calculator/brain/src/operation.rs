use std::collections::HashMap;
use std::iter::FromIterator;

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// What a symbol does to the brain when it is applied
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    Constant(f64),
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
    Equals,
}

/// The built-in keys
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, AsRefStr, EnumString, EnumIter)]
pub enum Symbol {
    #[strum(serialize = "π")]
    Pi,
    #[strum(serialize = "e")]
    E,
    #[strum(serialize = "√")]
    SquareRoot,
    #[strum(serialize = "cos")]
    Cosine,
    #[strum(serialize = "±")]
    ChangeSign,
    #[strum(serialize = "×")]
    Multiply,
    #[strum(serialize = "=")]
    Equals,
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "−")]
    Subtract,
    #[strum(serialize = "÷")]
    Divide,
    #[strum(serialize = "sin")]
    Sine,
    #[strum(serialize = "tan")]
    Tangent,
    #[strum(serialize = "x²")]
    Square,
    #[strum(serialize = "ln")]
    NaturalLog,
}

impl Symbol {
    pub const STANDARD: [Symbol; 7] = [
        Symbol::Pi,
        Symbol::E,
        Symbol::SquareRoot,
        Symbol::Cosine,
        Symbol::ChangeSign,
        Symbol::Multiply,
        Symbol::Equals,
    ];

    pub fn operation(self) -> Operation {
        match self {
            Symbol::Pi => Operation::Constant(std::f64::consts::PI),
            Symbol::E => Operation::Constant(std::f64::consts::E),
            Symbol::SquareRoot => Operation::Unary(f64::sqrt),
            Symbol::Cosine => Operation::Unary(f64::cos),
            Symbol::ChangeSign => Operation::Unary(|x| -x),
            Symbol::Multiply => Operation::Binary(|l, r| l * r),
            Symbol::Equals => Operation::Equals,
            Symbol::Add => Operation::Binary(|l, r| l + r),
            Symbol::Subtract => Operation::Binary(|l, r| l - r),
            Symbol::Divide => Operation::Binary(|l, r| l / r),
            Symbol::Sine => Operation::Unary(f64::sin),
            Symbol::Tangent => Operation::Unary(f64::tan),
            Symbol::Square => Operation::Unary(|x| x * x),
            Symbol::NaturalLog => Operation::Unary(f64::ln),
        }
    }
}

/// Maps operator symbols to the operation they perform
#[derive(Debug, Clone)]
pub struct OperationTable {
    operations: HashMap<String, Operation>,
}

impl OperationTable {
    /// An empty table, every symbol is unknown
    pub fn new() -> OperationTable {
        OperationTable {
            operations: HashMap::new(),
        }
    }

    /// `π e √ cos ± × =`
    pub fn standard() -> OperationTable {
        Symbol::STANDARD.iter().copied().collect()
    }

    /// The standard keys plus `+ − ÷ sin tan x² ln`
    pub fn scientific() -> OperationTable {
        Symbol::iter().collect()
    }

    /// Returns the operation previously bound to `symbol`, if any
    pub fn insert<S: Into<String>>(
        &mut self,
        symbol: S,
        operation: Operation,
    ) -> Option<Operation> {
        self.operations.insert(symbol.into(), operation)
    }

    pub fn get(&self, symbol: &str) -> Option<Operation> {
        self.operations.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.operations.contains_key(symbol)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.operations.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl Default for OperationTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromIterator<Symbol> for OperationTable {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        iter.into_iter()
            .map(|symbol| (symbol.as_ref().to_string(), symbol.operation()))
            .collect()
    }
}

impl FromIterator<(String, Operation)> for OperationTable {
    fn from_iter<I: IntoIterator<Item = (String, Operation)>>(iter: I) -> Self {
        OperationTable {
            operations: iter.into_iter().collect(),
        }
    }
}

/// A binary operation waiting for its second operand
#[derive(Debug, Clone, Copy)]
pub struct PendingBinaryOperation {
    function: fn(f64, f64) -> f64,
    first_operand: f64,
}

impl PendingBinaryOperation {
    pub fn new(function: fn(f64, f64) -> f64, first_operand: f64) -> PendingBinaryOperation {
        PendingBinaryOperation {
            function,
            first_operand,
        }
    }

    pub fn first_operand(&self) -> f64 {
        self.first_operand
    }

    pub fn perform(&self, second_operand: f64) -> f64 {
        (self.function)(self.first_operand, second_operand)
    }
}
