use std::io::Write;
use std::sync::Arc;

use log::{debug, error, trace};

use calculator_brain::CalculatorBrain;
use telemetry::Measure;

use crate::config::{Config, OperationSet};
use crate::error::KeypadError;
use crate::input::{parse_line, Key};

lazy_static! {
    static ref OPERATION_MEASURE: Measure = Measure::new("keypad", "perform_operation");
}

/// Formats the brain's result for the terminal
#[derive(Debug, Clone)]
pub struct Screen {
    precision: Option<usize>,
    empty: String,
}

impl Screen {
    pub fn new(precision: Option<usize>, empty: String) -> Screen {
        Screen { precision, empty }
    }

    pub fn format(&self, value: Option<f64>) -> String {
        match (value, self.precision) {
            (None, _) => self.empty.clone(),
            (Some(v), Some(precision)) => format!("{:.*}", precision, v),
            (Some(v), None) => v.to_string(),
        }
    }
}

/// Feeds lines of keys into a brain
pub struct Session {
    brain: CalculatorBrain,
    screen: Screen,
    strict: bool,
}

impl Session {
    pub fn new(config: &Config) -> Session {
        let brain = match config.operations {
            OperationSet::Standard => CalculatorBrain::new(),
            set => CalculatorBrain::with_operations(Arc::new(set.table())),
        };

        Session {
            brain,
            screen: Screen::new(config.precision, config.empty_display.clone()),
            strict: config.strict,
        }
    }

    /// Applies every key of `line` in order
    ///
    /// In strict mode the first key that can't be applied stops the line,
    /// keys before it stay applied.
    pub fn feed(&mut self, line: &str) -> Result<Option<f64>, KeypadError> {
        for key in parse_line(line) {
            match key {
                Key::Operand(operand) => self.brain.set_operand(operand),
                Key::Symbol(symbol) => self.press(symbol)?,
            }
        }
        Ok(self.brain.result())
    }

    fn press(&mut self, symbol: &str) -> Result<(), KeypadError> {
        let brain = &mut self.brain;
        let r = OPERATION_MEASURE.stats(|| {
            brain
                .try_perform_operation(symbol)
                .map_err(KeypadError::from)
        });

        match r {
            Err(e) if !self.strict => {
                debug!("Ignoring \"{}\": {}", symbol, e);
                Ok(())
            }
            r => r,
        }
    }

    /// Feeds `line` and writes the display to `out`
    ///
    /// A rejected line is logged and reported on stderr, the display is
    /// written either way.
    pub fn run_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<(), KeypadError> {
        if let Err(e) = self.feed(line) {
            error!("Rejected \"{}\": {}", line, e);
            eprintln!("{}", e);
        }
        trace!("State {:?}", self.brain().state());
        writeln!(out, "{}", self.display())?;
        Ok(())
    }

    pub fn display(&self) -> String {
        self.screen.format(self.brain.result())
    }

    pub fn brain(&self) -> &CalculatorBrain {
        &self.brain
    }
}
