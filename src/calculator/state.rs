//! The calculator state machine.
//!
//! Holds the operand being typed, the pending left-hand operand and the
//! selected operation. Every key press maps onto one of the commands here,
//! and [`CalculatorState::display`] turns the result into display text.

use super::error::CalcError;
use super::format::format_number;
use super::numeral::{format_value, parse_numeral};
use serde::Serialize;

/// A binary operation, or none pending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Operation {
    #[default]
    None,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// The symbol shown after the running total, empty for `None`.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operation. Returns `None` when no operation is pending.
    fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Self::None => None,
            Self::Add => Some(lhs + rhs),
            Self::Subtract => Some(lhs - rhs),
            Self::Multiply => Some(lhs * rhs),
            Self::Divide => Some(lhs / rhs),
        }
    }
}

/// The two display lines.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DisplayText {
    /// The current entry line.
    pub current: String,
    /// The running total line, e.g. `"1,234 +"`. Empty with no pending operation.
    pub previous: String,
}

/// Interaction state of one calculator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalculatorState {
    current_operand: String,
    previous_operand: String,
    operation: Operation,
    should_reset_screen: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_operand: "0".to_string(),
            previous_operand: String::new(),
            operation: Operation::None,
            should_reset_screen: false,
        }
    }
}

impl CalculatorState {
    /// Create a calculator showing `0` with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// The operand being typed or the last result.
    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    /// The left-hand operand of the pending operation, empty if none.
    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    /// The pending operation.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Whether the next digit starts a new number instead of appending.
    pub fn should_reset_screen(&self) -> bool {
        self.should_reset_screen
    }

    /// Enter a digit `0`-`9` or a decimal point.
    ///
    /// Any other character is ignored, as is a second decimal point.
    pub fn enter_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() && digit != '.' {
            return;
        }

        if self.should_reset_screen {
            self.current_operand.clear();
            self.should_reset_screen = false;
        }

        if digit == '.' && self.current_operand.contains('.') {
            return;
        }

        if self.current_operand == "0" && digit != '.' {
            self.current_operand = digit.to_string();
        } else {
            self.current_operand.push(digit);
        }
    }

    /// Select the operation to apply to the current operand.
    ///
    /// Does nothing while the current operand is empty. A pending operation is
    /// evaluated first, so `3 + 4 +` leaves `7 +` on the display.
    ///
    /// If that evaluation divides by zero the state is cleared, the new
    /// operation is applied on top of the cleared `"0"`, and the error is
    /// returned so the caller can warn.
    pub fn choose_operation(&mut self, operation: Operation) -> Result<(), CalcError> {
        if self.current_operand.is_empty() {
            return Ok(());
        }

        let chained = if self.previous_operand.is_empty() {
            Ok(())
        } else {
            self.equals()
        };

        self.operation = operation;
        self.previous_operand = std::mem::take(&mut self.current_operand);

        chained
    }

    /// Evaluate the pending operation.
    ///
    /// Does nothing if there is no pending operation or either operand does
    /// not parse. Dividing by zero clears the state and returns
    /// [`CalcError::DivideByZero`].
    pub fn equals(&mut self) -> Result<(), CalcError> {
        let (Some(prev), Some(current)) = (
            parse_numeral(&self.previous_operand),
            parse_numeral(&self.current_operand),
        ) else {
            return Ok(());
        };

        if self.operation == Operation::Divide && current == 0.0 {
            self.clear();
            return Err(CalcError::DivideByZero);
        }

        let Some(result) = self.operation.apply(prev, current) else {
            return Ok(());
        };

        self.current_operand = format_value(result);
        self.operation = Operation::None;
        self.previous_operand.clear();
        self.should_reset_screen = true;

        Ok(())
    }

    /// Divide the current operand by 100.
    pub fn percent(&mut self) {
        if let Some(value) = parse_numeral(&self.current_operand) {
            self.current_operand = format_value(value / 100.0);
        }
    }

    /// Remove the last typed character. Never goes below `"0"`.
    pub fn delete_last(&mut self) {
        if self.current_operand == "0" {
            return;
        }

        if self.current_operand.chars().count() == 1 {
            self.current_operand = "0".to_string();
        } else {
            self.current_operand.pop();
        }
    }

    /// Reset to the initial state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The text to show on the two display lines.
    pub fn display(&self) -> DisplayText {
        let previous = match self.operation {
            Operation::None => String::new(),
            op => format!("{} {}", format_number(&self.previous_operand), op.symbol()),
        };

        DisplayText {
            current: format_number(&self.current_operand),
            previous,
        }
    }
}
