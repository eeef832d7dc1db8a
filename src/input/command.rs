//! Calculator commands and the key bindings that produce them.

use super::key::Key;
use crate::calculator::{CalcError, CalculatorState, Operation};

/// A command the calculator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A digit `0`-`9` or the decimal point
    Digit(char),
    Operation(Operation),
    Equals,
    Percent,
    Delete,
    Clear,
}

impl Command {
    /// Look up the command bound to a key. Unbound keys return `None`.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Char(c @ ('0'..='9' | '.')) => Some(Self::Digit(c)),
            Key::Char('+') => Some(Self::Operation(Operation::Add)),
            Key::Char('-') => Some(Self::Operation(Operation::Subtract)),
            Key::Char('*' | 'x' | '×') => Some(Self::Operation(Operation::Multiply)),
            Key::Char('/' | '÷') => Some(Self::Operation(Operation::Divide)),
            Key::Char('=') | Key::Enter => Some(Self::Equals),
            Key::Char('%') => Some(Self::Percent),
            Key::Char('c' | 'C') | Key::Escape => Some(Self::Clear),
            Key::Backspace => Some(Self::Delete),
            Key::Char(_) => None,
        }
    }

    /// Run the command against the calculator state.
    pub fn apply(self, state: &mut CalculatorState) -> Result<(), CalcError> {
        match self {
            Self::Digit(d) => {
                state.enter_digit(d);
                Ok(())
            }
            Self::Operation(op) => state.choose_operation(op),
            Self::Equals => state.equals(),
            Self::Percent => {
                state.percent();
                Ok(())
            }
            Self::Delete => {
                state.delete_last();
                Ok(())
            }
            Self::Clear => {
                state.clear();
                Ok(())
            }
        }
    }

    /// Short name used in log output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Digit(_) => "digit",
            Self::Operation(_) => "operation",
            Self::Equals => "equals",
            Self::Percent => "percent",
            Self::Delete => "delete",
            Self::Clear => "clear",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(keys: &str) -> CalculatorState {
        let mut state = CalculatorState::new();
        for c in keys.chars() {
            if let Some(cmd) = Command::from_key(Key::Char(c)) {
                let _ = cmd.apply(&mut state);
            }
        }
        state
    }

    #[test]
    fn test_digit_bindings() {
        assert_eq!(Command::from_key(Key::Char('7')), Some(Command::Digit('7')));
        assert_eq!(Command::from_key(Key::Char('.')), Some(Command::Digit('.')));
    }

    #[test]
    fn test_operation_bindings() {
        assert_eq!(
            Command::from_key(Key::Char('+')),
            Some(Command::Operation(Operation::Add))
        );
        assert_eq!(
            Command::from_key(Key::Char('-')),
            Some(Command::Operation(Operation::Subtract))
        );
        assert_eq!(
            Command::from_key(Key::Char('*')),
            Some(Command::Operation(Operation::Multiply))
        );
        assert_eq!(
            Command::from_key(Key::Char('/')),
            Some(Command::Operation(Operation::Divide))
        );
    }

    #[test]
    fn test_special_key_bindings() {
        assert_eq!(Command::from_key(Key::Enter), Some(Command::Equals));
        assert_eq!(Command::from_key(Key::Char('=')), Some(Command::Equals));
        assert_eq!(Command::from_key(Key::Backspace), Some(Command::Delete));
        assert_eq!(Command::from_key(Key::Escape), Some(Command::Clear));
        assert_eq!(Command::from_key(Key::Char('%')), Some(Command::Percent));
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(Command::from_key(Key::Char('a')), None);
        assert_eq!(Command::from_key(Key::Char('(')), None);
    }

    #[test]
    fn test_apply_sequence() {
        assert_eq!(run("3+4+2=").current_operand(), "9");
        assert_eq!(run("50%").current_operand(), "0.5");
        assert_eq!(run("12*3c").current_operand(), "0");
    }

    #[test]
    fn test_apply_reports_divide_by_zero() {
        let mut state = run("5/0");
        assert_eq!(Command::Equals.apply(&mut state), Err(CalcError::DivideByZero));
        assert_eq!(state, CalculatorState::new());
    }
}
