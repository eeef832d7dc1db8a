//! Calculator module for four-function arithmetic driven by key input.
//!
//! This module provides:
//! - The calculator state machine and its commands
//! - Display formatting with thousand separators
//! - Copying results to the clipboard

mod clipboard;
mod error;
mod format;
mod numeral;
mod state;

pub use clipboard::copy_to_clipboard;
pub use error::{CalcError, ClipboardError};
pub use format::format_number;
pub use state::{CalculatorState, DisplayText, Operation};
