//! Display rendering.
//!
//! Renders the calculator display as two right-aligned lines:
//! - The running total with the pending operation symbol, muted
//! - The current entry
//!
//! In JSON mode both lines are emitted as one object instead.

use crate::calculator::DisplayText;

/// Render the display as two lines, each right-aligned to `width` columns.
///
/// Lines longer than `width` are written in full.
pub fn render_display(display: &DisplayText, width: usize) -> String {
    format!(
        "{:>width$}\n{:>width$}\n",
        display.previous,
        display.current,
        width = width
    )
}

/// Render the display as a single JSON object.
pub fn render_json(display: &DisplayText) -> serde_json::Result<String> {
    serde_json::to_string(display)
}

/// Key bindings shown by `:help`.
pub const HELP: &str = "\
keys:
  0-9 .          enter a digit or decimal point
  + - * /        choose an operation (x and × also multiply, ÷ divides)
  = or empty     evaluate
  %              divide the current entry by 100
  bs             delete the last character
  esc, c         clear
  other words are ignored
commands:
  :copy          copy the current entry to the clipboard
  :help          show this help
  :quit, :q      exit
";
