//! Terminal session: reads key lines, dispatches commands, renders the display.

use super::display::{HELP, render_display};
use crate::calculator::{CalcError, CalculatorState, copy_to_clipboard};
use crate::config::DisplayConfig;
use crate::input::{Command, Key, parse_keys};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Whether the session keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the calculator state for the lifetime of one session.
pub struct Session<R, W> {
    state: CalculatorState,
    config: DisplayConfig,
    input: R,
    output: W,
    interactive: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: DisplayConfig, input: R, output: W) -> Self {
        Self {
            state: CalculatorState::new(),
            config,
            input,
            output,
            interactive: true,
        }
    }

    /// Set whether warnings may block waiting for acknowledgement.
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Read key lines until EOF or `:quit`, rendering after every line.
    pub fn run(&mut self) -> io::Result<()> {
        self.render()?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            if self.handle_line(line.trim_end_matches(['\r', '\n']))? == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle one line of input: a `:` command or a sequence of keys.
    pub fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        if let Some(command) = line.trim().strip_prefix(':') {
            return self.handle_meta(command.trim());
        }

        for key in parse_keys(line) {
            self.press(key)?;
        }
        self.render()?;

        Ok(Flow::Continue)
    }

    /// Press every key in order without rendering.
    pub fn press_all(&mut self, keys: impl IntoIterator<Item = Key>) -> io::Result<()> {
        for key in keys {
            self.press(key)?;
        }
        Ok(())
    }

    /// Dispatch a single key press.
    pub fn press(&mut self, key: Key) -> io::Result<()> {
        let Some(command) = Command::from_key(key) else {
            debug!(?key, "Ignoring unbound key");
            return Ok(());
        };

        debug!(command = command.name(), ?key, "Dispatching");

        let was_fresh_result = self.state.should_reset_screen();
        match command.apply(&mut self.state) {
            Ok(()) => {
                let computed = command == Command::Equals
                    && !was_fresh_result
                    && self.state.should_reset_screen();
                if computed && self.config.copy_on_equals {
                    self.copy_current()?;
                }
                Ok(())
            }
            Err(err) => self.warn(err),
        }
    }

    /// Write the display to the output.
    pub fn render(&mut self) -> io::Result<()> {
        let text = render_display(&self.state.display(), self.config.width);
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    fn handle_meta(&mut self, command: &str) -> io::Result<Flow> {
        match command {
            "q" | "quit" => return Ok(Flow::Quit),
            "copy" => self.copy_current()?,
            "help" => self.output.write_all(HELP.as_bytes())?,
            other => writeln!(self.output, "Unknown command: :{}", other)?,
        }
        Ok(Flow::Continue)
    }

    /// Show a warning and, in an interactive session, wait for Enter.
    fn warn(&mut self, err: CalcError) -> io::Result<()> {
        warn!(%err, "Calculation rejected, state cleared");
        writeln!(self.output, "{}", err)?;

        if self.interactive && self.config.confirm_warnings {
            write!(self.output, "Press Enter to continue")?;
            self.output.flush()?;
            let mut ack = String::new();
            self.input.read_line(&mut ack)?;
        }

        Ok(())
    }

    fn copy_current(&mut self) -> io::Result<()> {
        let text = self.state.current_operand().to_string();
        match copy_to_clipboard(&text) {
            Ok(()) => {
                debug!(%text, "Copied to clipboard");
                writeln!(self.output, "Copied {}", text)
            }
            Err(err) => {
                warn!(%err, "Clipboard copy failed");
                writeln!(self.output, "{}", err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        let config = DisplayConfig {
            width: 6,
            ..DisplayConfig::default()
        };
        Session::new(config, Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(session: Session<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn test_handle_line_renders() {
        let mut s = session("");
        s.handle_line("12+3").unwrap();
        assert_eq!(s.state().current_operand(), "3");
        assert_eq!(output(s), "  12 +\n     3\n");
    }

    #[test]
    fn test_empty_line_evaluates() {
        let mut s = session("");
        s.handle_line("7*6").unwrap();
        s.handle_line("").unwrap();
        assert_eq!(s.state().current_operand(), "42");
    }

    #[test]
    fn test_quit_command() {
        let mut s = session("");
        assert_eq!(s.handle_line(":quit").unwrap(), Flow::Quit);
        assert_eq!(s.handle_line(" :q ").unwrap(), Flow::Quit);
    }

    #[test]
    fn test_unknown_meta_command() {
        let mut s = session("");
        assert_eq!(s.handle_line(":frobnicate").unwrap(), Flow::Continue);
        assert!(output(s).contains("Unknown command: :frobnicate"));
    }

    #[test]
    fn test_divide_by_zero_waits_for_acknowledgement() {
        // The acknowledgement line is consumed by the warning, not run as keys
        let mut s = session("9\n");
        s.press_all(parse_keys("5/0=")).unwrap();
        assert_eq!(s.state(), &CalculatorState::new());

        let mut rest = String::new();
        s.input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "");

        let out = output(s);
        assert!(out.contains("Cannot divide by zero"));
        assert!(out.contains("Press Enter to continue"));
    }

    /// Lines reporting a clipboard copy, whether it succeeded or not.
    fn copy_outcomes(out: &str) -> usize {
        out.lines()
            .filter(|line| line.starts_with("Copied ") || line.starts_with("Failed to "))
            .count()
    }

    #[test]
    fn test_copy_on_equals_only_for_computed_results() {
        let config = DisplayConfig {
            copy_on_equals: true,
            ..DisplayConfig::default()
        };
        let mut s = Session::new(config, Cursor::new(Vec::new()), Vec::new())
            .with_interactive(false);

        // The repeated `=` and the chained `+` must not copy
        s.press_all(parse_keys("2+2=5+1==")).unwrap();
        assert_eq!(s.state().current_operand(), "6");
        assert!(s.state().should_reset_screen());
        assert_eq!(copy_outcomes(&output(s)), 2);
    }

    #[test]
    fn test_copy_disabled_by_default() {
        let mut s = session("").with_interactive(false);
        s.press_all(parse_keys("2+2=")).unwrap();
        assert_eq!(copy_outcomes(&output(s)), 0);
    }

    #[test]
    fn test_copy_command_reports_outcome() {
        let mut s = session("");
        s.handle_line("1234").unwrap();
        let before = s.state().clone();

        assert_eq!(s.handle_line(":copy").unwrap(), Flow::Continue);
        assert_eq!(s.state(), &before);
        assert_eq!(copy_outcomes(&output(s)), 1);
    }

    #[test]
    fn test_non_interactive_warning_does_not_block() {
        let mut s = session("9\n").with_interactive(false);
        s.press_all(parse_keys("5/0=")).unwrap();

        let mut rest = String::new();
        s.input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "9\n");
        assert!(!output(s).contains("Press Enter"));
    }
}
