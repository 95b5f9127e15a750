//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, CheckupTheme, UserInterface};

/// UI that writes to the terminal.
///
/// Report lines and messages go to stdout; errors go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: CheckupTheme,
}

impl TerminalUI {
    /// Create a terminal UI, styled when colors are available.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            CheckupTheme::new()
        } else {
            CheckupTheme::plain()
        };
        Self::with_theme(theme)
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(theme: CheckupTheme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn report_line(&mut self, line: &str) {
        writeln!(self.out, "{}", self.theme.paint_line(line)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}
