//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures everything
//! written to it for later assertion.

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    report_lines: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create an empty MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured report lines.
    pub fn report_lines(&self) -> &[String] {
        &self.report_lines
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Captured report lines joined with newlines.
    pub fn report_text(&self) -> String {
        self.report_lines.join("\n")
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn report_line(&mut self, line: &str) {
        self.report_lines.push(line.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
