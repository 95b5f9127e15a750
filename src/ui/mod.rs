//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for writing to the terminal
//! - [`MockUI`] for capturing output in tests
//! - [`CheckupTheme`] for status styling
//!
//! # Example
//!
//! ```
//! use checkup::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.report_line("- ✅ OK fine");
//! ui.error("something broke");
//!
//! assert_eq!(ui.report_lines(), &["- ✅ OK fine"]);
//! assert_eq!(ui.errors(), &["something broke"]);
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, CheckupTheme};

/// Trait for user-facing output.
///
/// Commands write through this trait so they can be tested without a
/// terminal.
pub trait UserInterface {
    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display one line of a rendered report document.
    fn report_line(&mut self, line: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
