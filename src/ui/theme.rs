//! Visual theme and styling.

use console::Style;

use crate::report::Status;

/// Checkup's visual theme.
#[derive(Debug, Clone)]
pub struct CheckupTheme {
    /// Style for `OK` labels (green).
    pub ok: Style,
    /// Style for `WARNING` labels (orange).
    pub warning: Style,
    /// Style for `ERROR` labels (red bold).
    pub error: Style,
    /// Style for section header lines (bold).
    pub header: Style,
    /// Style for separator rules and secondary text (dim).
    pub dim: Style,
}

impl Default for CheckupTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckupTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            ok: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            ok: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            dim: Style::new(),
        }
    }

    fn status_style(&self, status: Status) -> Option<&Style> {
        match status {
            Status::Ok => Some(&self.ok),
            Status::Warn => Some(&self.warning),
            Status::Error => Some(&self.error),
            Status::None => None,
        }
    }

    /// Style one line of a rendered document.
    ///
    /// Status labels, separator rules and section headers are styled; the
    /// text itself is never altered.
    pub fn paint_line(&self, line: &str) -> String {
        if !line.is_empty() && line.chars().all(|c| c == '=') {
            return self.dim.apply_to(line).to_string();
        }

        if let Some(rest) = line.strip_prefix("- ") {
            for status in [Status::Ok, Status::Warn, Status::Error] {
                let label = status.label();
                if let (Some(tail), Some(style)) =
                    (rest.strip_prefix(label.as_str()), self.status_style(status))
                {
                    return format!("- {}{}", style.apply_to(&label), tail);
                }
            }
            return line.to_string();
        }

        if line.ends_with(" ~") {
            return self.header.apply_to(line).to_string();
        }
        line.to_string()
    }

    /// Format an error message for the terminal.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(msg))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
