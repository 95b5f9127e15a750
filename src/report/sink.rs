//! Report sink handed to checks.
//!
//! A [`Report`] collects the formatted lines one check produces, along with
//! its warning and error tally. The runner creates a fresh report for every
//! check and drains it once the check returns.

use serde::Serialize;

use super::format::format_line;
use super::status::Status;

/// Warning and error counts for a single check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Number of `warn` lines.
    pub warnings: usize,
    /// Number of `error` lines.
    pub errors: usize,
}

impl RunSummary {
    /// True when nothing was reported as a warning or error.
    pub fn is_clean(&self) -> bool {
        self.warnings == 0 && self.errors == 0
    }

    fn record(&mut self, status: Status) {
        match status {
            Status::Warn => self.warnings += 1,
            Status::Error => self.errors += 1,
            Status::None | Status::Ok => {}
        }
    }
}

/// Lines written by one check.
///
/// # Example
///
/// ```
/// use checkup::report::Report;
///
/// let mut report = Report::new();
/// report.start("Network");
/// report.ok("DNS resolves");
/// report.warn("Proxy not set", &["Export HTTPS_PROXY"]);
///
/// assert_eq!(report.summary().warnings, 1);
/// assert_eq!(report.drain()[0], "Network ~");
/// ```
#[derive(Debug, Default)]
pub struct Report {
    lines: Vec<String>,
    summary: RunSummary,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a titled section.
    pub fn start(&mut self, name: &str) {
        self.collect(&format!("\n{} ~", name));
    }

    /// Report an informational line.
    pub fn info(&mut self, msg: &str) {
        self.push(Status::None, msg, &[]);
    }

    /// Report something that checked out fine.
    pub fn ok(&mut self, msg: &str) {
        self.push(Status::Ok, msg, &[]);
    }

    /// Report a warning with optional advice.
    pub fn warn(&mut self, msg: &str, advice: &[&str]) {
        self.push(Status::Warn, msg, advice);
    }

    /// Report an error with optional advice.
    pub fn error(&mut self, msg: &str, advice: &[&str]) {
        self.push(Status::Error, msg, advice);
    }

    /// Report a line with the given status.
    pub fn push(&mut self, status: Status, msg: &str, advice: &[&str]) {
        let line = format_line(status, msg, advice);
        self.collect(&line);
        self.summary.record(status);
    }

    /// Lines collected so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Warning and error tally so far.
    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Check if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Take the collected lines, leaving the report empty.
    ///
    /// A report that opens with `start()` begins with a blank line; exactly
    /// that one blank line is dropped. The tally is kept.
    pub fn drain(&mut self) -> Vec<String> {
        let mut lines = std::mem::take(&mut self.lines);
        let opens_section = lines.len() > 1
            && lines[0].is_empty()
            && lines[1].ends_with(" ~");
        if opens_section {
            lines.remove(0);
        }
        lines
    }

    fn collect(&mut self, text: &str) {
        self.lines.extend(text.split('\n').map(str::to_string));
    }
}
