//! The rendered report of a whole run.

use serde::Serialize;

use crate::discovery::CheckKind;
use crate::report::{format_banner, RunSummary};

/// Line shown when a run selected no checks at all.
pub const NO_CHECKS_FOUND: &str = "ERROR: No healthchecks found.";

/// Outcome of one check within a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    /// Canonical check name.
    pub name: String,
    /// How the check was run.
    pub kind: CheckKind,
    /// Number of warnings reported.
    pub warnings: usize,
    /// Number of errors reported.
    pub errors: usize,
}

/// Ordered lines of a run's report, plus one summary per check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    lines: Vec<String>,
    sections: Vec<SectionSummary>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Document for a run that found nothing to check.
    pub fn no_checks_found() -> Self {
        Self {
            lines: vec![NO_CHECKS_FOUND.to_string()],
            sections: Vec::new(),
        }
    }

    /// Append one check's section: banner, body, and a closing blank line.
    pub fn append_section(
        &mut self,
        name: &str,
        kind: CheckKind,
        summary: RunSummary,
        body: Vec<String>,
        width: usize,
    ) {
        self.lines.extend(format_banner(name, summary, width));
        self.lines.extend(body);
        self.lines.push(String::new());
        self.sections.push(SectionSummary {
            name: name.to_string(),
            kind,
            warnings: summary.warnings,
            errors: summary.errors,
        });
    }

    /// All lines in display order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Per-check outcomes in run order.
    pub fn sections(&self) -> &[SectionSummary] {
        &self.sections
    }

    /// Total warnings across all checks.
    pub fn warnings(&self) -> usize {
        self.sections.iter().map(|s| s.warnings).sum()
    }

    /// Total errors across all checks.
    pub fn errors(&self) -> usize {
        self.sections.iter().map(|s| s.errors).sum()
    }

    /// True when at least one check ran and none reported an error.
    pub fn is_healthy(&self) -> bool {
        !self.sections.is_empty() && self.errors() == 0
    }

    /// Lines joined with newlines.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}
