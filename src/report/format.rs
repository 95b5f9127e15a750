//! Report line and banner formatting.
//!
//! Formatting is pure: nothing here touches a [`Report`](super::Report).

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::sink::RunSummary;
use super::status::Status;

/// Default width of the separator rule and the summary line.
pub const DEFAULT_WIDTH: usize = 78;

/// `:h topic`, `:he topic`, `:hel topic` and `:help topic`.
static HELP_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":h(?:e(?:lp?)?)? ([^\s|]\S*)").unwrap());

/// Format one advisory line.
///
/// ```
/// use checkup::report::{format_line, Status};
///
/// assert_eq!(format_line(Status::Ok, "fine", &[]), "- ✅ OK fine");
/// ```
pub fn format_line(status: Status, message: &str, advice: &[&str]) -> String {
    let mut output = String::from("- ");
    if status != Status::None {
        output.push_str(&status.label());
        output.push(' ');
    }
    output.push_str(&indent_after_first_line(message, 2));

    let advice: Vec<&str> = advice.iter().copied().filter(|a| !a.is_empty()).collect();
    if !advice.is_empty() {
        output.push_str("\n  - ADVICE:");
        for item in advice {
            output.push_str("\n    - ");
            output.push_str(&indent_after_first_line(item, 6));
        }
    }

    rewrite_help_links(&output).into_owned()
}

/// Rewrite `:h topic` shorthand into the `:help |topic|` link form.
pub fn rewrite_help_links(text: &str) -> Cow<'_, str> {
    HELP_REF.replace_all(text, ":help |$1|")
}

/// Indent every non-empty line after the first by `columns` spaces.
fn indent_after_first_line(text: &str, columns: usize) -> String {
    let pad = " ".repeat(columns);
    let mut lines = text.split('\n');
    let mut out = lines.next().unwrap_or_default().to_string();
    for line in lines {
        out.push('\n');
        if !line.is_empty() {
            out.push_str(&pad);
        }
        out.push_str(line);
    }
    out
}

/// Summary shown on the right of a check's header line.
///
/// Warnings come before errors; a clean run shows the success glyph.
pub fn format_summary(summary: RunSummary) -> String {
    let mut out = String::new();
    if summary.warnings > 0 {
        out.push_str(&format!(" {} {}", summary.warnings, Status::Warn.glyph()));
    }
    if summary.errors > 0 {
        out.push_str(&format!(" {} {}", summary.errors, Status::Error.glyph()));
    }
    if out.is_empty() {
        out.push_str(Status::Ok.glyph());
    }
    out
}

/// Three banner lines opening a check's section: a separator rule, the
/// name with its right-aligned summary, and a blank line.
pub fn format_banner(name: &str, summary: RunSummary, width: usize) -> Vec<String> {
    let title = format!("{}:", name);
    let summary = format_summary(summary);
    let used = console::measure_text_width(&title) + console::measure_text_width(&summary);
    let pad = width.saturating_sub(used).max(1);

    vec![
        "=".repeat(width),
        format!("{}{}{}", title, " ".repeat(pad), summary),
        String::new(),
    ]
}
