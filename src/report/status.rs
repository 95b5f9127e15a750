//! Status vocabulary for report lines.
//!
//! `Status` provides the single canonical set of labels and glyphs used in
//! check reports and in the per-check summary banner.

/// Status of one report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Plain informational line.
    None,
    /// Something checked out fine.
    Ok,
    /// Something may need attention.
    Warn,
    /// Something is broken.
    Error,
}

impl Status {
    /// Glyph shown before the keyword and in summaries.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Ok => "✅",
            Self::Warn => "⚠️",
            Self::Error => "❌",
        }
    }

    /// Keyword shown after the glyph.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Ok => "OK",
            Self::Warn => "WARNING",
            Self::Error => "ERROR",
        }
    }

    /// Full label: glyph and keyword, empty for [`Status::None`].
    pub fn label(self) -> String {
        match self {
            Self::None => String::new(),
            _ => format!("{} {}", self.glyph(), self.keyword()),
        }
    }
}
