//! Check report writing and formatting.
//!
//! - [`Report`] - The sink a check writes its findings into
//! - [`Status`] - Line status (info, ok, warning, error)
//! - [`format_line`] / [`format_banner`] - Pure rendering helpers

pub mod format;
pub mod sink;
pub mod status;

pub use format::{
    format_banner, format_line, format_summary, rewrite_help_links, DEFAULT_WIDTH,
};
pub use sink::{Report, RunSummary};
pub use status::Status;
