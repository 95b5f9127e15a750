//! Checkup - Pluggable health checks.
//!
//! Checkup finds health checks contributed by plugins under a list of search
//! roots, runs each one in isolation and renders a single report with a
//! summary banner per check.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and layering
//! - [`discovery`] - Finding checks and naming them
//! - [`error`] - Error types and result aliases
//! - [`report`] - The report sink checks write into, and its formatting
//! - [`runner`] - Running checks with fault isolation
//! - [`ui`] - Terminal output and styling
//!
//! # Example
//!
//! ```
//! use checkup::discovery::{CheckCatalog, Layout, SearchPath};
//! use checkup::report::Report;
//! use checkup::runner::{Registry, Runner};
//! use std::fs;
//!
//! let root = tempfile::TempDir::new().unwrap();
//! let check = root.path().join("checks/disk/health.sh");
//! fs::create_dir_all(check.parent().unwrap()).unwrap();
//! fs::write(&check, "").unwrap();
//!
//! let mut registry = Registry::new();
//! registry.register_fn("disk", |report: &mut Report| {
//!     report.ok("plenty of space");
//!     Ok(())
//! });
//!
//! let catalog = CheckCatalog::new(SearchPath::new([root.path()]), Layout::default());
//! let document = Runner::new(&catalog, &registry).run(&["disk"]);
//! assert!(document.is_healthy());
//! assert!(document.to_text().contains("- ✅ OK plenty of space"));
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod report;
pub mod runner;
pub mod ui;

pub use error::{CheckupError, Result};
