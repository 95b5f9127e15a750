//! Check execution orchestration.
//!
//! - [`Runner`] - Runs a catalog's checks one at a time with fault isolation
//! - [`CheckHost`] - Host-side interface that calls a check's entry point
//! - [`Registry`] / [`ProcessHost`] - In-process and child-process hosts
//! - [`Document`] - The assembled report
//!
//! # Example
//!
//! ```
//! use checkup::discovery::{CheckCatalog, Layout, SearchPath};
//! use checkup::runner::{Registry, Runner};
//!
//! let catalog = CheckCatalog::new(SearchPath::new(["/nonexistent"]), Layout::default());
//! let registry = Registry::new();
//!
//! let document = Runner::new(&catalog, &registry).run(&["net"]);
//! assert!(document.to_text().contains("No healthcheck found for \"net\""));
//! ```

pub mod document;
pub mod engine;
pub mod host;
pub mod process;

pub use document::{Document, SectionSummary, NO_CHECKS_FOUND};
pub use engine::Runner;
pub use host::{CheckHost, HealthCheck, Registry};
pub use process::{replay, ProcessHost, CHECK_MODULE_ENV, CHECK_NAME_ENV};
