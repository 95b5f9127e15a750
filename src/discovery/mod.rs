//! Check discovery.
//!
//! This module finds check modules contributed under a list of search roots:
//!
//! - [`PathResolver`] - Expands a dotted pattern into check files
//! - [`NameNormalizer`] - Maps a check file back to its canonical name
//! - [`CheckCatalog`] - Builds the ordered, deduplicated set of checks to run
//!
//! # Example
//!
//! ```
//! use checkup::discovery::{CheckCatalog, CheckKind, Layout, SearchPath};
//!
//! let catalog = CheckCatalog::new(SearchPath::new(["/nonexistent"]), Layout::default());
//! let selected = catalog.build(&["net.dns"]);
//!
//! // Nothing lives under the root, so the request is reported as missing.
//! assert_eq!(selected.get("net.dns").unwrap().kind(), CheckKind::Missing);
//! ```

pub mod catalog;
pub mod layout;
pub mod names;
pub mod resolver;

pub use catalog::{
    Catalog, CheckCatalog, CheckEntry, CheckKind, Invocable, ALL_CHECKS, DEFAULT_SELF_NAME,
};
pub use layout::{normalize_path, relative_slash, Layout, SearchPath};
pub use names::{Convention, NameNormalizer};
pub use resolver::{ModuleLocation, PathResolver};
