//! Configuration loading for checkup.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layering of project and local files in [`merger`]
//!
//! # Example
//!
//! ```
//! use checkup::config::load_merged_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".checkup");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "report_width: 60").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! assert_eq!(config.report_width, 60);
//! assert_eq!(config.self_name, "checkup");
//! ```
//!
//! # Configuration File Locations
//!
//! 1. Project config (`.checkup/config.yml`)
//! 2. Local overrides (`.checkup/config.local.yml`)
//!
//! A project with neither file runs on defaults.

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{
    load_config, load_config_file, load_config_value, load_merged_config, ConfigPaths,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{CheckupConfig, InterpreterConfig};
