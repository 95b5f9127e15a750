//! Error types for checkup operations.
//!
//! This module defines [`CheckupError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Problems with a single check never surface here; the runner turns them
//!   into `ERROR` lines in the report
//! - Use `CheckupError` for failures of the tool itself (config, I/O)
//! - Use `anyhow::Error` (via `CheckupError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for checkup operations.
#[derive(Debug, Error)]
pub enum CheckupError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A name pattern could not be turned into a glob.
    #[error("Invalid check pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for checkup operations.
pub type Result<T> = std::result::Result<T, CheckupError>;
