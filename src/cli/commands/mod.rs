//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands that look at checks
//! share a [`Workspace`] holding the loaded config and search roots.

pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod list;
pub mod run;
pub mod workspace;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use workspace::Workspace;
