//! Project setup shared by the commands.
//!
//! Loads configuration and decides which search roots a command sees:
//! `--root`/`CHECKUP_PATH` first, then `search_roots` from the config, and
//! the project root itself when neither names any.

use std::path::{Path, PathBuf};

use crate::config::{load_config, CheckupConfig};
use crate::discovery::{CheckCatalog, SearchPath};
use crate::error::Result;
use crate::runner::ProcessHost;

/// A project's resolved configuration and search roots.
#[derive(Debug, Clone)]
pub struct Workspace {
    project_root: PathBuf,
    config: CheckupConfig,
    search_path: SearchPath,
}

impl Workspace {
    /// Load the project's configuration and work out its search roots.
    pub fn load(
        project_root: &Path,
        config_override: Option<&Path>,
        cli_roots: &[PathBuf],
    ) -> Result<Self> {
        let config = load_config(project_root, config_override)?;

        let roots = if !cli_roots.is_empty() {
            cli_roots.to_vec()
        } else if !config.search_roots.is_empty() {
            config.resolved_roots(project_root)
        } else {
            vec![project_root.to_path_buf()]
        };
        let search_path = SearchPath::new(&roots);
        tracing::debug!("search roots: {:?}", search_path.roots());

        Ok(Self {
            project_root: project_root.to_path_buf(),
            config,
            search_path,
        })
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &CheckupConfig {
        &self.config
    }

    /// Get the effective search roots.
    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    /// Build the catalog for this workspace.
    pub fn catalog(&self) -> CheckCatalog {
        CheckCatalog::new(self.search_path.clone(), self.config.layout.clone())
            .with_self_name(self.config.self_name.clone())
    }

    /// Host that runs checks as child processes from the project root.
    pub fn host(&self) -> ProcessHost {
        let interpreter = &self.config.interpreter;
        ProcessHost::new(interpreter.native.clone(), interpreter.scripted.clone())
            .with_cwd(&self.project_root)
    }
}
