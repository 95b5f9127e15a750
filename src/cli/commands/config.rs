//! Config command implementation.
//!
//! The `checkup config` command shows the resolved configuration,
//! including the effective search roots.

use serde::Serialize;

use crate::cli::args::ConfigArgs;
use crate::config::CheckupConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::workspace::Workspace;

/// The config command implementation.
pub struct ConfigCommand {
    workspace: Workspace,
    args: ConfigArgs,
}

/// Configuration as shown to the user: the loaded file plus the roots that
/// actually apply.
#[derive(Serialize)]
struct Resolved<'a> {
    #[serde(flatten)]
    config: &'a CheckupConfig,
    effective_roots: Vec<String>,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(workspace: Workspace, args: ConfigArgs) -> Self {
        Self { workspace, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolved = Resolved {
            config: self.workspace.config(),
            effective_roots: self
                .workspace
                .search_path()
                .roots()
                .iter()
                .map(|root| root.display().to_string())
                .collect(),
        };

        let output = if self.args.json {
            serde_json::to_string_pretty(&resolved).map_err(anyhow::Error::from)?
        } else {
            serde_yaml::to_string(&resolved).map_err(anyhow::Error::from)?
        };
        ui.message(output.trim_end());

        Ok(CommandResult::success())
    }
}
