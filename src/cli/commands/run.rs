//! Run command implementation.
//!
//! The `checkup run` command runs the selected checks and prints the report.

use crate::cli::args::RunArgs;
use crate::error::Result;
use crate::runner::{Document, Runner};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::workspace::Workspace;

/// The run command implementation.
pub struct RunCommand {
    workspace: Workspace,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(workspace: Workspace, args: RunArgs) -> Self {
        Self { workspace, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }

    /// Run the checks and return the assembled document.
    pub fn document(&self) -> Document {
        let catalog = self.workspace.catalog();
        let host = self.workspace.host();
        Runner::new(&catalog, &host)
            .with_width(self.workspace.config().report_width)
            .run(&self.args.patterns)
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let document = self.document();
        tracing::debug!(
            "{} check(s): {} warning(s), {} error(s)",
            document.sections().len(),
            document.warnings(),
            document.errors()
        );

        if self.args.json {
            let json = serde_json::to_string_pretty(&document).map_err(anyhow::Error::from)?;
            ui.message(&json);
        } else {
            for line in document.lines() {
                ui.report_line(line);
            }
        }

        if document.is_healthy() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
