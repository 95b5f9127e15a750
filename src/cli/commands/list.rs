//! List command implementation.
//!
//! The `checkup list` command shows which checks a run would execute.

use crate::cli::args::ListArgs;
use crate::discovery::CheckKind;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::workspace::Workspace;

/// The list command implementation.
pub struct ListCommand {
    workspace: Workspace,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(workspace: Workspace, args: ListArgs) -> Self {
        Self { workspace, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.names {
            let names = self.workspace.catalog().names();
            for name in &names {
                ui.message(name);
            }
            return Ok(if names.is_empty() {
                CommandResult::failure(1)
            } else {
                CommandResult::success()
            });
        }

        let catalog = self.workspace.catalog().build(&self.args.patterns);
        if catalog.is_empty() {
            ui.error("No healthchecks found.");
            return Ok(CommandResult::failure(1));
        }

        let width = catalog.names().map(str::len).max().unwrap_or(0);
        let mut missing = false;
        for entry in catalog.iter() {
            let kind = entry.kind();
            missing |= kind == CheckKind::Missing;

            let mut line = format!("{:<width$}  {}", entry.name, kind.as_str(), width = width);
            if self.args.paths {
                if let Some(target) = &entry.invoke {
                    line.push_str(&format!("  {}", target.path().display()));
                }
            }
            ui.message(line.trim_end());
        }

        if missing {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
