//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Checkup - Run health checks contributed by plugins and report the results.
#[derive(Debug, Parser)]
#[command(name = "checkup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .checkup/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Search root for checks, in priority order (repeatable)
    ///
    /// Give every root at one level; roots given after the subcommand
    /// replace those given before it.
    #[arg(
        short,
        long = "root",
        global = true,
        env = "CHECKUP_PATH",
        value_delimiter = ':'
    )]
    pub roots: Vec<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run health checks (default if no command specified)
    Run(RunArgs),

    /// List discoverable checks
    List(ListArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Checks to run; dotted names, `*` wildcards allowed. Runs every check when empty.
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Only list checks matching these patterns
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Show the file each check runs from
    #[arg(long, conflicts_with = "names")]
    pub paths: bool,

    /// Print bare check names, one per line, for shell completion
    #[arg(long, conflicts_with = "patterns")]
    pub names: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["checkup"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn run_takes_patterns() {
        let cli = Cli::try_parse_from(["checkup", "run", "net", "lsp.*", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Run(args)) => {
                assert_eq!(args.patterns, vec!["net", "lsp.*"]);
                assert!(args.json);
            }
            other => panic!("expected run, got {:?}", other),
        }
    }

    #[test]
    fn roots_are_repeatable() {
        let cli =
            Cli::try_parse_from(["checkup", "--root", "/a", "--root", "/b", "list"]).unwrap();
        assert_eq!(cli.roots, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
    }

    #[test]
    fn roots_after_subcommand_replace_earlier_ones() {
        let cli =
            Cli::try_parse_from(["checkup", "--root", "/a", "list", "--root", "/b"]).unwrap();
        assert_eq!(cli.roots, vec![PathBuf::from("/b")]);
    }

    #[test]
    fn list_names_conflicts_with_paths() {
        assert!(Cli::try_parse_from(["checkup", "list", "--names", "--paths"]).is_err());
        let cli = Cli::try_parse_from(["checkup", "list", "--names"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List(ListArgs { names: true, .. }))));
    }

    #[test]
    fn global_flags_parse() {
        let cli = Cli::try_parse_from([
            "checkup",
            "--debug",
            "--no-color",
            "-p",
            "/project",
            "-c",
            "/cfg.yml",
        ])
        .unwrap();
        assert!(cli.debug);
        assert!(cli.no_color);
        assert_eq!(cli.project, Some(PathBuf::from("/project")));
        assert_eq!(cli.config, Some(PathBuf::from("/cfg.yml")));
    }

    #[test]
    fn completions_requires_shell() {
        assert!(Cli::try_parse_from(["checkup", "completions"]).is_err());
        let cli = Cli::try_parse_from(["checkup", "completions", "bash"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions(CompletionsArgs { shell: Shell::Bash }))
        ));
    }
}
