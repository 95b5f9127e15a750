//! Configuration schema definitions for checkup.
//!
//! These structs map to the YAML configuration file format.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::discovery::{Layout, DEFAULT_SELF_NAME};
use crate::report::DEFAULT_WIDTH;

/// Root configuration structure for `.checkup/config.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckupConfig {
    /// Directories searched for checks, in priority order.
    /// Relative paths are resolved against the project root.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub search_roots: Vec<PathBuf>,

    /// Where checks live under each search root.
    pub layout: Layout,

    /// Name excluded from discovery (checkup's own module).
    #[serde(default = "default_self_name")]
    pub self_name: String,

    /// Width of the separator rule and summary line.
    #[serde(default = "default_report_width")]
    pub report_width: usize,

    /// Commands used to run check files.
    pub interpreter: InterpreterConfig,
}

impl Default for CheckupConfig {
    fn default() -> Self {
        Self {
            search_roots: Vec::new(),
            layout: Layout::default(),
            self_name: default_self_name(),
            report_width: default_report_width(),
            interpreter: InterpreterConfig::default(),
        }
    }
}

impl CheckupConfig {
    /// Search roots with relative entries resolved against `project_root`.
    pub fn resolved_roots(&self, project_root: &Path) -> Vec<PathBuf> {
        self.search_roots
            .iter()
            .map(|root| {
                if root.is_absolute() {
                    root.clone()
                } else {
                    project_root.join(root)
                }
            })
            .collect()
    }
}

/// Argv prefixes for running check files; the file path is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Prefix for native checks. Empty runs the file directly.
    pub native: Vec<String>,
    /// Prefix for scripted checks. Empty runs the file directly.
    pub scripted: Vec<String>,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            native: vec!["sh".to_string()],
            scripted: vec!["sh".to_string()],
        }
    }
}

fn default_self_name() -> String {
    DEFAULT_SELF_NAME.to_string()
}

fn default_report_width() -> usize {
    DEFAULT_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config: CheckupConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, CheckupConfig::default());
        assert_eq!(config.self_name, "checkup");
        assert_eq!(config.report_width, 78);
        assert_eq!(config.interpreter.native, vec!["sh"]);
    }

    #[test]
    fn parses_full_config() {
        let yaml = r#"
search_roots:
  - plugins
  - /opt/checks
layout:
  scripted_dir: lua
  scripted_ext: lua
self_name: vim
report_width: 60
interpreter:
  scripted: [nvim, -l]
"#;
        let config: CheckupConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.search_roots.len(), 2);
        assert_eq!(config.layout.scripted_dir, "lua");
        assert_eq!(config.layout.native_dir, "autoload");
        assert_eq!(config.self_name, "vim");
        assert_eq!(config.report_width, 60);
        assert_eq!(config.interpreter.scripted, vec!["nvim", "-l"]);
        assert_eq!(config.interpreter.native, vec!["sh"]);
    }

    #[test]
    fn relative_roots_resolve_against_project() {
        let config = CheckupConfig {
            search_roots: vec![PathBuf::from("plugins"), PathBuf::from("/abs")],
            ..Default::default()
        };
        let roots = config.resolved_roots(Path::new("/project"));
        assert_eq!(
            roots,
            vec![PathBuf::from("/project/plugins"), PathBuf::from("/abs")]
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config: CheckupConfig = serde_yaml::from_str("colour: always").unwrap();
        assert_eq!(config, CheckupConfig::default());
    }
}
