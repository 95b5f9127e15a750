//! Configuration file discovery and loading.
//!
//! This module handles finding and loading configuration files from
//! the project directory in the correct priority order.

use crate::config::merger::merge_configs;
use crate::config::schema::CheckupConfig;
use crate::error::{CheckupError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Project config (`.checkup/config.yml`)
/// 2. Local overrides (`.checkup/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .checkup/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .checkup/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(".checkup").join("config.yml")),
            project_local: existing(project_root.join(".checkup").join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project
            .iter()
            .chain(self.project_local.iter())
            .collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it into CheckupConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<CheckupConfig> {
    let value = load_config_value(path)?;
    parse_value(value, path)
}

/// Load a config file as raw YAML Value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CheckupError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CheckupError::Io(e)
        }
    })?;

    let value: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|e| CheckupError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    // An empty file parses to null; treat it as "no settings".
    if value.is_null() {
        return Ok(serde_yaml::Value::Mapping(Default::default()));
    }
    Ok(value)
}

fn parse_value(value: serde_yaml::Value, path: &Path) -> Result<CheckupConfig> {
    serde_yaml::from_value(value).map_err(|e| CheckupError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge the project config files.
///
/// A project without any config file gets the defaults.
pub fn load_merged_config(project_root: &Path) -> Result<CheckupConfig> {
    let paths = ConfigPaths::discover(project_root);
    let existing = paths.all_existing();
    if existing.is_empty() {
        tracing::debug!("no config under {}, using defaults", project_root.display());
        return Ok(CheckupConfig::default());
    }

    let mut configs = Vec::new();
    for path in &existing {
        tracing::debug!("loading config {}", path.display());
        configs.push(load_config_value(path)?);
    }

    parse_value(merge_configs(&configs), existing[0])
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges the project's config files.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<CheckupConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged_config(project_root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(root: &Path, name: &str, content: &str) -> PathBuf {
        let dir = root.join(".checkup");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn discover_finds_project_and_local() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "self_name: a");
        write_config(temp.path(), "config.local.yml", "self_name: b");

        let paths = ConfigPaths::discover(temp.path());
        assert!(paths.project.is_some());
        assert!(paths.project_local.is_some());
        assert_eq!(paths.all_existing().len(), 2);
    }

    #[test]
    fn missing_config_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_merged_config(temp.path()).unwrap();
        assert_eq!(config, CheckupConfig::default());
    }

    #[test]
    fn local_overrides_project() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            "config.yml",
            "search_roots: [plugins]\nreport_width: 60\nlayout:\n  scripted_ext: lua\n",
        );
        write_config(
            temp.path(),
            "config.local.yml",
            "report_width: 100\nlayout:\n  native_ext: vim\n",
        );

        let config = load_merged_config(temp.path()).unwrap();
        assert_eq!(config.report_width, 100);
        assert_eq!(config.search_roots, vec![PathBuf::from("plugins")]);
        assert_eq!(config.layout.scripted_ext, "lua");
        assert_eq!(config.layout.native_ext, "vim");
    }

    #[test]
    fn empty_file_is_defaults() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "");
        let config = load_merged_config(temp.path()).unwrap();
        assert_eq!(config, CheckupConfig::default());
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), "config.yml", "report_width: [unclosed");

        let err = load_merged_config(temp.path()).unwrap_err();
        match err {
            CheckupError::ConfigParseError { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn wrong_type_is_parse_error() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "report_width: wide");
        assert!(matches!(
            load_merged_config(temp.path()),
            Err(CheckupError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn override_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");
        assert!(matches!(
            load_config(temp.path(), Some(&missing)),
            Err(CheckupError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn override_skips_project_files() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "report_width: 60");
        let custom = temp.path().join("custom.yml");
        fs::write(&custom, "self_name: doctor").unwrap();

        let config = load_config(temp.path(), Some(&custom)).unwrap();
        assert_eq!(config.self_name, "doctor");
        assert_eq!(config.report_width, 78);
    }
}
