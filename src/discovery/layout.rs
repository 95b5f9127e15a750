//! Search roots and the on-disk layout of check modules.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Directory and extension names for the check module conventions.
///
/// Under every search root a check can live in one of three places:
///
/// - native: `<root>/<native_dir>/health/<name>.<native_ext>`
/// - scripted index: `<root>/<scripted_dir>/**/<name>/health/init.<scripted_ext>`
/// - scripted flat: `<root>/<scripted_dir>/**/<name>/health.<scripted_ext>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Directory holding native checks (`<root>/<native_dir>/health/`).
    pub native_dir: String,
    /// File extension of native checks, without the dot.
    pub native_ext: String,
    /// Directory holding scripted check modules.
    pub scripted_dir: String,
    /// File extension of scripted checks, without the dot.
    pub scripted_ext: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            native_dir: "autoload".to_string(),
            native_ext: "sh".to_string(),
            scripted_dir: "checks".to_string(),
            scripted_ext: "sh".to_string(),
        }
    }
}

impl Layout {
    /// File name of a scripted flat check (`health.sh`).
    pub fn flat_file(&self) -> String {
        format!("health.{}", self.scripted_ext)
    }

    /// File name of a scripted index check (`init.sh`).
    pub fn index_file(&self) -> String {
        format!("init.{}", self.scripted_ext)
    }
}

/// Ordered list of directories searched for checks.
///
/// Roots are stored absolute and lexically normalized, so two spellings of
/// the same directory discover the same files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    roots: Vec<PathBuf>,
}

impl SearchPath {
    /// Create a search path from roots in priority order.
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut normalized: Vec<PathBuf> = Vec::new();
        for root in roots {
            let root = normalize_path(root.as_ref());
            if !normalized.contains(&root) {
                normalized.push(root);
            }
        }
        Self { roots: normalized }
    }

    /// Roots in priority order.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Check if no roots are configured.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Make a path absolute and resolve `.` and `..` without touching the disk.
///
/// Symlinks are left alone; identity of a check file is its normalized path.
pub fn normalize_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let mut out = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Path of `path` relative to `base`, joined with `/` on every platform.
pub fn relative_slash(path: &Path, base: &Path) -> Option<String> {
    let rel = path.strip_prefix(base).ok()?;
    let parts: Vec<&str> = rel
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<_>>()?;
    Some(parts.join("/"))
}
