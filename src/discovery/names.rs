//! Canonical check names.
//!
//! [`NameNormalizer`] is the inverse of [`PathResolver`](super::PathResolver):
//! it turns a discovered file back into the dotted name a user types.

use std::path::Path;

use super::layout::{relative_slash, Layout};
use super::resolver::ModuleLocation;

/// Module convention a check file follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// `<native_dir>/health/<name>.<ext>`
    Native,
    /// `<scripted_dir>/**/<name>/health/init.<ext>`
    ScriptedIndex,
    /// `<scripted_dir>/**/<name>/health.<ext>`
    ScriptedFlat,
}

impl Convention {
    /// Whether the file is run as a scripted module.
    pub fn is_scripted(self) -> bool {
        !matches!(self, Self::Native)
    }
}

/// Maps check files to canonical dotted names.
#[derive(Debug, Clone)]
pub struct NameNormalizer {
    layout: Layout,
}

impl NameNormalizer {
    /// Create a normalizer for the given layout.
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    /// Canonical name of a discovered check, or `None` if the file does not
    /// follow any convention under its root.
    pub fn to_name(&self, location: &ModuleLocation) -> Option<String> {
        self.classify(location).map(|(name, _)| name)
    }

    /// Canonical name and convention of a discovered check.
    pub fn classify(&self, location: &ModuleLocation) -> Option<(String, Convention)> {
        let native_base = location.root.join(&self.layout.native_dir).join("health");
        if let Some(rel) = relative_slash(&location.path, &native_base) {
            let file = Path::new(&rel);
            let has_ext = file
                .extension()
                .is_some_and(|ext| ext == self.layout.native_ext.as_str());
            if has_ext && !rel.contains('/') {
                let stem = file.file_stem()?.to_str()?;
                return Some((stem.to_string(), Convention::Native));
            }
        }

        let scripted_base = location.root.join(&self.layout.scripted_dir);
        let rel = relative_slash(&location.path, &scripted_base)?;
        let (module, convention) = scripted_module(&self.layout, &rel)?;
        Some((module.replace('/', "."), convention))
    }
}

/// Split a path relative to `<scripted_dir>` into its module part and
/// convention.
///
/// Module segments may not be empty or contain a dot, since dots in a name
/// are path separators and such a module could never be resolved by name.
pub(crate) fn scripted_module<'a>(
    layout: &Layout,
    rel: &'a str,
) -> Option<(&'a str, Convention)> {
    let index_suffix = format!("/health/{}", layout.index_file());
    let flat_suffix = format!("/{}", layout.flat_file());
    let (module, convention) = if let Some(module) = rel.strip_suffix(&index_suffix) {
        (module, Convention::ScriptedIndex)
    } else if let Some(module) = rel.strip_suffix(&flat_suffix) {
        (module, Convention::ScriptedFlat)
    } else {
        return None;
    };

    if module.split('/').any(|segment| segment.is_empty() || segment.contains('.')) {
        return None;
    }
    Some((module, convention))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::{normalize_path, PathResolver, SearchPath};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn location(root: &str, rel: &str) -> ModuleLocation {
        ModuleLocation {
            path: PathBuf::from(root).join(rel),
            root: PathBuf::from(root),
        }
    }

    fn normalizer() -> NameNormalizer {
        NameNormalizer::new(Layout::default())
    }

    #[test]
    fn native_name_is_file_stem() {
        let loc = location("/r", "autoload/health/provider.sh");
        assert_eq!(
            normalizer().classify(&loc),
            Some(("provider".to_string(), Convention::Native))
        );
    }

    #[test]
    fn index_name_strips_health_init() {
        let loc = location("/r", "checks/vim/lsp/health/init.sh");
        assert_eq!(
            normalizer().classify(&loc),
            Some(("vim.lsp".to_string(), Convention::ScriptedIndex))
        );
    }

    #[test]
    fn flat_name_strips_health_file() {
        let loc = location("/r", "checks/foo/bar/health.sh");
        assert_eq!(
            normalizer().classify(&loc),
            Some(("foo.bar".to_string(), Convention::ScriptedFlat))
        );
    }

    #[test]
    fn top_level_health_file_has_no_name() {
        assert_eq!(normalizer().to_name(&location("/r", "checks/health.sh")), None);
        assert_eq!(
            normalizer().to_name(&location("/r", "checks/health/init.sh")),
            None
        );
    }

    #[test]
    fn unrelated_file_has_no_name() {
        assert_eq!(normalizer().to_name(&location("/r", "docs/readme.md")), None);
        assert_eq!(
            normalizer().to_name(&location("/r", "autoload/health/nested/x.sh")),
            None
        );
    }

    #[test]
    fn dotted_module_segment_has_no_name() {
        assert_eq!(normalizer().to_name(&location("/r", "checks/x.nvim/health.sh")), None);
        assert_eq!(
            normalizer().to_name(&location("/r", "checks/.hidden/net/health/init.sh")),
            None
        );
    }

    #[test]
    fn dotted_native_stem_keeps_its_dots() {
        let loc = location("/r", "autoload/health/foo.bar.sh");
        assert_eq!(normalizer().to_name(&loc), Some("foo.bar".to_string()));
    }

    #[test]
    fn convention_scripted_flag() {
        assert!(!Convention::Native.is_scripted());
        assert!(Convention::ScriptedIndex.is_scripted());
        assert!(Convention::ScriptedFlat.is_scripted());
    }

    #[test]
    fn names_round_trip_through_resolver() {
        let temp = TempDir::new().unwrap();
        for rel in [
            "autoload/health/provider.sh",
            "checks/foo/health.sh",
            "checks/foo/bar/health/init.sh",
            "checks/deep/nested/mod/health.sh",
        ] {
            let path = temp.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }

        let resolver = PathResolver::new(SearchPath::new([temp.path()]), Layout::default());
        let all = resolver.resolve("*");
        assert_eq!(all.len(), 4);

        for loc in &all {
            let name = normalizer().to_name(loc).unwrap();
            let again = resolver.resolve(&name);
            assert!(
                again.contains(loc),
                "{} did not resolve back to {}",
                name,
                loc.path.display()
            );
        }
        assert_eq!(all[0].root, normalize_path(temp.path()));
    }

    #[test]
    fn dotted_names_round_trip_through_resolver() {
        let temp = TempDir::new().unwrap();
        for rel in ["autoload/health/foo.bar.sh", "checks/x.nvim/health.sh"] {
            let path = temp.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }

        let resolver = PathResolver::new(SearchPath::new([temp.path()]), Layout::default());
        let all = resolver.resolve("*");
        assert_eq!(all.len(), 1);
        assert!(all[0].path.ends_with("autoload/health/foo.bar.sh"));

        let name = normalizer().to_name(&all[0]).unwrap();
        assert_eq!(name, "foo.bar");
        assert_eq!(resolver.resolve(&name), all);
        assert!(resolver.resolve("x.nvim").is_empty());
    }
}
