//! Pattern to file resolution.
//!
//! [`PathResolver`] expands a dotted check pattern such as `net.dns` or
//! `net.*` into the files that implement it under every search root.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use super::layout::{normalize_path, relative_slash, Layout, SearchPath};
use super::names::scripted_module;
use crate::error::{CheckupError, Result};

/// One discovered check file.
///
/// Identity is the normalized absolute `path`; `root` is the search root the
/// file was first found under.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ModuleLocation {
    /// Absolute, normalized path of the check file.
    pub path: PathBuf,
    /// Search root the file belongs to.
    pub root: PathBuf,
}

/// Candidate globs for one pattern.
struct CandidateGlobs {
    native: GlobMatcher,
    scripted: GlobSet,
}

/// Resolves check patterns into module locations.
#[derive(Debug, Clone)]
pub struct PathResolver {
    search_path: SearchPath,
    layout: Layout,
}

impl PathResolver {
    /// Create a resolver over the given roots.
    pub fn new(search_path: SearchPath, layout: Layout) -> Self {
        Self {
            search_path,
            layout,
        }
    }

    /// The roots this resolver searches.
    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    /// The module layout this resolver expands.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Find every file implementing `pattern`, sorted by path.
    ///
    /// For scripted modules dots in the pattern are path separators; native
    /// checks are matched against the whole file stem, dots included. `*`
    /// matches any run of characters, including separators. Scripted files
    /// with a dot in any module segment are skipped. A pattern with no
    /// matches, or one that is not a valid glob, yields an empty list.
    pub fn resolve(&self, pattern: &str) -> Vec<ModuleLocation> {
        let globs = match self.candidate_globs(pattern) {
            Ok(globs) => globs,
            Err(e) => {
                tracing::warn!("{}", e);
                return Vec::new();
            }
        };

        let mut found: BTreeMap<PathBuf, ModuleLocation> = BTreeMap::new();
        for root in self.search_path.roots() {
            // Native checks are direct children of `<native_dir>/health/`.
            let native_base = root.join(&self.layout.native_dir);
            for path in walk_files(&native_base, 2, Some(2)) {
                if matches_under(&path, &native_base, |rel| globs.native.is_match(rel)) {
                    record(&mut found, path, root);
                }
            }

            let scripted_base = root.join(&self.layout.scripted_dir);
            for path in walk_files(&scripted_base, 1, None) {
                if matches_under(&path, &scripted_base, |rel| {
                    globs.scripted.is_match(rel) && scripted_module(&self.layout, rel).is_some()
                }) {
                    record(&mut found, path, root);
                }
            }
        }

        tracing::debug!("pattern '{}' resolved to {} file(s)", pattern, found.len());
        found.into_values().collect()
    }

    fn candidate_globs(&self, pattern: &str) -> Result<CandidateGlobs> {
        let native = compile(
            pattern,
            &format!("health/{}.{}", pattern, self.layout.native_ext),
        )?
        .compile_matcher();

        let segments = pattern.replace('.', "/");
        let mut scripted = GlobSetBuilder::new();
        scripted.add(compile(
            pattern,
            &format!("**/{}/health/{}", segments, self.layout.index_file()),
        )?);
        scripted.add(compile(
            pattern,
            &format!("**/{}/{}", segments, self.layout.flat_file()),
        )?);
        let scripted = scripted
            .build()
            .map_err(|e| CheckupError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;

        Ok(CandidateGlobs { native, scripted })
    }
}

fn compile(pattern: &str, glob: &str) -> Result<Glob> {
    Glob::new(glob).map_err(|e| CheckupError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

fn walk_files(base: &Path, min_depth: usize, max_depth: Option<usize>) -> Vec<PathBuf> {
    if !base.is_dir() {
        return Vec::new();
    }
    let mut walker = WalkDir::new(base).follow_links(true).min_depth(min_depth);
    if let Some(max) = max_depth {
        walker = walker.max_depth(max);
    }
    walker
        .into_iter()
        .flatten()
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect()
}

fn matches_under(path: &Path, base: &Path, is_match: impl Fn(&str) -> bool) -> bool {
    relative_slash(path, base).is_some_and(|rel| is_match(&rel))
}

fn record(found: &mut BTreeMap<PathBuf, ModuleLocation>, path: PathBuf, root: &Path) {
    let path = normalize_path(&path);
    found.entry(path.clone()).or_insert_with(|| ModuleLocation {
        path,
        root: root.to_path_buf(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn resolver(roots: &[&Path]) -> PathResolver {
        PathResolver::new(SearchPath::new(roots), Layout::default())
    }

    fn rels(found: &[ModuleLocation], root: &Path) -> Vec<String> {
        found
            .iter()
            .map(|l| relative_slash(&l.path, &normalize_path(root)).unwrap())
            .collect()
    }

    #[test]
    fn resolves_native_check() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "autoload/health/provider.sh");

        let found = resolver(&[temp.path()]).resolve("provider");
        assert_eq!(rels(&found, temp.path()), vec!["autoload/health/provider.sh"]);
    }

    #[test]
    fn resolves_both_scripted_conventions() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "checks/foo/health.sh");
        touch(temp.path(), "checks/bar/health/init.sh");

        let r = resolver(&[temp.path()]);
        assert_eq!(rels(&r.resolve("foo"), temp.path()), vec!["checks/foo/health.sh"]);
        assert_eq!(
            rels(&r.resolve("bar"), temp.path()),
            vec!["checks/bar/health/init.sh"]
        );
    }

    #[test]
    fn dots_become_path_segments() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "checks/net/dns/health.sh");

        let found = resolver(&[temp.path()]).resolve("net.dns");
        assert_eq!(rels(&found, temp.path()), vec!["checks/net/dns/health.sh"]);
    }

    #[test]
    fn native_pattern_matches_dotted_stem() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "autoload/health/foo.bar.sh");

        let found = resolver(&[temp.path()]).resolve("foo.bar");
        assert_eq!(rels(&found, temp.path()), vec!["autoload/health/foo.bar.sh"]);
    }

    #[test]
    fn dotted_scripted_directory_is_skipped() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "checks/x.nvim/health.sh");
        touch(temp.path(), "checks/.cache/net/health.sh");

        let r = resolver(&[temp.path()]);
        assert!(r.resolve("*").is_empty());
        assert!(r.resolve("net").is_empty());
    }

    #[test]
    fn scripted_match_at_any_depth() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "checks/vendor/acme/health.sh");

        let found = resolver(&[temp.path()]).resolve("acme");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn trailing_star_matches_any_suffix() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "checks/net/health.sh");
        touch(temp.path(), "checks/net/dns/health.sh");
        touch(temp.path(), "checks/network/health.sh");
        touch(temp.path(), "checks/disk/health.sh");

        let found = resolver(&[temp.path()]).resolve("net*");
        assert_eq!(
            rels(&found, temp.path()),
            vec![
                "checks/net/dns/health.sh",
                "checks/net/health.sh",
                "checks/network/health.sh"
            ]
        );
    }

    #[test]
    fn nested_native_files_are_ignored() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "autoload/health/deep/inner.sh");

        assert!(resolver(&[temp.path()]).resolve("*").is_empty());
    }

    #[test]
    fn wrong_extension_is_ignored() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "checks/foo/health.py");
        touch(temp.path(), "autoload/health/foo.py");

        assert!(resolver(&[temp.path()]).resolve("foo").is_empty());
    }

    #[test]
    fn searches_every_root() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        touch(a.path(), "checks/foo/health.sh");
        touch(b.path(), "autoload/health/foo.sh");

        let found = resolver(&[a.path(), b.path()]).resolve("foo");
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn duplicate_roots_collapse_by_path() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "checks/foo/health.sh");
        let dotted = temp.path().join(".");

        let found = resolver(&[temp.path(), dotted.as_path()]).resolve("foo");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let temp = TempDir::new().unwrap();
        assert!(resolver(&[temp.path()]).resolve("nothing").is_empty());
    }

    #[test]
    fn missing_root_is_skipped() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("does-not-exist");
        assert!(resolver(&[gone.as_path()]).resolve("*").is_empty());
    }

    #[test]
    fn invalid_glob_yields_nothing() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "checks/foo/health.sh");
        assert!(resolver(&[temp.path()]).resolve("foo[").is_empty());
    }

    #[test]
    fn locations_are_absolute() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "checks/foo/health.sh");

        let found = resolver(&[temp.path()]).resolve("foo");
        assert!(found[0].path.is_absolute());
        assert_eq!(found[0].root, normalize_path(temp.path()));
    }
}
