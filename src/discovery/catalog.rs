//! Check catalog construction.
//!
//! The [`CheckCatalog`] turns user patterns into the ordered set of checks a
//! run will execute, and lists every discoverable check for completion.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::layout::{Layout, SearchPath};
use super::names::NameNormalizer;
use super::resolver::{ModuleLocation, PathResolver};

/// Name checkup itself uses; never listed or run as a check.
pub const DEFAULT_SELF_NAME: &str = "checkup";

/// Pattern that selects every check.
pub const ALL_CHECKS: &str = "*";

/// How a catalog entry is run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    /// A single native check file.
    Native,
    /// A scripted check module.
    Scripted,
    /// Nothing was found for the requested name.
    Missing,
}

impl CheckKind {
    /// Lowercase label, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Scripted => "scripted",
            Self::Missing => "missing",
        }
    }
}

/// Reference to a discovered check's entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocable {
    /// Native check file.
    Native { path: PathBuf },
    /// Scripted module; `module` is the module exposing the entry point.
    Scripted { module: String, path: PathBuf },
}

impl Invocable {
    /// File implementing the check.
    pub fn path(&self) -> &Path {
        match self {
            Self::Native { path } | Self::Scripted { path, .. } => path,
        }
    }

    /// Kind of check this reference runs.
    pub fn kind(&self) -> CheckKind {
        match self {
            Self::Native { .. } => CheckKind::Native,
            Self::Scripted { .. } => CheckKind::Scripted,
        }
    }
}

/// One check selected for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckEntry {
    /// Canonical dotted name, or the raw pattern for a missing check.
    pub name: String,
    /// Entry point; `None` when nothing was found.
    pub invoke: Option<Invocable>,
}

impl CheckEntry {
    /// Entry for a pattern that matched no files.
    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            invoke: None,
        }
    }

    /// Kind of this entry.
    pub fn kind(&self) -> CheckKind {
        self.invoke
            .as_ref()
            .map_or(CheckKind::Missing, Invocable::kind)
    }
}

/// Checks selected for one run, keyed and ordered by name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<String, CheckEntry>,
}

impl Catalog {
    /// Insert an entry, replacing any earlier entry with the same name.
    pub fn insert(&mut self, entry: CheckEntry) {
        self.entries.insert(entry.name.clone(), entry);
    }

    /// Get an entry by name.
    pub fn get(&self, name: &str) -> Option<&CheckEntry> {
        self.entries.get(name)
    }

    /// Entries in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = &CheckEntry> {
        self.entries.values()
    }

    /// Names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Insertion order among files sharing a name: kind first, then root.
type Precedence = (bool, usize);

/// Whether a pattern is made only of `*`, selecting everything.
fn is_wildcard(pattern: &str) -> bool {
    pattern.chars().all(|c| c == '*')
}

/// Builds catalogs from user patterns.
#[derive(Debug, Clone)]
pub struct CheckCatalog {
    resolver: PathResolver,
    normalizer: NameNormalizer,
    self_name: String,
}

impl CheckCatalog {
    /// Create a catalog builder over the given roots.
    pub fn new(search_path: SearchPath, layout: Layout) -> Self {
        Self {
            normalizer: NameNormalizer::new(layout.clone()),
            resolver: PathResolver::new(search_path, layout),
            self_name: DEFAULT_SELF_NAME.to_string(),
        }
    }

    /// Override the name excluded from every catalog.
    pub fn with_self_name(mut self, name: impl Into<String>) -> Self {
        self.self_name = name.into();
        self
    }

    /// The resolver used for discovery.
    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Build the catalog for a set of patterns.
    ///
    /// Each item is split on whitespace. No patterns at all selects every
    /// check. A named pattern matching nothing produces a missing entry keyed
    /// by the pattern text; a pattern made only of `*` that matches nothing
    /// adds no entry, so an empty tree yields an empty catalog.
    ///
    /// When two files share a canonical name the later one wins, visiting
    /// native checks before scripted ones and each in search root order.
    /// A scripted check therefore shadows a native one, and a later root
    /// shadows an earlier one of the same kind.
    pub fn build<S: AsRef<str>>(&self, patterns: &[S]) -> Catalog {
        let mut patterns: Vec<&str> = patterns
            .iter()
            .flat_map(|p| p.as_ref().split_whitespace())
            .collect();
        if patterns.is_empty() {
            patterns.push(ALL_CHECKS);
        }

        let mut catalog = Catalog::default();
        for pattern in patterns {
            let mut entries: Vec<(Precedence, CheckEntry)> = self
                .resolver
                .resolve(pattern)
                .iter()
                .filter_map(|location| {
                    let entry = self.entry_for(location)?;
                    Some((self.precedence(location, &entry), entry))
                })
                .collect();

            if entries.is_empty() {
                if is_wildcard(pattern) {
                    tracing::debug!("'{}' matched no healthchecks", pattern);
                } else {
                    tracing::debug!("no healthcheck found for '{}'", pattern);
                    catalog.insert(CheckEntry::missing(pattern));
                }
                continue;
            }

            entries.sort_by_key(|(precedence, _)| *precedence);
            for (_, entry) in entries {
                catalog.insert(entry);
            }
        }

        catalog.entries.remove(&self.self_name);
        catalog
    }

    /// Every discoverable check name, sorted and deduplicated.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .resolver
            .resolve(ALL_CHECKS)
            .iter()
            .filter_map(|location| self.normalizer.to_name(location))
            .filter(|name| *name != self.self_name)
            .collect();
        names.sort();
        names.dedup();
        names
    }

    fn precedence(&self, location: &ModuleLocation, entry: &CheckEntry) -> Precedence {
        let scripted = entry.kind() == CheckKind::Scripted;
        let root = self
            .resolver
            .search_path()
            .roots()
            .iter()
            .position(|root| *root == location.root)
            .unwrap_or(usize::MAX);
        (scripted, root)
    }

    fn entry_for(&self, location: &ModuleLocation) -> Option<CheckEntry> {
        let (name, convention) = self.normalizer.classify(location)?;
        let path = location.path.clone();
        let invoke = if convention.is_scripted() {
            Invocable::Scripted {
                module: format!("{}.health", name),
                path,
            }
        } else {
            Invocable::Native { path }
        };
        Some(CheckEntry {
            name,
            invoke: Some(invoke),
        })
    }
}
