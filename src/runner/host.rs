//! Check hosts.
//!
//! A [`CheckHost`] knows how to call the entry point behind an
//! [`Invocable`]. The runner never executes check code itself; it asks the
//! host and treats any error the host returns as a fault of that check.

use std::collections::HashMap;

use anyhow::anyhow;

use crate::discovery::Invocable;
use crate::report::Report;

/// A check's entry point.
///
/// Implementations write their findings into `report`. Returning an error
/// (or panicking) is reported as a failed check; the run continues.
pub trait HealthCheck {
    /// Run the check.
    fn check(&self, report: &mut Report) -> anyhow::Result<()>;
}

impl<F> HealthCheck for F
where
    F: Fn(&mut Report) -> anyhow::Result<()>,
{
    fn check(&self, report: &mut Report) -> anyhow::Result<()> {
        self(report)
    }
}

/// Host-side loader that runs discovered checks.
pub trait CheckHost {
    /// Invoke the check `name` found at `target`, writing into `report`.
    fn invoke(&self, name: &str, target: &Invocable, report: &mut Report) -> anyhow::Result<()>;
}

/// In-process checks keyed by canonical name.
///
/// Discovery still decides which checks exist; the registry supplies the
/// code for each discovered name.
///
/// # Example
///
/// ```
/// use checkup::report::Report;
/// use checkup::runner::Registry;
///
/// let mut registry = Registry::new();
/// registry.register_fn("clock", |report: &mut Report| {
///     report.ok("system clock is monotonic");
///     Ok(())
/// });
/// assert!(registry.contains("clock"));
/// ```
#[derive(Default)]
pub struct Registry {
    checks: HashMap<String, Box<dyn HealthCheck>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the entry point for a canonical check name.
    pub fn register(&mut self, name: impl Into<String>, check: impl HealthCheck + 'static) {
        self.checks.insert(name.into(), Box::new(check));
    }

    /// Register a closure as the entry point for a canonical check name.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, check: F)
    where
        F: Fn(&mut Report) -> anyhow::Result<()> + 'static,
    {
        self.register(name, check);
    }

    /// Get the entry point for a name.
    pub fn get(&self, name: &str) -> Option<&dyn HealthCheck> {
        self.checks.get(name).map(|c| c.as_ref())
    }

    /// Check if a name has an entry point.
    pub fn contains(&self, name: &str) -> bool {
        self.checks.contains_key(name)
    }

    /// Get the number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.checks.keys().collect();
        names.sort();
        f.debug_struct("Registry").field("checks", &names).finish()
    }
}

impl CheckHost for Registry {
    fn invoke(&self, name: &str, target: &Invocable, report: &mut Report) -> anyhow::Result<()> {
        let check = self.get(name).ok_or_else(|| match target {
            Invocable::Native { path } => {
                anyhow!("no entry point registered for {}", path.display())
            }
            Invocable::Scripted { module, .. } => {
                anyhow!("module '{}' has no registered check()", module)
            }
        })?;
        check.check(report)
    }
}
