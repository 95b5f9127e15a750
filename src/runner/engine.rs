//! Check execution.
//!
//! The [`Runner`] resolves a catalog and runs its checks one at a time, in
//! name order. Each check gets its own [`Report`]; whatever goes wrong inside
//! a check ends up as an `ERROR` line in that check's section and the run
//! moves on to the next one.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::discovery::{Catalog, CheckCatalog, CheckEntry, Invocable};
use crate::report::{Report, DEFAULT_WIDTH};

use super::document::Document;
use super::host::CheckHost;

/// Runs checks and assembles the report document.
pub struct Runner<'a> {
    catalog: &'a CheckCatalog,
    host: &'a dyn CheckHost,
    width: usize,
}

impl<'a> Runner<'a> {
    /// Create a runner that discovers through `catalog` and invokes through
    /// `host`.
    pub fn new(catalog: &'a CheckCatalog, host: &'a dyn CheckHost) -> Self {
        Self {
            catalog,
            host,
            width: DEFAULT_WIDTH,
        }
    }

    /// Set the width of section banners.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Resolve `patterns` and run every selected check.
    ///
    /// No patterns selects every discoverable check.
    pub fn run<S: AsRef<str>>(&self, patterns: &[S]) -> Document {
        let catalog = self.catalog.build(patterns);
        self.run_catalog(&catalog)
    }

    /// Run every entry of an already-built catalog, in name order.
    pub fn run_catalog(&self, catalog: &Catalog) -> Document {
        if catalog.is_empty() {
            tracing::debug!("no healthchecks found");
            return Document::no_checks_found();
        }

        let mut document = Document::new();
        for entry in catalog.iter() {
            tracing::debug!("checking {}", entry.name);

            let mut report = Report::new();
            self.invoke(entry, &mut report);
            if report.is_empty() {
                report.error(
                    &format!("The healthcheck report for \"{}\" is empty.", entry.name),
                    &[],
                );
            }

            let summary = report.summary();
            tracing::debug!(
                "{}: {} warning(s), {} error(s)",
                entry.name,
                summary.warnings,
                summary.errors
            );
            document.append_section(
                &entry.name,
                entry.kind(),
                summary,
                report.drain(),
                self.width,
            );
        }
        document
    }

    fn invoke(&self, entry: &CheckEntry, report: &mut Report) {
        let Some(target) = &entry.invoke else {
            report.error(
                &format!("No healthcheck found for \"{}\"", entry.name),
                &[],
            );
            return;
        };

        if let Err(fault) = self.guarded(&entry.name, target, report) {
            tracing::warn!("healthcheck '{}' failed: {}", entry.name, fault);
            report.error(
                &format!(
                    "Failed to run healthcheck for \"{}\": {}",
                    entry.name, fault
                ),
                &[],
            );
        }
    }

    /// Call the host, turning returned errors and panics into a description.
    fn guarded(&self, name: &str, target: &Invocable, report: &mut Report) -> Result<(), String> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.host.invoke(name, target, report)
        }));
        match outcome {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(format!("{:#}", e)),
            Err(payload) => Err(panic_message(payload.as_ref())),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", msg)
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("panicked: {}", msg)
    } else {
        "panicked".to_string()
    }
}
