//! Out-of-process checks.
//!
//! [`ProcessHost`] runs a discovered check file as a child process and
//! replays what it prints on stdout into the [`Report`].
//!
//! # Line protocol
//!
//! Each stdout line starts with a directive:
//!
//! ```text
//! start Configuration
//! ok config file found
//! warn cache directory is not writable
//! advice chmod u+w ~/.cache/tool
//! error server unreachable
//! info anything else
//! ```
//!
//! `advice` lines attach to the closest preceding `warn` or `error`. Lines
//! without a known directive are reported as `info`; blank lines are ignored.
//! A non-zero exit status is a failure of the check.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{bail, Context};

use crate::discovery::Invocable;
use crate::report::{Report, Status};

use super::host::CheckHost;

/// Environment variable carrying the canonical check name.
pub const CHECK_NAME_ENV: &str = "CHECKUP_CHECK";

/// Environment variable carrying the scripted module name.
pub const CHECK_MODULE_ENV: &str = "CHECKUP_MODULE";

/// Runs check files as child processes.
#[derive(Debug, Clone)]
pub struct ProcessHost {
    native: Vec<String>,
    scripted: Vec<String>,
    cwd: Option<PathBuf>,
}

impl Default for ProcessHost {
    fn default() -> Self {
        Self::new(vec!["sh".to_string()], vec!["sh".to_string()])
    }
}

impl ProcessHost {
    /// Create a host with the argv prefixes used to run native and scripted
    /// checks. The check file path is appended as the last argument; an
    /// empty prefix executes the file directly.
    pub fn new(native: Vec<String>, scripted: Vec<String>) -> Self {
        Self {
            native,
            scripted,
            cwd: None,
        }
    }

    /// Run checks from this working directory.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    fn command(&self, name: &str, target: &Invocable) -> Command {
        let (prefix, module) = match target {
            Invocable::Native { .. } => (&self.native, None),
            Invocable::Scripted { module, .. } => (&self.scripted, Some(module)),
        };

        let mut cmd = match prefix.split_first() {
            Some((program, args)) => {
                let mut cmd = Command::new(program);
                cmd.args(args);
                cmd.arg(target.path());
                cmd
            }
            None => Command::new(target.path()),
        };

        cmd.env(CHECK_NAME_ENV, name);
        if let Some(module) = module {
            cmd.env(CHECK_MODULE_ENV, module);
        }
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd
    }
}

impl CheckHost for ProcessHost {
    fn invoke(&self, name: &str, target: &Invocable, report: &mut Report) -> anyhow::Result<()> {
        tracing::debug!("spawning {} for '{}'", target.path().display(), name);

        let output = self
            .command(name, target)
            .output()
            .with_context(|| format!("could not run {}", target.path().display()))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        replay(&stdout, report);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            match output.status.code() {
                Some(code) if stderr.is_empty() => bail!("exited with code {}", code),
                Some(code) => bail!("exited with code {}\n{}", code, stderr),
                None => bail!("terminated by signal"),
            }
        }
        Ok(())
    }
}

/// A warn/error line waiting for its advice.
struct Pending {
    status: Status,
    message: String,
    advice: Vec<String>,
}

impl Pending {
    fn flush(self, report: &mut Report) {
        let advice: Vec<&str> = self.advice.iter().map(String::as_str).collect();
        report.push(self.status, &self.message, &advice);
    }
}

/// Apply line-protocol output to a report.
pub fn replay(output: &str, report: &mut Report) {
    let mut pending: Option<Pending> = None;

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let (directive, rest) = match line.split_once(' ') {
            Some((directive, rest)) => (directive, rest),
            None => (line, ""),
        };

        if directive == "advice" {
            match pending.as_mut() {
                Some(p) => p.advice.push(rest.to_string()),
                None => report.info(rest),
            }
            continue;
        }

        if let Some(p) = pending.take() {
            p.flush(report);
        }

        match directive {
            "start" => report.start(rest),
            "info" => report.info(rest),
            "ok" => report.ok(rest),
            "warn" | "error" => {
                let status = if directive == "warn" {
                    Status::Warn
                } else {
                    Status::Error
                };
                pending = Some(Pending {
                    status,
                    message: rest.to_string(),
                    advice: Vec::new(),
                });
            }
            _ => report.info(line),
        }
    }

    if let Some(p) = pending {
        p.flush(report);
    }
}
