//! Environment probe for installed package versions.
//!
//! The probe invokes the package-listing command (`pip freeze`) once,
//! captures its output, and merges each `name==version` record into the
//! requirement set. A non-zero exit or a spawn failure is returned as an
//! error; the driver decides whether that kills the run.
//!
//! The listing command itself is injectable two ways: library callers pass a
//! closure to [`capture_installed_with`], and binary-level tests point the
//! `PIPCHECK_PIP` environment variable at a stand-in executable.

use crate::error::{PipcheckError, Result};
use crate::requirement::{split_pin, RequirementSet};
use std::process::Command;

/// Default program used to list installed packages.
const PIP_PROGRAM: &str = "pip";

/// Fixed subcommand whose output is `name==version` per line.
const PIP_SUBCOMMAND: &str = "freeze";

/// Env var overriding the listing program (the test seam).
pub const PIP_PROGRAM_ENV: &str = "PIPCHECK_PIP";

/// Probe the environment by running the real listing command.
pub fn capture_installed(set: &mut RequirementSet) -> Result<()> {
    capture_installed_with(set, run_pip_freeze)
}

/// Probe the environment with a custom process-invocation capability.
///
/// `list_fn` returns the raw listing output on success. Parsing mirrors
/// manifest parsing: blank lines skipped, first `==` splits name from
/// version, lines without a separator ignored with a warning.
pub fn capture_installed_with<F>(set: &mut RequirementSet, list_fn: F) -> Result<()>
where
    F: FnOnce() -> Result<String>,
{
    let output = list_fn()?;
    let mut installed = 0;
    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match split_pin(line) {
            Some((name, version)) => {
                set.record_installed(name, version);
                installed += 1;
            }
            None => {
                tracing::warn!("probe: skipping line without '==': {}", line);
            }
        }
    }
    tracing::debug!("probe reported {} installed package(s)", installed);
    Ok(())
}

/// Run the listing command and capture stdout.
///
/// Exactly one attempt, no timeout: the tool is single-shot and a hung
/// probe hangs the run.
fn run_pip_freeze() -> Result<String> {
    let program = std::env::var(PIP_PROGRAM_ENV).unwrap_or_else(|_| PIP_PROGRAM.to_string());
    let command_display = format!("{} {}", program, PIP_SUBCOMMAND);
    tracing::debug!("probing environment via '{}'", command_display);

    let output = Command::new(&program)
        .arg(PIP_SUBCOMMAND)
        .output()
        .map_err(|source| PipcheckError::ProbeCommandFailed {
            command: command_display.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(PipcheckError::ProbeFailed {
            command: command_display,
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
