//! The verification pipeline.
//!
//! One linear pass: manifests build the declared side, the probe merges in
//! the installed side, reconciliation produces the verdict, and the report
//! is printed only for a failing, non-quiet run.

use crate::cli::Cli;
use crate::error::Result;
use crate::reconcile::{self, Verdict};
use crate::{manifest, probe, report};

/// Run a full verification and return the verdict.
///
/// Errors (unreadable manifest, failed probe) propagate to the caller;
/// a drift verdict is a normal return, not an error.
pub fn run(cli: &Cli) -> Result<Verdict> {
    let mut set = manifest::load_all(&cli.files)?;
    probe::capture_installed(&mut set)?;

    let outcome = reconcile::reconcile(&set);
    if !outcome.mismatches.is_empty() && !cli.quiet {
        println!("{}", report::render(&outcome.mismatches));
        println!("{}", report::summary(outcome.mismatches.len()));
    }
    Ok(outcome.verdict)
}
