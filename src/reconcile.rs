//! Reconciliation of declared versus installed versions.
//!
//! A pure scan over the merged requirement set: no I/O, no state beyond the
//! result, so running it twice on the same set yields the same verdict and
//! the same mismatch list.

use crate::requirement::RequirementSet;

/// Overall outcome of a reconciliation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every entry is satisfied.
    Ok,
    /// At least one entry has drifted (differing or missing version).
    Drift,
}

impl Verdict {
    /// Process exit code for this verdict.
    pub fn exit_code(&self) -> u8 {
        match self {
            Verdict::Ok => 0,
            Verdict::Drift => 1,
        }
    }
}

/// One unsatisfied entry, versions normalized for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Package name.
    pub name: String,
    /// Installed version, or the `Missing` sentinel.
    pub installed: String,
    /// Declared version, or the `Missing` sentinel.
    pub declared: String,
    /// Manifest file that declared it, or `Environment`.
    pub source: String,
}

/// Result of reconciling a requirement set.
#[derive(Debug)]
pub struct Reconciliation {
    pub verdict: Verdict,
    /// Unsatisfied entries in package-name order.
    pub mismatches: Vec<Mismatch>,
}

/// Scan the merged set and collect every unsatisfied entry.
///
/// The mismatch list inherits the set's name ordering, keeping report output
/// deterministic.
pub fn reconcile(set: &RequirementSet) -> Reconciliation {
    let mut mismatches = Vec::new();
    for (name, req) in set.iter() {
        if !req.is_satisfied() {
            mismatches.push(Mismatch {
                name: name.clone(),
                installed: req.installed_display().to_string(),
                declared: req.declared_display().to_string(),
                source: req.source.display_name().to_string(),
            });
        }
    }

    let verdict = if mismatches.is_empty() {
        Verdict::Ok
    } else {
        Verdict::Drift
    };
    tracing::debug!(
        "reconciled {} entries, {} mismatch(es)",
        set.len(),
        mismatches.len()
    );

    Reconciliation {
        verdict,
        mismatches,
    }
}
