//! The requirement model: one entry per package name, merged from both sides.
//!
//! A [`Requirement`] records what a manifest declared and what the
//! environment reports for a single package. Entries are created on first
//! observation from either side, merged in place, and never deleted. The set
//! is backed by a `BTreeMap` so iteration (and therefore the report) is
//! always ordered by package name.

use std::collections::BTreeMap;

/// Display sentinel for a version absent on one side.
///
/// Display-only: equality checks work on the raw `Option`s, never on this
/// string, so a package literally versioned "Missing" cannot confuse them.
pub const MISSING: &str = "Missing";

/// Where a requirement entry was first declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Declared in a manifest file (the file name, e.g. "requirements.txt").
    Manifest(String),
    /// Only observed in the environment — no manifest requires it.
    Environment,
}

impl Source {
    /// Name shown in the "Found-in" report column.
    pub fn display_name(&self) -> &str {
        match self {
            Source::Manifest(file) => file,
            Source::Environment => "Environment",
        }
    }
}

/// Declared and installed versions for a single package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Version pinned by a manifest, if any manifest declares this package.
    pub declared: Option<String>,
    /// Version reported by the environment probe, if installed.
    pub installed: Option<String>,
    /// Manifest file that declared it, or the environment sentinel.
    pub source: Source,
}

impl Requirement {
    /// A requirement is satisfied iff both sides are present and the version
    /// strings are exactly equal (case-sensitive). Absent on either side
    /// never equals anything.
    pub fn is_satisfied(&self) -> bool {
        match (&self.declared, &self.installed) {
            (Some(declared), Some(installed)) => declared == installed,
            _ => false,
        }
    }

    /// Declared version normalized for display.
    pub fn declared_display(&self) -> &str {
        self.declared.as_deref().unwrap_or(MISSING)
    }

    /// Installed version normalized for display.
    pub fn installed_display(&self) -> &str {
        self.installed.as_deref().unwrap_or(MISSING)
    }
}

/// The merged mapping from package name to [`Requirement`].
#[derive(Debug, Default)]
pub struct RequirementSet {
    entries: BTreeMap<String, Requirement>,
}

impl RequirementSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declaration from a manifest file.
    ///
    /// Later calls for the same name overwrite both the declared version and
    /// the source file (last-write-wins across manifests, no conflict
    /// detection).
    pub fn record_declared(&mut self, name: &str, version: &str, file: &str) {
        let entry = self
            .entries
            .entry(name.to_string())
            .or_insert_with(|| Requirement {
                declared: None,
                installed: None,
                source: Source::Manifest(file.to_string()),
            });
        entry.declared = Some(version.to_string());
        entry.source = Source::Manifest(file.to_string());
    }

    /// Record an installed package reported by the environment probe.
    ///
    /// A package never declared by any manifest gets the `Environment`
    /// source, flagging it as extra.
    pub fn record_installed(&mut self, name: &str, version: &str) {
        let entry = self
            .entries
            .entry(name.to_string())
            .or_insert_with(|| Requirement {
                declared: None,
                installed: None,
                source: Source::Environment,
            });
        entry.installed = Some(version.to_string());
    }

    /// Look up a single entry by package name.
    pub fn get(&self, name: &str) -> Option<&Requirement> {
        self.entries.get(name)
    }

    /// Iterate entries in package-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Requirement)> {
        self.entries.iter()
    }

    /// Number of entries in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split a `name==version` record on the first `==`.
///
/// Returns `None` for lines that carry no `==` token; blank-line filtering
/// is the caller's job.
pub fn split_pin(line: &str) -> Option<(&str, &str)> {
    line.split_once("==")
}
