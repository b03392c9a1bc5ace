//! pipcheck - Verify installed Python packages against requirements manifests.
//!
//! pipcheck reads one or more `name==version` manifest files, asks the
//! environment what is actually installed, and reports every package whose
//! installed version does not exactly match its declared version. The exit
//! code is the contract: 0 when everything matches, 1 when anything has
//! drifted, 2 when the tool itself could not complete a run.
//!
//! # Modules
//!
//! - [`check`] - The linear verification pipeline
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - Manifest parsing for declared requirements
//! - [`probe`] - Environment probe for installed package versions
//! - [`reconcile`] - Declared-versus-installed reconciliation
//! - [`report`] - Mismatch table rendering
//! - [`requirement`] - The per-package requirement model
//!
//! # Example
//!
//! ```
//! use pipcheck::reconcile::{reconcile, Verdict};
//! use pipcheck::requirement::RequirementSet;
//!
//! let mut set = RequirementSet::new();
//! set.record_declared("foo", "1.2.3", "requirements.txt");
//! set.record_installed("foo", "1.2.3");
//! assert_eq!(reconcile(&set).verdict, Verdict::Ok);
//! ```

pub mod check;
pub mod cli;
pub mod error;
pub mod manifest;
pub mod probe;
pub mod reconcile;
pub mod report;
pub mod requirement;

pub use error::{PipcheckError, Result};
