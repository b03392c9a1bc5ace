//! Error types for pipcheck operations.
//!
//! This module defines [`PipcheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PipcheckError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PipcheckError::Other`) for unexpected errors
//! - Version mismatches are NOT errors — they are the normal outcome this
//!   tool exists to detect, reported through the exit code instead

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pipcheck operations.
#[derive(Debug, Error)]
pub enum PipcheckError {
    /// A requirements manifest could not be opened or read.
    #[error("Failed to read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The package-listing command could not be spawned.
    #[error("Failed to run '{command}': {source}")]
    ProbeCommandFailed {
        command: String,
        source: std::io::Error,
    },

    /// The package-listing command ran but exited with a non-zero status.
    #[error("'{command}' exited with code {code:?}: {stderr}")]
    ProbeFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pipcheck operations.
pub type Result<T> = std::result::Result<T, PipcheckError>;
