//! CLI argument definitions.
//!
//! pipcheck has no subcommands: one invocation is one verification run, so
//! everything hangs off the top-level [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// pipcheck - Verify installed packages against requirements manifests.
#[derive(Debug, Parser)]
#[command(name = "pipcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Manifest files to verify (comma-separated)
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_value = "requirements.txt",
        env = "PIPCHECK_FILES"
    )]
    pub files: Vec<PathBuf>,

    /// Suppress the mismatch report on failure
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
