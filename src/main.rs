//! pipcheck CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use console::style;
use pipcheck::check;
use pipcheck::cli::Cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pipcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pipcheck=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("pipcheck starting with args: {:?}", cli);

    match check::run(&cli) {
        // 0 = everything matches, 1 = drift detected.
        Ok(verdict) => ExitCode::from(verdict.exit_code()),
        // 2 = the run itself failed (unreadable manifest, probe failure).
        Err(e) => {
            eprintln!("{} {}", style("error:").red().bold(), e);
            ExitCode::from(2)
        }
    }
}
