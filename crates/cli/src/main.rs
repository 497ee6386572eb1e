//! Scrolly CLI - serve and navigate scrollytelling presentations.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Install logging and the optional metrics exporter.
//! - Map command failures to structured exit codes.
//!
//! Does NOT handle:
//! - Hotkey resolution (see `crates/hotkeys`).
//! - Configuration parsing and loading (see `crates/config` and `crates/client`).
//!
//! Invariants:
//! - Logging is initialized before any command runs.
//! - Logs go to stderr so command output on stdout stays machine-readable.

mod args;
mod commands;
mod dispatch;
mod error;
mod server;
mod shutdown;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use shutdown::Cancelled;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    // Keep the exporter handle alive for the whole run.
    let _metrics_exporter = match cli.metrics_bind.as_deref() {
        Some(bind_addr) => match scrolly_client::MetricsExporter::install(bind_addr) {
            Ok(exporter) => Some(exporter),
            Err(e) => {
                eprintln!("Error: {:#}", anyhow::Error::from(e));
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        },
        None => None,
    };

    let exit_code = match run_command(cli).await {
        Ok(()) => ExitCode::Success,
        Err(e) if e.downcast_ref::<Cancelled>().is_some() => {
            eprintln!("Interrupted.");
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
