//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Logging and metrics setup (see `main()`).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli) -> Result<()> {
    let metrics_enabled = cli.metrics_bind.is_some();
    match cli.command {
        Commands::Serve(args) => commands::serve::run(args).await,
        Commands::Check {
            file,
            deny_shadowed,
            output,
        } => commands::check::run(file, deny_shadowed, output).await,
        Commands::Press(args) => commands::press::run(args, metrics_enabled).await,
    }
}
