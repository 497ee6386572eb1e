//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read defaults from `SCROLLY_*` environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand, ValueEnum};
use scrolly_config::constants::DEFAULT_PORT;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scrolly")]
#[command(about = "Serve and navigate scrollytelling presentations", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  scrolly serve ./site --lib-dir ./lib\n  scrolly serve ./site --server --port 9000\n  scrolly check site/hotkeys.yaml\n  scrolly press --config site/hotkeys.yaml --steps 5 --active 0 ArrowDown ArrowDown End\n  scrolly press --base-url http://localhost:8080 i 1 f\n"
)]
pub struct Cli {
    /// Bind address for the Prometheus metrics endpoint (e.g., 127.0.0.1:9090)
    #[arg(long, global = true, env = "SCROLLY_METRICS_BIND", value_name = "ADDR")]
    pub metrics_bind: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve a presentation with hotkey navigation injected
    Serve(ServeArgs),

    /// Validate a hotkey configuration file
    Check {
        /// Path to the hotkeys YAML file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Fail when a binding can never fire because another category claims its key
        #[arg(long)]
        deny_shadowed: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Simulate keypresses against an in-memory presentation
    Press(PressArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServeArgs {
    /// Directory with the presentation; its files win over the library directory
    #[arg(value_name = "SITE_DIR", env = "SCROLLY_SITE_DIR", default_value = ".")]
    pub site_dir: PathBuf,

    /// Directory with hotkeys.js, js-yaml.min.js and hotkeys.default.yaml
    #[arg(long, env = "SCROLLY_LIB_DIR", value_name = "DIR")]
    pub lib_dir: Option<PathBuf>,

    /// First port to try; the next free port within 100 is used
    #[arg(long, env = "SCROLLY_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Run in server mode (no browser, no shutdown on browser close)
    #[arg(long)]
    pub server: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct PressArgs {
    /// Keys to press, in order (KeyboardEvent.key names). `:reload`,
    /// `:enable` and `:disable` send control commands instead.
    #[arg(value_name = "KEY", required = true, allow_hyphen_values = true)]
    pub keys: Vec<String>,

    /// Load the configuration from a local file
    #[arg(long, value_name = "FILE", conflicts_with = "base_url")]
    pub config: Option<PathBuf>,

    /// Load the configuration from a running presentation server
    #[arg(long, env = "SCROLLY_BASE_URL", value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds when loading from a server
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Number of steps in the simulated presentation
    #[arg(long, default_value_t = 5)]
    pub steps: usize,

    /// Index of the initially active step (none when omitted)
    #[arg(long, value_name = "INDEX")]
    pub active: Option<usize>,

    /// Add a `data-hotkey` marker element with this value (repeatable)
    #[arg(long = "marker", value_name = "VALUE")]
    pub markers: Vec<String>,

    /// Add a named section element `scrolly-<NAME>` (repeatable)
    #[arg(long = "section", value_name = "NAME")]
    pub sections: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
