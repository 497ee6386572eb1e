//! HTTP retrieval of scrolly hotkey configuration.
//!
//! This crate provides a small client for the presentation server and the
//! HTTP configuration sources that fetch the site override and the bundled
//! default configuration.

pub mod client;
pub mod error;
pub mod metrics;
pub mod metrics_exporter;
mod source;

pub use client::ScrollyClient;
pub use client::builder::ScrollyClientBuilder;
pub use error::{ClientError, Result};
pub use metrics::{FetchOutcome, MetricsCollector};
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use source::{HttpConfigSource, standard_loader};
