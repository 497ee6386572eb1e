//! Prometheus endpoint for the counters recorded while fetching hotkey
//! configuration and resolving keypresses.
//!
//! Installing the exporter replaces the no-op global recorder, so every
//! `metrics::counter!` call in the workspace becomes visible at
//! `http://<bind>/metrics`. Without it, recording is free.

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder};
use thiserror::Error;
use tracing::info;

use crate::metrics::{METRIC_FETCH_DURATION, METRIC_FETCHES_TOTAL};

/// Buckets for configuration fetch latency. Fetches hit a local
/// presentation server, so resolution is concentrated below 100ms.
const FETCH_DURATION_BUCKETS: &[f64] = &[0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.5, 2.0];

#[derive(Debug, Error)]
pub enum MetricsExporterError {
    #[error("Invalid metrics bind address '{addr}'")]
    InvalidBindAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Failed to install Prometheus exporter")]
    Install(#[from] BuildError),
}

/// Handle to the installed exporter.
#[derive(Debug)]
pub struct MetricsExporter {
    bind_addr: SocketAddr,
}

impl MetricsExporter {
    /// Install the Prometheus recorder and start its HTTP listener.
    ///
    /// Must run inside a Tokio runtime. Fails if `bind_addr` does not parse
    /// or a recorder is already installed.
    pub fn install(bind_addr: &str) -> Result<Self, MetricsExporterError> {
        let addr: SocketAddr =
            bind_addr
                .parse()
                .map_err(|source| MetricsExporterError::InvalidBindAddress {
                    addr: bind_addr.to_string(),
                    source,
                })?;

        PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Full(METRIC_FETCH_DURATION.to_string()),
                FETCH_DURATION_BUCKETS,
            )?
            .with_http_listener(addr)
            .install()?;

        metrics::describe_counter!(
            METRIC_FETCHES_TOTAL,
            "Hotkey configuration fetches by path and outcome"
        );
        metrics::describe_histogram!(
            METRIC_FETCH_DURATION,
            metrics::Unit::Seconds,
            "Hotkey configuration fetch latency"
        );

        info!(%addr, "Serving Prometheus metrics at /metrics");
        Ok(Self { bind_addr: addr })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
