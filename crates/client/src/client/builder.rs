//! Client builder for constructing [`ScrollyClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating and parsing the base URL
//! - Configuring the underlying HTTP client (optional timeout)
//!
//! # What this module does NOT handle:
//! - Fetching resources (handled by [`ScrollyClient`] methods in `mod.rs`)
//!
//! # Invariants
//! - `base_url` is required and must be an absolute `http` or `https` URL
//! - No request timeout is applied unless one is set explicitly

use std::time::Duration;

use url::Url;

use super::ScrollyClient;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Builder for creating a new [`ScrollyClient`].
///
/// # Example
///
/// ```rust,ignore
/// use scrolly_client::ScrollyClient;
///
/// let client = ScrollyClient::builder()
///     .base_url("http://localhost:8080".to_string())
///     .timeout(Duration::from_secs(5))
///     .build()?;
/// ```
#[derive(Default)]
pub struct ScrollyClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    metrics: Option<MetricsCollector>,
}

impl ScrollyClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the presentation server, e.g. `http://localhost:8080`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set a request timeout.
    ///
    /// By default requests wait for the server indefinitely.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the metrics collector used to record fetch outcomes.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Parse the base URL, accepting only absolute `http`/`https` URLs.
    fn parse_base_url(url: &str) -> Result<Url> {
        let parsed = Url::parse(url.trim())
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", url, e)))?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(ClientError::InvalidUrl(format!(
                "{}: unsupported scheme '{}'",
                url, other
            ))),
        }
    }

    /// Build the [`ScrollyClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is missing or invalid.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<ScrollyClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::parse_base_url(&base_url)?;

        let mut http_builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            http_builder = http_builder.timeout(timeout);
        }
        let http = http_builder.build()?;

        Ok(ScrollyClient {
            http,
            base_url,
            metrics: self.metrics.unwrap_or_default(),
        })
    }
}
