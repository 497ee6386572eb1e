//! HTTP client for the presentation server.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//!
//! # What this module does NOT handle:
//! - Parsing fetched configuration (see `scrolly_config::parse_source_text`)
//! - Deciding which source to try next (see `scrolly_config::ConfigLoader`)
//!
//! # Invariants
//! - Resource paths are resolved against the server root, as a browser resolves
//!   an absolute path such as `/hotkeys.yaml`
//! - Each call issues exactly one request; there are no retries

pub mod builder;

use std::time::Instant;

use tracing::debug;
use url::Url;

use crate::error::{ClientError, Result};
use crate::metrics::{FetchOutcome, MetricsCollector};
use builder::ScrollyClientBuilder;

/// Client for fetching resources from a scrolly presentation server.
#[derive(Debug, Clone)]
pub struct ScrollyClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Url,
    pub(crate) metrics: MetricsCollector,
}

impl ScrollyClient {
    /// Create a new client builder.
    pub fn builder() -> ScrollyClientBuilder {
        ScrollyClientBuilder::new()
    }

    /// The server base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a resource path against the server base URL.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", path, e)))
    }

    /// GET a resource and return its body as text.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ApiError`] for non-success statuses and
    /// [`ClientError::HttpError`] for transport failures.
    pub async fn fetch_text(&self, path: &str) -> Result<String> {
        let url = self.resolve(path)?;
        let started = Instant::now();

        let result = self.get_text(url.clone()).await;

        let outcome = match &result {
            Ok(_) => FetchOutcome::Ok,
            Err(e) => FetchOutcome::from(e),
        };
        self.metrics.record_fetch(path, outcome, started.elapsed());
        debug!(%url, outcome = outcome.as_str(), "Fetched resource");

        result
    }

    async fn get_text(&self, url: Url) -> Result<String> {
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::ApiError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}
