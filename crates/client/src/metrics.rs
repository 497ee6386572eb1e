//! Metrics collection for configuration fetches.
//!
//! Wraps the `metrics` crate macros with typed methods so every call site
//! uses the same metric names and labels.

use std::time::Duration;

use crate::error::ClientError;

/// Histogram of configuration fetch durations.
pub const METRIC_FETCH_DURATION: &str = "scrolly_config_fetch_duration_seconds";

/// Counter of configuration fetches by outcome.
pub const METRIC_FETCHES_TOTAL: &str = "scrolly_config_fetches_total";

/// Outcome categories for fetch metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The server returned a success status.
    Ok,
    /// The resource does not exist (404/410).
    NotFound,
    /// Any other non-success status.
    HttpStatus,
    /// Connection, DNS or timeout failures.
    Transport,
}

impl FetchOutcome {
    /// Returns the string label for this outcome.
    pub const fn as_str(&self) -> &'static str {
        match self {
            FetchOutcome::Ok => "ok",
            FetchOutcome::NotFound => "not_found",
            FetchOutcome::HttpStatus => "http_status",
            FetchOutcome::Transport => "transport",
        }
    }
}

impl From<&ClientError> for FetchOutcome {
    fn from(error: &ClientError) -> Self {
        match error.status() {
            Some(status) if ClientError::is_not_found_status(status) => FetchOutcome::NotFound,
            Some(_) => FetchOutcome::HttpStatus,
            None => FetchOutcome::Transport,
        }
    }
}

/// Metrics collector for configuration fetches.
///
/// The default collector is disabled; use [`MetricsCollector::new`] when an
/// exporter is installed.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled metrics collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a disabled metrics collector.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if metrics collection is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record one fetch of `path`.
    pub fn record_fetch(&self, path: &str, outcome: FetchOutcome, duration: Duration) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_FETCHES_TOTAL,
            "path" => path.to_string(),
            "outcome" => outcome.as_str(),
        )
        .increment(1);

        metrics::histogram!(METRIC_FETCH_DURATION,
            "path" => path.to_string(),
        )
        .record(duration.as_secs_f64());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_not_found() {
        let err = ClientError::ApiError {
            status: 404,
            url: "http://x/hotkeys.yaml".to_string(),
        };
        assert_eq!(FetchOutcome::from(&err), FetchOutcome::NotFound);
    }

    #[test]
    fn test_outcome_from_server_error() {
        let err = ClientError::ApiError {
            status: 503,
            url: "http://x/hotkeys.yaml".to_string(),
        };
        assert_eq!(FetchOutcome::from(&err), FetchOutcome::HttpStatus);
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(FetchOutcome::Ok.as_str(), "ok");
        assert_eq!(FetchOutcome::Transport.as_str(), "transport");
    }

    #[test]
    fn test_default_collector_is_disabled() {
        assert!(!MetricsCollector::default().is_enabled());
        assert!(MetricsCollector::new().is_enabled());
        // Recording on a disabled collector is a no-op.
        MetricsCollector::disabled().record_fetch(
            "/hotkeys.yaml",
            FetchOutcome::Ok,
            Duration::ZERO,
        );
    }
}
