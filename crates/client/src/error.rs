//! Error types for the scrolly client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from the server.
    #[error("HTTP {status} at {url}")]
    ApiError { status: u16, url: String },

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// The HTTP status carried by this error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidUrl(_) => None,
        }
    }

    /// Check if an HTTP status code means the resource does not exist.
    pub fn is_not_found_status(status: u16) -> bool {
        matches!(status, 404 | 410)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status() {
        let err = ClientError::ApiError {
            status: 404,
            url: "http://localhost:8080/hotkeys.yaml".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.to_string(),
            "HTTP 404 at http://localhost:8080/hotkeys.yaml"
        );
    }

    #[test]
    fn test_invalid_url_has_no_status() {
        let err = ClientError::InvalidUrl("nope".to_string());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_not_found_statuses() {
        assert!(ClientError::is_not_found_status(404));
        assert!(ClientError::is_not_found_status(410));
        assert!(!ClientError::is_not_found_status(500));
        assert!(!ClientError::is_not_found_status(200));
    }
}
