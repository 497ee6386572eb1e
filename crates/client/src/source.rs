//! HTTP configuration sources.
//!
//! Responsibilities:
//! - Fetch a hotkey configuration resource from the presentation server.
//! - Map transport, status and parse failures onto `ConfigError`.
//! - Assemble the standard site -> default loader.
//!
//! Does NOT handle:
//! - Choosing between sources (see `scrolly_config::ConfigLoader`).

use async_trait::async_trait;
use scrolly_config::constants::{
    DEFAULT_CONFIG_PATH, DEFAULT_SOURCE_NAME, SITE_CONFIG_PATH, SITE_SOURCE_NAME,
};
use scrolly_config::{ConfigError, ConfigLoader, ConfigSource, HotkeyConfig, parse_source_text};

use crate::client::ScrollyClient;
use crate::error::ClientError;

/// Fetches a hotkey configuration over HTTP.
#[derive(Debug, Clone)]
pub struct HttpConfigSource {
    name: String,
    path: String,
    client: ScrollyClient,
}

impl HttpConfigSource {
    /// Create a source fetching `path` from the client's server.
    pub fn new(name: impl Into<String>, path: impl Into<String>, client: ScrollyClient) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            client,
        }
    }

    /// The site-specific configuration at `/hotkeys.yaml`.
    pub fn site(client: ScrollyClient) -> Self {
        Self::new(SITE_SOURCE_NAME, SITE_CONFIG_PATH, client)
    }

    /// The bundled default configuration at `/hotkeys.default.yaml`.
    pub fn bundled_default(client: ScrollyClient) -> Self {
        Self::new(DEFAULT_SOURCE_NAME, DEFAULT_CONFIG_PATH, client)
    }

    /// The request path this source fetches.
    pub fn path(&self) -> &str {
        &self.path
    }

    fn to_config_error(&self, error: ClientError) -> ConfigError {
        match error {
            ClientError::ApiError { status, .. } => ConfigError::Unavailable {
                source_name: self.name.clone(),
                status,
            },
            other => ConfigError::Fetch {
                source_name: self.name.clone(),
                message: other.to_string(),
            },
        }
    }
}

#[async_trait]
impl ConfigSource for HttpConfigSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<HotkeyConfig, ConfigError> {
        let text = self
            .client
            .fetch_text(&self.path)
            .await
            .map_err(|e| self.to_config_error(e))?;
        parse_source_text(&self.name, &text)
    }
}

/// Build the standard loader: site override, then bundled default, then
/// the hardcoded fallback.
pub fn standard_loader(client: &ScrollyClient) -> ConfigLoader {
    ConfigLoader::new()
        .with_source(HttpConfigSource::site(client.clone()))
        .with_source(HttpConfigSource::bundled_default(client.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ScrollyClient {
        ScrollyClient::builder()
            .base_url("http://localhost:8080".to_string())
            .build()
            .unwrap()
    }

    #[test]
    fn test_standard_loader_order() {
        let loader = standard_loader(&client());
        assert_eq!(loader.source_names(), vec!["site", "default"]);
    }

    #[test]
    fn test_status_maps_to_unavailable() {
        let source = HttpConfigSource::site(client());
        let err = source.to_config_error(ClientError::ApiError {
            status: 404,
            url: "http://localhost:8080/hotkeys.yaml".to_string(),
        });
        assert!(matches!(
            err,
            ConfigError::Unavailable { status: 404, ref source_name } if source_name == "site"
        ));
    }

    #[test]
    fn test_paths() {
        assert_eq!(HttpConfigSource::site(client()).path(), "/hotkeys.yaml");
        assert_eq!(
            HttpConfigSource::bundled_default(client()).path(),
            "/hotkeys.default.yaml"
        );
    }
}
