//! Common test utilities for integration tests.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use scrolly_client::{HttpConfigSource, ScrollyClient, standard_loader};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a client pointed at a mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> ScrollyClient {
    ScrollyClient::builder()
        .base_url(server.uri())
        .build()
        .expect("mock server URI is valid")
}

/// A site configuration that binds `j` to next.
#[allow(dead_code)]
pub const SITE_YAML: &str = "enabled: true\nnavigation:\n  next: [j]\n";

/// Build a client pointed at a port nothing listens on.
#[allow(dead_code)]
pub fn unreachable_client() -> ScrollyClient {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    ScrollyClient::builder()
        .base_url(format!("http://127.0.0.1:{}", port))
        .build()
        .expect("loopback URL is valid")
}
