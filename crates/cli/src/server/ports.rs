//! Listening port selection.

use scrolly_config::constants::PORT_SCAN_RANGE;
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;
use tracing::debug;

use super::ServeError;

/// Bind the first free port in `[start, start + 100)` on all interfaces.
///
/// The listener is kept open, so the chosen port cannot be taken between
/// the scan and the server starting.
pub async fn bind_first_available(start: u16) -> Result<TcpListener, ServeError> {
    let end = start.saturating_add(PORT_SCAN_RANGE);
    for port in start..end {
        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
        match TcpListener::bind(addr).await {
            Ok(listener) => return Ok(listener),
            Err(e) => debug!(port, error = %e, "Port unavailable"),
        }
    }
    Err(ServeError::NoAvailablePort { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_skips_taken_port() {
        let taken = TcpListener::bind((Ipv4Addr::UNSPECIFIED, 0)).await.unwrap();
        let port = taken.local_addr().unwrap().port();
        if port.checked_add(PORT_SCAN_RANGE).is_none() {
            return;
        }

        let listener = bind_first_available(port).await.unwrap();
        let chosen = listener.local_addr().unwrap().port();
        assert_ne!(chosen, port);
        assert!(chosen > port && chosen < port + PORT_SCAN_RANGE);
    }

    #[tokio::test]
    async fn test_empty_range_fails() {
        let err = bind_first_available(u16::MAX).await.unwrap_err();
        assert!(matches!(err, ServeError::NoAvailablePort { .. }));
    }
}
