//! Presentation server.
//!
//! Responsibilities:
//! - Serve a site directory overlaid on a library directory.
//! - Inject the hotkey scripts into HTML pages.
//! - In presentation mode, stop when the browser closes or asks to.
//!
//! Does NOT handle:
//! - Opening the browser or installing the Ctrl+C handler (see `commands::serve`).
//!
//! Invariants:
//! - `/ws` and `/shutdown` exist only in presentation mode.
//! - `/hotkeys.default.yaml` is always served, from the bundled copy when
//!   no layer provides one.
//! - HTML pages reference the hotkey scripts only while the overlay serves
//!   every file in [`HOTKEY_ASSETS`].

pub mod inject;
pub mod overlay;
pub mod ports;
mod routes;

use axum::Router;
use axum::routing::get;
use scrolly_config::constants::{
    HOTKEYS_SCRIPT_PATH, SHUTDOWN_PATH, WEBSOCKET_PATH, YAML_SCRIPT_PATH,
};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::shutdown::{ShutdownHandle, ShutdownReason};
use overlay::Overlay;

/// Browser scripts the hotkey layer needs, in load order.
pub const HOTKEY_ASSETS: &[&str] = &[YAML_SCRIPT_PATH, HOTKEYS_SCRIPT_PATH];

/// How the server behaves towards the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeMode {
    /// Open the browser and stop when it closes.
    Presentation,
    /// Run until interrupted.
    Server,
}

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("Site directory not found: {}", .0.display())]
    SiteDirMissing(PathBuf),

    #[error("No available ports in {start}..{end}")]
    NoAvailablePort { start: u16, end: u16 },

    #[error("Server I/O error")]
    Io(#[from] std::io::Error),
}

#[derive(Clone)]
pub(crate) struct AppState {
    overlay: Arc<Overlay>,
    mode: ServeMode,
    shutdown: ShutdownHandle,
}

/// Build the router serving `overlay` in `mode`.
pub fn router(overlay: Overlay, mode: ServeMode, shutdown: ShutdownHandle) -> Router {
    let state = AppState {
        overlay: Arc::new(overlay),
        mode,
        shutdown,
    };

    let mut router = Router::new();
    if mode == ServeMode::Presentation {
        router = router
            .route(WEBSOCKET_PATH, get(routes::websocket))
            .route(SHUTDOWN_PATH, get(routes::shutdown).post(routes::shutdown));
    }
    router
        .fallback(routes::serve_asset)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve `router` on `listener` until `shutdown` triggers.
pub async fn run(
    listener: TcpListener,
    router: Router,
    shutdown: ShutdownHandle,
) -> Result<ShutdownReason, ServeError> {
    let waiter = shutdown.clone();
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            waiter.wait().await;
        })
        .await?;
    Ok(shutdown.reason().unwrap_or(ShutdownReason::Interrupted))
}
