//! Request handlers for the presentation server.

use axum::body::Body;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use scrolly_config::constants::{
    BROWSER_CLOSE_GRACE_MS, BUNDLED_DEFAULT_YAML, DEFAULT_CONFIG_PATH, SHUTDOWN_GRACE_MS,
};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::inject::{Injection, inject_scripts, is_html_path, looks_like_html};
use super::{AppState, HOTKEY_ASSETS};
use crate::shutdown::ShutdownReason;

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
const YAML_CONTENT_TYPE: &str = "application/yaml; charset=utf-8";

/// Serve a file from the overlay, injecting hotkey scripts into HTML pages.
pub async fn serve_asset(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path();
    let Some(file) = state.overlay.resolve(path).await else {
        if path == DEFAULT_CONFIG_PATH {
            debug!("Serving bundled default hotkey configuration");
            return ([(header::CONTENT_TYPE, YAML_CONTENT_TYPE)], BUNDLED_DEFAULT_YAML)
                .into_response();
        }
        return (StatusCode::NOT_FOUND, "404 page not found").into_response();
    };

    let body = match tokio::fs::read(&file).await {
        Ok(body) => body,
        Err(e) => {
            warn!(path = %file.display(), error = %e, "Failed to read file");
            return (StatusCode::INTERNAL_SERVER_ERROR, "500 internal server error")
                .into_response();
        }
    };

    if is_html_path(path) && looks_like_html(&body) {
        let hotkeys = state.overlay.provides_all(HOTKEY_ASSETS).await;
        let body = inject_scripts(&body, Injection::new(state.mode, hotkeys));
        return ([(header::CONTENT_TYPE, HTML_CONTENT_TYPE)], Body::from(body)).into_response();
    }

    let mime = mime_guess::from_path(&file).first_or_octet_stream();
    ([(header::CONTENT_TYPE, mime.as_ref().to_string())], Body::from(body)).into_response()
}

/// Browser keep-alive socket. The server shuts down once it closes.
pub async fn websocket(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| watch_browser(socket, state))
}

async fn watch_browser(mut socket: WebSocket, state: AppState) {
    info!("Browser connected");
    println!("Browser connected");

    while let Some(message) = socket.recv().await {
        match message {
            Ok(Message::Close(_)) | Err(_) => break,
            Ok(_) => {}
        }
    }

    info!("Browser closed, shutting down");
    println!("Browser closed, shutting down...");
    state.shutdown.trigger_after(
        ShutdownReason::BrowserClosed,
        Duration::from_millis(BROWSER_CLOSE_GRACE_MS),
    );
}

/// Stop the server shortly after answering.
pub async fn shutdown(State(state): State<AppState>) -> StatusCode {
    info!("Shutdown requested from browser");
    println!("Shutdown requested from browser...");
    state.shutdown.trigger_after(
        ShutdownReason::Requested,
        Duration::from_millis(SHUTDOWN_GRACE_MS),
    );
    StatusCode::OK
}
