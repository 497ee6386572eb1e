//! Server shutdown signalling.
//!
//! Responsibilities:
//! - Provide a cloneable handle that any task (Ctrl+C listener, `/ws` and
//!   `/shutdown` handlers) can use to stop the server.
//! - Record why the server stopped.
//! - Define the `Cancelled` error used to report Ctrl+C through `anyhow::Result`.
//!
//! Does NOT handle:
//! - Installing signal handlers (see `commands::serve`).
//!
//! Invariants:
//! - The first trigger wins; later triggers do not change the recorded reason.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

/// Why the server stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// Ctrl+C / SIGINT.
    Interrupted,
    /// The browser's keep-alive socket closed.
    BrowserClosed,
    /// A request to `/shutdown`.
    Requested,
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interrupted => write!(f, "interrupted"),
            Self::BrowserClosed => write!(f, "browser closed"),
            Self::Requested => write!(f, "shutdown requested"),
        }
    }
}

/// Cloneable trigger and waiter for server shutdown.
#[derive(Clone, Debug)]
pub struct ShutdownHandle {
    tx: Arc<watch::Sender<Option<ShutdownReason>>>,
}

impl Default for ShutdownHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownHandle {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Request shutdown. Returns false if shutdown was already requested.
    pub fn trigger(&self, reason: ShutdownReason) -> bool {
        self.tx.send_if_modified(|current| {
            if current.is_some() {
                return false;
            }
            *current = Some(reason);
            true
        })
    }

    /// Request shutdown after `delay`, without blocking the caller.
    pub fn trigger_after(&self, reason: ShutdownReason, delay: Duration) {
        let handle = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            handle.trigger(reason);
        });
    }

    /// The recorded reason, if shutdown was requested.
    pub fn reason(&self) -> Option<ShutdownReason> {
        *self.tx.borrow()
    }

    /// Wait until shutdown is requested.
    pub async fn wait(&self) -> ShutdownReason {
        let mut rx = self.tx.subscribe();
        loop {
            if let Some(reason) = *rx.borrow_and_update() {
                return reason;
            }
            // The sender lives in `self`, so the channel cannot close here.
            if rx.changed().await.is_err() {
                return ShutdownReason::Interrupted;
            }
        }
    }
}

/// Marker error used to indicate user-driven cancellation.
#[derive(Debug, Clone, Copy)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cancelled")
    }
}

impl std::error::Error for Cancelled {}
