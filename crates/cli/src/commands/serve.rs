//! Serve command implementation.

use anyhow::Result;
use tracing::{info, warn};

use crate::args::ServeArgs;
use crate::server::{self, HOTKEY_ASSETS, ServeError, ServeMode, overlay::Overlay, ports};
use crate::shutdown::{Cancelled, ShutdownHandle, ShutdownReason};

pub async fn run(args: ServeArgs) -> Result<()> {
    if !args.site_dir.is_dir() {
        return Err(ServeError::SiteDirMissing(args.site_dir).into());
    }

    let mut overlay = Overlay::new(&args.site_dir);
    match args.lib_dir {
        Some(ref lib) if lib.is_dir() => overlay = overlay.with_layer(lib),
        Some(ref lib) => {
            warn!(path = %lib.display(), "Library directory not found, serving site only")
        }
        None => {}
    }
    if !overlay.provides_all(HOTKEY_ASSETS).await {
        warn!(
            assets = ?HOTKEY_ASSETS,
            "Hotkey scripts missing from site and library, serving pages without hotkeys"
        );
        eprintln!("Warning: hotkey scripts not found; pass --lib-dir to enable hotkeys");
    }

    let mode = if args.server {
        ServeMode::Server
    } else {
        ServeMode::Presentation
    };

    let listener = ports::bind_first_available(args.port).await?;
    let port = listener.local_addr().map_err(ServeError::Io)?.port();
    let url = format!("http://localhost:{}", port);
    info!(port, layers = overlay.layers().len(), ?mode, "Starting presentation server");

    let shutdown = ShutdownHandle::new();
    let on_interrupt = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        on_interrupt.trigger(ShutdownReason::Interrupted);
    });

    match mode {
        ServeMode::Server => {
            println!("Server running at {} (port {})", url, port);
            println!("Press Ctrl+C to quit");
        }
        ServeMode::Presentation => {
            println!("Opening presentation at {} (port {})", url, port);
            println!("Close the browser when done, or press Ctrl+C to quit");
            if let Err(e) = open::that_detached(&url) {
                warn!(error = %e, "Could not open browser");
            }
        }
    }

    let app = server::router(overlay, mode, shutdown.clone());
    let reason = server::run(listener, app, shutdown).await?;
    info!(%reason, "Presentation server stopped");

    match reason {
        ShutdownReason::Interrupted => Err(Cancelled.into()),
        ShutdownReason::BrowserClosed | ShutdownReason::Requested => Ok(()),
    }
}
