//! Centralized constants for the scrolly workspace.
//!
//! This module contains default values used across crates to avoid
//! magic string and number duplication.

// =============================================================================
// Configuration Sources
// =============================================================================

/// Request path of the site-specific hotkey configuration.
pub const SITE_CONFIG_PATH: &str = "/hotkeys.yaml";

/// Request path of the bundled default hotkey configuration.
pub const DEFAULT_CONFIG_PATH: &str = "/hotkeys.default.yaml";

/// Source name reported for the site-specific configuration.
pub const SITE_SOURCE_NAME: &str = "site";

/// Source name reported for the bundled default configuration.
pub const DEFAULT_SOURCE_NAME: &str = "default";

/// The bundled default configuration, served when no library file provides one.
pub const BUNDLED_DEFAULT_YAML: &str = include_str!("../assets/hotkeys.default.yaml");

// =============================================================================
// Presentation Server
// =============================================================================

/// First port probed when looking for a free port.
pub const DEFAULT_PORT: u16 = 8080;

/// Number of consecutive ports probed before giving up.
pub const PORT_SCAN_RANGE: u16 = 100;

/// Script path of the YAML parser injected into HTML pages.
pub const YAML_SCRIPT_PATH: &str = "/js-yaml.min.js";

/// Script path of the hotkey module injected into HTML pages.
pub const HOTKEYS_SCRIPT_PATH: &str = "/hotkeys.js";

/// Websocket endpoint used by the browser to signal that it is still open.
pub const WEBSOCKET_PATH: &str = "/ws";

/// Endpoint that stops the presentation server.
pub const SHUTDOWN_PATH: &str = "/shutdown";

/// Interval between browser keep-alive pings, in milliseconds.
pub const KEEPALIVE_INTERVAL_MS: u64 = 5000;

/// Delay between a shutdown request and the server stopping, in milliseconds.
pub const SHUTDOWN_GRACE_MS: u64 = 200;

/// Delay between the browser socket closing and the server stopping, in milliseconds.
pub const BROWSER_CLOSE_GRACE_MS: u64 = 500;
