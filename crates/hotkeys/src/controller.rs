//! Hotkey lifecycle controller.
//!
//! Responsibilities:
//! - Own the current configuration and the loader that produces it.
//! - Track whether the key listener is attached.
//! - Handle keypresses: locate, resolve, execute.
//! - Expose the reload / enable / disable control surface.
//!
//! Does NOT handle:
//! - Fetching configuration (delegated to `scrolly_config::ConfigLoader`).
//! - Delivering key events (the host calls `handle_key`).
//!
//! Invariants:
//! - At most one listener is attached, however many times `reload` runs.
//! - A reload replaces the configuration wholesale.
//! - Keys are ignored until a configuration is loaded and enabled.

use scrolly_config::{ConfigLoader, ConfigOrigin, HotkeyConfig};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

use crate::document::{Document, Viewport};
use crate::executor::execute;
use crate::locator::StepPosition;
use crate::resolver::{Binding, Intent, resolve_key};

/// Counter of configuration loads by origin.
pub const METRIC_CONFIG_LOADS_TOTAL: &str = "scrolly_config_loads_total";

/// Counter of claimed keypresses by binding.
pub const METRIC_HOTKEY_PRESSES_TOTAL: &str = "scrolly_hotkey_presses_total";

/// Commands a host integration can send to a running controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    Reload,
    Enable,
    Disable,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown control command '{0}' (expected reload, enable or disable)")]
pub struct UnknownCommand(pub String);

impl FromStr for ControlCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reload" => Ok(Self::Reload),
            "enable" => Ok(Self::Enable),
            "disable" => Ok(Self::Disable),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

/// Result of handling one keypress.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome<E> {
    /// The key was not processed; the host's default handling proceeds.
    Ignored,
    /// The key was claimed by `binding`; `intent` has been executed.
    Claimed { binding: Binding, intent: Intent<E> },
}

impl<E> KeyOutcome<E> {
    /// Whether the host should suppress its default handling of the key.
    pub fn prevent_default(&self) -> bool {
        matches!(self, Self::Claimed { .. })
    }

    pub fn binding(&self) -> Option<&Binding> {
        match self {
            Self::Claimed { binding, .. } => Some(binding),
            Self::Ignored => None,
        }
    }
}

/// Drives hotkey navigation for one presentation.
#[derive(Debug)]
pub struct HotkeyController {
    loader: ConfigLoader,
    config: Option<HotkeyConfig>,
    origin: Option<ConfigOrigin>,
    listening: bool,
}

impl HotkeyController {
    /// Create a controller with no configuration loaded yet.
    pub fn new(loader: ConfigLoader) -> Self {
        Self {
            loader,
            config: None,
            origin: None,
            listening: false,
        }
    }

    /// Create a controller around an already loaded configuration.
    pub fn with_config(loader: ConfigLoader, config: HotkeyConfig) -> Self {
        let mut controller = Self::new(loader);
        controller.install(config, None);
        controller
    }

    /// Load the configuration for the first time.
    pub async fn init(&mut self) -> ConfigOrigin {
        self.reload().await
    }

    /// Reload the configuration and attach the listener if it is enabled.
    pub async fn reload(&mut self) -> ConfigOrigin {
        let loaded = self.loader.load().await;
        metrics::counter!(METRIC_CONFIG_LOADS_TOTAL,
            "origin" => loaded.origin.to_string(),
        )
        .increment(1);

        let origin = loaded.origin.clone();
        self.install(loaded.config, Some(loaded.origin));
        origin
    }

    fn install(&mut self, config: HotkeyConfig, origin: Option<ConfigOrigin>) {
        let enabled = config.enabled;
        self.config = Some(config);
        self.origin = origin;
        if enabled {
            self.attach();
        } else {
            info!("Hotkeys navigation disabled in config");
        }
    }

    fn attach(&mut self) {
        if self.listening {
            debug!("Hotkey listener already attached");
            return;
        }
        self.listening = true;
        info!("Hotkeys navigation enabled");
    }

    /// Enable hotkeys on the current configuration. No-op when none is loaded.
    pub fn enable(&mut self) {
        if let Some(config) = self.config.as_mut() {
            config.enabled = true;
            self.attach();
        }
    }

    /// Disable hotkeys on the current configuration. No-op when none is loaded.
    pub fn disable(&mut self) {
        if let Some(config) = self.config.as_mut() {
            config.enabled = false;
            debug!("Hotkeys navigation disabled");
        }
    }

    /// Apply a control command.
    pub async fn apply(&mut self, command: ControlCommand) {
        match command {
            ControlCommand::Reload => {
                self.reload().await;
            }
            ControlCommand::Enable => self.enable(),
            ControlCommand::Disable => self.disable(),
        }
    }

    /// Handle a keydown event for `key`.
    pub fn handle_key<D, V>(&self, key: &str, doc: &D, viewport: &mut V) -> KeyOutcome<D::Element>
    where
        D: Document,
        V: Viewport<D::Element> + ?Sized,
    {
        if !self.listening {
            return KeyOutcome::Ignored;
        }
        let Some(config) = self.config.as_ref().filter(|c| c.enabled) else {
            return KeyOutcome::Ignored;
        };

        let position = StepPosition::locate(doc);
        let resolution = resolve_key(key, config, &position, doc);
        let Some(binding) = resolution.binding else {
            return KeyOutcome::Ignored;
        };

        metrics::counter!(METRIC_HOTKEY_PRESSES_TOTAL,
            "binding" => binding.label(),
        )
        .increment(1);

        execute(&resolution.intent, config, viewport);
        KeyOutcome::Claimed {
            binding,
            intent: resolution.intent,
        }
    }

    /// The current configuration, if one is loaded.
    pub fn config(&self) -> Option<&HotkeyConfig> {
        self.config.as_ref()
    }

    /// Where the current configuration came from. `None` before the first
    /// load or when constructed with `with_config`.
    pub fn origin(&self) -> Option<&ConfigOrigin> {
        self.origin.as_ref()
    }

    /// Whether the key listener is attached.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Whether keypresses are currently processed.
    pub fn is_enabled(&self) -> bool {
        self.listening && self.config.as_ref().is_some_and(|c| c.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryDocument, MemoryViewport};
    use scrolly_config::{NavAction, StaticConfigSource};

    fn disabled_config() -> HotkeyConfig {
        HotkeyConfig {
            enabled: false,
            ..HotkeyConfig::fallback()
        }
    }

    #[test]
    fn test_keys_ignored_before_load() {
        let controller = HotkeyController::new(ConfigLoader::new());
        let doc = MemoryDocument::presentation(3);
        let mut viewport = MemoryViewport::new();

        let outcome = controller.handle_key("ArrowDown", &doc, &mut viewport);
        assert_eq!(outcome, KeyOutcome::Ignored);
        assert!(!outcome.prevent_default());
        assert!(viewport.events().is_empty());
    }

    #[tokio::test]
    async fn test_init_attaches_listener_once() {
        let source = StaticConfigSource::new("site", HotkeyConfig::fallback());
        let loader = ConfigLoader::new().with_source(source);
        let mut controller = HotkeyController::new(loader);

        let origin = controller.init().await;
        assert_eq!(origin, ConfigOrigin::Source("site".to_string()));
        assert!(controller.is_listening());

        controller.reload().await;
        controller.reload().await;
        assert!(controller.is_listening());

        let mut doc = MemoryDocument::presentation(3);
        doc.activate_step(0);
        let mut viewport = MemoryViewport::new();
        controller.handle_key("ArrowDown", &doc, &mut viewport);
        assert_eq!(viewport.events().len(), 1);
    }

    #[tokio::test]
    async fn test_disabled_config_does_not_attach() {
        let source = StaticConfigSource::new("site", disabled_config());
        let loader = ConfigLoader::new().with_source(source);
        let mut controller = HotkeyController::new(loader);
        controller.init().await;

        assert!(!controller.is_listening());
        assert!(!controller.is_enabled());
    }

    #[test]
    fn test_enable_attaches_listener() {
        let mut controller = HotkeyController::with_config(ConfigLoader::new(), disabled_config());
        assert!(!controller.is_listening());

        controller.enable();
        assert!(controller.is_listening());
        assert!(controller.is_enabled());
    }

    #[test]
    fn test_enable_without_config_is_noop() {
        let mut controller = HotkeyController::new(ConfigLoader::new());
        controller.enable();
        assert!(!controller.is_listening());
        assert!(controller.config().is_none());
    }

    #[test]
    fn test_disable_stops_claiming() {
        let mut controller =
            HotkeyController::with_config(ConfigLoader::new(), HotkeyConfig::fallback());
        let mut doc = MemoryDocument::presentation(3);
        doc.activate_step(0);
        let mut viewport = MemoryViewport::new();

        controller.disable();
        let outcome = controller.handle_key("ArrowDown", &doc, &mut viewport);
        assert!(!outcome.prevent_default());
        assert!(viewport.events().is_empty());

        controller.enable();
        let outcome = controller.handle_key("ArrowDown", &doc, &mut viewport);
        assert_eq!(outcome.binding(), Some(&Binding::Navigation(NavAction::Next)));
        assert_eq!(viewport.events().len(), 1);
    }

    #[test]
    fn test_claimed_noop_still_prevents_default() {
        let controller =
            HotkeyController::with_config(ConfigLoader::new(), HotkeyConfig::fallback());
        let doc = MemoryDocument::presentation(3);
        let mut viewport = MemoryViewport::new();

        let outcome = controller.handle_key("ArrowDown", &doc, &mut viewport);
        assert!(outcome.prevent_default());
        assert!(viewport.events().is_empty());
    }

    #[tokio::test]
    async fn test_apply_commands() {
        let source = StaticConfigSource::new("site", HotkeyConfig::fallback());
        let loader = ConfigLoader::new().with_source(source);
        let mut controller = HotkeyController::new(loader);

        controller.apply(ControlCommand::Reload).await;
        assert!(controller.is_enabled());
        controller.apply(ControlCommand::Disable).await;
        assert!(!controller.is_enabled());
        controller.apply(ControlCommand::Enable).await;
        assert!(controller.is_enabled());
    }

    #[test]
    fn test_parse_control_command() {
        assert_eq!("reload".parse::<ControlCommand>(), Ok(ControlCommand::Reload));
        assert_eq!("disable".parse::<ControlCommand>(), Ok(ControlCommand::Disable));
        assert_eq!(
            "pause".parse::<ControlCommand>(),
            Err(UnknownCommand("pause".to_string()))
        );
    }
}
