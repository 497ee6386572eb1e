//! Navigation executor.
//!
//! Applies a resolved intent to a viewport. Missing targets are silent
//! no-ops and a rejected fullscreen request is logged, never surfaced.

use scrolly_config::HotkeyConfig;
use tracing::warn;

use crate::document::Viewport;
use crate::resolver::Intent;

/// Perform `intent` on `viewport` using the scroll options of `config`.
pub fn execute<E, V>(intent: &Intent<E>, config: &HotkeyConfig, viewport: &mut V)
where
    V: Viewport<E> + ?Sized,
{
    let options = config.scroll_options();
    match intent {
        Intent::None => {}
        Intent::ScrollTo(element) => viewport.scroll_into_view(element, options),
        Intent::ScrollToTop => viewport.scroll_to_top(options.behavior),
        Intent::ToggleFullscreen => toggle_fullscreen(viewport),
    }
}

fn toggle_fullscreen<E, V>(viewport: &mut V)
where
    V: Viewport<E> + ?Sized,
{
    let result = if viewport.is_fullscreen() {
        viewport.exit_fullscreen()
    } else {
        viewport.request_fullscreen()
    };
    if let Err(e) = result {
        warn!(error = %e, "Could not toggle fullscreen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{ElementId, MemoryViewport, ViewportEvent};
    use scrolly_config::{ScrollBehavior, ScrollBlock, ScrollOptions};

    #[test]
    fn test_scroll_uses_default_options() {
        let mut config = HotkeyConfig::fallback();
        config.scroll = None;
        let mut viewport = MemoryViewport::new();

        execute(&Intent::ScrollTo(ElementId(3)), &config, &mut viewport);
        assert_eq!(
            viewport.events(),
            &[ViewportEvent::ScrolledIntoView {
                element: ElementId(3),
                behavior: ScrollBehavior::Smooth,
                block: ScrollBlock::Center,
            }]
        );
    }

    #[test]
    fn test_scroll_uses_configured_options() {
        let mut config = HotkeyConfig::fallback();
        config.scroll = Some(ScrollOptions {
            behavior: ScrollBehavior::Instant,
            block: ScrollBlock::Start,
        });
        let mut viewport = MemoryViewport::new();

        execute(&Intent::ScrollTo(ElementId(1)), &config, &mut viewport);
        execute(&Intent::<ElementId>::ScrollToTop, &config, &mut viewport);
        assert_eq!(
            viewport.events(),
            &[
                ViewportEvent::ScrolledIntoView {
                    element: ElementId(1),
                    behavior: ScrollBehavior::Instant,
                    block: ScrollBlock::Start,
                },
                ViewportEvent::ScrolledToTop {
                    behavior: ScrollBehavior::Instant
                },
            ]
        );
    }

    #[test]
    fn test_none_does_nothing() {
        let mut viewport: MemoryViewport = MemoryViewport::new();
        execute(&Intent::None, &HotkeyConfig::fallback(), &mut viewport);
        assert!(viewport.events().is_empty());
    }

    #[test]
    fn test_fullscreen_toggles() {
        let config = HotkeyConfig::fallback();
        let mut viewport: MemoryViewport = MemoryViewport::new();

        execute(&Intent::ToggleFullscreen, &config, &mut viewport);
        assert!(viewport.is_fullscreen());
        execute(&Intent::ToggleFullscreen, &config, &mut viewport);
        assert!(!viewport.is_fullscreen());
        assert_eq!(
            viewport.events(),
            &[ViewportEvent::EnteredFullscreen, ViewportEvent::ExitedFullscreen]
        );
    }

    #[test]
    fn test_rejected_fullscreen_is_swallowed() {
        let mut viewport: MemoryViewport = MemoryViewport::denying_fullscreen();
        execute(&Intent::ToggleFullscreen, &HotkeyConfig::fallback(), &mut viewport);
        assert!(!viewport.is_fullscreen());
        assert!(viewport.events().is_empty());
    }
}
