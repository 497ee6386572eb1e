//! Hotkey script injection into HTML pages.

use scrolly_config::constants::{
    HOTKEYS_SCRIPT_PATH, KEEPALIVE_INTERVAL_MS, WEBSOCKET_PATH, YAML_SCRIPT_PATH,
};

use super::ServeMode;

const BODY_CLOSE: &[u8] = b"</body>";
const HTML_OPEN: &[u8] = b"<html";

/// Whether a request path may name an HTML page: the root, `.html`/`.htm`
/// files and extension-less paths.
pub fn is_html_path(path: &str) -> bool {
    if path == "/" || path.ends_with('/') {
        return true;
    }
    let last = path.rsplit('/').next().unwrap_or(path);
    match last.rsplit_once('.') {
        None => true,
        Some((_, ext)) => ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"),
    }
}

/// Whether a response body is HTML content.
pub fn looks_like_html(body: &[u8]) -> bool {
    find(body, HTML_OPEN).is_some() || find(body, BODY_CLOSE).is_some()
}

/// Scripts inserted into HTML pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Injection {
    /// Browser-close detection over the websocket.
    pub keepalive: bool,
    /// The YAML parser and hotkey scripts. Only set when the overlay serves
    /// both files, so pages never reference a missing script.
    pub hotkeys: bool,
}

impl Injection {
    pub fn new(mode: ServeMode, hotkeys: bool) -> Self {
        Self {
            keepalive: mode == ServeMode::Presentation,
            hotkeys,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.keepalive && !self.hotkeys
    }

    /// The markup inserted before `</body>`.
    pub fn markup(&self) -> String {
        let mut out = String::from("\n");
        if self.keepalive {
            out.push_str(&keepalive_script());
        }
        if self.hotkeys {
            out.push_str(&format!(
                "<script src=\"{}\"></script>\n<script src=\"{}\"></script>\n",
                YAML_SCRIPT_PATH, HOTKEYS_SCRIPT_PATH
            ));
        }
        out
    }
}

fn keepalive_script() -> String {
    format!(
        r#"<script>
const wsUrl = 'ws://' + window.location.hostname + ':' + window.location.port + '{path}';
const ws = new WebSocket(wsUrl);
ws.onopen = () => {{
    console.log('Connected to server');
    setInterval(() => {{
        if (ws.readyState === WebSocket.OPEN) {{
            ws.send('ping');
        }}
    }}, {interval});
}};
ws.onclose = () => console.log('Disconnected from server');
ws.onerror = (error) => console.error('WebSocket error:', error);
</script>
"#,
        path = WEBSOCKET_PATH,
        interval = KEEPALIVE_INTERVAL_MS,
    )
}

/// Insert `injection` before the first `</body>`.
///
/// Bodies without `</body>` and empty injections leave the body unchanged.
pub fn inject_scripts(body: &[u8], injection: Injection) -> Vec<u8> {
    let Some(index) = find(body, BODY_CLOSE).filter(|_| !injection.is_empty()) else {
        return body.to_vec();
    };
    let markup = injection.markup();
    let mut out = Vec::with_capacity(body.len() + markup.len());
    out.extend_from_slice(&body[..index]);
    out.extend_from_slice(markup.as_bytes());
    out.extend_from_slice(&body[index..]);
    out
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_paths() {
        assert!(is_html_path("/"));
        assert!(is_html_path("/index.html"));
        assert!(is_html_path("/deck.HTM"));
        assert!(is_html_path("/slides"));
        assert!(is_html_path("/chapter/"));
        assert!(!is_html_path("/hotkeys.js"));
        assert!(!is_html_path("/hotkeys.yaml"));
        assert!(!is_html_path("/v1.2/app.css"));
    }

    #[test]
    fn test_looks_like_html() {
        assert!(looks_like_html(b"<!doctype html><html><body></body></html>"));
        assert!(looks_like_html(b"<p>fragment</p></body>"));
        assert!(!looks_like_html(b"plain text"));
    }

    #[test]
    fn test_presentation_injection() {
        let body = b"<html><body><p>hi</p></body></html>";
        let injection = Injection::new(ServeMode::Presentation, true);
        let out = String::from_utf8(inject_scripts(body, injection)).unwrap();

        let ws = out.find("new WebSocket").unwrap();
        let yaml = out.find("<script src=\"/js-yaml.min.js\"></script>").unwrap();
        let hotkeys = out.find("<script src=\"/hotkeys.js\"></script>").unwrap();
        let close = out.find("</body>").unwrap();
        assert!(ws < yaml && yaml < hotkeys && hotkeys < close);
        assert!(out.contains("}, 5000);"));
        assert!(out.ends_with("</body></html>"));
    }

    #[test]
    fn test_server_mode_has_no_keepalive() {
        let body = b"<html><body></body></html>";
        let injection = Injection::new(ServeMode::Server, true);
        let out = String::from_utf8(inject_scripts(body, injection)).unwrap();
        assert!(!out.contains("WebSocket"));
        assert!(out.contains("/hotkeys.js"));
    }

    #[test]
    fn test_injects_before_first_body_close_only() {
        let body = b"<html><body></body><template></body></template></html>";
        let injection = Injection::new(ServeMode::Server, true);
        let out = String::from_utf8(inject_scripts(body, injection)).unwrap();
        assert_eq!(out.matches("/hotkeys.js").count(), 1);
        assert!(out.find("/hotkeys.js").unwrap() < out.find("</body>").unwrap());
    }

    #[test]
    fn test_body_without_close_tag_is_unchanged() {
        let body = b"<html><p>no body close</p></html>";
        let injection = Injection::new(ServeMode::Presentation, true);
        assert_eq!(inject_scripts(body, injection), body.to_vec());
    }

    #[test]
    fn test_missing_hotkey_assets_keep_only_keepalive() {
        let body = b"<html><body></body></html>";
        let injection = Injection::new(ServeMode::Presentation, false);
        let out = String::from_utf8(inject_scripts(body, injection)).unwrap();
        assert!(out.contains("new WebSocket"));
        assert!(!out.contains("/hotkeys.js"));
        assert!(!out.contains("/js-yaml.min.js"));
    }

    #[test]
    fn test_empty_injection_is_unchanged() {
        let body = b"<html><body></body></html>";
        let injection = Injection::new(ServeMode::Server, false);
        assert!(injection.is_empty());
        assert_eq!(inject_scripts(body, injection), body.to_vec());
    }
}
