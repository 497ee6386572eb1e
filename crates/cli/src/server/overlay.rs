//! Layered static file lookup.
//!
//! Responsibilities:
//! - Map a request path onto the first layer directory that holds the file.
//! - Reject paths escaping the layer roots.
//!
//! Invariants:
//! - Layers are searched in insertion order; the site directory comes first.
//! - A resolved path always lies under one of the layer roots.

use percent_encoding::percent_decode_str;
use std::path::{Component, Path, PathBuf};

/// File served for directory requests.
pub const INDEX_FILE: &str = "index.html";

/// Directories searched in order for each request.
#[derive(Debug, Clone)]
pub struct Overlay {
    layers: Vec<PathBuf>,
}

impl Overlay {
    /// An overlay whose highest-priority layer is `primary`.
    pub fn new(primary: impl Into<PathBuf>) -> Self {
        Self {
            layers: vec![primary.into()],
        }
    }

    /// Add a lower-priority layer.
    pub fn with_layer(mut self, layer: impl Into<PathBuf>) -> Self {
        self.layers.push(layer.into());
        self
    }

    pub fn layers(&self) -> &[PathBuf] {
        &self.layers
    }

    /// Find the file serving `request_path`, if any layer has it.
    pub async fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let relative = sanitize(request_path)?;
        for layer in &self.layers {
            let candidate = layer.join(&relative);
            match tokio::fs::metadata(&candidate).await {
                Ok(meta) if meta.is_file() => return Some(candidate),
                Ok(meta) if meta.is_dir() => {
                    let index = candidate.join(INDEX_FILE);
                    if tokio::fs::metadata(&index).await.is_ok_and(|m| m.is_file()) {
                        return Some(index);
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// Whether every path in `request_paths` resolves to a file.
    pub async fn provides_all(&self, request_paths: &[&str]) -> bool {
        for path in request_paths {
            if self.resolve(path).await.is_none() {
                return false;
            }
        }
        true
    }
}

/// Decode `request_path` into a path relative to a layer root.
///
/// Returns `None` for paths that are not valid UTF-8 after decoding or that
/// contain parent, root or prefix components.
pub fn sanitize(request_path: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(request_path).decode_utf8().ok()?;
    let mut relative = PathBuf::new();
    for component in Path::new(decoded.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(relative)
}
