//! Scroll animation parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the viewport moves to a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    /// Animated scroll.
    #[default]
    Smooth,
    /// Jump without animation.
    Instant,
    /// Defer to the host's scroll-behavior setting.
    Auto,
}

impl fmt::Display for ScrollBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Smooth => write!(f, "smooth"),
            Self::Instant => write!(f, "instant"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

/// Vertical alignment of the target within the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBlock {
    Start,
    #[default]
    Center,
    End,
    Nearest,
}

impl fmt::Display for ScrollBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Center => write!(f, "center"),
            Self::End => write!(f, "end"),
            Self::Nearest => write!(f, "nearest"),
        }
    }
}

/// Scroll parameters applied to every navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScrollOptions {
    #[serde(default)]
    pub behavior: ScrollBehavior,
    #[serde(default)]
    pub block: ScrollBlock,
}
