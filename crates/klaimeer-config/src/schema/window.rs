//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Host window appearance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial logical width (valid range: 200-7680).
    pub width: u32,
    /// Initial logical height (valid range: 200-4320).
    pub height: u32,
    /// Request a transparent window so the globe floats over the desktop.
    pub transparent: bool,
    pub decorations: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Klaimeer".into(),
            width: 1280,
            height: 800,
            transparent: true,
            decorations: true,
        }
    }
}
