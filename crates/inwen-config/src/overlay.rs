use serde::{Deserialize, Serialize};

fn default_width() -> u32 {
    320
}

fn default_max_height() -> u32 {
    500
}

fn default_margin() -> u32 {
    20
}

fn default_viewport_width() -> u32 {
    1280
}

fn default_viewport_height() -> u32 {
    800
}

/// Panel geometry. The panel is pinned to the bottom-right corner of the
/// viewport.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_max_height")]
    pub max_height: u32,
    /// Distance from the right and bottom edges
    #[serde(default = "default_margin")]
    pub margin: u32,
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: u32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            max_height: default_max_height(),
            margin: default_margin(),
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
        }
    }
}
