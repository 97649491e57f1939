use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Background and display toggles.
pub struct DisplayOptions {
    /// Clear color, linear RGB.
    pub background: [f32; 3],
    /// Whether turntable auto-rotation starts enabled.
    pub auto_rotate: bool,
    /// Frame-rate cap; `0` renders as fast as vsync allows.
    pub target_fps: u32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            // Light neutral gray (0xf0f0f0)
            background: [0.941, 0.941, 0.941],
            auto_rotate: false,
            target_fps: 0,
        }
    }
}
