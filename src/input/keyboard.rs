use serde::{Deserialize, Serialize};

/// Engine-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// recenter_camera = "KeyR"
/// next_model = "BracketRight"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Re-frame the camera on the loaded model.
    RecenterCamera,
    /// Toggle turntable auto-rotation.
    ToggleAutoRotate,
    /// Load the next catalog model.
    NextModel,
    /// Load the previous catalog model.
    PrevModel,
}
