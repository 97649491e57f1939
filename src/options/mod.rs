//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (camera projection, interaction tuning, display
//! toggles, keybindings) are consolidated here. Options serialize to/from
//! TOML for presets stored next to the model catalog.

mod camera;
mod display;
mod interaction;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use interaction::InteractionOptions;
pub use keybindings::KeybindingOptions;
use serde::{Deserialize, Serialize};

use crate::error::VantageError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[interaction]`) work
/// correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Orbit, pan, zoom, and gesture tuning.
    pub interaction: InteractionOptions,
    /// Background and display toggles.
    pub display: DisplayOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::Io`] if the file cannot be read, or
    /// [`VantageError::OptionsParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content =
            std::fs::read_to_string(path).map_err(VantageError::Io)?;
        toml::from_str(&content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::Io`] if the file or its parent directory
    /// cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VantageError::Io)?;
        }
        std::fs::write(path, content).map_err(VantageError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[interaction]
damping = 0.1
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.interaction.damping, 0.1);
        // Everything else should be default
        assert_eq!(opts.interaction.min_distance, 1.0);
        assert_eq!(opts.camera.fovy, 75.0);
    }

    #[test]
    fn keybindings_parse_from_toml_table() {
        use crate::input::KeyAction;
        let toml_str = r#"
[keybindings.bindings]
recenter_camera = "KeyZ"
"#;
        let mut opts: Options = toml::from_str(toml_str).unwrap();
        opts.keybindings.rebuild_reverse_map();
        assert_eq!(
            opts.keybindings.lookup("KeyZ"),
            Some(KeyAction::RecenterCamera)
        );
        assert_eq!(opts.keybindings.lookup("KeyR"), None);
    }

    #[test]
    fn keybinding_lookup() {
        use crate::input::KeyAction;
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyR"),
            Some(KeyAction::RecenterCamera)
        );
        assert_eq!(
            opts.keybindings.lookup("BracketRight"),
            Some(KeyAction::NextModel)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }
}
