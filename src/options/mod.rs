//! Centralized camera/shell options with TOML preset support.
//!
//! All tweakable settings (camera sensitivities, key bindings, shell
//! settings) are consolidated here. Options serialize to/from TOML so
//! presets can live next to the application.

mod camera;
mod keybindings;
mod shell;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::{CameraAction, KeybindingOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use shell::ShellOptions;

use crate::error::CamrigError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera sensitivities and limits.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Shell (window/frame pacing) settings.
    pub shell: ShellOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields and unbound actions
    /// use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CamrigError::OptionsParse`] for malformed TOML.
    pub fn from_toml(content: &str) -> Result<Self, CamrigError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| CamrigError::OptionsParse(e.to_string()))?;
        options.keybindings.fill_missing();
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CamrigError::Io`] if the file cannot be read and
    /// [`CamrigError::OptionsParse`] for malformed TOML.
    pub fn load(path: &Path) -> Result<Self, CamrigError> {
        let content = std::fs::read_to_string(path).map_err(CamrigError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!("Loaded camera options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`CamrigError::OptionsParse`] if serialization fails and
    /// [`CamrigError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), CamrigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CamrigError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CamrigError::Io)?;
        }
        std::fs::write(path, content).map_err(CamrigError::Io)
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
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
twist_speed = 4.0
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.camera.twist_speed, 4.0);
        // Everything else should be default
        assert_eq!(opts.camera.rotate_speed, 1.0);
        assert_eq!(opts.shell.window_width, 1280);
        assert!(opts.keybindings.is_bound(CameraAction::TwistLeft, "KeyR"));
    }

    #[test]
    fn partial_keybindings_keep_other_defaults() {
        let toml_str = r#"
[keybindings.bindings]
right_button_emulation = ["KeyM"]
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.keys(CameraAction::RightButtonEmulation),
            ["KeyM".to_owned()].as_slice()
        );
        assert!(opts.keybindings.is_bound(CameraAction::MoveForward, "KeyW"));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert!(opts.keybindings.is_bound(CameraAction::TwistLeft, "ArrowLeft"));
        assert!(opts.keybindings.is_bound(CameraAction::StrafeLeft, "ArrowLeft"));
        assert!(!opts.keybindings.is_bound(CameraAction::TwistRight, "KeyZ"));
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = Options::from_toml("[camera\nrotate_speed = ").unwrap_err();
        assert!(matches!(err, CamrigError::OptionsParse(_)));
    }

    #[test]
    fn fps_target_respects_limiting_flag() {
        let mut shell = ShellOptions::default();
        assert_eq!(shell.target_fps(), 0);
        shell.fps_limiting = true;
        assert_eq!(shell.target_fps(), 60);
    }

    #[test]
    fn save_then_load_and_list() {
        let dir = std::env::temp_dir()
            .join(format!("camrig-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.camera.pan_speed = 0.75;
        opts.save(&dir.join("close_up.toml")).unwrap();
        let loaded = Options::load(&dir.join("close_up.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["close_up".to_owned()]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("shell"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("rotate_speed").is_some());
        assert!(camera.get("min_distance").is_none());
    }

    #[test]
    fn bundled_close_up_preset_loads() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("presets");
        assert!(Options::list_presets(&dir).contains(&"close_up".to_owned()));
        let opts = Options::load(&dir.join("close_up.toml")).unwrap();
        assert_eq!(opts.camera.rotate_speed, 0.6);
        assert_eq!(opts.shell.target_fps(), 60);
        assert!(opts
            .keybindings
            .is_bound(CameraAction::RightButtonEmulation, "AltLeft"));
        assert!(opts.keybindings.is_bound(CameraAction::MoveForward, "KeyW"));
        let limits = opts.camera.distance_limits();
        assert_eq!((limits.min, limits.max), (0.01, 100.0));
    }
}
