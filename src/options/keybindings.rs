use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyboardState;

/// Camera actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// twist_left = ["ArrowLeft", "KeyR"]
/// right_button_emulation = ["KeyK"]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraAction {
    /// Held with the left button to act as the right button (and vice
    /// versa).
    RightButtonEmulation,
    /// With shift: twist the up axis counter-clockwise.
    TwistLeft,
    /// With shift: twist the up axis clockwise.
    TwistRight,
    /// Move forward (first person) / up in the plane (2D).
    MoveForward,
    /// Move backward (first person) / down in the plane (2D).
    MoveBackward,
    /// Move left.
    StrafeLeft,
    /// Move right.
    StrafeRight,
    /// Move along the rotation axis.
    MoveUp,
    /// Move against the rotation axis.
    MoveDown,
    /// With shift: log the current pose.
    DebugPose,
}

impl CameraAction {
    /// Every action, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::RightButtonEmulation,
        Self::TwistLeft,
        Self::TwistRight,
        Self::MoveForward,
        Self::MoveBackward,
        Self::StrafeLeft,
        Self::StrafeRight,
        Self::MoveUp,
        Self::MoveDown,
        Self::DebugPose,
    ];

    fn default_keys(self) -> &'static [&'static str] {
        match self {
            Self::RightButtonEmulation => &["KeyK"],
            Self::TwistLeft => &["ArrowLeft", "KeyR"],
            Self::TwistRight => &["ArrowRight", "KeyF"],
            Self::MoveForward => &["KeyW", "ArrowUp"],
            Self::MoveBackward => &["KeyS", "ArrowDown"],
            Self::StrafeLeft => &["KeyA", "ArrowLeft"],
            Self::StrafeRight => &["KeyD", "ArrowRight"],
            Self::MoveUp => &["KeyE"],
            Self::MoveDown => &["KeyQ"],
            Self::DebugPose => &["KeyV"],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key names.
///
/// Key names use the `winit::keyboard::KeyCode` debug format (`"KeyW"`,
/// `"ArrowLeft"`). One key may serve several actions; controllers only
/// consult the actions they understand.
pub struct KeybindingOptions {
    /// Maps action → key names.
    pub bindings: HashMap<CameraAction, Vec<String>>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = CameraAction::ALL
            .iter()
            .map(|action| {
                let keys = action
                    .default_keys()
                    .iter()
                    .map(|key| (*key).to_owned())
                    .collect();
                (*action, keys)
            })
            .collect();
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Add default keys for every action missing from a partial preset.
    pub fn fill_missing(&mut self) {
        for action in CameraAction::ALL {
            let _ = self.bindings.entry(action).or_insert_with(|| {
                action
                    .default_keys()
                    .iter()
                    .map(|key| (*key).to_owned())
                    .collect()
            });
        }
    }

    /// Keys bound to an action.
    #[must_use]
    pub fn keys(&self, action: CameraAction) -> &[String] {
        self.bindings
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether any key bound to `action` is held.
    #[must_use]
    pub fn is_held(&self, action: CameraAction, keyboard: &KeyboardState) -> bool {
        keyboard.any_pressed(self.keys(action))
    }

    /// Whether `key` is bound to `action`.
    #[must_use]
    pub fn is_bound(&self, action: CameraAction, key: &str) -> bool {
        self.keys(action).iter().any(|bound| bound == key)
    }
}
