/// Platform-agnostic input events.
///
/// These are fed into a [`Shell`](crate::shell::Shell) which folds them into
/// the [`InputSnapshot`](super::InputSnapshot) and dispatches the active
/// controller's hooks.
///
/// # Example
///
/// ```ignore
/// shell.handle_event(InputEvent::CursorMoved { x: 100.0, y: 200.0 });
/// shell.handle_event(InputEvent::Key { name: "KeyW".into(), pressed: true });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = away from the user).
    Scroll {
        /// Scroll amount in lines.
        delta: f32,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
        /// Whether the control key is held.
        ctrl: bool,
    },
    /// A named key was pressed or released.
    Key {
        /// Key name in `winit::keyboard::KeyCode` debug format (`"KeyW"`,
        /// `"ArrowLeft"`, ...).
        name: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// The viewport was resized.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit keyboard event. Keys without a known physical code
    /// are dropped.
    #[must_use]
    pub fn from_key_event(event: &winit::event::KeyEvent) -> Option<Self> {
        match event.physical_key {
            winit::keyboard::PhysicalKey::Code(code) => Some(Self::Key {
                name: format!("{code:?}"),
                pressed: event.state.is_pressed(),
            }),
            winit::keyboard::PhysicalKey::Unidentified(_) => None,
        }
    }

    /// Convert a winit modifier change.
    #[must_use]
    pub fn from_modifiers(modifiers: &winit::event::Modifiers) -> Self {
        let state = modifiers.state();
        Self::ModifiersChanged {
            shift: state.shift_key(),
            ctrl: state.control_key(),
        }
    }
}
