//! Per-frame record of pointer, button, key and timing state.

use glam::Vec2;
use rustc_hash::FxHashSet;

/// Current and previous cursor position in relative viewport coordinates
/// ([-1, 1], y up).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorPosition {
    /// Position after the most recent move.
    pub current: Vec2,
    /// Position before the most recent move.
    pub previous: Vec2,
}

impl CursorPosition {
    /// Shift `current` into `previous` and record a new position.
    pub fn update(&mut self, position: Vec2) {
        self.previous = self.current;
        self.current = position;
    }

    /// `current - previous`.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.current - self.previous
    }
}

/// Physical mouse button state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseClicks {
    /// Left button held.
    pub left: bool,
    /// Right button held.
    pub right: bool,
}

/// Mouse part of the snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MouseState {
    /// Cursor position history.
    pub position: CursorPosition,
    /// Button state.
    pub click: MouseClicks,
    /// Set while a GUI widget owns the pointer; mouse hooks are suppressed.
    pub on_gui: bool,
    /// Scroll delta of the most recent wheel event.
    pub scroll: f32,
}

/// Keyboard part of the snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyboardState {
    /// Shift modifier held.
    pub shift: bool,
    /// Control modifier held.
    pub ctrl: bool,
    pressed: FxHashSet<String>,
}

impl KeyboardState {
    /// Whether the named key is currently held.
    #[must_use]
    pub fn is_pressed(&self, name: &str) -> bool {
        self.pressed.contains(name)
    }

    /// Whether any of the named keys is currently held.
    #[must_use]
    pub fn any_pressed<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.iter().any(|name| self.is_pressed(name.as_ref()))
    }

    /// Record a key press or release.
    pub fn set_pressed(&mut self, name: &str, pressed: bool) {
        if pressed {
            let _ = self.pressed.insert(name.to_owned());
        } else {
            let _ = self.pressed.remove(name);
        }
    }

    /// Forget every held key (e.g. when the window loses focus).
    pub fn release_all(&mut self) {
        self.pressed.clear();
        self.shift = false;
        self.ctrl = false;
    }
}

/// Snapshot of all input state a controller may read during one hook call.
///
/// Written only by the shell; controllers never mutate it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    /// Pointer state.
    pub mouse: MouseState,
    /// Key state.
    pub keyboard: KeyboardState,
    /// Seconds elapsed since the previous frame (non-negative).
    pub time_interval: f32,
}

impl InputSnapshot {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_update_tracks_previous() {
        let mut cursor = CursorPosition::default();
        cursor.update(Vec2::new(0.5, 0.25));
        cursor.update(Vec2::new(0.75, 0.0));
        assert_eq!(cursor.previous, Vec2::new(0.5, 0.25));
        assert_eq!(cursor.delta(), Vec2::new(0.25, -0.25));
    }

    #[test]
    fn key_press_and_release() {
        let mut keyboard = KeyboardState::default();
        keyboard.set_pressed("KeyW", true);
        assert!(keyboard.is_pressed("KeyW"));
        assert!(keyboard.any_pressed(&["KeyS", "KeyW"]));
        keyboard.set_pressed("KeyW", false);
        assert!(!keyboard.is_pressed("KeyW"));
        assert!(!keyboard.any_pressed::<&str>(&[]));
    }

    #[test]
    fn release_all_clears_modifiers() {
        let mut keyboard = KeyboardState {
            shift: true,
            ctrl: true,
            ..Default::default()
        };
        keyboard.set_pressed("KeyK", true);
        keyboard.release_all();
        assert!(!keyboard.shift && !keyboard.ctrl);
        assert!(!keyboard.is_pressed("KeyK"));
    }
}
