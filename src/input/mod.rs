//! Input handling: platform-agnostic events, the per-frame input snapshot
//! read by controllers, and logical button resolution.

/// Logical button resolution (single-button emulation).
pub mod buttons;
/// Platform-agnostic input events.
pub mod event;
/// Per-frame input snapshot.
pub mod snapshot;

pub use buttons::{resolve_logical_buttons, LogicalButtons};
pub use event::{InputEvent, MouseButton};
pub use snapshot::{
    CursorPosition, InputSnapshot, KeyboardState, MouseClicks, MouseState,
};
