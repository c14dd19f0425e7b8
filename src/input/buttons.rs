//! Logical button resolution.
//!
//! Single-button pointing devices hold an emulation key to reach the other
//! button. The aliasing policy lives here so controllers never re-derive it.

use super::snapshot::MouseClicks;

/// Buttons as the controllers see them after emulation is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogicalButtons {
    /// Logical left button.
    pub left: bool,
    /// Logical right button.
    pub right: bool,
}

/// Resolve physical buttons into logical ones.
///
/// While the emulation key is held the two buttons swap roles: a left-drag
/// acts as a right-drag and a right-drag acts as a left-drag.
#[must_use]
pub fn resolve_logical_buttons(
    raw: MouseClicks,
    emulation_held: bool,
) -> LogicalButtons {
    if emulation_held {
        LogicalButtons {
            left: raw.right,
            right: raw.left,
        }
    } else {
        LogicalButtons {
            left: raw.left,
            right: raw.right,
        }
    }
}
