//! Window / viewport descriptor shared between the shell and controllers.

use glam::Vec2;

/// Current viewport dimensions.
///
/// Owned by the shell. Controllers only hold a non-owning handle to it and
/// never read pixel coordinates: the shell converts cursor positions with
/// [`pixel_to_relative`](Self::pixel_to_relative) before they reach the
/// input snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDescriptor {
    /// Width in physical pixels.
    pub width: u32,
    /// Height in physical pixels.
    pub height: u32,
}

impl Default for WindowDescriptor {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

impl WindowDescriptor {
    /// Create a descriptor for the given pixel size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height. A zero height (minimized window) reports 1.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Convert a pixel position (origin top-left, y down) to relative
    /// coordinates in [-1, 1] with y pointing up.
    #[must_use]
    pub fn pixel_to_relative(&self, x: f32, y: f32) -> Vec2 {
        let w = self.width.max(1) as f32;
        let h = self.height.max(1) as f32;
        Vec2::new(2.0 * x / w - 1.0, 1.0 - 2.0 * y / h)
    }
}
