use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Window", inline)]
#[serde(default)]
/// Settings consumed by the shell only; controllers never see them.
///
/// Frame pacing (`fps_limiting`, `fps_max`) is applied by the shell.
/// `vsync` and `gui_scale` pass through to the embedding application via
/// `Shell::shell_options`.
pub struct ShellOptions {
    /// Initial viewport width in pixels.
    #[schemars(skip)]
    pub window_width: u32,
    /// Initial viewport height in pixels.
    #[schemars(skip)]
    pub window_height: u32,
    /// Cap the frame rate at `fps_max`.
    #[schemars(title = "FPS limiting")]
    pub fps_limiting: bool,
    /// Frame-rate cap when limiting is enabled.
    #[schemars(title = "FPS limit", range(min = 10, max = 250))]
    pub fps_max: u32,
    /// Synchronize presentation with the display refresh. Stored for the
    /// embedding renderer; the shell itself never presents.
    #[schemars(title = "vsync (screen sync)")]
    pub vsync: bool,
    /// GUI font scale handed to the embedding application.
    #[schemars(title = "Gui Scale", range(min = 0.5, max = 2.5), extend("step" = 0.05))]
    pub gui_scale: f32,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fps_limiting: false,
            fps_max: 60,
            vsync: true,
            gui_scale: 1.0,
        }
    }
}

impl ShellOptions {
    /// Effective FPS target (0 = unlimited).
    #[must_use]
    pub fn target_fps(&self) -> u32 {
        if self.fps_limiting {
            self.fps_max
        } else {
            0
        }
    }
}
