use glam::Vec3;

use super::{Controller, ControllerBase};
use crate::camera::{CameraPose, OrbitEulerPose};
use crate::error::CamrigError;
use crate::input::resolve_logical_buttons;
use crate::options::{CameraAction, CameraOptions, KeybindingOptions};
use crate::util::math::usable_delta;

const USAGE: &str = "\
Info Camera Controller: Orbit Euler
  Camera that rotates around a central focus point.
  Note: Uses Euler angle description (roll-pitch-yaw around a rotation axis).

Camera control:
  Mouse left + drag          : Rotate camera (pitch/yaw) around focus point
  Mouse right + drag         : Move closer/farther from focus point
   (or 'k' + Mouse left)       (focus point remains unchanged)
  Ctrl + Mouse left + drag   : Pan camera and focus point in view plane
  Ctrl + Mouse right + drag  : Translate camera and focus point front/back
   (or 'k' + Ctrl + left)
  Mouse wheel                : Move closer/farther from focus point
  Shift + Left/Right (or r/f): Rotate \"up\" direction (twist the rotation axis)
";

/// Orbit interaction over the Euler pose: yaw turns around a fixed
/// rotation axis, pitch tilts toward it, roll stays untouched except
/// through the twist keys.
#[derive(Debug)]
pub struct OrbitEulerController {
    base: ControllerBase,
    /// The pose driven by this controller.
    pub camera_model: OrbitEulerPose,
    speeds: CameraOptions,
    keys: KeybindingOptions,
}

impl Default for OrbitEulerController {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitEulerController {
    /// Controller with default speeds and key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(&CameraOptions::default(), &KeybindingOptions::default())
    }

    /// Controller with the given speeds and key bindings.
    #[must_use]
    pub fn with_options(speeds: &CameraOptions, keys: &KeybindingOptions) -> Self {
        let mut camera_model = OrbitEulerPose::new();
        camera_model.set_limits(speeds.distance_limits());
        Self {
            base: ControllerBase::new(),
            camera_model,
            speeds: speeds.clone(),
            keys: keys.clone(),
        }
    }

    /// Replace the rotation axis used by yaw.
    ///
    /// # Errors
    ///
    /// Rejects zero-length and non-finite axes; the pose is unchanged.
    pub fn set_rotation_axis(&mut self, axis: Vec3) -> Result<(), CamrigError> {
        self.camera_model.set_rotation_axis(axis)
    }

    /// Rotate around the world x axis.
    pub fn set_rotation_axis_x(&mut self) {
        self.camera_model.set_unit_rotation_axis(Vec3::X);
    }

    /// Rotate around the world y axis.
    pub fn set_rotation_axis_y(&mut self) {
        self.camera_model.set_unit_rotation_axis(Vec3::Y);
    }

    /// Rotate around the world z axis.
    pub fn set_rotation_axis_z(&mut self) {
        self.camera_model.set_unit_rotation_axis(Vec3::Z);
    }

    /// Look at `center` from `eye`.
    ///
    /// `up` is accepted for symmetry with
    /// [`OrbitController::look_at`](super::OrbitController::look_at) but is
    /// ignored: the rotation axis set beforehand stays authoritative. This
    /// differs from the quaternion controller and is kept deliberately so
    /// existing scenes behave the same.
    ///
    /// # Errors
    ///
    /// Rejects `eye == center` and non-finite input; the pose is unchanged.
    pub fn look_at(
        &mut self,
        eye: Vec3,
        center: Vec3,
        _up: Vec3,
    ) -> Result<(), CamrigError> {
        self.camera_model.look_at(eye, center).inspect_err(|e| {
            log::warn!("orbit-euler look_at rejected: {e}");
        })
    }
}

impl Controller for OrbitEulerController {
    fn base(&self) -> &ControllerBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ControllerBase {
        &mut self.base
    }

    fn title(&self) -> &'static str {
        "Orbit Euler"
    }

    fn usage(&self) -> &'static str {
        USAGE
    }

    fn pose(&self) -> &dyn CameraPose {
        &self.camera_model
    }

    fn on_mouse_move(&mut self) {
        let Some(input) = self.base.mouse_input() else {
            return;
        };
        let input = input.borrow();
        let delta = input.mouse.position.delta();
        if !usable_delta(delta) {
            return;
        }

        let emulated = self
            .keys
            .is_held(CameraAction::RightButtonEmulation, &input.keyboard);
        let buttons = resolve_logical_buttons(input.mouse.click, emulated);
        let ctrl = input.keyboard.ctrl;
        let s = &self.speeds;

        if buttons.left && !ctrl {
            self.camera_model.manipulator_rotate_roll_pitch_yaw(
                0.0,
                delta.y * s.rotate_speed,
                -delta.x * s.rotate_speed,
            );
        } else if buttons.left && ctrl {
            self.camera_model
                .manipulator_translate_in_plane(delta * s.pan_speed);
        } else if buttons.right && !ctrl {
            self.camera_model
                .manipulator_scale_distance_to_center(delta.y * s.zoom_speed);
        } else if buttons.right && ctrl {
            self.camera_model
                .manipulator_translate_front(delta.y * s.front_speed);
        }
    }

    fn on_mouse_scroll(&mut self) {
        let Some(input) = self.base.mouse_input() else {
            return;
        };
        let scroll = input.borrow().mouse.scroll;
        if scroll.is_finite() {
            self.camera_model.manipulator_scale_distance_to_center(
                scroll * self.speeds.scroll_zoom_speed,
            );
        }
    }

    fn on_idle(&mut self) {
        let Some(input) = self.base.input() else {
            return;
        };
        let input = input.borrow();
        if !input.keyboard.shift {
            return;
        }
        let angle = self.speeds.twist_speed * input.time_interval;
        if self.keys.is_held(CameraAction::TwistLeft, &input.keyboard) {
            self.camera_model.manipulator_twist_rotation_axis(angle);
        }
        if self.keys.is_held(CameraAction::TwistRight, &input.keyboard) {
            self.camera_model.manipulator_twist_rotation_axis(-angle);
        }
    }
}
