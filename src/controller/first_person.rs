use glam::{Vec2, Vec3};

use super::{Controller, ControllerBase};
use crate::camera::{CameraPose, FirstPersonPose};
use crate::error::CamrigError;
use crate::input::KeyboardState;
use crate::options::{CameraAction, CameraOptions, KeybindingOptions};
use crate::util::math::usable_delta;

const USAGE: &str = "\
Info Camera Controller: First Person Euler
  Free-fly camera; rotations pivot around the camera itself.

Camera control:
  Mouse move                 : Look around (yaw/pitch)
  w/s (or Up/Down)           : Move forward/backward
  a/d (or Left/Right)        : Strafe left/right
  e/q                        : Move up/down along the rotation axis
  Shift + Left/Right (or r/f): Rotate \"up\" direction (twist the rotation axis)
";

/// Signed sum of two opposing held actions: +1, -1 or 0.
pub(crate) fn key_axis(
    keys: &KeybindingOptions,
    keyboard: &KeyboardState,
    positive: CameraAction,
    negative: CameraAction,
) -> f32 {
    let mut value = 0.0;
    if keys.is_held(positive, keyboard) {
        value += 1.0;
    }
    if keys.is_held(negative, keyboard) {
        value -= 1.0;
    }
    value
}

/// Free-fly controller: the cursor steers the view, held keys move the
/// camera along its look basis.
#[derive(Debug)]
pub struct FirstPersonEulerController {
    base: ControllerBase,
    /// The pose driven by this controller.
    pub camera_model: FirstPersonPose,
    pub(crate) speeds: CameraOptions,
    pub(crate) keys: KeybindingOptions,
}

impl Default for FirstPersonEulerController {
    fn default() -> Self {
        Self::new()
    }
}

impl FirstPersonEulerController {
    /// Controller with default speeds and key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(&CameraOptions::default(), &KeybindingOptions::default())
    }

    /// Controller with the given speeds and key bindings.
    #[must_use]
    pub fn with_options(speeds: &CameraOptions, keys: &KeybindingOptions) -> Self {
        Self {
            base: ControllerBase::new(),
            camera_model: FirstPersonPose::new(),
            speeds: speeds.clone(),
            keys: keys.clone(),
        }
    }

    /// Replace the rotation axis (world "up").
    ///
    /// # Errors
    ///
    /// Rejects zero-length and non-finite axes; the pose is unchanged.
    pub fn set_rotation_axis(&mut self, axis: Vec3) -> Result<(), CamrigError> {
        self.camera_model.set_rotation_axis(axis)
    }

    /// Use the world z axis as "up".
    pub fn set_rotation_axis_z(&mut self) {
        self.camera_model.set_unit_rotation_axis(Vec3::Z);
    }

    /// Use the world y axis as "up".
    pub fn set_rotation_axis_y(&mut self) {
        self.camera_model.set_unit_rotation_axis(Vec3::Y);
    }

    /// Stand at `eye` looking at `center`.
    ///
    /// # Errors
    ///
    /// Rejects `eye == center` and non-finite input; the pose is unchanged.
    pub fn look_at(&mut self, eye: Vec3, center: Vec3) -> Result<(), CamrigError> {
        self.camera_model.look_at(eye, center).inspect_err(|e| {
            log::warn!("first-person look_at rejected: {e}");
        })
    }
}

impl Controller for FirstPersonEulerController {
    fn base(&self) -> &ControllerBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ControllerBase {
        &mut self.base
    }

    fn title(&self) -> &'static str {
        "First Person Euler"
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
        let delta = input.borrow().mouse.position.delta();
        if !usable_delta(delta) {
            return;
        }
        let look = self.speeds.look_speed;
        self.camera_model
            .manipulator_rotate_roll_pitch_yaw(0.0, delta.y * look, -delta.x * look);
    }

    fn on_idle(&mut self) {
        let Some(input) = self.base.input() else {
            return;
        };
        let input = input.borrow();
        let keyboard = &input.keyboard;
        if keyboard.shift {
            // Shifted arrows twist instead of strafing.
            let angle = self.speeds.twist_speed
                * input.time_interval
                * key_axis(
                    &self.keys,
                    keyboard,
                    CameraAction::TwistLeft,
                    CameraAction::TwistRight,
                );
            self.camera_model.manipulator_twist_rotation_axis(angle);
            return;
        }
        let step = self.speeds.move_speed * input.time_interval;
        if step == 0.0 {
            return;
        }
        let front = key_axis(
            &self.keys,
            keyboard,
            CameraAction::MoveForward,
            CameraAction::MoveBackward,
        );
        let side = key_axis(
            &self.keys,
            keyboard,
            CameraAction::StrafeRight,
            CameraAction::StrafeLeft,
        );
        let vertical =
            key_axis(&self.keys, keyboard, CameraAction::MoveUp, CameraAction::MoveDown);

        self.camera_model.manipulator_translate_front(front * step);
        self.camera_model
            .manipulator_translate_in_plane(Vec2::new(side * step, 0.0));
        self.camera_model
            .manipulator_translate_along_axis(vertical * step);
    }
}
