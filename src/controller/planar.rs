use glam::{Vec2, Vec3};

use super::first_person::key_axis;
use super::{Controller, ControllerBase, FirstPersonEulerController};
use crate::camera::{CameraPose, FirstPersonPose};
use crate::error::CamrigError;
use crate::options::{CameraAction, CameraOptions, KeybindingOptions};
use crate::util::math::usable_delta;

const USAGE: &str = "\
Info Camera Controller: 2D Displacement
  Camera with a fixed orientation that only moves within the view plane.

Camera control:
  Mouse left + drag          : Drag the scene within the plane
  w/s (or Up/Down)           : Move up/down in the plane
  a/d (or Left/Right)        : Move left/right in the plane
";

/// First-person controller restricted to the view plane: the orientation
/// set up front (through [`look_at`](Self::look_at)) never changes.
#[derive(Debug, Default)]
pub struct Displacement2dController {
    inner: FirstPersonEulerController,
}

impl Displacement2dController {
    /// Controller with default speeds and key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller with the given speeds and key bindings.
    #[must_use]
    pub fn with_options(speeds: &CameraOptions, keys: &KeybindingOptions) -> Self {
        Self {
            inner: FirstPersonEulerController::with_options(speeds, keys),
        }
    }

    /// The driven pose.
    #[must_use]
    pub fn camera_model(&self) -> &FirstPersonPose {
        &self.inner.camera_model
    }

    /// Fix the viewing plane by standing at `eye` looking at `center`.
    ///
    /// # Errors
    ///
    /// Rejects `eye == center` and non-finite input; the pose is unchanged.
    pub fn look_at(&mut self, eye: Vec3, center: Vec3) -> Result<(), CamrigError> {
        self.inner.look_at(eye, center)
    }
}

impl Controller for Displacement2dController {
    fn base(&self) -> &ControllerBase {
        self.inner.base()
    }

    fn base_mut(&mut self) -> &mut ControllerBase {
        self.inner.base_mut()
    }

    fn title(&self) -> &'static str {
        "2D Displacement"
    }

    fn usage(&self) -> &'static str {
        USAGE
    }

    fn pose(&self) -> &dyn CameraPose {
        &self.inner.camera_model
    }

    fn on_mouse_move(&mut self) {
        let Some(input) = self.base().mouse_input() else {
            return;
        };
        let input = input.borrow();
        if !input.mouse.click.left {
            return;
        }
        let delta = input.mouse.position.delta();
        if !usable_delta(delta) {
            return;
        }
        // The scene follows the cursor, so the camera moves the other way.
        self.inner
            .camera_model
            .manipulator_translate_in_plane(-delta * self.inner.speeds.planar_speed);
    }

    fn on_idle(&mut self) {
        let Some(input) = self.base().input() else {
            return;
        };
        let input = input.borrow();
        let step = self.inner.speeds.move_speed * input.time_interval;
        if step == 0.0 {
            return;
        }
        let keys = &self.inner.keys;
        let x = key_axis(
            keys,
            &input.keyboard,
            CameraAction::StrafeRight,
            CameraAction::StrafeLeft,
        );
        let y = key_axis(
            keys,
            &input.keyboard,
            CameraAction::MoveForward,
            CameraAction::MoveBackward,
        );
        self.inner
            .camera_model
            .manipulator_translate_in_plane(Vec2::new(x, y) * step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::testing::Rig;

    const EPS: f32 = 1e-5;

    fn top_down() -> (Displacement2dController, Rig) {
        let mut controller = Displacement2dController::new();
        let rig = Rig::bind(&mut controller);
        controller
            .look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO)
            .unwrap();
        (controller, rig)
    }

    #[test]
    fn left_drag_moves_against_cursor() {
        let (mut controller, rig) = top_down();
        let before = *controller.camera_model();
        rig.edit(|input| input.mouse.click.left = true);
        rig.drag(Vec2::ZERO, Vec2::new(0.5, 0.25));
        controller.on_mouse_move();

        let after = controller.camera_model();
        assert!(after
            .position()
            .abs_diff_eq(Vec3::new(-0.5, -0.25, 10.0), EPS));
        assert_eq!(after.euler(), before.euler());
    }

    #[test]
    fn cursor_without_button_does_nothing() {
        let (mut controller, rig) = top_down();
        let before = *controller.camera_model();
        rig.drag(Vec2::ZERO, Vec2::new(0.5, 0.25));
        controller.on_mouse_move();
        assert_eq!(*controller.camera_model(), before);
    }

    #[test]
    fn keys_pan_in_plane() {
        let (mut controller, rig) = top_down();
        rig.edit(|input| input.time_interval = 0.5);
        rig.press("KeyW");
        rig.press("KeyD");
        controller.on_idle();
        assert!(controller
            .camera_model()
            .position()
            .abs_diff_eq(Vec3::new(1.0, 1.0, 10.0), EPS));
    }

    #[test]
    fn shares_lifecycle_with_inner_controller() {
        let (mut controller, rig) = top_down();
        let before = *controller.camera_model();
        controller.set_active(false);
        rig.edit(|input| {
            input.mouse.click.left = true;
            input.time_interval = 1.0;
        });
        rig.press("KeyS");
        rig.drag(Vec2::ZERO, Vec2::ONE);
        controller.on_mouse_move();
        controller.on_idle();
        assert_eq!(*controller.camera_model(), before);
        assert!(!controller.is_active());
    }

    #[test]
    fn gui_capture_blocks_mouse_hooks() {
        let (mut controller, rig) = top_down();
        let before = *controller.camera_model();
        rig.edit(|input| {
            input.mouse.on_gui = true;
            input.mouse.click.left = true;
            input.mouse.scroll = 1.5;
        });
        rig.drag(Vec2::ZERO, Vec2::new(0.5, 0.25));
        controller.on_mouse_move();
        controller.on_mouse_click();
        controller.on_mouse_scroll();
        assert_eq!(*controller.camera_model(), before);
    }
}
