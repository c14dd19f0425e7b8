use glam::Vec3;

use super::{Controller, ControllerBase};
use crate::camera::{CameraPose, OrbitPose};
use crate::error::CamrigError;
use crate::input::resolve_logical_buttons;
use crate::options::{CameraAction, CameraOptions, KeybindingOptions};
use crate::util::math::usable_delta;

const USAGE: &str = "\
Info Camera Controller: Orbit
  Camera that rotates around a central focus point.
  Note: Uses quaternions (trackball rotation, no gimbal lock).

Camera control:
  Mouse left + drag          : Rotate camera around focus point (trackball)
  Mouse right + drag         : Move closer/farther from focus point
   (or 'k' + Mouse left)       (focus point remains unchanged)
  Ctrl + Mouse left + drag   : Pan camera and focus point in view plane
  Ctrl + Mouse right + drag  : Translate camera and focus point front/back
   (or 'k' + Ctrl + left)
  Mouse wheel                : Move closer/farther from focus point
  Shift + Left/Right (or r/f): Roll camera around the view direction
";

/// Orbit interaction over the quaternion pose. Left-drag is a trackball,
/// so the camera can pass over the poles without flipping.
#[derive(Debug)]
pub struct OrbitController {
    base: ControllerBase,
    /// The pose driven by this controller.
    pub camera_model: OrbitPose,
    speeds: CameraOptions,
    keys: KeybindingOptions,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitController {
    /// Controller with default speeds and key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(&CameraOptions::default(), &KeybindingOptions::default())
    }

    /// Controller with the given speeds and key bindings.
    #[must_use]
    pub fn with_options(speeds: &CameraOptions, keys: &KeybindingOptions) -> Self {
        let mut camera_model = OrbitPose::new();
        camera_model.set_limits(speeds.distance_limits());
        Self {
            base: ControllerBase::new(),
            camera_model,
            speeds: speeds.clone(),
            keys: keys.clone(),
        }
    }

    /// Look at `center` from `eye` with `up` fixing the roll.
    ///
    /// # Errors
    ///
    /// Rejects `eye == center`, an `up` parallel to the view direction and
    /// non-finite input; the pose is unchanged.
    pub fn look_at(
        &mut self,
        eye: Vec3,
        center: Vec3,
        up: Vec3,
    ) -> Result<(), CamrigError> {
        self.camera_model.look_at(eye, center, up).inspect_err(|e| {
            log::warn!("orbit look_at rejected: {e}");
        })
    }
}

impl Controller for OrbitController {
    fn base(&self) -> &ControllerBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ControllerBase {
        &mut self.base
    }

    fn title(&self) -> &'static str {
        "Orbit"
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
        let cursor = input.mouse.position;
        let delta = cursor.delta();
        if !usable_delta(delta) || !cursor.previous.is_finite() {
            return;
        }

        let emulated = self
            .keys
            .is_held(CameraAction::RightButtonEmulation, &input.keyboard);
        let buttons = resolve_logical_buttons(input.mouse.click, emulated);
        let ctrl = input.keyboard.ctrl;
        let s = &self.speeds;

        if buttons.left && !ctrl {
            let p0 = cursor.previous * s.rotate_speed;
            let p1 = cursor.current * s.rotate_speed;
            self.camera_model.manipulator_rotate_trackball(p0, p1);
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
            self.camera_model.manipulator_twist(angle);
        }
        if self.keys.is_held(CameraAction::TwistRight, &input.keyboard) {
            self.camera_model.manipulator_twist(-angle);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::controller::testing::Rig;

    const EPS: f32 = 1e-4;

    fn scene_controller() -> (OrbitController, Rig) {
        let mut controller = OrbitController::new();
        let rig = Rig::bind(&mut controller);
        controller
            .look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y)
            .unwrap();
        (controller, rig)
    }

    #[test]
    fn trackball_drag_keeps_distance_and_center() {
        let (mut controller, rig) = scene_controller();
        rig.edit(|input| input.mouse.click.left = true);
        rig.drag(Vec2::ZERO, Vec2::new(0.3, 0.1));
        controller.on_mouse_move();

        let pose = controller.camera_model;
        assert!((pose.distance() - 5.0).abs() < EPS);
        assert_eq!(pose.center(), Vec3::ZERO);
        assert!((pose.position().length() - 5.0).abs() < EPS);
        assert!(!pose.position().abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), EPS));
    }

    #[test]
    fn long_drag_sequence_stays_normalized() {
        let (mut controller, rig) = scene_controller();
        rig.edit(|input| input.mouse.click.left = true);
        let mut p = Vec2::ZERO;
        for i in 0..300 {
            let next = Vec2::new((i as f32 * 0.37).sin(), (i as f32 * 0.23).cos()) * 0.9;
            rig.drag(p, next);
            controller.on_mouse_move();
            p = next;
        }
        let q = controller.camera_model.orientation();
        assert!((q.length() - 1.0).abs() < 1e-5);
        assert!((controller.camera_model.distance() - 5.0).abs() < EPS);
    }

    #[test]
    fn right_drag_up_moves_closer() {
        let (mut controller, rig) = scene_controller();
        rig.edit(|input| input.mouse.click.right = true);
        rig.drag(Vec2::ZERO, Vec2::new(0.0, 0.5));
        controller.on_mouse_move();
        let expected = 5.0 * (-0.5f32).exp();
        assert!((controller.camera_model.distance() - expected).abs() < EPS);
    }

    #[test]
    fn scroll_and_drag_zoom_agree_in_direction() {
        let (mut controller, rig) = scene_controller();
        rig.edit(|input| input.mouse.scroll = -2.0);
        controller.on_mouse_scroll();
        assert!(controller.camera_model.distance() > 5.0);
    }

    #[test]
    fn shift_twist_rolls_around_view_direction() {
        let (mut controller, rig) = scene_controller();
        let before = controller.camera_model;
        rig.edit(|input| {
            input.keyboard.shift = true;
            input.time_interval = 0.25;
        });
        rig.press("KeyF");
        controller.on_idle();

        let after = controller.camera_model;
        assert!(after.forward().abs_diff_eq(before.forward(), EPS));
        assert!(after.position().abs_diff_eq(before.position(), EPS));
        let angle = before.up().angle_between(after.up());
        assert!((angle - 0.5).abs() < 1e-3);
    }

    #[test]
    fn degenerate_up_leaves_pose_alone() {
        let (mut controller, _rig) = scene_controller();
        let before = controller.camera_model;
        let err = controller
            .look_at(Vec3::new(0.0, 3.0, 0.0), Vec3::ZERO, Vec3::Y)
            .unwrap_err();
        assert!(matches!(err, CamrigError::DegenerateUp));
        assert_eq!(controller.camera_model, before);
    }

    #[test]
    fn gui_capture_blocks_trackball() {
        let (mut controller, rig) = scene_controller();
        let before = controller.camera_model;
        rig.edit(|input| {
            input.mouse.click.left = true;
            input.mouse.on_gui = true;
        });
        rig.drag(Vec2::ZERO, Vec2::new(0.4, 0.4));
        controller.on_mouse_move();
        assert_eq!(controller.camera_model, before);
    }

    #[test]
    fn inactive_controller_ignores_everything() {
        let (mut controller, rig) = scene_controller();
        let before = controller.camera_model;
        controller.set_active(false);
        rig.edit(|input| {
            input.mouse.click.left = true;
            input.mouse.scroll = 3.0;
            input.keyboard.shift = true;
            input.time_interval = 1.0;
        });
        rig.press("KeyR");
        rig.drag(Vec2::ZERO, Vec2::new(0.5, 0.2));
        controller.on_mouse_move();
        controller.on_mouse_click();
        controller.on_mouse_scroll();
        controller.on_keyboard();
        controller.on_idle();
        assert_eq!(controller.camera_model, before);
    }
}
