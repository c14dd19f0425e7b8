use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec2, Vec3};

use super::{CameraPose, EulerOrientation};
use crate::error::CamrigError;
use crate::util::math::finite3;

/// Pitch stays this far short of straight up/down so the view never flips.
const PITCH_LIMIT: f32 = FRAC_PI_2 - 1e-3;

/// Free-fly pose: an explicit position with Euler orientation. Rotations
/// pivot around the camera itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FirstPersonPose {
    orientation: EulerOrientation,
    position: Vec3,
}

impl FirstPersonPose {
    /// Pose at the origin looking down -Z.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The Euler orientation state.
    #[must_use]
    pub fn euler(&self) -> &EulerOrientation {
        &self.orientation
    }

    /// Unit rotation axis.
    #[must_use]
    pub fn axis(&self) -> Vec3 {
        self.orientation.axis()
    }

    /// Move the camera without changing its orientation.
    pub fn set_position(&mut self, position: Vec3) {
        if position.is_finite() {
            self.position = position;
        }
    }

    /// Add roll/pitch/yaw angles (radians); pitch is clamped short of ±90°.
    pub fn manipulator_rotate_roll_pitch_yaw(
        &mut self,
        roll: f32,
        pitch: f32,
        yaw: f32,
    ) {
        self.orientation.rotate(roll, pitch, yaw);
        self.orientation.clamp_pitch(PITCH_LIMIT);
    }

    /// Move along the view direction. Positive magnitudes move forward.
    pub fn manipulator_translate_front(&mut self, magnitude: f32) {
        if magnitude == 0.0 {
            return;
        }
        self.position += self.orientation.quat() * Vec3::NEG_Z * magnitude;
    }

    /// Move within the view plane: `x` along the right vector, `y` along
    /// the up vector.
    pub fn manipulator_translate_in_plane(&mut self, translation: Vec2) {
        if translation == Vec2::ZERO {
            return;
        }
        let q = self.orientation.quat();
        self.position += q * Vec3::X * translation.x + q * Vec3::Y * translation.y;
    }

    /// Move along the rotation axis (world "up").
    pub fn manipulator_translate_along_axis(&mut self, magnitude: f32) {
        if magnitude == 0.0 {
            return;
        }
        self.position += self.orientation.axis() * magnitude;
    }

    /// Twist the rotation axis around the view direction (camera roll).
    pub fn manipulator_twist_rotation_axis(&mut self, angle: f32) {
        self.orientation.twist(angle);
    }

    /// Replace the rotation axis used by yaw.
    ///
    /// # Errors
    ///
    /// Rejects zero-length and non-finite axes.
    pub fn set_rotation_axis(&mut self, axis: Vec3) -> Result<(), CamrigError> {
        self.orientation.set_axis(axis)
    }

    pub(crate) fn set_unit_rotation_axis(&mut self, axis: Vec3) {
        self.orientation.set_unit_axis(axis);
    }

    /// Place the camera at `eye` looking at `center`.
    ///
    /// # Errors
    ///
    /// Returns [`CamrigError::DegenerateLookAt`] when `eye == center` and
    /// [`CamrigError::NonFinite`] for NaN/infinite input. The pose is left
    /// unchanged on error.
    pub fn look_at(&mut self, eye: Vec3, center: Vec3) -> Result<(), CamrigError> {
        let eye = finite3(eye, "eye")?;
        let center = finite3(center, "center")?;
        let back = (eye - center)
            .try_normalize()
            .ok_or(CamrigError::DegenerateLookAt)?;
        self.orientation.look_toward(back);
        self.position = eye;
        Ok(())
    }
}

impl CameraPose for FirstPersonPose {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn orientation(&self) -> Quat {
        self.orientation.quat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn look_at_sets_exact_position() {
        let mut pose = FirstPersonPose::new();
        let eye = Vec3::new(1.0, 2.0, 3.0);
        pose.look_at(eye, Vec3::ZERO).unwrap();
        assert_eq!(pose.position(), eye);
        assert!(pose.forward().abs_diff_eq(-eye.normalize(), EPS));
    }

    #[test]
    fn rotation_keeps_position() {
        let mut pose = FirstPersonPose::new();
        pose.set_position(Vec3::new(4.0, 0.0, 0.0));
        pose.manipulator_rotate_roll_pitch_yaw(0.0, 0.2, 1.0);
        assert_eq!(pose.position(), Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn pitch_is_clamped() {
        let mut pose = FirstPersonPose::new();
        pose.manipulator_rotate_roll_pitch_yaw(0.0, 10.0, 0.0);
        assert!(pose.euler().pitch() < FRAC_PI_2);
        pose.manipulator_rotate_roll_pitch_yaw(0.0, -20.0, 0.0);
        assert!(pose.euler().pitch() > -FRAC_PI_2);
    }

    #[test]
    fn translate_front_follows_view() {
        let mut pose = FirstPersonPose::new();
        pose.manipulator_translate_front(2.0);
        assert!(pose.position().abs_diff_eq(Vec3::new(0.0, 0.0, -2.0), EPS));
    }

    #[test]
    fn translate_along_axis_uses_rotation_axis() {
        let mut pose = FirstPersonPose::new();
        pose.set_rotation_axis(Vec3::Z).unwrap();
        pose.manipulator_translate_along_axis(1.5);
        assert_eq!(pose.position(), Vec3::new(0.0, 0.0, 1.5));
    }

    #[test]
    fn plane_translation_is_orthogonal_to_view() {
        let mut pose = FirstPersonPose::new();
        pose.look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO).unwrap();
        let start = pose.position();
        pose.manipulator_translate_in_plane(Vec2::new(0.3, 0.4));
        let shift = pose.position() - start;
        assert!(shift.dot(pose.forward()).abs() < EPS);
        assert!((shift.length() - 0.5).abs() < EPS);
    }
}
