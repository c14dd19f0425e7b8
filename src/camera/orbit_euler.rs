use glam::{Quat, Vec2, Vec3};

use super::{CameraPose, DistanceLimits, EulerOrientation};
use crate::error::CamrigError;
use crate::util::math::finite3;

/// Orbit pose with Euler orientation: the camera sits at `distance` from
/// `center` along its backward axis.
///
/// The position is derived, so rotations always pivot around the focus
/// point and manipulations that only touch the orientation leave `center`
/// and `distance` bit-for-bit unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitEulerPose {
    orientation: EulerOrientation,
    center: Vec3,
    distance: f32,
    limits: DistanceLimits,
}

impl Default for OrbitEulerPose {
    fn default() -> Self {
        Self {
            orientation: EulerOrientation::default(),
            center: Vec3::ZERO,
            distance: 1.0,
            limits: DistanceLimits::default(),
        }
    }
}

impl OrbitEulerPose {
    /// Pose at unit distance from the origin, looking down -Z.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus point.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Distance from the camera to the focus point (always > 0).
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
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

    /// Current distance bounds.
    #[must_use]
    pub fn limits(&self) -> DistanceLimits {
        self.limits
    }

    /// Replace the distance bounds and re-clamp the current distance.
    pub fn set_limits(&mut self, limits: DistanceLimits) {
        self.limits = limits;
        self.distance = limits.clamp(self.distance);
    }

    /// Move the focus point; the orientation and distance are kept.
    pub fn set_center(&mut self, center: Vec3) {
        if center.is_finite() {
            self.center = center;
        }
    }

    /// Set the distance to the focus point (clamped to the limits).
    pub fn set_distance(&mut self, distance: f32) {
        self.distance = self.limits.clamp(distance);
    }

    /// Add roll/pitch/yaw angles (radians). The focus point stays fixed.
    pub fn manipulator_rotate_roll_pitch_yaw(
        &mut self,
        roll: f32,
        pitch: f32,
        yaw: f32,
    ) {
        self.orientation.rotate(roll, pitch, yaw);
    }

    /// Pan camera and focus point together in the view plane. The offset
    /// is scaled by the distance so the scene follows the cursor at any
    /// zoom level.
    pub fn manipulator_translate_in_plane(&mut self, translation: Vec2) {
        if translation == Vec2::ZERO {
            return;
        }
        let q = self.orientation.quat();
        let offset = q * Vec3::X * translation.x + q * Vec3::Y * translation.y;
        self.center -= offset * self.distance;
    }

    /// Move camera and focus point together along the view direction.
    /// Positive magnitudes move forward.
    pub fn manipulator_translate_front(&mut self, magnitude: f32) {
        if magnitude == 0.0 {
            return;
        }
        let forward = self.orientation.quat() * Vec3::NEG_Z;
        self.center += forward * magnitude * self.distance;
    }

    /// Scale the distance to the focus point by `exp(-magnitude)`:
    /// positive magnitudes move closer, negative ones farther.
    pub fn manipulator_scale_distance_to_center(&mut self, magnitude: f32) {
        if magnitude == 0.0 {
            return;
        }
        self.distance = self.limits.clamp(self.distance * (-magnitude).exp());
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

    /// Place the camera at `eye` looking at `center`, keeping the current
    /// rotation axis as the up reference.
    ///
    /// # Errors
    ///
    /// Returns [`CamrigError::DegenerateLookAt`] when `eye == center` and
    /// [`CamrigError::NonFinite`] for NaN/infinite input. The pose is left
    /// unchanged on error.
    pub fn look_at(&mut self, eye: Vec3, center: Vec3) -> Result<(), CamrigError> {
        let eye = finite3(eye, "eye")?;
        let center = finite3(center, "center")?;
        let offset = eye - center;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return Err(CamrigError::DegenerateLookAt);
        }
        self.orientation.look_toward(offset / distance);
        self.center = center;
        self.distance = self.limits.clamp(distance);
        Ok(())
    }
}

impl CameraPose for OrbitEulerPose {
    fn position(&self) -> Vec3 {
        self.center + self.orientation.quat() * Vec3::Z * self.distance
    }

    fn orientation(&self) -> Quat {
        self.orientation.quat()
    }
}
