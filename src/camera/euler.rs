use glam::{Quat, Vec3};

use crate::error::CamrigError;
use crate::util::math::unit_axis;

/// Yaw/pitch/roll orientation composed on top of a rotation-axis alignment.
///
/// The camera looks down its local -Z with local +Y up. `alignment` maps
/// local +Y onto the rotation axis, so yaw always turns around that axis:
///
/// `orientation = alignment * Ry(yaw) * Rx(pitch) * Rz(roll)`
///
/// The axis is also stored explicitly so axis-aligned values set through
/// [`set_axis`](Self::set_axis) read back exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerOrientation {
    alignment: Quat,
    axis: Vec3,
    yaw: f32,
    pitch: f32,
    roll: f32,
}

impl Default for EulerOrientation {
    fn default() -> Self {
        Self {
            alignment: Quat::IDENTITY,
            axis: Vec3::Y,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
        }
    }
}

impl EulerOrientation {
    /// Orientation with zero angles around the given axis.
    ///
    /// # Errors
    ///
    /// Returns [`CamrigError::DegenerateAxis`] for a zero axis and
    /// [`CamrigError::NonFinite`] for NaN/infinite components.
    pub fn new(axis: Vec3) -> Result<Self, CamrigError> {
        let mut orientation = Self::default();
        orientation.set_axis(axis)?;
        Ok(orientation)
    }

    /// Unit rotation axis (the "up" used by yaw).
    #[must_use]
    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    /// Rotation around the axis, radians.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Elevation around the camera's right vector, radians.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Rotation around the view direction, radians.
    #[must_use]
    pub fn roll(&self) -> f32 {
        self.roll
    }

    /// Composed unit quaternion.
    #[must_use]
    pub fn quat(&self) -> Quat {
        (self.alignment
            * Quat::from_rotation_y(self.yaw)
            * Quat::from_rotation_x(self.pitch)
            * Quat::from_rotation_z(self.roll))
        .normalize()
    }

    /// Add to the three angles.
    pub fn rotate(&mut self, roll: f32, pitch: f32, yaw: f32) {
        self.roll += roll;
        self.pitch += pitch;
        self.yaw += yaw;
    }

    /// Clamp pitch to `[-limit, limit]`.
    pub fn clamp_pitch(&mut self, limit: f32) {
        self.pitch = self.pitch.clamp(-limit, limit);
    }

    /// Replace the rotation axis. Angles are kept and now refer to the new
    /// axis.
    ///
    /// # Errors
    ///
    /// Rejects zero-length and non-finite axes; the orientation is left
    /// unchanged.
    pub fn set_axis(&mut self, axis: Vec3) -> Result<(), CamrigError> {
        let axis = unit_axis(axis)?;
        self.set_unit_axis(axis);
        Ok(())
    }

    /// Replace the rotation axis with a vector already known to be unit
    /// length.
    pub(crate) fn set_unit_axis(&mut self, axis: Vec3) {
        self.axis = axis;
        self.alignment = Quat::from_rotation_arc(Vec3::Y, axis);
    }

    /// Rotate the rotation axis itself around the camera's backward
    /// direction (+Z local). The view direction is unchanged; the image
    /// rolls by `angle`.
    pub fn twist(&mut self, angle: f32) {
        if angle == 0.0 {
            return;
        }
        let back = self.quat() * Vec3::Z;
        let twist = Quat::from_axis_angle(back, angle);
        self.alignment = (twist * self.alignment).normalize();
        self.axis = (twist * self.axis).normalize();
    }

    /// Set yaw and pitch so the camera's backward direction (+Z local)
    /// equals `back`, with zero roll. `back` must be unit length.
    pub(crate) fn look_toward(&mut self, back: Vec3) {
        let local = self.alignment.inverse() * back;
        self.pitch = -local.y.clamp(-1.0, 1.0).asin();
        self.yaw = local.x.atan2(local.z);
        self.roll = 0.0;
    }
}
