use glam::{Mat3, Quat, Vec2, Vec3};

use super::{CameraPose, DistanceLimits};
use crate::error::CamrigError;
use crate::util::math::finite3;

/// Map a relative cursor position onto the trackball surface: a unit
/// sphere near the center, blended into a hyperbolic sheet further out so
/// drags near the border still rotate smoothly.
fn project_to_trackball(p: Vec2) -> Vec3 {
    let d2 = p.length_squared();
    if d2 <= 0.5 {
        p.extend((1.0 - d2).sqrt())
    } else {
        p.extend(0.5 / d2.sqrt())
    }
}

/// Camera-space rotation that carries the trackball point under `p0` onto
/// the point under `p1`.
#[must_use]
pub fn trackball_rotation(p0: Vec2, p1: Vec2) -> Quat {
    let from = project_to_trackball(p0).normalize();
    let to = project_to_trackball(p1).normalize();
    Quat::from_rotation_arc(from, to)
}

/// Orbit pose with quaternion orientation, rotating around `center` at
/// `distance`.
///
/// The eye position is cached so [`look_at`](Self::look_at) reproduces its
/// `eye` argument exactly; every manipulation re-derives it from the
/// orientation, focus point and distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPose {
    orientation: Quat,
    center: Vec3,
    distance: f32,
    eye: Vec3,
    limits: DistanceLimits,
}

impl Default for OrbitPose {
    fn default() -> Self {
        Self {
            orientation: Quat::IDENTITY,
            center: Vec3::ZERO,
            distance: 1.0,
            eye: Vec3::Z,
            limits: DistanceLimits::default(),
        }
    }
}

impl OrbitPose {
    /// Pose at unit distance from the origin, looking down -Z.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn update_camera_pos(&mut self) {
        self.eye = self.center + self.orientation * Vec3::Z * self.distance;
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

    /// Current distance bounds.
    #[must_use]
    pub fn limits(&self) -> DistanceLimits {
        self.limits
    }

    /// Replace the distance bounds and re-clamp the current distance.
    pub fn set_limits(&mut self, limits: DistanceLimits) {
        self.limits = limits;
        let clamped = limits.clamp(self.distance);
        if clamped != self.distance {
            self.distance = clamped;
            self.update_camera_pos();
        }
    }

    /// Move the focus point; the camera follows.
    pub fn set_center(&mut self, center: Vec3) {
        if center.is_finite() {
            self.center = center;
            self.update_camera_pos();
        }
    }

    /// Replace the orientation (renormalized). Non-finite or zero
    /// quaternions are ignored.
    pub fn set_orientation(&mut self, orientation: Quat) {
        if orientation.is_finite() && orientation.length_squared() > 0.0 {
            self.orientation = orientation.normalize();
            self.update_camera_pos();
        }
    }

    /// Arcball rotation for a cursor drag from `p0` to `p1` (relative
    /// coordinates). The scene follows the cursor, so the camera turns by
    /// the inverse rotation around the focus point.
    pub fn manipulator_rotate_trackball(&mut self, p0: Vec2, p1: Vec2) {
        if p0 == p1 {
            return;
        }
        let rotation = trackball_rotation(p0, p1);
        self.orientation = (self.orientation * rotation.inverse()).normalize();
        self.update_camera_pos();
    }

    /// Rotate by `angle` around a camera-local axis (`Vec3::X` pitches,
    /// `Vec3::Y` yaws).
    pub fn manipulator_rotate_local(&mut self, axis: Vec3, angle: f32) {
        if angle == 0.0 {
            return;
        }
        let Some(axis) = axis.try_normalize() else {
            return;
        };
        self.orientation =
            (self.orientation * Quat::from_axis_angle(axis, angle)).normalize();
        self.update_camera_pos();
    }

    /// Roll around the view direction.
    pub fn manipulator_twist(&mut self, angle: f32) {
        self.manipulator_rotate_local(Vec3::Z, angle);
    }

    /// Pan camera and focus point together in the view plane, scaled by
    /// the distance.
    pub fn manipulator_translate_in_plane(&mut self, translation: Vec2) {
        if translation == Vec2::ZERO {
            return;
        }
        let right = self.orientation * Vec3::X;
        let up = self.orientation * Vec3::Y;
        self.center -= (right * translation.x + up * translation.y) * self.distance;
        self.update_camera_pos();
    }

    /// Move camera and focus point together along the view direction.
    /// Positive magnitudes move forward.
    pub fn manipulator_translate_front(&mut self, magnitude: f32) {
        if magnitude == 0.0 {
            return;
        }
        let forward = self.orientation * Vec3::NEG_Z;
        self.center += forward * magnitude * self.distance;
        self.update_camera_pos();
    }

    /// Scale the distance to the focus point by `exp(-magnitude)`:
    /// positive magnitudes move closer, negative ones farther.
    pub fn manipulator_scale_distance_to_center(&mut self, magnitude: f32) {
        if magnitude == 0.0 {
            return;
        }
        self.distance = self.limits.clamp(self.distance * (-magnitude).exp());
        self.update_camera_pos();
    }

    /// Place the camera at `eye` looking at `center`, with `up` resolving
    /// the roll.
    ///
    /// # Errors
    ///
    /// Returns [`CamrigError::DegenerateLookAt`] when `eye == center`,
    /// [`CamrigError::DegenerateUp`] when `up` is parallel to the view
    /// direction, and [`CamrigError::NonFinite`] for NaN/infinite input.
    /// The pose is left unchanged on error.
    pub fn look_at(
        &mut self,
        eye: Vec3,
        center: Vec3,
        up: Vec3,
    ) -> Result<(), CamrigError> {
        let eye = finite3(eye, "eye")?;
        let center = finite3(center, "center")?;
        let up = finite3(up, "up")?;

        let offset = eye - center;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return Err(CamrigError::DegenerateLookAt);
        }
        let back = offset / distance;
        let right = up.cross(back);
        if right.length_squared() <= 1e-12 * up.length_squared().max(1.0) {
            return Err(CamrigError::DegenerateUp);
        }
        let right = right.normalize();
        let true_up = back.cross(right);

        self.orientation =
            Quat::from_mat3(&Mat3::from_cols(right, true_up, back)).normalize();
        self.center = center;
        self.distance = self.limits.clamp(distance);
        if self.distance == distance {
            self.eye = eye;
        } else {
            self.update_camera_pos();
        }
        Ok(())
    }
}

impl CameraPose for OrbitPose {
    fn position(&self) -> Vec3 {
        self.eye
    }

    fn orientation(&self) -> Quat {
        self.orientation
    }
}
