//! Camera pose models.
//!
//! Two orientation representations back the controllers: Euler angles
//! around a configurable rotation axis ([`euler`], used by
//! [`orbit_euler`] and [`first_person`]) and a unit quaternion ([`orbit`]).
//! Every pose answers the renderer-facing queries of [`CameraPose`].

use glam::{Mat4, Quat, Vec3};

/// Yaw/pitch/roll orientation around a rotation axis.
pub mod euler;
/// Free-fly pose with Euler orientation.
pub mod first_person;
/// Quaternion orbit pose with arcball rotation.
pub mod orbit;
/// Orbit pose with Euler orientation.
pub mod orbit_euler;

pub use euler::EulerOrientation;
pub use first_person::FirstPersonPose;
pub use orbit::OrbitPose;
pub use orbit_euler::OrbitEulerPose;

/// Renderer-facing queries, recomputed on demand from the pose state.
///
/// Camera convention: the camera looks down its local -Z axis with +Y up
/// and +X to the right.
pub trait CameraPose {
    /// World-space camera position.
    fn position(&self) -> Vec3;

    /// Unit quaternion rotating camera-local axes into world space.
    fn orientation(&self) -> Quat;

    /// Camera-to-world transform (the camera frame).
    fn matrix_frame(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation(), self.position())
    }

    /// World-to-camera transform.
    fn matrix_view(&self) -> Mat4 {
        Mat4::from_quat(self.orientation().conjugate())
            * Mat4::from_translation(-self.position())
    }

    /// Unit view direction.
    fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::NEG_Z
    }

    /// Unit right vector of the view plane.
    fn right(&self) -> Vec3 {
        self.orientation() * Vec3::X
    }

    /// Unit up vector of the view plane.
    fn up(&self) -> Vec3 {
        self.orientation() * Vec3::Y
    }
}

/// Bounds applied to every distance-to-center update so the distance never
/// reaches zero or overflows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceLimits {
    /// Smallest allowed distance (strictly positive).
    pub min: f32,
    /// Largest allowed distance.
    pub max: f32,
}

impl Default for DistanceLimits {
    fn default() -> Self {
        Self {
            min: 1e-3,
            max: 1e6,
        }
    }
}

impl DistanceLimits {
    /// Build limits, repairing inverted or non-positive bounds.
    #[must_use]
    pub fn new(min: f32, max: f32) -> Self {
        let defaults = Self::default();
        let min = if min.is_finite() && min > 0.0 {
            min
        } else {
            defaults.min
        };
        let max = if max.is_finite() && max >= min {
            max
        } else {
            min.max(defaults.max)
        };
        Self { min, max }
    }

    /// Clamp a distance into the allowed range.
    #[must_use]
    pub fn clamp(&self, distance: f32) -> f32 {
        if distance.is_nan() {
            return self.min;
        }
        distance.clamp(self.min, self.max)
    }
}
