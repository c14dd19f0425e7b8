//! Small vector helpers shared by the pose models.

use glam::{Vec2, Vec3};

use crate::error::CamrigError;

/// Reject vectors with NaN or infinite components.
pub(crate) fn finite3(v: Vec3, what: &'static str) -> Result<Vec3, CamrigError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CamrigError::NonFinite(what))
    }
}

/// Normalize a user-supplied axis, rejecting zero-length and non-finite
/// input.
pub(crate) fn unit_axis(axis: Vec3) -> Result<Vec3, CamrigError> {
    let axis = finite3(axis, "rotation axis")?;
    axis.try_normalize().ok_or(CamrigError::DegenerateAxis)
}

/// Whether a cursor delta can be fed into a manipulation.
pub(crate) fn usable_delta(delta: Vec2) -> bool {
    if delta.is_finite() {
        true
    } else {
        log::warn!("ignoring non-finite cursor delta {delta}");
        false
    }
}
