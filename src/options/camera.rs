use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::DistanceLimits;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera control sensitivities and limits.
///
/// Cursor-driven speeds are per unit of relative viewport coordinates
/// (the viewport spans 2 units edge to edge); key-driven speeds are per
/// second.
pub struct CameraOptions {
    /// Orbit rotation, radians per relative unit of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 5.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Pan, multiples of the focus distance per relative unit of drag.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub pan_speed: f32,
    /// Zoom exponent per relative unit of drag.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 5.0), extend("step" = 0.05))]
    pub zoom_speed: f32,
    /// Forward/back translation, multiples of the focus distance per
    /// relative unit of drag.
    #[schemars(title = "Dolly Speed", range(min = 0.1, max = 5.0), extend("step" = 0.05))]
    pub front_speed: f32,
    /// Zoom exponent per scroll line.
    #[schemars(title = "Scroll Zoom", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub scroll_zoom_speed: f32,
    /// Twist/roll rate while a twist key is held, radians per second.
    #[schemars(title = "Twist Speed", range(min = 0.1, max = 6.0), extend("step" = 0.1))]
    pub twist_speed: f32,
    /// First-person look rate, radians per relative unit of cursor motion.
    #[schemars(title = "Look Speed", range(min = 0.1, max = 5.0), extend("step" = 0.05))]
    pub look_speed: f32,
    /// First-person and 2D key movement, world units per second.
    #[schemars(title = "Move Speed", range(min = 0.1, max = 50.0), extend("step" = 0.1))]
    pub move_speed: f32,
    /// 2D drag displacement, world units per relative unit of drag.
    #[schemars(title = "Planar Drag Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub planar_speed: f32,
    /// Smallest orbit distance.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Largest orbit distance.
    #[schemars(skip)]
    pub max_distance: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            rotate_speed: 1.0,
            pan_speed: 0.5,
            zoom_speed: 1.0,
            front_speed: 1.0,
            scroll_zoom_speed: 0.1,
            twist_speed: 2.0,
            look_speed: 1.0,
            move_speed: 2.0,
            planar_speed: 1.0,
            min_distance: 1e-3,
            max_distance: 1e6,
        }
    }
}

impl CameraOptions {
    /// Distance bounds for the orbit pose models.
    #[must_use]
    pub fn distance_limits(&self) -> DistanceLimits {
        DistanceLimits::new(self.min_distance, self.max_distance)
    }
}
