use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy_deg: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Rotation sensitivity in radians per pixel of drag.
    pub rotate_speed: f32,
    /// Zoom sensitivity per pixel of wheel delta.
    pub zoom_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy_deg: 60.0,
            znear: 0.01,
            zfar: 100.0,
            rotate_speed: 0.005,
            zoom_speed: 0.001,
        }
    }
}
