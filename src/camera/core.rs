use glam::{Mat4, Vec3};

use crate::camera::projection;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in radians.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Build the view matrix for the current eye/target/up.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        projection::look_at(self.eye, self.target, self.up)
    }

    /// Build the raw GL-convention projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        projection::perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }

    /// Build the projection matrix corrected for wgpu's [0, 1] depth range.
    #[must_use]
    pub fn clip_matrix(&self) -> Mat4 {
        projection::OPENGL_TO_WGPU * self.projection_matrix()
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the camera matrices and sprite parameters.
///
/// Layout must match the `CameraUniform` struct in
/// `assets/shaders/point_cloud.wgsl`.
pub struct CameraUniform {
    /// Depth-corrected projection matrix.
    pub proj: [[f32; 4]; 4],
    /// View matrix.
    pub view: [[f32; 4]; 4],
    /// Viewport size in physical pixels.
    pub viewport: [f32; 2],
    /// Point-sprite diameter in pixels.
    pub point_size: f32,
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity matrices.
    #[must_use]
    pub fn new() -> Self {
        Self {
            proj: Mat4::IDENTITY.to_cols_array_2d(),
            view: Mat4::IDENTITY.to_cols_array_2d(),
            viewport: [1.0, 1.0],
            point_size: 2.0,
            _pad: 0.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update(
        &mut self,
        camera: &Camera,
        viewport: (u32, u32),
        point_size: f32,
    ) {
        self.proj = camera.clip_matrix().to_cols_array_2d();
        self.view = camera.view_matrix().to_cols_array_2d();
        self.viewport = [viewport.0 as f32, viewport.1 as f32];
        self.point_size = point_size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_3;

    #[test]
    fn uniform_tracks_camera_state() {
        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy: FRAC_PI_3,
            znear: 0.01,
            zfar: 100.0,
        };
        let mut uniform = CameraUniform::new();
        uniform.update(&camera, (800, 600), 2.0);

        assert_eq!(uniform.viewport, [800.0, 600.0]);
        assert_eq!(uniform.point_size, 2.0);
        // View translation carries the eye back along -z.
        assert!((uniform.view[3][2] - (-3.0)).abs() < 1e-6);
    }
}
