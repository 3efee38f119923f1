use glam::{Vec2, Vec3};
use wgpu::util::DeviceExt;

use crate::camera::core::{Camera, CameraUniform};
use crate::camera::orbit::OrbitCamera;
use crate::gpu::render_context::RenderContext;
use crate::options::Options;

/// Orbital camera controller: pure orbit state plus the GPU uniform buffer
/// and bind group shared by every pipeline that reads the camera.
pub struct CameraController {
    orbit: OrbitCamera,

    /// Derived perspective camera, rebuilt from the orbit state.
    pub camera: Camera,
    /// CPU-side copy of the camera uniform.
    pub uniform: CameraUniform,
    /// GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout for the camera uniform.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group exposing [`Self::buffer`].
    pub bind_group: wgpu::BindGroup,

    viewport: (u32, u32),
    point_size: f32,
}

impl CameraController {
    /// Create a controller at the startup pose for the given context and
    /// options.
    #[must_use]
    pub fn new(context: &RenderContext, options: &Options) -> Self {
        let orbit = OrbitCamera::new(&options.camera);

        let camera = Camera {
            eye: orbit.eye(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: context.aspect(),
            fovy: options.camera.fovy_deg.to_radians(),
            znear: options.camera.znear,
            zfar: options.camera.zfar,
        };

        let viewport = (context.config.width, context.config.height);
        let point_size = options.display.point_size;
        let mut uniform = CameraUniform::new();
        uniform.update(&camera, viewport, point_size);

        let buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                    label: Some("Camera Bind Group"),
                });

        Self {
            orbit,
            camera,
            uniform,
            buffer,
            layout,
            bind_group,
            viewport,
            point_size,
        }
    }

    fn update_camera_pos(&mut self) {
        self.camera.eye = self.orbit.eye();
    }

    /// Rotate by a pointer-drag delta in pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        self.orbit.rotate(delta);
        self.update_camera_pos();
    }

    /// Zoom by a wheel delta (positive = zoom out).
    pub fn zoom(&mut self, delta: f32) {
        self.orbit.zoom(delta);
        self.update_camera_pos();
    }

    /// Return the camera to the startup pose.
    pub fn recenter(&mut self) {
        self.orbit.reset();
        self.update_camera_pos();
    }

    /// Current distance from the look-at target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.orbit.distance()
    }

    /// Update the projection aspect and viewport for a new window size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.aspect = width as f32 / height.max(1) as f32;
        self.viewport = (width, height);
    }

    /// Apply camera/display tuning from a fresh options value.
    pub fn apply_options(&mut self, options: &Options) {
        self.orbit.set_speeds(&options.camera);
        self.camera.fovy = options.camera.fovy_deg.to_radians();
        self.camera.znear = options.camera.znear;
        self.camera.zfar = options.camera.zfar;
        self.point_size = options.display.point_size;
    }

    /// Recompute the uniform from current state and upload it.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.uniform
            .update(&self.camera, self.viewport, self.point_size);
        queue.write_buffer(
            &self.buffer,
            0,
            bytemuck::cast_slice(&[self.uniform]),
        );
    }
}
