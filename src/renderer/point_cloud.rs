//! Instanced point-sprite draw pass.
//!
//! The decoded cloud uploads once into an instance-stepped vertex buffer;
//! each instance expands to a four-vertex triangle-strip quad in the vertex
//! shader. The buffer never changes after construction.

use wgpu::util::DeviceExt;

use crate::cloud::{PointCloud, PointVertex};
use crate::error::SplatViewError;
use crate::gpu::depth::DEPTH_FORMAT;
use crate::gpu::render_context::RenderContext;

/// Vertices per sprite quad (triangle strip).
const VERTICES_PER_SPRITE: u32 = 4;

/// Owns the point pipeline and the immutable instance buffer.
pub struct PointCloudRenderer {
    pipeline: wgpu::RenderPipeline,
    instance_buffer: wgpu::Buffer,
    instance_count: u32,
}

impl PointCloudRenderer {
    /// Create the pipeline and upload the cloud.
    ///
    /// Pipeline creation runs inside a wgpu validation error scope so shader
    /// or pipeline diagnostics surface as a fatal initialization error
    /// instead of a panic in the uncaptured-error handler.
    ///
    /// # Errors
    ///
    /// Returns [`SplatViewError::Pipeline`] with the validation diagnostic
    /// if shader compilation or pipeline creation fails.
    pub async fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        cloud: &PointCloud,
    ) -> Result<Self, SplatViewError> {
        context
            .device
            .push_error_scope(wgpu::ErrorFilter::Validation);

        let pipeline = Self::create_pipeline(context, camera_layout);

        if let Some(error) = context.device.pop_error_scope().await {
            log::error!("point pipeline validation failed: {error}");
            return Err(SplatViewError::Pipeline(error.to_string()));
        }

        let instance_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Point Instance Buffer"),
                contents: bytemuck::cast_slice(cloud.points()),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );

        Ok(Self {
            pipeline,
            instance_buffer,
            instance_count: cloud.len() as u32,
        })
    }

    /// Number of point instances in the uploaded buffer.
    #[must_use]
    pub fn instance_count(&self) -> u32 {
        self.instance_count
    }

    fn create_pipeline(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
    ) -> wgpu::RenderPipeline {
        let shader = context.device.create_shader_module(wgpu::include_wgsl!(
            "../../assets/shaders/point_cloud.wgsl"
        ));

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Point Pipeline Layout"),
                bind_group_layouts: &[camera_layout],
                push_constant_ranges: &[],
            },
        );

        // One buffer, stepped per instance: position + color per point.
        let instance_layout = wgpu::VertexBufferLayout {
            array_stride: size_of::<PointVertex>()
                as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0, // position
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1, // color
                },
            ],
        };

        context.device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Point Render Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[instance_layout],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format(),
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleStrip,
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            },
        )
    }

    /// Draw every point as a sprite quad.
    ///
    /// Caller provides the camera bind group; the pass must already have
    /// color and depth attachments bound.
    pub fn draw<'a>(
        &'a self,
        render_pass: &mut wgpu::RenderPass<'a>,
        camera_bind_group: &'a wgpu::BindGroup,
    ) {
        if self.instance_count == 0 {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, camera_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        render_pass.draw(0..VERTICES_PER_SPRITE, 0..self.instance_count);
    }
}
