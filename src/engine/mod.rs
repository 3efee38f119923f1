//! The core rendering engine.
//!
//! Owns all viewer state — GPU context, camera, input processing, options,
//! and the point pass — replacing the module-level globals a quick WebGL
//! viewer would use. The windowing shell only ever calls
//! [`handle_input`](SplatRenderEngine::handle_input),
//! [`resize`](SplatRenderEngine::resize), and
//! [`render`](SplatRenderEngine::render).

pub mod command;

pub use command::ViewerCommand;

use crate::camera::controller::CameraController;
use crate::cloud::PointCloud;
use crate::error::SplatViewError;
use crate::gpu::depth::DepthTexture;
use crate::gpu::render_context::RenderContext;
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;
use crate::renderer::point_cloud::PointCloudRenderer;
use crate::util::frame_timing::FrameTiming;

/// Target FPS limit.
const TARGET_FPS: u32 = 300;

/// The core rendering engine for point-splat visualization.
///
/// # Construction
///
/// Use [`SplatRenderEngine::new`] with a decoded [`PointCloud`]; the cloud
/// uploads to the GPU once and is immutable for the session.
///
/// # Frame loop
///
/// Each frame, call [`render`](Self::render) to draw and present. Call
/// [`resize`](Self::resize) when the window size changes. Input is forwarded
/// via [`handle_input`](Self::handle_input).
pub struct SplatRenderEngine {
    /// Core wgpu device, queue, and surface.
    pub context: RenderContext,
    /// Orbital camera controller.
    pub camera_controller: CameraController,
    /// Raw-event to command conversion state.
    input: InputProcessor,
    /// Runtime display and camera options.
    options: Options,
    /// Per-frame timing and FPS tracking.
    frame_timing: FrameTiming,
    /// Depth attachment, recreated on resize.
    depth: DepthTexture,
    /// The single point-sprite draw pass.
    point_renderer: PointCloudRenderer,
    /// Point count, kept for stats after the cloud is dropped.
    num_points: usize,
}

impl SplatRenderEngine {
    /// Build an engine for the given window and decoded cloud.
    ///
    /// # Errors
    ///
    /// Returns [`SplatViewError`] if GPU initialization or pipeline
    /// validation fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        cloud: &PointCloud,
        options: Options,
    ) -> Result<Self, SplatViewError> {
        let context = RenderContext::new(window, size).await?;

        let camera_controller = CameraController::new(&context, &options);
        let point_renderer = PointCloudRenderer::new(
            &context,
            &camera_controller.layout,
            cloud,
        )
        .await?;
        let depth = DepthTexture::new(
            &context.device,
            context.config.width,
            context.config.height,
        );

        Ok(Self {
            context,
            camera_controller,
            input: InputProcessor::new(),
            options,
            frame_timing: FrameTiming::new(TARGET_FPS),
            depth,
            point_renderer,
            num_points: cloud.len(),
        })
    }

    /// Number of points in the uploaded cloud.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// Current smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }

    /// Read-only access to the active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the active options and apply camera/display tuning.
    pub fn set_options(&mut self, options: Options) {
        self.camera_controller.apply_options(&options);
        self.options = options;
    }

    /// Process a platform-agnostic input event.
    ///
    /// This is the primary input entry point. Consumers forward raw window
    /// events as [`InputEvent`] variants; drag gating happens in the
    /// [`InputProcessor`], and any resulting command is executed
    /// immediately.
    pub fn handle_input(&mut self, event: InputEvent) {
        if let Some(command) = self.input.handle_event(event) {
            self.execute(command);
        }
    }

    /// Execute a viewer command.
    pub fn execute(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::RotateCamera { delta } => {
                self.camera_controller.rotate(delta);
            }
            ViewerCommand::Zoom { delta } => {
                self.camera_controller.zoom(delta);
            }
            ViewerCommand::RecenterCamera => {
                self.camera_controller.recenter();
            }
        }
    }

    /// Per-frame updates: recompute the view from camera state and upload
    /// the uniform.
    fn pre_render(&mut self) {
        self.camera_controller.update_gpu(&self.context.queue);
    }

    /// Encode the single point pass: clear color + depth, one instanced
    /// draw over the whole cloud.
    fn encode_point_pass(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) {
        let [r, g, b] = self.options.display.background;
        let mut rp = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("point pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: f64::from(r),
                        g: f64::from(g),
                        b: f64::from(b),
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(
                wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                },
            ),
            ..Default::default()
        });

        self.point_renderer
            .draw(&mut rp, &self.camera_controller.bind_group);
    }

    /// Execute one frame: upload the camera uniform, run the point pass,
    /// and present.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain frame cannot be
    /// acquired.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        if !self.frame_timing.should_render() {
            return Ok(());
        }

        self.pre_render();

        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.create_encoder();
        self.encode_point_pass(&mut encoder, &view);
        self.context.submit(encoder);

        frame.present();

        self.frame_timing.end_frame();

        Ok(())
    }

    /// Resize the surface, camera projection, and depth attachment to match
    /// the new window size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.context.resize(width, height);
            self.camera_controller.resize(width, height);
            self.depth =
                DepthTexture::new(&self.context.device, width, height);
        }
    }
}
