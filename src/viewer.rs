//! Standalone visualization window backed by winit.
//!
//! The point buffer loads (and blocks) before the event loop starts; the
//! render loop is self-perpetuating via `request_redraw` at the end of each
//! redraw.
//!
//! ```no_run
//! # use splatview::{CloudSource, Viewer};
//! Viewer::builder()
//!     .with_source(CloudSource::parse("clouds/demo.splat"))
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    cloud::loader::{self, CloudSource},
    cloud::PointCloud,
    engine::{SplatRenderEngine, ViewerCommand},
    error::SplatViewError,
    input::{InputEvent, MouseButton},
    options::Options,
};

/// Pixel-equivalent wheel units per scroll line.
const WHEEL_LINE_PIXELS: f32 = 40.0;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    source: Option<CloudSource>,
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with defaults (title "Splatview", no source,
    /// default options).
    fn new() -> Self {
        Self {
            source: None,
            options: None,
            title: "Splatview".into(),
        }
    }

    /// Set the point-buffer source (path or URL).
    #[must_use]
    pub fn with_source(mut self, source: CloudSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            source: self.source,
            options: self.options,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays a point cloud.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to load
/// the cloud and enter the event loop.
pub struct Viewer {
    source: Option<CloudSource>,
    options: Option<Options>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Load the point buffer, open the window, and run the event loop.
    /// Blocks until the window is closed.
    ///
    /// # Errors
    ///
    /// Returns [`SplatViewError`] if no source was set, the load fails, or
    /// the event loop cannot start.
    pub fn run(self) -> Result<(), SplatViewError> {
        let source = self.source.ok_or_else(|| {
            SplatViewError::Viewer("no point cloud source set".into())
        })?;

        // The one blocking step: fetch and decode before the loop starts.
        let cloud = loader::load(&source)?;

        let event_loop =
            EventLoop::new().map_err(|e| SplatViewError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            cloud: Some(cloud),
            options: self.options,
            title: self.title,
            last_stats_update: Instant::now(),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| SplatViewError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<SplatRenderEngine>,
    /// Decoded cloud, consumed at window creation.
    cloud: Option<PointCloud>,
    options: Option<Options>,
    title: String,
    last_stats_update: Instant,
}

/// Compute the wgpu surface size — always the full window dimensions.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let Some(cloud) = self.cloud.take() else {
            return;
        };

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            #[allow(clippy::cast_possible_truncation)]
            let logical_w = (mon_size.width as f64 / scale * 0.75) as u32;
            #[allow(clippy::cast_possible_truncation)]
            let logical_h = (mon_size.height as f64 / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let (vp_w, vp_h) = viewport_size(window.inner_size());
        let engine_result = pollster::block_on(SplatRenderEngine::new(
            window.clone(),
            (vp_w, vp_h),
            &cloud,
            self.options.take().unwrap_or_default(),
        ));

        let engine = match engine_result {
            Ok(e) => e,
            Err(e) => {
                log::error!("Failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and engine must be initialised.
        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                if let Some(engine) = &mut self.engine {
                    engine.resize(vp_w, vp_h);
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(engine) = &mut self.engine {
                    match engine.render() {
                        Ok(()) => {}
                        Err(
                            wgpu::SurfaceError::Outdated
                            | wgpu::SurfaceError::Lost,
                        ) => {
                            if let Some(w) = &self.window {
                                let (vp_w, vp_h) =
                                    viewport_size(w.inner_size());
                                engine.resize(vp_w, vp_h);
                            }
                        }
                        Err(e) => {
                            log::error!("render error: {e:?}");
                        }
                    }

                    // Refresh the title stats at ~1 Hz
                    let now = Instant::now();
                    if now.duration_since(self.last_stats_update)
                        >= Duration::from_secs(1)
                    {
                        if let Some(w) = &self.window {
                            w.set_title(&format!(
                                "{} — {} points — {:.0} fps",
                                self.title,
                                engine.num_points(),
                                engine.fps(),
                            ));
                        }
                        self.last_stats_update = now;
                    }
                }
                // Self-perpetuating tick
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let pressed = state == ElementState::Pressed;
                if let Some(engine) = &mut self.engine {
                    engine.handle_input(InputEvent::MouseButton {
                        button: MouseButton::from(button),
                        pressed,
                    });
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(engine) = &mut self.engine {
                    #[allow(clippy::cast_possible_truncation)]
                    engine.handle_input(InputEvent::CursorMoved {
                        x: position.x as f32,
                        y: position.y as f32,
                    });
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                // Positive = zoom out, matching the DOM wheel convention the
                // zoom formula expects.
                #[allow(clippy::cast_possible_truncation)]
                let scroll_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => {
                        -y * WHEEL_LINE_PIXELS
                    }
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                if let Some(engine) = &mut self.engine {
                    engine.handle_input(InputEvent::Scroll {
                        delta: scroll_delta,
                    });
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                use winit::keyboard::{KeyCode, PhysicalKey};
                if event.physical_key == PhysicalKey::Code(KeyCode::KeyR) {
                    if let Some(engine) = &mut self.engine {
                        engine.execute(ViewerCommand::RecenterCamera);
                    }
                }
            }

            _ => (),
        }
    }
}
