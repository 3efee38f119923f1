//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a mouse gesture, a key
//! press, or a programmatic call — is represented as a `ViewerCommand`.
//! Consumers construct commands and pass them to
//! [`SplatRenderEngine::execute`](super::SplatRenderEngine::execute).

use glam::Vec2;

/// A discrete or parameterized operation the engine can perform.
///
/// The engine never cares *how* a command was triggered — mouse, keyboard,
/// or API all look identical:
///
/// ```ignore
/// engine.execute(ViewerCommand::Zoom { delta: 40.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerCommand {
    /// Rotate the camera by `delta` pixels of pointer movement.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom the camera (positive = zoom out, negative = zoom in).
    Zoom {
        /// Wheel amount in pixel-equivalent units.
        delta: f32,
    },

    /// Return the camera to the startup pose.
    RecenterCamera,
}
