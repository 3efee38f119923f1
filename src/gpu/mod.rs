//! GPU resource management: device, queue, and surface plumbing.

/// Depth attachment texture.
pub mod depth;
/// Core wgpu context (device, queue, surface, configuration).
pub mod render_context;
