//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;

/// Errors produced by the splatview crate.
#[derive(Debug)]
pub enum SplatViewError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Shader or pipeline validation failure.
    Pipeline(String),
    /// Failed to load or decode a point-cloud buffer.
    CloudLoad(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// HTTP fetch of a point buffer failed.
    #[cfg(feature = "fetch")]
    Fetch(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for SplatViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Pipeline(msg) => write!(f, "pipeline error: {msg}"),
            Self::CloudLoad(msg) => {
                write!(f, "point cloud load error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "fetch")]
            Self::Fetch(msg) => write!(f, "fetch error: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for SplatViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for SplatViewError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for SplatViewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
