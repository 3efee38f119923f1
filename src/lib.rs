// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Minimal GPU point-splat viewer built on wgpu.
//!
//! Splatview loads a flat binary buffer of interleaved position/color
//! floats, uploads it to the GPU once, and renders it as fixed-size
//! circular point sprites under an orbit camera.
//!
//! # Key entry points
//!
//! - [`Viewer`] - the standalone winit window (feature `viewer`)
//! - [`SplatRenderEngine`] - the rendering engine, embeddable behind any
//!   window handle
//! - [`PointCloud`] - the decoded, immutable point buffer
//! - [`Options`] - runtime configuration (display, camera)
//!
//! # Architecture
//!
//! The engine is single-threaded and cooperative: one iteration of the
//! frame pipeline per redraw, rescheduled at the end of each iteration.
//! Input events arrive as data ([`InputEvent`]), are converted into
//! [`ViewerCommand`]s, and mutate camera state synchronously between
//! frames. The point-buffer load is the only blocking step and happens
//! once, before the render loop starts.

pub mod camera;
pub mod cloud;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use cloud::loader::CloudSource;
pub use cloud::{PointCloud, PointVertex};
pub use engine::{SplatRenderEngine, ViewerCommand};
pub use error::SplatViewError;
pub use input::{InputEvent, MouseButton};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
