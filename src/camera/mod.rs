//! Camera system for orbiting a point cloud.
//!
//! Provides the projection/view matrix builders, the pure orbit state
//! machine, and the GPU-facing camera controller.

/// GPU-facing camera controller: orbit state plus uniform buffer.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
/// Pure yaw/pitch/distance orbit state.
pub mod orbit;
/// Perspective and look-at matrix builders.
pub mod projection;
