//! Small shared utilities.

/// Frame pacing and smoothed FPS tracking.
pub mod frame_timing;
