//! Pure yaw/pitch/distance orbit state.
//!
//! Holds no GPU resources and knows nothing about the windowing system, so
//! the clamp invariants are unit-testable in isolation. The controller wraps
//! this state with the uniform buffer and bind group.

use std::f32::consts::FRAC_PI_2;

use glam::{Vec2, Vec3};

use crate::options::CameraOptions;

/// Closest allowed approach to the target.
pub const MIN_DISTANCE: f32 = 0.5;
/// Farthest allowed retreat from the target.
pub const MAX_DISTANCE: f32 = 20.0;
/// Margin keeping pitch strictly inside ±π/2 so the view axis never becomes
/// parallel to the up vector (which would degenerate the look-at basis).
pub const PITCH_EPSILON: f32 = 1e-4;

const PITCH_LIMIT: f32 = FRAC_PI_2 - PITCH_EPSILON;
const INITIAL_DISTANCE: f32 = 3.0;

/// Orbit camera state: yaw/pitch/distance around a fixed origin target.
///
/// Yaw is unbounded (it wraps through the trigonometric eye derivation);
/// pitch and distance are clamped after every mutation.
pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    distance: f32,
    rotate_speed: f32,
    zoom_speed: f32,
}

impl OrbitCamera {
    /// Create the startup pose: yaw 0, pitch 0, distance 3.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: INITIAL_DISTANCE,
            rotate_speed: options.rotate_speed,
            zoom_speed: options.zoom_speed,
        }
    }

    /// Current yaw in radians.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in radians, always strictly inside ±π/2.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current distance from the target, always in
    /// `[MIN_DISTANCE, MAX_DISTANCE]`.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Apply a pointer-drag delta in pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw += delta.x * self.rotate_speed;
        self.pitch = (self.pitch + delta.y * self.rotate_speed)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Apply a wheel delta in pixel-equivalent units
    /// (positive = zoom out).
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 + delta * self.zoom_speed))
            .clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Update the rotate/zoom sensitivities from fresh options.
    pub fn set_speeds(&mut self, options: &CameraOptions) {
        self.rotate_speed = options.rotate_speed;
        self.zoom_speed = options.zoom_speed;
    }

    /// Reset to the startup pose.
    pub fn reset(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.distance = INITIAL_DISTANCE;
    }

    /// Derive the eye position from the current spherical coordinates.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.distance
            * Vec3::new(
                self.pitch.cos() * self.yaw.sin(),
                self.pitch.sin(),
                self.pitch.cos() * self.yaw.cos(),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orbit() -> OrbitCamera {
        OrbitCamera::new(&CameraOptions::default())
    }

    #[test]
    fn pitch_clamps_inside_half_pi() {
        let mut cam = orbit();
        cam.rotate(Vec2::new(0.0, 1.0e6));
        assert!(cam.pitch() <= FRAC_PI_2);
        assert!(cam.pitch() < FRAC_PI_2, "pitch must stay strictly inside");
        cam.rotate(Vec2::new(0.0, -2.0e6));
        assert!(cam.pitch() >= -FRAC_PI_2);
        assert!(cam.pitch() > -FRAC_PI_2);
    }

    #[test]
    fn yaw_is_unbounded() {
        let mut cam = orbit();
        cam.rotate(Vec2::new(1.0e5, 0.0));
        assert!(cam.yaw() > FRAC_PI_2);
    }

    #[test]
    fn distance_clamps_to_range() {
        let mut cam = orbit();
        cam.zoom(1.0e9);
        assert_eq!(cam.distance(), MAX_DISTANCE);
        cam.zoom(-999.9);
        assert!(cam.distance() >= MIN_DISTANCE);
        cam.zoom(-1.0e9);
        assert_eq!(cam.distance(), MIN_DISTANCE);
    }

    #[test]
    fn zoom_scales_multiplicatively() {
        let mut cam = orbit();
        let before = cam.distance();
        cam.zoom(100.0);
        assert!((cam.distance() - before * 1.1).abs() < 1e-5);
    }

    #[test]
    fn eye_starts_on_positive_z() {
        let cam = orbit();
        let eye = cam.eye();
        assert!((eye - Vec3::new(0.0, 0.0, 3.0)).length() < 1e-6);
    }

    #[test]
    fn eye_spherical_conversion() {
        let mut cam = orbit();
        cam.rotate(Vec2::new(
            FRAC_PI_2 / CameraOptions::default().rotate_speed,
            0.0,
        ));
        let eye = cam.eye();
        // Quarter turn of yaw moves the eye onto the +x axis.
        assert!((eye.x - cam.distance()).abs() < 1e-3);
        assert!(eye.y.abs() < 1e-3);
        assert!(eye.z.abs() < 1e-3);
    }

    #[test]
    fn eye_never_coincides_with_target() {
        let mut cam = orbit();
        cam.zoom(-1.0e9);
        assert!(cam.eye().length() >= MIN_DISTANCE - 1e-6);
    }
}
