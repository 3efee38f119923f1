//! Perspective and look-at matrix builders.
//!
//! Both builders produce column-major matrices in the right-handed OpenGL
//! clip-space convention (z ∈ [-1, 1] after the w-divide). The surface
//! pipeline runs on wgpu, whose clip space is z ∈ [0, 1]; the fixed
//! [`OPENGL_TO_WGPU`] correction is premultiplied onto the projection at
//! uniform-upload time. The builders themselves must keep the GL convention —
//! swapping in a [0, 1]-depth projection here would require re-deriving the
//! depth terms, not just renaming parameters.

use glam::{Mat4, Vec3, Vec4};

/// Maps OpenGL clip-space depth (z ∈ [-1, 1]) to wgpu depth (z ∈ [0, 1]).
///
/// `z' = 0.5 * z + 0.5 * w`, x/y/w unchanged.
pub const OPENGL_TO_WGPU: Mat4 = Mat4::from_cols_array(&[
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 0.5, 0.0, //
    0.0, 0.0, 0.5, 1.0,
]);

/// Build a right-handed perspective projection matrix (OpenGL convention).
///
/// `fovy` is the vertical field of view in radians. With
/// `f = 1 / tan(fovy / 2)`, the matrix has `f / aspect` and `f` on the
/// diagonal, `(far + near) / (near - far)` and `2 * far * near / (near - far)`
/// as the depth terms, and `-1` in the w-divide slot.
pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fovy / 2.0).tan();
    let nf = 1.0 / (near - far);
    Mat4::from_cols_array(&[
        f / aspect,
        0.0,
        0.0,
        0.0,
        0.0,
        f,
        0.0,
        0.0,
        0.0,
        0.0,
        (far + near) * nf,
        -1.0,
        0.0,
        0.0,
        2.0 * far * near * nf,
        0.0,
    ])
}

/// Build a right-handed view matrix from eye, look-at center, and up.
///
/// Forward `z = normalize(eye - center)`, right `x = normalize(up × z)`,
/// true up `y = z × x`; the translation column is
/// `(-x·eye, -y·eye, -z·eye)`.
///
/// Degenerate when `up` is parallel to the eye→center axis (`x` becomes
/// non-finite). Callers guarantee non-parallel inputs — the orbit camera
/// does so by clamping pitch strictly inside ±π/2.
pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Mat4 {
    let z = (eye - center).normalize();
    let x = up.cross(z).normalize();
    let y = z.cross(x);
    Mat4::from_cols(
        Vec4::new(x.x, y.x, z.x, 0.0),
        Vec4::new(x.y, y.y, z.y, 0.0),
        Vec4::new(x.z, y.z, z.z, 0.0),
        Vec4::new(-x.dot(eye), -y.dot(eye), -z.dot(eye), 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_3, FRAC_PI_6};

    const EPS: f32 = 1e-6;

    #[test]
    fn perspective_matches_gl_convention() {
        let m = perspective(FRAC_PI_3, 1.0, 0.01, 100.0).to_cols_array();
        let f = 1.0 / FRAC_PI_6.tan();
        assert!((m[0] - f).abs() < EPS);
        assert!((m[5] - f).abs() < EPS);
        assert_eq!(m[11], -1.0);
        // Depth terms follow (far+near)/(near-far) and 2*far*near/(near-far)
        assert!((m[10] - (100.01 / -99.99)).abs() < EPS);
        assert!((m[14] - (2.0 * 100.0 * 0.01 / -99.99)).abs() < EPS);
        // w row is otherwise empty
        assert_eq!(m[15], 0.0);
    }

    #[test]
    fn perspective_aspect_scales_x_only() {
        let m = perspective(FRAC_PI_3, 2.0, 0.01, 100.0).to_cols_array();
        let f = 1.0 / FRAC_PI_6.tan();
        assert!((m[0] - f / 2.0).abs() < EPS);
        assert!((m[5] - f).abs() < EPS);
    }

    #[test]
    fn look_at_straight_down_z_is_identity_rotation() {
        let m = look_at(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::Y)
            .to_cols_array();
        let expected = [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, -3.0, 1.0,
        ];
        for (a, b) in m.iter().zip(expected.iter()) {
            assert!((a - b).abs() < EPS, "{m:?} != {expected:?}");
        }
    }

    #[test]
    fn look_at_rotation_rows_are_unit_length() {
        let m = look_at(
            Vec3::new(1.5, -2.0, 0.7),
            Vec3::ZERO,
            Vec3::Y,
        );
        let cols = m.to_cols_array_2d();
        // Basis vectors live in the first three rows of the rotation block.
        for i in 0..3 {
            let row = Vec3::new(cols[0][i], cols[1][i], cols[2][i]);
            assert!((row.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn normalize_returns_unit_length() {
        let v = Vec3::new(3.0, -4.0, 12.0).normalize();
        assert!((v.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn depth_correction_maps_gl_range_to_wgpu_range() {
        let near = OPENGL_TO_WGPU * Vec4::new(0.0, 0.0, -1.0, 1.0);
        let far = OPENGL_TO_WGPU * Vec4::new(0.0, 0.0, 1.0, 1.0);
        assert!((near.z - 0.0).abs() < EPS);
        assert!((far.z - 1.0).abs() < EPS);
        assert_eq!(near.w, 1.0);
    }
}
