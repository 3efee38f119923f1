//! Point-cloud data model and wire-format decode.
//!
//! The wire format is a headerless run of little-endian 32-bit floats in
//! groups of six, `[x, y, z, r, g, b]` repeated. There is no count field and
//! no validation: trailing bytes that do not fill a whole record are dropped.

/// Loading point clouds from files or URLs.
pub mod loader;

use bytemuck::{Pod, Zeroable};

/// Floats per wire record: 3 position + 3 color.
pub const FLOATS_PER_POINT: usize = 6;

const BYTES_PER_POINT: usize = FLOATS_PER_POINT * 4;

/// A single point record: world-space position and linear RGB color.
///
/// Matches the wire record exactly and doubles as the per-instance GPU
/// layout, so the decoded cloud uploads with one `cast_slice`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct PointVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Linear RGB color in [0, 1].
    pub color: [f32; 3],
}

/// An immutable, decoded point cloud.
///
/// Decoded once at load time; the renderer owns it for the session. No
/// updates, no streaming.
pub struct PointCloud {
    points: Vec<PointVertex>,
}

impl PointCloud {
    /// Decode a raw byte buffer.
    ///
    /// The byte count is truncated down to a whole number of records
    /// (`floor(bytes / 24)`); a remainder is logged but never an error.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let remainder = bytes.len() % BYTES_PER_POINT;
        if remainder != 0 {
            log::warn!(
                "point buffer has {remainder} trailing bytes; truncating to \
                 {} points",
                bytes.len() / BYTES_PER_POINT
            );
        }

        let points = bytes
            .chunks_exact(BYTES_PER_POINT)
            .map(|record| {
                let mut f = [0.0f32; FLOATS_PER_POINT];
                for (dst, src) in f.iter_mut().zip(record.chunks_exact(4)) {
                    *dst =
                        f32::from_le_bytes([src[0], src[1], src[2], src[3]]);
                }
                PointVertex {
                    position: [f[0], f[1], f[2]],
                    color: [f[3], f[4], f[5]],
                }
            })
            .collect();

        Self { points }
    }

    /// Build a cloud from already-decoded records (tests, procedural data).
    #[must_use]
    pub fn from_points(points: Vec<PointVertex>) -> Self {
        Self { points }
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the cloud holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The decoded records, in wire order.
    #[must_use]
    pub fn points(&self) -> &[PointVertex] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(floats: &[f32]) -> Vec<u8> {
        floats.iter().flat_map(|f| f.to_le_bytes()).collect()
    }

    #[test]
    fn two_records_deinterleave() {
        let bytes = encode(&[
            1.0, 2.0, 3.0, 0.1, 0.2, 0.3, //
            4.0, 5.0, 6.0, 0.4, 0.5, 0.6,
        ]);
        let cloud = PointCloud::from_bytes(&bytes);

        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud.points()[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(cloud.points()[0].color, [0.1, 0.2, 0.3]);
        assert_eq!(cloud.points()[1].position, [4.0, 5.0, 6.0]);
        assert_eq!(cloud.points()[1].color, [0.4, 0.5, 0.6]);
    }

    #[test]
    fn non_multiple_of_six_truncates_silently() {
        // 13 floats = 2 whole records + 1 stray float
        let floats: Vec<f32> = (0..13).map(|i| i as f32).collect();
        let cloud = PointCloud::from_bytes(&encode(&floats));
        assert_eq!(cloud.len(), 2);

        // Fewer floats than one record decodes to nothing
        let cloud = PointCloud::from_bytes(&encode(&[1.0, 2.0, 3.0]));
        assert_eq!(cloud.len(), 0);
        assert!(cloud.is_empty());
    }

    #[test]
    fn trailing_partial_float_truncates() {
        let mut bytes = encode(&[0.0; 6]);
        bytes.extend_from_slice(&[0xde, 0xad]);
        let cloud = PointCloud::from_bytes(&bytes);
        assert_eq!(cloud.len(), 1);
    }

    #[test]
    fn empty_buffer_decodes_to_empty_cloud() {
        let cloud = PointCloud::from_bytes(&[]);
        assert!(cloud.is_empty());
    }

    #[test]
    fn floats_decode_little_endian() {
        let bytes = encode(&[1.5, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(bytes[..4], 1.5f32.to_le_bytes());
        let cloud = PointCloud::from_bytes(&bytes);
        assert_eq!(cloud.points()[0].position[0], 1.5);
    }
}
