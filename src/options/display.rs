use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Point-sprite size and background color.
pub struct DisplayOptions {
    /// Sprite diameter in physical pixels.
    pub point_size: f32,
    /// Clear color as linear RGB.
    pub background: [f32; 3],
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            point_size: 2.0,
            background: [0.0, 0.0, 0.0],
        }
    }
}
