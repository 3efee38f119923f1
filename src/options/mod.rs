//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (display, camera) are consolidated here. Options
//! serialize to/from TOML; the defaults reproduce the viewer's built-in
//! constants, so running without a preset file changes nothing.

mod camera;
mod display;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
use serde::{Deserialize, Serialize};

use crate::error::SplatViewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Point-sprite size and background color.
    pub display: DisplayOptions,
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SplatViewError::Io`] if the file cannot be read, or
    /// [`SplatViewError::OptionsParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, SplatViewError> {
        let content =
            std::fs::read_to_string(path).map_err(SplatViewError::Io)?;
        toml::from_str(&content)
            .map_err(|e| SplatViewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`SplatViewError::OptionsParse`] on serialization failure or
    /// [`SplatViewError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SplatViewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SplatViewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SplatViewError::Io)?;
        }
        std::fs::write(path, content).map_err(SplatViewError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[display]
point_size = 4.0
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.display.point_size, 4.0);
        // Everything else should be default
        assert_eq!(opts.display.background, [0.0, 0.0, 0.0]);
        assert_eq!(opts.camera.fovy_deg, 60.0);
    }

    #[test]
    fn defaults_match_viewer_constants() {
        let opts = Options::default();
        assert_eq!(opts.camera.znear, 0.01);
        assert_eq!(opts.camera.zfar, 100.0);
        assert_eq!(opts.camera.rotate_speed, 0.005);
        assert_eq!(opts.camera.zoom_speed, 0.001);
        assert_eq!(opts.display.point_size, 2.0);
    }
}
