//! Loading point buffers from local files or over HTTP.
//!
//! Loading happens exactly once, before the render loop starts, and blocks
//! until the whole buffer is in memory. No cancellation, no timeout, no
//! retry.

use std::path::PathBuf;

use crate::cloud::PointCloud;
use crate::error::SplatViewError;

/// Where a point buffer comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloudSource {
    /// A local file path.
    Path(PathBuf),
    /// An HTTP(S) URL (requires the `fetch` feature).
    Url(String),
}

impl CloudSource {
    /// Interpret a CLI argument: `http(s)://` prefixes select a URL source,
    /// anything else is a local path.
    #[must_use]
    pub fn parse(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            Self::Url(arg.to_owned())
        } else {
            Self::Path(PathBuf::from(arg))
        }
    }
}

/// Read and decode a point buffer from the given source.
///
/// # Errors
///
/// Returns [`SplatViewError::Io`] if a file cannot be read,
/// [`SplatViewError::Fetch`] if the HTTP request fails, and
/// [`SplatViewError::CloudLoad`] if the decoded cloud contains no points
/// (or a URL source is used without the `fetch` feature).
pub fn load(source: &CloudSource) -> Result<PointCloud, SplatViewError> {
    let bytes = match source {
        CloudSource::Path(path) => {
            log::info!("loading point cloud from {}", path.display());
            std::fs::read(path)?
        }
        #[cfg(feature = "fetch")]
        CloudSource::Url(url) => fetch(url)?,
        #[cfg(not(feature = "fetch"))]
        CloudSource::Url(url) => {
            return Err(SplatViewError::CloudLoad(format!(
                "URL sources require the `fetch` feature: {url}"
            )));
        }
    };

    let cloud = PointCloud::from_bytes(&bytes);
    if cloud.is_empty() {
        return Err(SplatViewError::CloudLoad(
            "decoded point buffer is empty".to_owned(),
        ));
    }
    log::info!("loaded {} points", cloud.len());
    Ok(cloud)
}

/// Download a point buffer over HTTP, blocking until complete.
#[cfg(feature = "fetch")]
fn fetch(url: &str) -> Result<Vec<u8>, SplatViewError> {
    log::info!("downloading point cloud from {url}...");
    ureq::get(url)
        .call()
        .map_err(|e| SplatViewError::Fetch(e.to_string()))?
        .into_body()
        .read_to_vec()
        .map_err(|e| SplatViewError::Fetch(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_and_paths_are_distinguished() {
        assert_eq!(
            CloudSource::parse("https://example.com/cloud.splat"),
            CloudSource::Url("https://example.com/cloud.splat".to_owned())
        );
        assert_eq!(
            CloudSource::parse("http://example.com/cloud.splat"),
            CloudSource::Url("http://example.com/cloud.splat".to_owned())
        );
        assert_eq!(
            CloudSource::parse("clouds/demo.splat"),
            CloudSource::Path(PathBuf::from("clouds/demo.splat"))
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = CloudSource::Path(PathBuf::from(
            "definitely/not/a/real/file.splat",
        ));
        assert!(matches!(load(&source), Err(SplatViewError::Io(_))));
    }
}
