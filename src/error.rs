//! Error types for the screenshot renderer

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing screenshots
///
/// Font problems never surface here: font resolution always falls back to the
/// built-in bitmap font.
#[derive(Error, Debug)]
pub enum Error {
    /// Creating a directory or writing a file failed
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding the pixel buffer failed
    #[error("Image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// A device name that is not part of the catalog
    #[error("Unknown device '{name}' (known: {known})")]
    UnknownDevice { name: String, known: String },

    /// Serializing the output manifest failed
    #[error("Manifest serialization failed: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Why a font candidate was skipped; never escapes font resolution
#[derive(Error, Debug)]
pub enum FontError {
    #[error("unreadable: {0}")]
    Read(#[from] std::io::Error),

    #[cfg(feature = "truetype")]
    #[error("not a usable font: {0}")]
    Parse(#[from] ab_glyph::InvalidFont),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_mentions_path() {
        let err = Error::io(
            "/tmp/nowhere/01_feed.png",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/nowhere/01_feed.png"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn font_error_wraps_io() {
        let err = FontError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(matches!(err, FontError::Read(_)));
        assert_eq!(err.to_string(), "unreadable: gone");
    }

    #[test]
    fn unknown_device_lists_known_names() {
        let err = Error::UnknownDevice {
            name: "Pixel_7".into(),
            known: "iPhone_6.7, iPad_12.9".into(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown device 'Pixel_7' (known: iPhone_6.7, iPad_12.9)"
        );
    }
}
