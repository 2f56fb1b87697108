//! Error types for circle-texture operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rasterizing or presenting circles.
#[derive(Error, Debug)]
pub enum Error {
    /// Radius is negative or larger than the supported texture size.
    #[error("Invalid radius: {radius}")]
    InvalidRadius {
        /// Rejected radius value.
        radius: i32,
    },

    /// Invalid dimensions for a canvas, texture or screen.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// The presenter could not allocate a streaming texture.
    #[error("Texture creation failed: {0}")]
    TextureCreation(String),

    /// The presenter rejected a pixel upload.
    #[error("Texture update failed: {0}")]
    TextureUpdate(String),

    /// A texture id that the presenter does not know about.
    #[error("Unknown texture id: {0}")]
    UnknownTexture(u32),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_invalid_radius_display() {
        let err = Error::InvalidRadius { radius: -3 };
        assert_eq!(err.to_string(), "Invalid radius: -3");
    }

    #[test]
    fn test_io_conversion() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("missing"));
    }
}
