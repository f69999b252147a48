//! Error types for the resumark library.

use std::io;
use thiserror::Error;

/// Result type alias for resumark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during import or export.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The render surface exposed no flowing-content region.
    #[error("Render surface has no content region to export")]
    MissingContent,

    /// A region could not be rasterized.
    #[error("Rasterization failed: {0}")]
    Capture(String),

    /// Bitmap decoding or encoding failed.
    #[error("Image error: {0}")]
    Image(String),

    /// Error assembling or serializing the output PDF.
    #[error("PDF write error: {0}")]
    PdfWrite(String),

    /// A surface snapshot manifest is invalid.
    #[error("Invalid surface snapshot: {0}")]
    InvalidSnapshot(String),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::PdfWrite(err.to_string()),
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingContent;
        assert_eq!(
            err.to_string(),
            "Render surface has no content region to export"
        );

        let err = Error::Capture("header region detached".to_string());
        assert_eq!(
            err.to_string(),
            "Rasterization failed: header region detached"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
