//! Error types for the sierpinski core.

use thiserror::Error;

/// Errors produced by point generation and run parameter handling.
#[derive(Debug, Error)]
pub enum FractalError {
    /// A point count of zero was requested.
    #[error("invalid point count: at least one point must be requested")]
    InvalidPointCount,

    /// Width or height was zero (or their product overflowed) for an image.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A shape or selection name was not recognized.
    #[error("unknown shape: {0}")]
    UnknownShape(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// An output path names an image format other than PNG.
    #[error("unsupported image format: {0} (only .png is written)")]
    UnsupportedFormat(String),

    /// Writing an image or parameter log failed.
    #[error("i/o error: {0}")]
    Io(String),
}

impl From<std::io::Error> for FractalError {
    fn from(e: std::io::Error) -> Self {
        FractalError::Io(e.to_string())
    }
}
