//! Error type for source decoding and geometry.

use std::fmt;

/// Failure while turning a source image into a W×H pixel grid.
#[derive(Debug, Clone, PartialEq)]
pub enum PreprocessError {
    /// The source is not PNG, JPEG, BMP or GIF
    UnsupportedFormat(String),
    /// The source claims a supported format but cannot be decoded
    UnreadableSource(String),
    /// Requested width or height is zero
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
}

impl fmt::Display for PreprocessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreprocessError::UnsupportedFormat(detail) => {
                write!(f, "unsupported image format: {}", detail)
            }
            PreprocessError::UnreadableSource(detail) => {
                write!(f, "could not read image: {}", detail)
            }
            PreprocessError::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "invalid mosaic dimensions {}x{} (both must be positive)",
                    width, height
                )
            }
        }
    }
}

impl std::error::Error for PreprocessError {}
