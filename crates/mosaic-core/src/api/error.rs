//! Unified error type for the mosaic-core public API.
//!
//! [`MosaicError`] folds catalog and preprocessing failures into one enum
//! for convenient `?` propagation in application code. Every variant is
//! terminal: nothing is retried and no partial grid is produced.

use std::fmt;

use crate::palette::{PaletteError, ParseColorError};
use crate::preprocess::PreprocessError;

/// Unified error type for the mosaic-core public API.
///
/// # Example
///
/// ```
/// use mosaic_core::{MosaicError, Palette};
///
/// fn build() -> Result<Palette, MosaicError> {
///     Ok(Palette::from_hex(&[("Black", "#000000")])?)
/// }
/// # build().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum MosaicError {
    /// Source is not PNG, JPEG, BMP or GIF
    UnsupportedFormat(String),
    /// Source could not be read or decoded
    UnreadableSource(String),
    /// Width or height is zero
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
    /// The catalog has no entries
    EmptyCatalog,
    /// Pixel or cell count does not match `width × height`
    GridMismatch {
        /// `width × height`
        expected: usize,
        /// Number actually supplied
        actual: usize,
    },
    /// A cell refers to a catalog entry that does not exist
    CellOutOfRange {
        /// The offending catalog index
        index: usize,
        /// Number of catalog entries
        catalog_len: usize,
    },
    /// Any other catalog configuration error (channel out of range, bad hex)
    Palette(PaletteError),
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MosaicError::UnsupportedFormat(detail) => {
                write!(f, "unsupported image format: {}", detail)
            }
            MosaicError::UnreadableSource(detail) => {
                write!(f, "could not read image: {}", detail)
            }
            MosaicError::InvalidDimensions { width, height } => write!(
                f,
                "invalid mosaic dimensions {}x{} (both must be positive)",
                width, height
            ),
            MosaicError::EmptyCatalog => write!(f, "color catalog is empty"),
            MosaicError::GridMismatch { expected, actual } => write!(
                f,
                "grid needs {} cells but {} were supplied",
                expected, actual
            ),
            MosaicError::CellOutOfRange { index, catalog_len } => write!(
                f,
                "cell refers to catalog entry {} but the catalog has {} entries",
                index, catalog_len
            ),
            MosaicError::Palette(err) => write!(f, "palette error: {}", err),
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MosaicError::Palette(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PreprocessError> for MosaicError {
    fn from(err: PreprocessError) -> Self {
        match err {
            PreprocessError::UnsupportedFormat(d) => MosaicError::UnsupportedFormat(d),
            PreprocessError::UnreadableSource(d) => MosaicError::UnreadableSource(d),
            PreprocessError::InvalidDimensions { width, height } => {
                MosaicError::InvalidDimensions { width, height }
            }
        }
    }
}

impl From<PaletteError> for MosaicError {
    fn from(err: PaletteError) -> Self {
        match err {
            PaletteError::EmptyPalette => MosaicError::EmptyCatalog,
            other => MosaicError::Palette(other),
        }
    }
}

impl From<ParseColorError> for MosaicError {
    fn from(err: ParseColorError) -> Self {
        MosaicError::Palette(PaletteError::ParseColor(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_palette_becomes_empty_catalog() {
        assert_eq!(
            MosaicError::from(PaletteError::EmptyPalette),
            MosaicError::EmptyCatalog
        );
    }

    #[test]
    fn test_preprocess_errors_map_one_to_one() {
        assert_eq!(
            MosaicError::from(PreprocessError::InvalidDimensions { width: 0, height: 3 }),
            MosaicError::InvalidDimensions { width: 0, height: 3 }
        );
        assert!(matches!(
            MosaicError::from(PreprocessError::UnsupportedFormat("Tiff".into())),
            MosaicError::UnsupportedFormat(_)
        ));
        assert!(matches!(
            MosaicError::from(PreprocessError::UnreadableSource("eof".into())),
            MosaicError::UnreadableSource(_)
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            MosaicError::InvalidDimensions { width: 0, height: 0 }.to_string(),
            "invalid mosaic dimensions 0x0 (both must be positive)"
        );
        assert_eq!(MosaicError::EmptyCatalog.to_string(), "color catalog is empty");
        assert_eq!(
            MosaicError::GridMismatch { expected: 4, actual: 3 }.to_string(),
            "grid needs 4 cells but 3 were supplied"
        );
    }
}
