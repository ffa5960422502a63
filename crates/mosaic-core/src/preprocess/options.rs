//! Preprocessing options and configuration.

use std::fmt;
use std::str::FromStr;

/// How the source is cropped before resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CropMode {
    /// Centered crop to the target aspect ratio `W : H`.
    #[default]
    Aspect,
    /// Centered crop to a square, then resampled to `W × H`. For non-square
    /// targets this stretches the image.
    Square,
}

impl fmt::Display for CropMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CropMode::Aspect => f.write_str("aspect"),
            CropMode::Square => f.write_str("square"),
        }
    }
}

impl FromStr for CropMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aspect" => Ok(CropMode::Aspect),
            "square" => Ok(CropMode::Square),
            other => Err(format!("unknown crop mode '{}' (expected aspect or square)", other)),
        }
    }
}

/// Configuration options for image preprocessing.
///
/// # Example
///
/// ```
/// use mosaic_core::{CropMode, PreprocessOptions};
///
/// let options = PreprocessOptions::new().crop(CropMode::Square);
/// assert_eq!(options.crop, CropMode::Square);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PreprocessOptions {
    /// Crop strategy. Default [`CropMode::Aspect`].
    pub crop: CropMode,
}

impl PreprocessOptions {
    /// Create new preprocessing options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the crop strategy.
    #[inline]
    pub fn crop(mut self, crop: CropMode) -> Self {
        self.crop = crop;
        self
    }
}
