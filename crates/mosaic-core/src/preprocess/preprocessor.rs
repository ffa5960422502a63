//! Source image to W×H pixel grid.
//!
//! 1. **Decode** (PNG/JPEG/BMP/GIF only, grayscale expanded, alpha dropped)
//! 2. **Crop** to a centered window ([`CropMode`])
//! 3. **Resample** the window to exactly W×H with a box filter

use std::path::Path;

use image::RgbImage;

use super::crop::CropRect;
use super::decode::{decode_image, read_source};
use super::error::PreprocessError;
use super::options::{CropMode, PreprocessOptions};
use super::resize::resize_box;
use crate::color::Rgb;

/// Output of [`Preprocessor`].
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedImage {
    /// Row-major pixels, exactly `width * height` of them.
    pub pixels: Vec<Rgb>,
    /// Grid width.
    pub width: u32,
    /// Grid height.
    pub height: u32,
    /// Decoded source width.
    pub source_width: u32,
    /// Decoded source height.
    pub source_height: u32,
    /// Window of the source that was resampled.
    pub crop: CropRect,
}

impl PreparedImage {
    /// Pixel at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}

/// Maps arbitrary source images onto a fixed grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Preprocessor {
    options: PreprocessOptions,
}

impl Preprocessor {
    /// Create a preprocessor with the given options.
    pub fn new(options: PreprocessOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    pub fn options(&self) -> &PreprocessOptions {
        &self.options
    }

    /// Prepare encoded image bytes.
    pub fn prepare_bytes(
        &self,
        bytes: &[u8],
        width: u32,
        height: u32,
    ) -> Result<PreparedImage, PreprocessError> {
        check_dimensions(width, height)?;
        let image = decode_image(bytes)?;
        self.prepare_image(&image, width, height)
    }

    /// Prepare an image file. The extension is checked before the file is read.
    pub fn prepare_path(
        &self,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<PreparedImage, PreprocessError> {
        check_dimensions(width, height)?;
        let bytes = read_source(path)?;
        let image = decode_image(&bytes)?;
        self.prepare_image(&image, width, height)
    }

    /// Prepare an already decoded image.
    ///
    /// # Errors
    ///
    /// [`PreprocessError::InvalidDimensions`] if `width` or `height` is zero,
    /// [`PreprocessError::UnreadableSource`] if `image` has no pixels.
    pub fn prepare_image(
        &self,
        image: &RgbImage,
        width: u32,
        height: u32,
    ) -> Result<PreparedImage, PreprocessError> {
        check_dimensions(width, height)?;
        let (sw, sh) = image.dimensions();
        if sw == 0 || sh == 0 {
            return Err(PreprocessError::UnreadableSource(
                "image has no pixels".to_string(),
            ));
        }

        let crop = match self.options.crop {
            CropMode::Aspect => CropRect::centered_aspect(sw, sh, width, height),
            CropMode::Square => CropRect::centered_square(sw, sh),
        };
        let pixels = resize_box(image, crop, width, height)?;

        Ok(PreparedImage {
            pixels,
            width,
            height,
            source_width: sw,
            source_height: sh,
            crop,
        })
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<(), PreprocessError> {
    if width == 0 || height == 0 {
        return Err(PreprocessError::InvalidDimensions { width, height });
    }
    Ok(())
}
