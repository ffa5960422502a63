//! MosaicGenerator builder -- the primary entry point for the crate.
//!
//! [`MosaicGenerator`] wires preprocessing, matching and dithering together
//! behind a fluent configuration API.

use std::path::Path;

use image::RgbImage;

use super::error::MosaicError;
use crate::dither::{DitherOptions, Ditherer};
use crate::distance::{DistanceMetric, HueBias};
use crate::matcher::NearestMatcher;
use crate::mosaic::{Mosaic, UsageHistogram};
use crate::palette::Palette;
use crate::preprocess::{CropMode, PreparedImage, PreprocessOptions, Preprocessor};

/// Default background threshold: pixels with every channel above it are
/// background.
pub const DEFAULT_BACKGROUND_THRESHOLD: u8 = 240;

/// High-level mosaic builder.
///
/// - Constructor requires a [`Palette`] (no invalid states)
/// - Configuration methods consume and return `self`
/// - [`generate()`](Self::generate) takes `&self`, so one generator serves
///   any number of images
///
/// # Defaults
///
/// | setting              | default |
/// |----------------------|---------|
/// | crop                 | aspect  |
/// | background detection | on, threshold 240 |
/// | dithering            | on, threshold 20.0, propagation 0.3 |
/// | hue bonus            | on, factor 0.7 |
/// | distance blend       | 0.7 perceptual / 0.3 RGB |
///
/// # Example
///
/// ```
/// use mosaic_core::{MosaicGenerator, Palette};
///
/// let palette = Palette::from_hex(&[("Black", "#000000"), ("White", "#FFFFFF")]).unwrap();
/// let generator = MosaicGenerator::new(palette).dither(false);
///
/// let source = image::RgbImage::from_pixel(10, 10, image::Rgb([20, 20, 20]));
/// let (mosaic, histogram) = generator.generate_image(&source, 4, 4).unwrap();
///
/// assert_eq!(mosaic.width(), 4);
/// assert_eq!(histogram.count("Black"), 16);
/// ```
#[derive(Debug, Clone)]
pub struct MosaicGenerator {
    palette: Palette,
    preprocess: PreprocessOptions,
    dither_opts: DitherOptions,
    metric: DistanceMetric,
    hue_bias: HueBias,
    background: Option<u8>,
}

impl MosaicGenerator {
    /// Create a generator with default settings.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            preprocess: PreprocessOptions::default(),
            dither_opts: DitherOptions::default(),
            metric: DistanceMetric::default(),
            hue_bias: HueBias::default(),
            background: Some(DEFAULT_BACKGROUND_THRESHOLD),
        }
    }

    /// Set the crop strategy.
    #[inline]
    pub fn crop(mut self, crop: CropMode) -> Self {
        self.preprocess = self.preprocess.crop(crop);
        self
    }

    /// Enable or disable error diffusion.
    #[inline]
    pub fn dither(mut self, enabled: bool) -> Self {
        self.dither_opts = self.dither_opts.enabled(enabled);
        self
    }

    /// Replace all dithering options at once.
    #[inline]
    pub fn dither_options(mut self, options: DitherOptions) -> Self {
        self.dither_opts = options;
        self
    }

    /// Set the error norm threshold for diffusion.
    #[inline]
    pub fn error_threshold(mut self, threshold: f64) -> Self {
        self.dither_opts = self.dither_opts.error_threshold(threshold);
        self
    }

    /// Set the diffusion propagation factor.
    #[inline]
    pub fn propagation(mut self, factor: f64) -> Self {
        self.dither_opts = self.dither_opts.propagation(factor);
        self
    }

    /// Enable or disable the hue-family bonus.
    #[inline]
    pub fn hue_bonus(mut self, enabled: bool) -> Self {
        self.hue_bias.enabled = enabled;
        self
    }

    /// Set the hue-family bonus factor.
    #[inline]
    pub fn hue_bonus_factor(mut self, factor: f64) -> Self {
        self.hue_bias.factor = factor;
        self
    }

    /// Set the perceptual / RGB distance blend.
    #[inline]
    pub fn metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Enable or disable background detection.
    ///
    /// Re-enabling restores the last threshold set, or the default.
    #[inline]
    pub fn preserve_background(mut self, enabled: bool) -> Self {
        self.background = if enabled {
            Some(self.background.unwrap_or(DEFAULT_BACKGROUND_THRESHOLD))
        } else {
            None
        };
        self
    }

    /// Set the background threshold and enable background detection.
    #[inline]
    pub fn background_threshold(mut self, threshold: u8) -> Self {
        self.background = Some(threshold);
        self
    }

    /// The catalog in use.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Background threshold, or `None` when detection is off.
    #[inline]
    pub fn background(&self) -> Option<u8> {
        self.background
    }

    /// Decode and resample encoded image bytes to `width × height`.
    pub fn prepare_bytes(
        &self,
        bytes: &[u8],
        width: u32,
        height: u32,
    ) -> Result<PreparedImage, MosaicError> {
        Ok(self.preprocessor().prepare_bytes(bytes, width, height)?)
    }

    /// Read, decode and resample an image file to `width × height`.
    pub fn prepare_path(
        &self,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<PreparedImage, MosaicError> {
        Ok(self.preprocessor().prepare_path(path, width, height)?)
    }

    /// Resample a decoded image to `width × height`.
    pub fn prepare_image(
        &self,
        image: &RgbImage,
        width: u32,
        height: u32,
    ) -> Result<PreparedImage, MosaicError> {
        Ok(self.preprocessor().prepare_image(image, width, height)?)
    }

    /// Quantize prepared pixels into a grid.
    ///
    /// # Errors
    ///
    /// [`MosaicError::GridMismatch`] if `prepared.pixels` does not hold
    /// exactly `width × height` pixels.
    pub fn quantize(&self, prepared: &PreparedImage) -> Result<Mosaic, MosaicError> {
        let matcher = NearestMatcher::new(&self.palette)
            .metric(self.metric)
            .hue_bias(self.hue_bias);
        let cells = Ditherer::new(self.dither_opts).quantize(
            &prepared.pixels,
            prepared.width as usize,
            prepared.height as usize,
            &matcher,
            self.background,
        )?;
        Mosaic::new(cells, prepared.width, prepared.height, self.palette.clone())
    }

    /// Generate a mosaic from encoded image bytes.
    ///
    /// # Errors
    ///
    /// [`MosaicError::InvalidDimensions`], [`MosaicError::UnsupportedFormat`]
    /// or [`MosaicError::UnreadableSource`]; no partial output.
    pub fn generate(
        &self,
        bytes: &[u8],
        width: u32,
        height: u32,
    ) -> Result<(Mosaic, UsageHistogram), MosaicError> {
        let prepared = self.prepare_bytes(bytes, width, height)?;
        self.finish(&prepared)
    }

    /// Generate a mosaic from an image file.
    pub fn generate_path(
        &self,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(Mosaic, UsageHistogram), MosaicError> {
        let prepared = self.prepare_path(path, width, height)?;
        self.finish(&prepared)
    }

    /// Generate a mosaic from a decoded image.
    pub fn generate_image(
        &self,
        image: &RgbImage,
        width: u32,
        height: u32,
    ) -> Result<(Mosaic, UsageHistogram), MosaicError> {
        let prepared = self.prepare_image(image, width, height)?;
        self.finish(&prepared)
    }

    fn finish(&self, prepared: &PreparedImage) -> Result<(Mosaic, UsageHistogram), MosaicError> {
        let mosaic = self.quantize(prepared)?;
        let histogram = mosaic.histogram();
        Ok((mosaic, histogram))
    }

    fn preprocessor(&self) -> Preprocessor {
        Preprocessor::new(self.preprocess)
    }
}
