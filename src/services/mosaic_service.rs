use std::path::Path;
use std::time::{Duration, Instant};

use mosaic_core::{Mosaic, MosaicGenerator, Palette, PreparedImage, UsageHistogram};
use sha2::{Digest, Sha256};

use crate::error::{AppError, ConfigError};
use crate::models::AppConfig;
use crate::rendering::{render_mosaic_png, RenderOptions};
use crate::services::HistogramReport;

/// Everything produced by one generation run
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub mosaic: Mosaic,
    pub histogram: UsageHistogram,
    /// Rendered PNG bytes
    pub png_bytes: Vec<u8>,
    /// SHA-256 over dimensions and resolved colors
    pub fingerprint: String,
    pub elapsed: Duration,
}

impl GenerationResult {
    pub fn report(&self) -> HistogramReport {
        HistogramReport::new(&self.mosaic, &self.histogram, &self.fingerprint)
    }
}

/// Generation service that combines the engine with PNG rendering
pub struct MosaicService {
    generator: MosaicGenerator,
    render: RenderOptions,
}

impl MosaicService {
    pub fn new(generator: MosaicGenerator, render: RenderOptions) -> Self {
        Self { generator, render }
    }

    /// Build from configuration and an already loaded catalog
    pub fn from_config(config: &AppConfig, palette: Palette) -> Result<Self, ConfigError> {
        let grid_line = config
            .render
            .grid_line_color()?
            .map(|color| (color, config.render.grid_line_width));
        let render = RenderOptions {
            cell_size: config.render.cell_size,
            grid_line,
            optimize: config.render.optimize,
        };
        Ok(Self::new(config.generation.generator(palette), render))
    }

    pub fn generator(&self) -> &MosaicGenerator {
        &self.generator
    }

    pub fn render_options(&self) -> &RenderOptions {
        &self.render
    }

    /// Generate from an image file
    pub fn generate_file(
        &self,
        input: &Path,
        width: u32,
        height: u32,
    ) -> Result<GenerationResult, AppError> {
        let started = Instant::now();
        tracing::info!(input = %input.display(), width, height, "Generating mosaic");
        let prepared = self.generator.prepare_path(input, width, height)?;
        self.finish(&prepared, started)
    }

    /// Generate from encoded image bytes
    pub fn generate_bytes(
        &self,
        bytes: &[u8],
        width: u32,
        height: u32,
    ) -> Result<GenerationResult, AppError> {
        let started = Instant::now();
        tracing::info!(bytes = bytes.len(), width, height, "Generating mosaic");
        let prepared = self.generator.prepare_bytes(bytes, width, height)?;
        self.finish(&prepared, started)
    }

    fn finish(
        &self,
        prepared: &PreparedImage,
        started: Instant,
    ) -> Result<GenerationResult, AppError> {
        tracing::debug!(
            source_width = prepared.source_width,
            source_height = prepared.source_height,
            crop_x = prepared.crop.x,
            crop_y = prepared.crop.y,
            crop_width = prepared.crop.width,
            crop_height = prepared.crop.height,
            "Preprocessed source"
        );

        let mosaic = self.generator.quantize(prepared)?;
        let histogram = mosaic.histogram();
        let fingerprint = fingerprint(&mosaic);
        let png_bytes = render_mosaic_png(&mosaic, &self.render)?;
        let elapsed = started.elapsed();

        tracing::info!(
            width = mosaic.width(),
            height = mosaic.height(),
            colors = histogram.len(),
            background = histogram.background(),
            fingerprint = %fingerprint,
            png_bytes = png_bytes.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Generated mosaic"
        );

        Ok(GenerationResult {
            mosaic,
            histogram,
            png_bytes,
            fingerprint,
            elapsed,
        })
    }
}

/// SHA-256 fingerprint of a mosaic's dimensions and resolved colors
///
/// Two runs with the same input, size, catalog and options produce the same
/// fingerprint.
pub fn fingerprint(mosaic: &Mosaic) -> String {
    let mut hasher = Sha256::new();
    hasher.update(mosaic.width().to_le_bytes());
    hasher.update(mosaic.height().to_le_bytes());
    for color in mosaic.colors() {
        hasher.update(color.name.as_bytes());
        hasher.update([0u8]);
        hasher.update(color.rgb.to_bytes());
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_core::Cell;

    fn palette() -> Palette {
        Palette::from_hex(&[("Black", "#000000"), ("White", "#FFFFFF")]).unwrap()
    }

    #[test]
    fn test_fingerprint_is_stable_and_sensitive() {
        let a = Mosaic::new(vec![Cell::Color(0), Cell::Color(1)], 2, 1, palette()).unwrap();
        let b = Mosaic::new(vec![Cell::Color(0), Cell::Color(1)], 2, 1, palette()).unwrap();
        let swapped = Mosaic::new(vec![Cell::Color(1), Cell::Color(0)], 2, 1, palette()).unwrap();
        let tall = Mosaic::new(vec![Cell::Color(0), Cell::Color(1)], 1, 2, palette()).unwrap();

        assert_eq!(fingerprint(&a), fingerprint(&b));
        assert_eq!(fingerprint(&a).len(), 64);
        assert_ne!(fingerprint(&a), fingerprint(&swapped));
        assert_ne!(fingerprint(&a), fingerprint(&tall));
    }

    #[test]
    fn test_background_and_white_fingerprint_alike() {
        // A background cell renders as the catalog's White entry
        let white = Mosaic::new(vec![Cell::Color(1)], 1, 1, palette()).unwrap();
        let background = Mosaic::new(vec![Cell::Background], 1, 1, palette()).unwrap();
        assert_eq!(fingerprint(&white), fingerprint(&background));
    }

    #[test]
    fn test_from_config_applies_render_settings() {
        let mut config = AppConfig::default();
        config.render.cell_size = 4;
        config.render.grid_line = Some("#101010".to_string());
        config.render.grid_line_width = 2;
        config.render.optimize = false;

        let service = MosaicService::from_config(&config, palette()).unwrap();
        assert_eq!(service.render_options().cell_size, 4);
        assert_eq!(
            service.render_options().grid_line,
            Some((mosaic_core::Rgb::new(16, 16, 16), 2))
        );
        assert!(!service.render_options().optimize);
    }

    #[test]
    fn test_generate_bytes_rejects_garbage() {
        let service = MosaicService::from_config(&AppConfig::default(), palette()).unwrap();
        match service.generate_bytes(b"definitely not an image", 4, 4) {
            Err(AppError::Mosaic(mosaic_core::MosaicError::UnsupportedFormat(_))) => {}
            other => panic!("Expected UnsupportedFormat, got {other:?}"),
        }
    }
}
