use crate::assets::AssetLoader;
use crate::error::ConfigError;
use crate::rendering::MAX_IMAGE_EDGE;
use mosaic_core::{CropMode, DistanceMetric, MosaicGenerator, Palette, Rgb};
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Engine settings
    #[serde(default)]
    pub generation: GenerationConfig,

    /// PNG output settings
    #[serde(default)]
    pub render: RenderConfig,

    /// External palette file replacing the embedded catalog
    #[serde(default)]
    pub palette: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CropSetting {
    #[default]
    Aspect,
    Square,
}

impl From<CropSetting> for CropMode {
    fn from(setting: CropSetting) -> Self {
        match setting {
            CropSetting::Aspect => CropMode::Aspect,
            CropSetting::Square => CropMode::Square,
        }
    }
}

/// Settings passed through to [`MosaicGenerator`]
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GenerationConfig {
    #[serde(default = "default_size")]
    pub width: u32,

    #[serde(default = "default_size")]
    pub height: u32,

    #[serde(default)]
    pub crop: CropSetting,

    #[serde(default = "default_true")]
    pub preserve_background: bool,

    #[serde(default = "default_background_threshold")]
    pub background_threshold: u8,

    #[serde(default = "default_true")]
    pub dither: bool,

    #[serde(default = "default_error_threshold")]
    pub error_threshold: f64,

    #[serde(default = "default_propagation")]
    pub propagation: f64,

    #[serde(default = "default_true")]
    pub hue_bonus: bool,

    #[serde(default = "default_hue_bonus_factor")]
    pub hue_bonus_factor: f64,

    #[serde(default = "default_perceptual_weight")]
    pub perceptual_weight: f64,

    #[serde(default = "default_rgb_weight")]
    pub rgb_weight: f64,
}

fn default_size() -> u32 {
    48
}

fn default_true() -> bool {
    true
}

fn default_background_threshold() -> u8 {
    mosaic_core::DEFAULT_BACKGROUND_THRESHOLD
}

fn default_error_threshold() -> f64 {
    20.0
}

fn default_propagation() -> f64 {
    0.3
}

fn default_hue_bonus_factor() -> f64 {
    0.7
}

fn default_perceptual_weight() -> f64 {
    0.7
}

fn default_rgb_weight() -> f64 {
    0.3
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: default_size(),
            height: default_size(),
            crop: CropSetting::default(),
            preserve_background: true,
            background_threshold: default_background_threshold(),
            dither: true,
            error_threshold: default_error_threshold(),
            propagation: default_propagation(),
            hue_bonus: true,
            hue_bonus_factor: default_hue_bonus_factor(),
            perceptual_weight: default_perceptual_weight(),
            rgb_weight: default_rgb_weight(),
        }
    }
}

impl GenerationConfig {
    /// Build a generator over `palette` with these settings
    pub fn generator(&self, palette: Palette) -> MosaicGenerator {
        let generator = MosaicGenerator::new(palette)
            .crop(self.crop.into())
            .background_threshold(self.background_threshold)
            .preserve_background(self.preserve_background)
            .dither(self.dither)
            .error_threshold(self.error_threshold)
            .propagation(self.propagation)
            .hue_bonus(self.hue_bonus)
            .hue_bonus_factor(self.hue_bonus_factor)
            .metric(DistanceMetric::new(self.perceptual_weight, self.rgb_weight));
        tracing::debug!(
            crop = ?self.crop,
            dither = self.dither,
            hue_bonus = self.hue_bonus,
            background = ?generator.background(),
            colors = generator.palette().len(),
            "Configured generator"
        );
        generator
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("generation.width", self.width),
            ("generation.height", self.height),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be at least 1".to_string(),
                });
            }
        }
        for (field, value) in [
            ("generation.error_threshold", self.error_threshold),
            ("generation.propagation", self.propagation),
            ("generation.hue_bonus_factor", self.hue_bonus_factor),
            ("generation.perceptual_weight", self.perceptual_weight),
            ("generation.rgb_weight", self.rgb_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("{value} is not a non-negative number"),
                });
            }
        }
        Ok(())
    }
}

/// Settings for the PNG rendering of a mosaic
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RenderConfig {
    /// Pixels per brick
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,

    /// Separator color between bricks, e.g. "#303030"
    #[serde(default)]
    pub grid_line: Option<String>,

    #[serde(default = "default_grid_line_width")]
    pub grid_line_width: u32,

    /// Re-compress with oxipng
    #[serde(default = "default_true")]
    pub optimize: bool,
}

fn default_cell_size() -> u32 {
    16
}

fn default_grid_line_width() -> u32 {
    1
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            grid_line: None,
            grid_line_width: default_grid_line_width(),
            optimize: true,
        }
    }
}

impl RenderConfig {
    /// Parsed grid line color, if one is set
    pub fn grid_line_color(&self) -> Result<Option<Rgb>, ConfigError> {
        self.grid_line
            .as_deref()
            .map(|value| {
                value.parse::<Rgb>().map_err(|_| ConfigError::InvalidColor {
                    field: "render.grid_line".to_string(),
                    value: value.to_string(),
                })
            })
            .transpose()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "render.cell_size",
                reason: "must be at least 1".to_string(),
            });
        }
        self.grid_line_color()?;
        Ok(())
    }
}

impl AppConfig {
    /// Parse YAML text; `origin` is only used in error messages
    pub fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from AssetLoader (embedded or external)
    ///
    /// Unlike a missing embedded default, a broken external file is never
    /// papered over with defaults.
    pub fn load_from_assets(loader: &AssetLoader) -> Result<Self, ConfigError> {
        let origin = loader.config_source().to_string();
        let content = loader
            .read_config_string()
            .map_err(|source| ConfigError::Read {
                path: origin.clone(),
                source,
            })?;
        let config = Self::parse(&content, &origin)?;
        tracing::info!(
            source = %origin,
            width = config.generation.width,
            height = config.generation.height,
            crop = ?config.generation.crop,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Check every value the engine and renderer would otherwise reject late
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generation.validate()?;
        self.render.validate()?;
        self.check_output_size()
    }

    /// Both edges of the rendered PNG must stay within [`MAX_IMAGE_EDGE`]
    fn check_output_size(&self) -> Result<(), ConfigError> {
        let cell = u64::from(self.render.cell_size);
        let line = match self.render.grid_line {
            Some(_) => u64::from(self.render.grid_line_width),
            None => 0,
        };
        for (field, cells) in [
            ("generation.width", self.generation.width),
            ("generation.height", self.generation.height),
        ] {
            let edge = u64::from(cells) * cell + u64::from(cells.saturating_sub(1)) * line;
            if edge > u64::from(MAX_IMAGE_EDGE) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!(
                        "{cells} bricks render {edge}px wide, above the {MAX_IMAGE_EDGE}px limit"
                    ),
                });
            }
        }
        Ok(())
    }
}
