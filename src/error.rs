use mosaic_core::MosaicError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Mosaic error: {0}")]
    Mosaic(#[from] MosaicError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Histogram export error: {0}")]
    Export(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid color '{value}' for {field}")]
    InvalidColor { field: String, value: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("Palette error: {0}")]
    Palette(#[from] MosaicError),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("Cell size must be at least 1")]
    ZeroCellSize,

    #[error("PNG encode error: {0}")]
    PngEncode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_unsupported_dimensions() {
        let error = RenderError::UnsupportedDimensions {
            width: 99999,
            height: 99999,
        };
        assert_eq!(error.to_string(), "Unsupported dimensions: 99999x99999");
    }

    #[test]
    fn test_render_error_png_encode() {
        let error = RenderError::PngEncode("Encoding failed".to_string());
        assert_eq!(error.to_string(), "PNG encode error: Encoding failed");
    }

    #[test]
    fn test_config_error_invalid_color() {
        let error = ConfigError::InvalidColor {
            field: "render.grid_line".to_string(),
            value: "#12".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid color '#12' for render.grid_line"
        );
    }

    #[test]
    fn test_app_error_from_mosaic_error() {
        let app_error: AppError = MosaicError::EmptyCatalog.into();
        match app_error {
            AppError::Mosaic(MosaicError::EmptyCatalog) => {}
            other => panic!("Expected Mosaic variant, got {other:?}"),
        }
    }

    #[test]
    fn test_app_error_from_render_error() {
        let app_error: AppError = RenderError::ZeroCellSize.into();
        assert_eq!(
            app_error.to_string(),
            "Rendering error: Cell size must be at least 1"
        );
    }

    #[test]
    fn test_app_error_from_config_error() {
        let app_error: AppError = ConfigError::InvalidValue {
            field: "generation.width",
            reason: "must be positive".to_string(),
        }
        .into();
        assert_eq!(
            app_error.to_string(),
            "Configuration error: Invalid value for generation.width: must be positive"
        );
    }
}
