pub mod config;
pub mod palette_file;

pub use config::{AppConfig, CropSetting, GenerationConfig, RenderConfig};
pub use palette_file::{load_palette, ColorValue, PaletteColor, PaletteFile};
