pub mod mosaic_to_png;

pub use mosaic_to_png::{render_mosaic_png, RenderOptions, MAX_IMAGE_EDGE};
