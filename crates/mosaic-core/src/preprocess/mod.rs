//! Image preprocessing for mosaic generation.
//!
//! Turns encoded image bytes (or a file) into exactly `W × H` 8-bit RGB
//! pixels:
//!
//! 1. **Decode** - PNG, JPEG, BMP or GIF (first frame). Anything else is
//!    [`PreprocessError::UnsupportedFormat`]; a supported format that fails
//!    to decode is [`PreprocessError::UnreadableSource`].
//! 2. **Crop** - centered. [`CropMode::Aspect`] keeps the largest window with
//!    the target aspect ratio; [`CropMode::Square`] keeps the largest square.
//! 3. **Resample** - box filter over the window only, so each output cell is
//!    the mean of the source pixels under its footprint and nothing outside
//!    the crop leaks into the edges.
//!
//! ```
//! use mosaic_core::{Preprocessor, PreprocessOptions};
//!
//! let source = image::RgbImage::from_pixel(640, 480, image::Rgb([200, 10, 10]));
//! let prepared = Preprocessor::new(PreprocessOptions::new())
//!     .prepare_image(&source, 32, 32)
//!     .unwrap();
//!
//! assert_eq!(prepared.pixels.len(), 32 * 32);
//! // 640x480 onto a square: the central 480x480 window
//! assert_eq!(prepared.crop.x, 80);
//! ```

mod crop;
mod decode;
mod error;
mod options;
mod preprocessor;
mod resize;

pub use crop::CropRect;
pub use decode::{decode_image, read_source, SUPPORTED_EXTENSIONS};
pub use error::PreprocessError;
pub use options::{CropMode, PreprocessOptions};
pub use preprocessor::{PreparedImage, Preprocessor};
