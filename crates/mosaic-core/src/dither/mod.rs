//! Error diffusion.
//!
//! Quantization error is carried in `f64` RGB and handed on in raster
//! order to two neighbors only: the pixel to the right and the pixel below.
//! Small errors (norm at or below the threshold) are dropped, which keeps
//! flat regions flat, and background pixels are fenced off entirely.
//!
//! ```
//! use mosaic_core::{DitherOptions, Ditherer, NearestMatcher, Palette, Rgb};
//!
//! let palette = Palette::from_hex(&[("Black", "#000000"), ("White", "#FFFFFF")]).unwrap();
//! let matcher = NearestMatcher::new(&palette);
//! let pixels = vec![Rgb::new(128, 128, 128); 4];
//!
//! let cells = Ditherer::new(DitherOptions::new()).quantize(&pixels, 2, 2, &matcher, Some(240))?;
//! assert_eq!(cells.len(), 4);
//! # Ok::<(), mosaic_core::MosaicError>(())
//! ```

mod buffer;
mod diffusion;
mod options;

pub use buffer::ErrorBuffer;
pub use diffusion::Ditherer;
pub use options::DitherOptions;
