#![allow(clippy::module_inception)]

//! mosaic-core: palette quantization for brick mosaics
//!
//! Maps every pixel of an arbitrary photo onto a fixed catalog of named
//! brick colors, producing a W×H grid and a per-color usage count.
//!
//! # Quick Start
//!
//! The [`MosaicGenerator`] builder is the primary entry point:
//!
//! ```
//! use mosaic_core::{MosaicGenerator, Palette};
//!
//! let palette = Palette::from_hex(&[
//!     ("Black", "#000000"),
//!     ("White", "#FFFFFF"),
//!     ("Red", "#FF0000"),
//! ])
//! .unwrap();
//!
//! let source = image::RgbImage::from_pixel(64, 48, image::Rgb([250, 5, 5]));
//! let (mosaic, histogram) = MosaicGenerator::new(palette)
//!     .generate_image(&source, 8, 8)
//!     .unwrap();
//!
//! assert_eq!(mosaic.color_at(0, 0).name, "Red");
//! assert_eq!(histogram.total(), 64);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! encoded bytes / file
//!     |
//!     v
//! decode (PNG, JPEG, BMP, GIF)      -> UnsupportedFormat / UnreadableSource
//!     |
//!     v
//! centered crop (aspect or square)
//!     |
//!     v
//! box-filter resample to W×H        (8-bit RGB)
//!     |
//!     v
//! per cell, raster order:
//!     background?  --yes-->  Cell::Background (no matching, no error)
//!         | no
//!         v
//!     pixel + accumulated error            (f64 RGB)
//!         |
//!         v
//!     nearest catalog entry                (blended Lab / RGB distance,
//!         |                                 hue-family bonus, first wins)
//!         v
//!     error = pixel − entry; if ‖error‖ > threshold,
//!     0.3·error → right neighbor, 0.3·error → neighbor below
//!     |
//!     v
//! Mosaic (W×H cells) + UsageHistogram
//! ```
//!
//! # Distance
//!
//! `0.7 · perceptual + 0.3 · rgb`, where the perceptual term is a Lab
//! distance with lightness counted twice and the RGB term mixes luma and
//! Euclidean differences. See [`DistanceMetric`]. Green-leaning and
//! orange-leaning pixels get a 0.7× discount towards entries of the matching
//! [`ColorFamily`]; see [`HueBias`].
//!
//! # Determinism
//!
//! Generation is single-threaded and has no randomness: the same bytes,
//! size, catalog and options always produce the same grid. A [`Palette`] is
//! immutable and `Send + Sync`, so separate grids can be generated from
//! separate threads.

pub mod api;
pub mod color;
pub mod distance;
pub mod dither;
pub mod matcher;
pub mod mosaic;
pub mod palette;
pub mod preprocess;


pub use api::{MosaicError, MosaicGenerator, DEFAULT_BACKGROUND_THRESHOLD};
pub use color::{Lab, Rgb, WorkingColor};
pub use distance::{DistanceMetric, HueBias, HueLean};
pub use dither::{DitherOptions, Ditherer};
pub use matcher::{Match, NearestMatcher};
pub use mosaic::{Cell, ColorRef, ColorUsage, Mosaic, UsageHistogram, BACKGROUND_NAME};
pub use palette::{ColorFamily, Palette, PaletteEntry, PaletteError, ParseColorError};
pub use preprocess::{
    CropMode, CropRect, PreparedImage, PreprocessError, PreprocessOptions, Preprocessor,
};
