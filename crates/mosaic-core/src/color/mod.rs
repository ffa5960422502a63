//! Color types and conversions
//!
//! - [`Rgb`]: 8-bit sRGB triple used for catalog entries and decoded pixels
//! - [`WorkingColor`]: `f64` accumulator used while dithering and matching
//! - [`Lab`]: approximate CIELAB used by the perceptual distance

mod lab;
mod rgb;
mod working;

pub use lab::Lab;
pub use rgb::Rgb;
pub use working::WorkingColor;
