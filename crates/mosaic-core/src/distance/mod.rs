//! Color distance
//!
//! [`DistanceMetric`] blends an RGB distance with a lightness-weighted Lab
//! distance. [`HueBias`] optionally discounts distances to entries of the
//! pixel's hue family.

mod hue;
mod metric;

pub use hue::{HueBias, HueLean};
pub use metric::{perceptual_distance, rgb_distance, DistanceMetric};
