//! Floating-point working color
//!
//! During dithering a pixel accumulates error from its neighbors, so its
//! channels become fractional and may leave 0..=255. Everything downstream
//! of the preprocessor (distance, matching, Lab conversion) works on this
//! type without clamping.

use std::ops::{Add, Mul, Sub};

use super::rgb::Rgb;

/// An RGB color with `f64` channels on the 0..=255 scale.
///
/// Values outside the nominal range are legal and preserved.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorkingColor {
    /// Red channel
    pub r: f64,
    /// Green channel
    pub g: f64,
    /// Blue channel
    pub b: f64,
}

impl WorkingColor {
    /// Create a working color from raw channel values.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Rec. 601 luma: `0.299 R + 0.587 G + 0.114 B`.
    #[inline]
    pub fn luma(self) -> f64 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// Euclidean length of the channel vector.
    #[inline]
    pub fn norm(self) -> f64 {
        (self.r * self.r + self.g * self.g + self.b * self.b).sqrt()
    }

    /// Largest of the three channels.
    #[inline]
    pub fn max_channel(self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    /// True when every channel is finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl From<Rgb> for WorkingColor {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb.r as f64, rgb.g as f64, rgb.b as f64)
    }
}

impl Add for WorkingColor {
    type Output = WorkingColor;

    #[inline]
    fn add(self, rhs: WorkingColor) -> WorkingColor {
        WorkingColor::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Sub for WorkingColor {
    type Output = WorkingColor;

    #[inline]
    fn sub(self, rhs: WorkingColor) -> WorkingColor {
        WorkingColor::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul<f64> for WorkingColor {
    type Output = WorkingColor;

    #[inline]
    fn mul(self, rhs: f64) -> WorkingColor {
        WorkingColor::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}
