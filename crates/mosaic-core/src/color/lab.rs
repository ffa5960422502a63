//! Approximate CIELAB conversion
//!
//! sRGB → linear → XYZ (D65) → L*a*b*, using the four-decimal sRGB matrix
//! and the classic `0.008856` / `7.787` linear segment. The constants are
//! fixed: changing any of them moves nearest-color decisions and therefore
//! mosaic output.
//!
//! Input is a [`WorkingColor`] on the 0..=255 scale. Fractional and
//! out-of-range channels are converted as-is, without clamping.

use super::rgb::Rgb;
use super::working::WorkingColor;

/// D65 reference white, on the same ×100 scale as the XYZ values.
const WHITE_X: f64 = 95.047;
const WHITE_Y: f64 = 100.0;
const WHITE_Z: f64 = 108.883;

const LAB_EPSILON: f64 = 0.008856;
const LAB_SLOPE: f64 = 7.787;
const LAB_OFFSET: f64 = 16.0 / 116.0;

/// A color in CIELAB space.
///
/// `l` is lightness (0 for black, 100 for white); `a` runs green → red and
/// `b` runs blue → yellow.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    /// Lightness
    pub l: f64,
    /// Green–red axis
    pub a: f64,
    /// Blue–yellow axis
    pub b: f64,
}

impl Lab {
    /// Create a Lab color from raw components.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert a working color (0..=255 scale) to Lab.
    pub fn from_working(color: WorkingColor) -> Self {
        let r = srgb_channel_to_linear(color.r / 255.0) * 100.0;
        let g = srgb_channel_to_linear(color.g / 255.0) * 100.0;
        let b = srgb_channel_to_linear(color.b / 255.0) * 100.0;

        let x = 0.4124 * r + 0.3576 * g + 0.1805 * b;
        let y = 0.2126 * r + 0.7152 * g + 0.0722 * b;
        let z = 0.0193 * r + 0.1192 * g + 0.9505 * b;

        let fx = lab_f(x / WHITE_X);
        let fy = lab_f(y / WHITE_Y);
        let fz = lab_f(z / WHITE_Z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<WorkingColor> for Lab {
    #[inline]
    fn from(color: WorkingColor) -> Self {
        Lab::from_working(color)
    }
}

impl From<Rgb> for Lab {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        Lab::from_working(WorkingColor::from(rgb))
    }
}

/// Inverse sRGB gamma on a normalized channel.
///
/// Negative inputs fall on the linear segment; inputs above 1.0 follow the
/// power curve.
#[inline]
fn srgb_channel_to_linear(c: f64) -> f64 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_SLOPE * t + LAB_OFFSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::white_point::D65;
    use palette::{FromColor, Srgb};

    fn reference_lab(rgb: Rgb) -> palette::Lab<D65, f64> {
        let srgb = Srgb::new(
            rgb.r as f64 / 255.0,
            rgb.g as f64 / 255.0,
            rgb.b as f64 / 255.0,
        );
        palette::Lab::<D65, f64>::from_color(srgb)
    }

    #[test]
    fn test_black_and_white_endpoints() {
        let black = Lab::from(Rgb::BLACK);
        assert!(black.l.abs() < 1e-9);
        assert!(black.a.abs() < 1e-9);
        assert!(black.b.abs() < 1e-9);

        // The rounded matrix rows do not sum exactly to the white point,
        // so white is a hair off neutral.
        let white = Lab::from(Rgb::WHITE);
        assert!((white.l - 100.0).abs() < 1e-6, "L = {}", white.l);
        assert!(white.a.abs() < 0.02, "a = {}", white.a);
        assert!(white.b.abs() < 0.02, "b = {}", white.b);
    }

    #[test]
    fn test_primaries_have_expected_signs() {
        let red = Lab::from(Rgb::new(255, 0, 0));
        assert!((red.l - 53.2).abs() < 0.3, "red L = {}", red.l);
        assert!(red.a > 70.0);

        let green = Lab::from(Rgb::new(0, 255, 0));
        assert!((green.l - 87.7).abs() < 0.3, "green L = {}", green.l);
        assert!(green.a < -70.0);

        let blue = Lab::from(Rgb::new(0, 0, 255));
        assert!((blue.l - 32.3).abs() < 0.3, "blue L = {}", blue.l);
        assert!(blue.b < -100.0);
    }

    /// The fixed-constant approximation stays close to a full-precision
    /// conversion across the gamut.
    #[test]
    fn test_matches_reference_conversion() {
        let samples = [
            Rgb::new(0, 0, 0),
            Rgb::new(10, 10, 10),
            Rgb::new(128, 128, 128),
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 165, 0),
            Rgb::new(139, 69, 19),
            Rgb::new(75, 0, 130),
            Rgb::new(250, 128, 114),
            Rgb::new(255, 255, 255),
        ];

        for rgb in samples {
            let ours = Lab::from(rgb);
            let reference = reference_lab(rgb);
            assert!(
                (ours.l - reference.l).abs() < 0.1,
                "{rgb}: L {} vs {}",
                ours.l,
                reference.l
            );
            assert!(
                (ours.a - reference.a).abs() < 0.15,
                "{rgb}: a {} vs {}",
                ours.a,
                reference.a
            );
            assert!(
                (ours.b - reference.b).abs() < 0.15,
                "{rgb}: b {} vs {}",
                ours.b,
                reference.b
            );
        }
    }

    #[test]
    fn test_linear_segment_below_threshold() {
        // 10/255 ≈ 0.0392 sits under the 0.04045 gamma knee.
        let c = 10.0 / 255.0;
        assert!((srgb_channel_to_linear(c) - c / 12.92).abs() < 1e-12);
        // lab_f is continuous enough at the knee for ordering purposes.
        let below = lab_f(LAB_EPSILON - 1e-9);
        let above = lab_f(LAB_EPSILON + 1e-9);
        assert!((below - above).abs() < 1e-3);
    }

    #[test]
    fn test_fractional_and_out_of_range_inputs() {
        let lab = Lab::from_working(WorkingColor::new(-12.5, 300.25, 127.5));
        assert!(lab.l.is_finite());
        assert!(lab.a.is_finite());
        assert!(lab.b.is_finite());

        // Fractional values between integer neighbors land between them.
        let lo = Lab::from(Rgb::new(100, 100, 100)).l;
        let mid = Lab::from_working(WorkingColor::new(100.5, 100.5, 100.5)).l;
        let hi = Lab::from(Rgb::new(101, 101, 101)).l;
        assert!(lo < mid && mid < hi);
    }
}
