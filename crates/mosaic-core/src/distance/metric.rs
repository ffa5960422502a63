//! Blended RGB / perceptual distance.

use crate::color::{Lab, WorkingColor};

/// Weight of the luma difference inside the RGB distance.
const RGB_LUMA_WEIGHT: f64 = 0.6;
/// Weight of the Euclidean channel distance inside the RGB distance.
const RGB_EUCLID_WEIGHT: f64 = 0.4;
/// Lightness is doubled in the perceptual distance.
const LIGHTNESS_WEIGHT: f64 = 2.0;

/// Distance between a pixel and a catalog color.
///
/// `combined = perceptual_weight · perceptual + rgb_weight · rgb`, where
///
/// - `rgb = 0.6 · |Δluma| + 0.4 · ‖ΔRGB‖` (Rec. 601 luma)
/// - `perceptual = sqrt((2·ΔL)² + Δa² + Δb²)`
///
/// The base distance is symmetric and zero for identical colors. The hue
/// bonus is applied on top by the matcher, see [`HueBias`](super::HueBias).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceMetric {
    /// Weight of the perceptual (Lab) term. Default 0.7.
    pub perceptual_weight: f64,
    /// Weight of the RGB term. Default 0.3.
    pub rgb_weight: f64,
}

impl Default for DistanceMetric {
    fn default() -> Self {
        Self {
            perceptual_weight: 0.7,
            rgb_weight: 0.3,
        }
    }
}

impl DistanceMetric {
    /// Create a metric with custom blend weights.
    #[inline]
    pub fn new(perceptual_weight: f64, rgb_weight: f64) -> Self {
        Self {
            perceptual_weight,
            rgb_weight,
        }
    }

    /// Blended distance when both Lab values are already known.
    #[inline]
    pub fn distance_with_lab(
        &self,
        a: WorkingColor,
        a_lab: Lab,
        b: WorkingColor,
        b_lab: Lab,
    ) -> f64 {
        self.perceptual_weight * perceptual_distance(a_lab, b_lab)
            + self.rgb_weight * rgb_distance(a, b)
    }

    /// Blended distance between two colors.
    pub fn distance(&self, a: WorkingColor, b: WorkingColor) -> f64 {
        self.distance_with_lab(a, Lab::from(a), b, Lab::from(b))
    }
}

/// `0.6 · |luma(a) − luma(b)| + 0.4 · ‖a − b‖`.
#[inline]
pub fn rgb_distance(a: WorkingColor, b: WorkingColor) -> f64 {
    RGB_LUMA_WEIGHT * (a.luma() - b.luma()).abs() + RGB_EUCLID_WEIGHT * (a - b).norm()
}

/// `sqrt((2·ΔL)² + Δa² + Δb²)`.
#[inline]
pub fn perceptual_distance(a: Lab, b: Lab) -> f64 {
    let dl = LIGHTNESS_WEIGHT * (a.l - b.l);
    let da = a.a - b.a;
    let db = a.b - b.b;
    (dl * dl + da * da + db * db).sqrt()
}
