//! Nearest-color search over a catalog.

use crate::color::{Lab, WorkingColor};
use crate::distance::{DistanceMetric, HueBias, HueLean};
use crate::palette::Palette;

/// Result of a nearest-color search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    /// Catalog index of the winning entry
    pub index: usize,
    /// Its (possibly hue-discounted) distance to the pixel
    pub distance: f64,
}

/// Finds the closest catalog entry for a pixel.
///
/// The search is an exhaustive scan in catalog order. An entry replaces the
/// current best only when its distance is strictly smaller, so among equally
/// close entries the earliest one wins.
///
/// # Example
///
/// ```
/// use mosaic_core::{NearestMatcher, Palette, WorkingColor};
///
/// let palette = Palette::from_hex(&[("Black", "#000000"), ("White", "#FFFFFF")]).unwrap();
/// let matcher = NearestMatcher::new(&palette);
/// let m = matcher.find_nearest(WorkingColor::new(30.0, 30.0, 30.0));
/// assert_eq!(m.index, 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NearestMatcher<'a> {
    palette: &'a Palette,
    metric: DistanceMetric,
    hue_bias: HueBias,
}

impl<'a> NearestMatcher<'a> {
    /// Matcher with the default metric and hue bonus.
    pub fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            metric: DistanceMetric::default(),
            hue_bias: HueBias::default(),
        }
    }

    /// Use a different distance blend.
    #[inline]
    pub fn metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Use a different hue bonus.
    #[inline]
    pub fn hue_bias(mut self, hue_bias: HueBias) -> Self {
        self.hue_bias = hue_bias;
        self
    }

    /// The catalog being searched.
    #[inline]
    pub fn palette(&self) -> &'a Palette {
        self.palette
    }

    /// Closest entry to `pixel`.
    ///
    /// A [`Palette`] is never empty, so there is always a winner.
    pub fn find_nearest(&self, pixel: WorkingColor) -> Match {
        let pixel_lab = Lab::from(pixel);
        let lean = HueLean::of(pixel);

        let mut best = Match {
            index: 0,
            distance: f64::INFINITY,
        };

        for (i, entry) in self.palette.iter().enumerate() {
            let base = self
                .metric
                .distance_with_lab(pixel, pixel_lab, entry.working(), entry.lab());
            let dist = self.hue_bias.apply(lean, entry.family(), base);
            if dist < best.distance {
                best = Match {
                    index: i,
                    distance: dist,
                };
            }
        }

        best
    }
}
