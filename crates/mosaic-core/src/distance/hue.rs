//! Hue-family bonus
//!
//! Strongly green or orange pixels get a discount on their distance to
//! catalog entries of the matching family, which pulls foliage and skin or
//! wood tones towards the right side of the catalog when an off-family
//! entry is nearly as close.

use crate::color::WorkingColor;
use crate::palette::ColorFamily;

/// Which way a pixel leans, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueLean {
    /// `G > 1.2 · max(R, B)`
    Green,
    /// `R > 1.3 · G` and `G > 1.2 · B`
    Orange,
    /// Neither condition holds
    None,
}

impl HueLean {
    /// Classify a working pixel. Green is tested first; the two conditions
    /// cannot both hold for non-negative channels.
    pub fn of(pixel: WorkingColor) -> HueLean {
        if pixel.g > 1.2 * pixel.r.max(pixel.b) {
            HueLean::Green
        } else if pixel.r > 1.3 * pixel.g && pixel.g > 1.2 * pixel.b {
            HueLean::Orange
        } else {
            HueLean::None
        }
    }

    /// True when an entry of `family` earns the bonus for this lean.
    ///
    /// Orange-leaning pixels favor both orange and brown entries, since the
    /// warm dark tones of the catalog are tagged brown.
    #[inline]
    pub fn favors(self, family: ColorFamily) -> bool {
        matches!(
            (self, family),
            (HueLean::Green, ColorFamily::Green)
                | (HueLean::Orange, ColorFamily::Orange)
                | (HueLean::Orange, ColorFamily::Brown)
        )
    }
}

/// Hue bonus configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueBias {
    /// Whether the bonus is applied at all. Default true.
    pub enabled: bool,
    /// Multiplier applied to favored distances. Default 0.7.
    pub factor: f64,
}

impl Default for HueBias {
    fn default() -> Self {
        Self {
            enabled: true,
            factor: 0.7,
        }
    }
}

impl HueBias {
    /// A bias that never changes a distance.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Apply the bonus to `distance` for an entry of `family`.
    #[inline]
    pub fn apply(&self, lean: HueLean, family: ColorFamily, distance: f64) -> f64 {
        if self.enabled && lean.favors(family) {
            distance * self.factor
        } else {
            distance
        }
    }
}
