//! Hue families of catalog entries
//!
//! Every catalog entry carries a [`ColorFamily`]. The family is decided once
//! when the catalog is built, either taken from the catalog source or derived
//! with [`ColorFamily::from_rgb`], and is never re-derived from the entry's
//! name during matching.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;
use crate::color::Rgb;

/// Coarse hue family of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFamily {
    /// Blacks, grays and whites
    Neutral,
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Pink,
    Brown,
}

/// Channel spread below which a color counts as neutral.
const NEUTRAL_CHROMA: u8 = 24;

impl ColorFamily {
    /// All families in declaration order.
    pub const ALL: [ColorFamily; 10] = [
        ColorFamily::Neutral,
        ColorFamily::Red,
        ColorFamily::Orange,
        ColorFamily::Yellow,
        ColorFamily::Green,
        ColorFamily::Cyan,
        ColorFamily::Blue,
        ColorFamily::Purple,
        ColorFamily::Pink,
        ColorFamily::Brown,
    ];

    /// Derive a family from the channel values alone.
    ///
    /// Used for entries supplied without an explicit family. The rule looks
    /// at which channels dominate (the hue sector of the color) and, for
    /// warm and magenta sectors, at overall brightness:
    ///
    /// | condition                         | family  |
    /// |-----------------------------------|---------|
    /// | max − min < 24                    | Neutral |
    /// | hue < 15° or ≥ 345°, min ≥ 130    | Pink    |
    /// | hue < 15° or ≥ 345°               | Red     |
    /// | 15° ≤ hue < 45°, max < 170        | Brown   |
    /// | 15° ≤ hue < 45°                   | Orange  |
    /// | 45° ≤ hue < 70°                   | Yellow  |
    /// | 70° ≤ hue < 165°                  | Green   |
    /// | 165° ≤ hue < 200°                 | Cyan    |
    /// | 200° ≤ hue < 255°                 | Blue    |
    /// | 255° ≤ hue < 290°                 | Purple  |
    /// | 290° ≤ hue < 345°, min ≥ 100      | Pink    |
    /// | 290° ≤ hue < 345°                 | Purple  |
    pub fn from_rgb(rgb: Rgb) -> ColorFamily {
        let max = rgb.r.max(rgb.g).max(rgb.b);
        let min = rgb.r.min(rgb.g).min(rgb.b);
        let chroma = max - min;
        if chroma < NEUTRAL_CHROMA {
            return ColorFamily::Neutral;
        }

        let hue = hue_degrees(rgb, max, chroma);
        match hue {
            h if !(15.0..345.0).contains(&h) => {
                if min >= 130 {
                    ColorFamily::Pink
                } else {
                    ColorFamily::Red
                }
            }
            h if h < 45.0 => {
                if max < 170 {
                    ColorFamily::Brown
                } else {
                    ColorFamily::Orange
                }
            }
            h if h < 70.0 => ColorFamily::Yellow,
            h if h < 165.0 => ColorFamily::Green,
            h if h < 200.0 => ColorFamily::Cyan,
            h if h < 255.0 => ColorFamily::Blue,
            h if h < 290.0 => ColorFamily::Purple,
            _ => {
                if min >= 100 {
                    ColorFamily::Pink
                } else {
                    ColorFamily::Purple
                }
            }
        }
    }

    /// Lowercase name, as used in palette files.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorFamily::Neutral => "neutral",
            ColorFamily::Red => "red",
            ColorFamily::Orange => "orange",
            ColorFamily::Yellow => "yellow",
            ColorFamily::Green => "green",
            ColorFamily::Cyan => "cyan",
            ColorFamily::Blue => "blue",
            ColorFamily::Purple => "purple",
            ColorFamily::Pink => "pink",
            ColorFamily::Brown => "brown",
        }
    }
}

/// HSV hue in degrees, 0.0..360.0. `chroma` must be non-zero.
fn hue_degrees(rgb: Rgb, max: u8, chroma: u8) -> f64 {
    let [r, g, b] = rgb.to_f64();
    let c = chroma as f64;
    let h = if max == rgb.r {
        ((g - b) / c).rem_euclid(6.0)
    } else if max == rgb.g {
        (b - r) / c + 2.0
    } else {
        (r - g) / c + 4.0
    };
    h * 60.0
}

impl fmt::Display for ColorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFamily {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ColorFamily::ALL
            .into_iter()
            .find(|family| family.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseColorError::UnknownFamily(wanted.to_string()))
    }
}
