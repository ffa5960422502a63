//! Raster-order quantization with two-direction error diffusion.

use super::buffer::ErrorBuffer;
use super::options::DitherOptions;
use crate::api::MosaicError;
use crate::color::{Rgb, WorkingColor};
use crate::matcher::NearestMatcher;
use crate::mosaic::Cell;

/// Quantizes a prepared pixel grid against a catalog.
///
/// Cells are visited row by row, left to right. For each cell:
///
/// 1. If background detection is on and every channel of the *source*
///    pixel is above the threshold, the cell is [`Cell::Background`]. It
///    ignores any error routed to it and passes none on.
/// 2. Otherwise the source pixel plus its accumulated error is matched.
/// 3. With diffusion enabled, `error = working − chosen`. If `‖error‖ >
///    error_threshold`, `propagation · error` is added to the right
///    neighbor and, separately, to the neighbor below, unless that
///    neighbor is itself background.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ditherer {
    options: DitherOptions,
}

impl Ditherer {
    /// Create a ditherer with the given options.
    pub fn new(options: DitherOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    pub fn options(&self) -> &DitherOptions {
        &self.options
    }

    /// Quantize `pixels` (row-major, `width * height`) to cells.
    ///
    /// `background` is the background threshold, or `None` to match every
    /// pixel.
    ///
    /// # Errors
    ///
    /// [`MosaicError::GridMismatch`] unless `pixels.len() == width * height`.
    pub fn quantize(
        &self,
        pixels: &[Rgb],
        width: usize,
        height: usize,
        matcher: &NearestMatcher<'_>,
        background: Option<u8>,
    ) -> Result<Vec<Cell>, MosaicError> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(MosaicError::GridMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        let is_background =
            |i: usize| background.is_some_and(|threshold| pixels[i].is_background(threshold));
        let palette = matcher.palette();

        let mut cells = Vec::with_capacity(pixels.len());
        let mut errors = ErrorBuffer::new(width, 2);

        for y in 0..height {
            for x in 0..width {
                let i = y * width + x;
                if is_background(i) {
                    cells.push(Cell::Background);
                    continue;
                }

                let mut working = WorkingColor::from(pixels[i]);
                if self.options.enabled {
                    working = working + errors.get_accumulated(x);
                }

                let found = matcher.find_nearest(working);
                cells.push(Cell::Color(found.index));

                if !self.options.enabled {
                    continue;
                }
                let Some(entry) = palette.get(found.index) else {
                    continue;
                };
                let error = working - entry.working();
                if error.norm() <= self.options.error_threshold {
                    continue;
                }

                let share = error * self.options.propagation;
                if x + 1 < width && !is_background(i + 1) {
                    errors.add_error(x + 1, 0, share);
                }
                if y + 1 < height && !is_background(i + width) {
                    errors.add_error(x, 1, share);
                }
            }
            errors.advance_row();
        }

        Ok(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;

    fn gray(v: u8) -> Rgb {
        Rgb::new(v, v, v)
    }

    /// Two grays, 60 and 140, plus white last.
    fn two_grays() -> Palette {
        Palette::from_hex(&[("Dark", "#3C3C3C"), ("Light", "#8C8C8C"), ("White", "#FFFFFF")])
            .unwrap()
    }

    #[test]
    fn test_disabled_matches_each_pixel_independently() {
        let palette = two_grays();
        let matcher = NearestMatcher::new(&palette);
        let pixels = vec![gray(125), gray(110)];
        let cells = Ditherer::new(DitherOptions::disabled().propagation(1.0))
            .quantize(&pixels, 2, 1, &matcher, None).unwrap();
        assert_eq!(cells, vec![Cell::Color(1), Cell::Color(1)]);
    }

    #[test]
    fn test_error_flows_right_above_threshold() {
        // 125 → Light (140), error −15 per channel, norm ≈ 26 > 20.
        // With full propagation the next pixel becomes 95 → Dark.
        let palette = two_grays();
        let matcher = NearestMatcher::new(&palette);
        let pixels = vec![gray(125), gray(110)];

        let cells = Ditherer::new(DitherOptions::new().propagation(1.0))
            .quantize(&pixels, 2, 1, &matcher, None).unwrap();
        assert_eq!(cells, vec![Cell::Color(1), Cell::Color(0)]);
    }

    #[test]
    fn test_error_at_or_below_threshold_is_dropped() {
        let palette = two_grays();
        let matcher = NearestMatcher::new(&palette);
        let pixels = vec![gray(125), gray(110)];

        let cells = Ditherer::new(DitherOptions::new().propagation(1.0).error_threshold(30.0))
            .quantize(&pixels, 2, 1, &matcher, None).unwrap();
        assert_eq!(cells, vec![Cell::Color(1), Cell::Color(1)]);
    }

    #[test]
    fn test_error_flows_down() {
        let palette = two_grays();
        let matcher = NearestMatcher::new(&palette);
        let pixels = vec![gray(125), gray(110)];

        let cells = Ditherer::new(DitherOptions::new().propagation(1.0))
            .quantize(&pixels, 1, 2, &matcher, None).unwrap();
        assert_eq!(cells, vec![Cell::Color(1), Cell::Color(0)]);
    }

    #[test]
    fn test_background_neither_receives_nor_propagates() {
        let palette = two_grays();
        let matcher = NearestMatcher::new(&palette);
        // Dark-pulling error from x=0 would hit the background cell; the cell
        // after it must be matched on its own value.
        let pixels = vec![gray(125), gray(250), gray(110)];

        let cells = Ditherer::new(DitherOptions::new().propagation(1.0))
            .quantize(&pixels, 3, 1, &matcher, Some(240)).unwrap();
        assert_eq!(cells, vec![Cell::Color(1), Cell::Background, Cell::Color(1)]);
    }

    #[test]
    fn test_background_detection_off_matches_white() {
        let palette = two_grays();
        let matcher = NearestMatcher::new(&palette);
        let cells = Ditherer::default().quantize(&[Rgb::WHITE], 1, 1, &matcher, None).unwrap();
        assert_eq!(cells, vec![Cell::Color(2)]);
    }

    #[test]
    fn test_pixel_count_must_match_grid() {
        let palette = two_grays();
        let matcher = NearestMatcher::new(&palette);
        let pixels = vec![gray(10); 5];
        assert_eq!(
            Ditherer::default().quantize(&pixels, 3, 2, &matcher, None),
            Err(MosaicError::GridMismatch { expected: 6, actual: 5 })
        );
        assert_eq!(
            Ditherer::default().quantize(&[], 0, 0, &matcher, None),
            Ok(Vec::new())
        );
    }

    #[test]
    fn test_uniform_gray_dithers_into_mix() {
        let palette = Palette::from_hex(&[("Black", "#000000"), ("White", "#FFFFFF")]).unwrap();
        let matcher = NearestMatcher::new(&palette);
        let pixels = vec![gray(128); 8];

        let flat = Ditherer::new(DitherOptions::disabled()).quantize(&pixels, 8, 1, &matcher, None).unwrap();
        assert!(flat.windows(2).all(|w| w[0] == w[1]));

        let mixed = Ditherer::default().quantize(&pixels, 8, 1, &matcher, None).unwrap();
        assert!(mixed.contains(&Cell::Color(0)));
        assert!(mixed.contains(&Cell::Color(1)));
    }
}
