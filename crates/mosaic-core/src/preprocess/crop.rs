//! Centered crop rectangles.

/// A crop window in source pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Window width (at least 1)
    pub width: u32,
    /// Window height (at least 1)
    pub height: u32,
}

impl CropRect {
    /// The whole source.
    pub fn full(source_width: u32, source_height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width: source_width,
            height: source_height,
        }
    }

    /// Largest centered window with the aspect ratio `target_width : target_height`.
    ///
    /// A source wider than the target keeps its full height and loses columns
    /// on both sides; otherwise it keeps its full width and loses rows. The
    /// kept extent is rounded to the nearest pixel and any odd leftover goes
    /// to the right or bottom.
    pub fn centered_aspect(
        source_width: u32,
        source_height: u32,
        target_width: u32,
        target_height: u32,
    ) -> Self {
        let (sw, sh) = (source_width as u64, source_height as u64);
        let (tw, th) = (target_width.max(1) as u64, target_height.max(1) as u64);

        // sw/sh > tw/th without going through floats
        if sw * th > tw * sh {
            let width = round_div(sh * tw, th).clamp(1, sw) as u32;
            Self::centered(source_width, source_height, width, source_height)
        } else {
            let height = round_div(sw * th, tw).clamp(1, sh) as u32;
            Self::centered(source_width, source_height, source_width, height)
        }
    }

    /// Largest centered square.
    pub fn centered_square(source_width: u32, source_height: u32) -> Self {
        let side = source_width.min(source_height);
        Self::centered(source_width, source_height, side, side)
    }

    fn centered(source_width: u32, source_height: u32, width: u32, height: u32) -> Self {
        Self {
            x: (source_width - width) / 2,
            y: (source_height - height) / 2,
            width,
            height,
        }
    }
}

/// `n / d` rounded half up.
#[inline]
fn round_div(n: u64, d: u64) -> u64 {
    (2 * n + d) / (2 * d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wider_source_loses_columns() {
        // 400x100 onto a square: keep 100x100 from x=150
        let crop = CropRect::centered_aspect(400, 100, 10, 10);
        assert_eq!(
            crop,
            CropRect {
                x: 150,
                y: 0,
                width: 100,
                height: 100
            }
        );
    }

    #[test]
    fn test_taller_source_loses_rows() {
        // 100x400 onto 2:1: keep 100x50, centered vertically
        let crop = CropRect::centered_aspect(100, 400, 20, 10);
        assert_eq!(
            crop,
            CropRect {
                x: 0,
                y: 175,
                width: 100,
                height: 50
            }
        );
    }

    #[test]
    fn test_matching_aspect_keeps_everything() {
        assert_eq!(
            CropRect::centered_aspect(640, 480, 4, 3),
            CropRect::full(640, 480)
        );
    }

    #[test]
    fn test_crop_is_centered_within_one_pixel() {
        for (sw, sh, tw, th) in [(101, 50, 1, 1), (333, 777, 16, 9), (1, 1, 48, 48), (5, 1000, 3, 1)] {
            let c = CropRect::centered_aspect(sw, sh, tw, th);
            let left = c.x;
            let right = sw - c.x - c.width;
            let top = c.y;
            let bottom = sh - c.y - c.height;
            assert!(right.abs_diff(left) <= 1, "{sw}x{sh}: {left} vs {right}");
            assert!(bottom.abs_diff(top) <= 1, "{sw}x{sh}: {top} vs {bottom}");
            assert!(c.width >= 1 && c.height >= 1);
        }
    }

    #[test]
    fn test_extreme_aspect_never_empty() {
        // Target is far wider than a 1-pixel-wide source can supply.
        let c = CropRect::centered_aspect(1, 1000, 1000, 1);
        assert_eq!(c.width, 1);
        assert_eq!(c.height, 1);
        assert_eq!(c.y, 499);
    }

    #[test]
    fn test_square_crop() {
        assert_eq!(
            CropRect::centered_square(300, 200),
            CropRect {
                x: 50,
                y: 0,
                width: 200,
                height: 200
            }
        );
        assert_eq!(
            CropRect::centered_square(7, 10),
            CropRect {
                x: 0,
                y: 1,
                width: 7,
                height: 7
            }
        );
    }
}
