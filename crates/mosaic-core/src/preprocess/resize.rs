//! Box-filter resampling of the crop window.
//!
//! The window is copied out of the source first, so pixels outside it never
//! bleed into the edge cells. Resampling itself is a box convolution via
//! `fast_image_resize`: whole-ratio shrinks average exact blocks, fractional
//! ratios average the source pixels under each output footprint, and
//! enlarging repeats pixels.

use fast_image_resize as fr;
use fr::images::Image;
use fr::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::{imageops, RgbImage};

use super::crop::CropRect;
use super::error::PreprocessError;
use crate::color::Rgb;

/// Resample the `crop` window of `source` to `width × height` pixels,
/// row-major.
///
/// `crop` must lie within `source`; `width` and `height` must be non-zero.
pub fn resize_box(
    source: &RgbImage,
    crop: CropRect,
    width: u32,
    height: u32,
) -> Result<Vec<Rgb>, PreprocessError> {
    let window = imageops::crop_imm(source, crop.x, crop.y, crop.width, crop.height).to_image();
    let src = Image::from_vec_u8(crop.width, crop.height, window.into_raw(), PixelType::U8x3)
        .map_err(|e| PreprocessError::UnreadableSource(format!("crop window: {e}")))?;
    let mut dst = Image::new(width, height, PixelType::U8x3);

    let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Box));
    Resizer::new()
        .resize(&src, &mut dst, &options)
        .map_err(|e| PreprocessError::UnreadableSource(format!("resampling: {e}")))?;

    Ok(dst
        .buffer()
        .chunks_exact(3)
        .map(|p| Rgb::new(p[0], p[1], p[2]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_from(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 3]) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| image::Rgb(f(x, y)))
    }

    fn assert_near(actual: Rgb, expected: Rgb) {
        let close = |a: u8, b: u8| a.abs_diff(b) <= 1;
        assert!(
            close(actual.r, expected.r) && close(actual.g, expected.g) && close(actual.b, expected.b),
            "{actual:?} is not within 1 of {expected:?}"
        );
    }

    #[test]
    fn test_identity_size_is_lossless() {
        let img = image_from(3, 2, |x, y| [(x * 50) as u8, (y * 100) as u8, 7]);
        let out = resize_box(&img, CropRect::full(3, 2), 3, 2).unwrap();
        assert_eq!(out.len(), 6);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(out[(y * 3 + x) as usize].to_bytes(), img.get_pixel(x, y).0);
            }
        }
    }

    #[test]
    fn test_halving_averages_blocks() {
        // 2x2 checker of black and white collapses to mid gray.
        let img = image_from(2, 2, |x, y| if (x + y) % 2 == 0 { [0, 0, 0] } else { [255, 255, 255] });
        let out = resize_box(&img, CropRect::full(2, 2), 1, 1).unwrap();
        assert_eq!(out.len(), 1);
        assert_near(out[0], Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_whole_ratio_shrink_averages_each_block() {
        // 4x2 of 2x2 blocks: [0 | 200] on top of [100 | 50] in the red channel.
        let img = image_from(4, 4, |x, y| match (x / 2, y / 2) {
            (0, 0) => [0, 0, 0],
            (1, 0) => [200, 0, 0],
            (0, 1) => [100, 0, 0],
            _ => [50, 0, 0],
        });
        let out = resize_box(&img, CropRect::full(4, 4), 2, 2).unwrap();
        assert_eq!(
            out,
            vec![
                Rgb::new(0, 0, 0),
                Rgb::new(200, 0, 0),
                Rgb::new(100, 0, 0),
                Rgb::new(50, 0, 0),
            ]
        );
    }

    #[test]
    fn test_fractional_ratio_stays_between_neighbors() {
        // 3 columns onto 2: the middle column lands under both footprints.
        let img = image_from(3, 1, |x, _| [[0, 0, 0], [90, 90, 90], [255, 255, 255]][x as usize]);
        let out = resize_box(&img, CropRect::full(3, 1), 2, 1).unwrap();
        assert_eq!(out.len(), 2);
        assert!(out[0].r <= 90, "{:?}", out[0]);
        assert!(out[1].r >= 90, "{:?}", out[1]);
        assert!(out[0].r < out[1].r);
        assert!(out.iter().all(|p| p.r == p.g && p.g == p.b));
    }

    #[test]
    fn test_upscale_single_pixel() {
        let img = image_from(1, 1, |_, _| [12, 34, 56]);
        let out = resize_box(&img, CropRect::full(1, 1), 5, 4).unwrap();
        assert_eq!(out.len(), 20);
        assert!(out.iter().all(|&p| p == Rgb::new(12, 34, 56)));
    }

    #[test]
    fn test_crop_window_respected() {
        // Left half red, right half blue; sample only the right half.
        let img = image_from(4, 2, |x, _| if x < 2 { [255, 0, 0] } else { [0, 0, 255] });
        let crop = CropRect {
            x: 2,
            y: 0,
            width: 2,
            height: 2,
        };
        let out = resize_box(&img, crop, 1, 1).unwrap();
        assert_eq!(out, vec![Rgb::new(0, 0, 255)]);
    }

    #[test]
    fn test_large_shrink_keeps_flat_color() {
        let img = image_from(1000, 733, |_, _| [17, 130, 244]);
        let out = resize_box(&img, CropRect::full(1000, 733), 48, 48).unwrap();
        assert_eq!(out.len(), 48 * 48);
        assert!(out.iter().all(|&p| p == Rgb::new(17, 130, 244)));
    }
}
