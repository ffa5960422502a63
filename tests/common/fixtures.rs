//! Test fixtures: synthesized source images and palette files.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

/// Palette with a single chromatic entry, written in both color forms
pub const BRICK_PALETTE: &str = r##"
colors:
  - { name: Black, rgb: [0, 0, 0], family: neutral }
  - { name: White, hex: "#FFFFFF", family: neutral }
  - { name: Brick_Red, hex: "#B40000", family: red }
"##;

/// Config that renders small, fast PNGs
pub const SMALL_CONFIG: &str = r#"
generation:
  width: 12
  height: 8
render:
  cell_size: 4
  optimize: false
"#;

/// Smooth color ramp, never near-white
pub fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 220 / width.max(1)) as u8,
            (y * 220 / height.max(1)) as u8,
            ((x + y) * 110 / (width + height).max(1)) as u8,
        ])
    })
}

/// Left half `left`, right half `right`
pub fn split(width: u32, height: u32, left: [u8; 3], right: [u8; 3]) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb(left)
        } else {
            Rgb(right)
        }
    })
}

pub fn encode(img: &RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img.clone())
        .write_to(&mut buf, format)
        .unwrap();
    buf.into_inner()
}

/// Write `img` as PNG into `dir`
pub fn write_png(dir: &Path, name: &str, img: &RgbImage) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, encode(img, ImageFormat::Png)).unwrap();
    path
}

/// Write a text file into `dir`
pub fn write_text(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
