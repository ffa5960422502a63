//! Source decoding.
//!
//! Only PNG, JPEG, BMP and GIF are accepted. The format is sniffed from the
//! bytes, never trusted from a file name; a path additionally has to carry
//! one of the known extensions before it is read at all.

use std::path::Path;

use image::{ImageFormat, RgbImage};

use super::error::PreprocessError;

/// File extensions accepted by [`read_source`], lowercase.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

/// Decode encoded image bytes into 8-bit RGB.
///
/// Grayscale sources are expanded to three channels. Alpha is dropped, not
/// composited. For GIF only the first frame is used.
///
/// # Errors
///
/// - [`PreprocessError::UnsupportedFormat`] when the bytes are not one of
///   the four accepted formats
/// - [`PreprocessError::UnreadableSource`] when the bytes are empty, or look
///   like an accepted format but fail to decode
pub fn decode_image(bytes: &[u8]) -> Result<RgbImage, PreprocessError> {
    if bytes.is_empty() {
        return Err(PreprocessError::UnreadableSource("empty input".to_string()));
    }

    let format = image::guess_format(bytes).map_err(|_| {
        PreprocessError::UnsupportedFormat("unrecognized image data".to_string())
    })?;
    if !is_supported(format) {
        return Err(PreprocessError::UnsupportedFormat(format!("{:?}", format)));
    }

    let decoded = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| PreprocessError::UnreadableSource(e.to_string()))?;
    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(PreprocessError::UnreadableSource(
            "image has no pixels".to_string(),
        ));
    }

    Ok(decoded.to_rgb8())
}

/// Read a source file after checking its extension.
///
/// # Errors
///
/// - [`PreprocessError::UnsupportedFormat`] for a missing or unknown
///   extension (checked before touching the file)
/// - [`PreprocessError::UnreadableSource`] when the file cannot be read
pub fn read_source(path: &Path) -> Result<Vec<u8>, PreprocessError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(PreprocessError::UnsupportedFormat(format!(
            "{} (expected one of .png .jpg .jpeg .gif .bmp)",
            path.display()
        )));
    }

    std::fs::read(path)
        .map_err(|e| PreprocessError::UnreadableSource(format!("{}: {}", path.display(), e)))
}

fn is_supported(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Bmp | ImageFormat::Gif
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GrayImage, Luma, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encode(img: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, format).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let img = RgbImage::from_pixel(3, 2, image::Rgb([10, 20, 30]));
        let bytes = encode(DynamicImage::ImageRgb8(img), ImageFormat::Png);
        let decoded = decode_image(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(2, 1).0, [10, 20, 30]);
    }

    #[test]
    fn test_grayscale_expanded() {
        let img = GrayImage::from_pixel(2, 2, Luma([77]));
        let bytes = encode(DynamicImage::ImageLuma8(img), ImageFormat::Png);
        let decoded = decode_image(&bytes).unwrap();
        assert_eq!(decoded.get_pixel(0, 0).0, [77, 77, 77]);
    }

    #[test]
    fn test_alpha_dropped_not_composited() {
        // Fully transparent red stays red.
        let img = RgbaImage::from_pixel(1, 1, Rgba([255, 0, 0, 0]));
        let bytes = encode(DynamicImage::ImageRgba8(img), ImageFormat::Png);
        let decoded = decode_image(&bytes).unwrap();
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0]);
    }

    #[test]
    fn test_bmp_accepted() {
        let img = RgbImage::from_pixel(4, 4, image::Rgb([1, 2, 3]));
        let bytes = encode(DynamicImage::ImageRgb8(img), ImageFormat::Bmp);
        assert_eq!(decode_image(&bytes).unwrap().dimensions(), (4, 4));
    }

    #[test]
    fn test_unknown_bytes_unsupported() {
        let err = decode_image(b"definitely not an image").unwrap_err();
        assert!(matches!(err, PreprocessError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_known_but_disallowed_format_unsupported() {
        // TIFF magic (little endian)
        let err = decode_image(b"II*\0\x08\0\0\0\0\0").unwrap_err();
        assert!(matches!(err, PreprocessError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_truncated_png_unreadable() {
        let img = RgbImage::from_pixel(8, 8, image::Rgb([200, 100, 50]));
        let bytes = encode(DynamicImage::ImageRgb8(img), ImageFormat::Png);
        let err = decode_image(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, PreprocessError::UnreadableSource(_)));
    }

    #[test]
    fn test_empty_input_unreadable() {
        assert!(matches!(
            decode_image(&[]).unwrap_err(),
            PreprocessError::UnreadableSource(_)
        ));
    }

    #[test]
    fn test_path_extension_checked_first() {
        // The file does not exist; the extension check must fire first.
        let err = read_source(Path::new("/nonexistent/photo.tiff")).unwrap_err();
        assert!(matches!(err, PreprocessError::UnsupportedFormat(_)));

        let err = read_source(Path::new("/nonexistent/photo")).unwrap_err();
        assert!(matches!(err, PreprocessError::UnsupportedFormat(_)));

        let err = read_source(Path::new("/nonexistent/photo.JPG")).unwrap_err();
        assert!(matches!(err, PreprocessError::UnreadableSource(_)));
    }
}
