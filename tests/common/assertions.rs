//! Assertion helpers for tests.

use brickmosaic::services::HistogramReport;
use pretty_assertions::assert_eq;

/// Assert bytes are a PNG of the given size
pub fn assert_png_dimensions(bytes: &[u8], width: u32, height: u32) {
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G']),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
    let img = image::load_from_memory(bytes).unwrap();
    assert_eq!((img.width(), img.height()), (width, height));
}

/// Assert the report accounts for every cell exactly once
pub fn assert_conserved(report: &HistogramReport) {
    assert_eq!(report.total, (report.width * report.height) as usize);
    let counted: usize = report.colors.iter().map(|c| c.count).sum();
    assert_eq!(counted, report.total, "color counts must sum to the cell count");
    assert!(
        report.colors.windows(2).all(|w| w[0].count >= w[1].count),
        "colors must be sorted by descending count"
    );
}
