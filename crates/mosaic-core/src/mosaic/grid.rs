//! The generated brick grid.

use crate::api::MosaicError;
use crate::color::Rgb;
use crate::palette::Palette;

use super::histogram::UsageHistogram;

/// Name used for background cells when the catalog has no pure white entry.
pub const BACKGROUND_NAME: &str = "White";

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Matched to the catalog entry at this index
    Color(usize),
    /// Near-white source pixel, rendered as White without matching
    Background,
}

/// A cell resolved to a name and a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRef<'a> {
    /// Catalog name, or [`BACKGROUND_NAME`]
    pub name: &'a str,
    /// Color to render
    pub rgb: Rgb,
    /// Catalog index, if the color comes from the catalog
    pub index: Option<usize>,
}

/// A W×H grid of catalog colors.
///
/// Owns a copy of the catalog it was generated against so cells can be
/// resolved without the caller keeping the palette around.
///
/// # Example
///
/// ```
/// use mosaic_core::{Cell, Mosaic, Palette, Rgb};
///
/// let palette = Palette::from_hex(&[("Black", "#000000"), ("White", "#FFFFFF")]).unwrap();
/// let mosaic = Mosaic::new(vec![Cell::Color(0), Cell::Background], 2, 1, palette)?;
///
/// assert_eq!(mosaic.color_at(0, 0).name, "Black");
/// assert_eq!(mosaic.color_at(1, 0).rgb, Rgb::WHITE);
/// assert_eq!(mosaic.background_count(), 1);
/// # Ok::<(), mosaic_core::MosaicError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mosaic {
    cells: Vec<Cell>,
    width: u32,
    height: u32,
    palette: Palette,
}

impl Mosaic {
    /// Wrap quantized cells.
    ///
    /// # Errors
    ///
    /// [`MosaicError::GridMismatch`] unless `cells.len() == width * height`,
    /// [`MosaicError::CellOutOfRange`] if a [`Cell::Color`] index is past
    /// the end of `palette`.
    pub fn new(
        cells: Vec<Cell>,
        width: u32,
        height: u32,
        palette: Palette,
    ) -> Result<Self, MosaicError> {
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(MosaicError::GridMismatch {
                expected,
                actual: cells.len(),
            });
        }
        if let Some(index) = cells.iter().find_map(|c| match *c {
            Cell::Color(i) if i >= palette.len() => Some(i),
            _ => None,
        }) {
            return Err(MosaicError::CellOutOfRange {
                index,
                catalog_len: palette.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
            palette,
        })
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The catalog the grid was generated against.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// If `(x, y)` is outside the grid.
    #[inline]
    pub fn cell(&self, x: u32, y: u32) -> Cell {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) out of bounds");
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Resolve a cell to its name and color.
    ///
    /// Background cells resolve to the first pure white catalog entry, or to
    /// [`BACKGROUND_NAME`] / `#FFFFFF` if there is none.
    pub fn resolve(&self, cell: Cell) -> ColorRef<'_> {
        let index = match cell {
            Cell::Color(i) => Some(i),
            Cell::Background => self.palette.white_index(),
        };
        match index.and_then(|i| self.palette.get(i).map(|e| (i, e))) {
            Some((i, entry)) => ColorRef {
                name: entry.name(),
                rgb: entry.rgb(),
                index: Some(i),
            },
            None => ColorRef {
                name: BACKGROUND_NAME,
                rgb: Rgb::WHITE,
                index: None,
            },
        }
    }

    /// Resolved color at `(x, y)`.
    pub fn color_at(&self, x: u32, y: u32) -> ColorRef<'_> {
        self.resolve(self.cell(x, y))
    }

    /// Resolved colors in row-major order.
    pub fn colors(&self) -> impl Iterator<Item = ColorRef<'_>> + '_ {
        self.cells.iter().map(move |&c| self.resolve(c))
    }

    /// Resolved colors grouped by row.
    pub fn rows(&self) -> Vec<Vec<ColorRef<'_>>> {
        self.cells
            .chunks(self.width.max(1) as usize)
            .map(|row| row.iter().map(|&c| self.resolve(c)).collect())
            .collect()
    }

    /// Flat `[R, G, B, R, G, B, ...]` buffer, one triple per cell.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.cells.len() * 3);
        for color in self.colors() {
            rgb.extend_from_slice(&color.rgb.to_bytes());
        }
        rgb
    }

    /// Number of background cells.
    pub fn background_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, Cell::Background))
            .count()
    }

    /// Color usage counts over the whole grid.
    pub fn histogram(&self) -> UsageHistogram {
        UsageHistogram::from_mosaic(self)
    }
}
