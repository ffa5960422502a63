//! Color usage counts.

use std::collections::HashMap;

use crate::color::Rgb;

use super::grid::{Cell, Mosaic, BACKGROUND_NAME};

/// How often one color name occurs in a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorUsage {
    /// Catalog name
    pub name: String,
    /// Color of the first catalog entry with this name that was used
    pub rgb: Rgb,
    /// Number of cells
    pub count: usize,
}

/// Color name → cell count over a [`Mosaic`].
///
/// Catalog entries with the same name are merged. Background cells are
/// counted under the catalog white they resolve to and also tallied
/// separately, so [`total`](Self::total) always equals `width × height`.
/// Without a catalog white they get their own `White` / `#FFFFFF` usage,
/// kept apart from any catalog entry that happens to share the name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UsageHistogram {
    usages: Vec<ColorUsage>,
    background: usize,
    total: usize,
}

impl UsageHistogram {
    /// Count the cells of `mosaic`.
    pub fn from_mosaic(mosaic: &Mosaic) -> Self {
        let palette = mosaic.palette();
        let mut per_entry = vec![0usize; palette.len()];
        let mut background = 0;
        let mut orphan_background = 0;

        for &cell in mosaic.cells() {
            match cell {
                Cell::Color(i) => per_entry[i] += 1,
                Cell::Background => {
                    background += 1;
                    match palette.white_index() {
                        Some(w) => per_entry[w] += 1,
                        None => orphan_background += 1,
                    }
                }
            }
        }

        let mut usages: Vec<ColorUsage> = Vec::new();
        let mut by_name: HashMap<&str, usize> = HashMap::new();
        for (entry, count) in palette.iter().zip(per_entry) {
            if count == 0 {
                continue;
            }
            match by_name.get(entry.name()) {
                Some(&pos) => usages[pos].count += count,
                None => {
                    by_name.insert(entry.name(), usages.len());
                    usages.push(ColorUsage {
                        name: entry.name().to_string(),
                        rgb: entry.rgb(),
                        count,
                    });
                }
            }
        }
        // Never merged by name: a catalog entry may be called "White"
        // without being #FFFFFF.
        if orphan_background > 0 {
            usages.push(ColorUsage {
                name: BACKGROUND_NAME.to_string(),
                rgb: Rgb::WHITE,
                count: orphan_background,
            });
        }

        Self {
            usages,
            background,
            total: mosaic.cells().len(),
        }
    }

    /// Cells counted for `name` (0 if unused), over every usage with that
    /// name.
    pub fn count(&self, name: &str) -> usize {
        self.usages
            .iter()
            .filter(|u| u.name == name)
            .map(|u| u.count)
            .sum()
    }

    /// Number of background cells.
    #[inline]
    pub fn background(&self) -> usize {
        self.background
    }

    /// Number of cells that went through matching.
    #[inline]
    pub fn foreground_total(&self) -> usize {
        self.total - self.background
    }

    /// Total number of cells, background included.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct color names used.
    #[inline]
    pub fn len(&self) -> usize {
        self.usages.len()
    }

    /// True for an empty grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.usages.is_empty()
    }

    /// Usages in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, ColorUsage> {
        self.usages.iter()
    }

    /// Usages by descending count, ties in catalog order.
    pub fn by_count(&self) -> Vec<&ColorUsage> {
        let mut sorted: Vec<&ColorUsage> = self.usages.iter().collect();
        // stable sort keeps catalog order among equal counts
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }
}

impl<'a> IntoIterator for &'a UsageHistogram {
    type Item = &'a ColorUsage;
    type IntoIter = std::slice::Iter<'a, ColorUsage>;

    fn into_iter(self) -> Self::IntoIter {
        self.usages.iter()
    }
}
