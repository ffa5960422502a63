//! The color catalog.
//!
//! A [`Palette`] is an ordered, non-empty list of named colors. Order matters
//! only for tie-breaking during matching (the first entry wins). Names need
//! not be unique and neither do triples: `Cyan` and `Aqua` may both be
//! `(0, 255, 255)`.

use super::error::PaletteError;
use super::family::ColorFamily;
use crate::color::{Lab, Rgb, WorkingColor};

/// One named catalog color.
///
/// The Lab value is computed once at construction and cached for matching.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    name: String,
    rgb: Rgb,
    family: ColorFamily,
    lab: Lab,
}

impl PaletteEntry {
    /// Create an entry whose family is derived from its channels
    /// (see [`ColorFamily::from_rgb`]).
    pub fn new(name: impl Into<String>, rgb: Rgb) -> Self {
        Self::with_family(name, rgb, ColorFamily::from_rgb(rgb))
    }

    /// Create an entry with an explicit family.
    pub fn with_family(name: impl Into<String>, rgb: Rgb, family: ColorFamily) -> Self {
        Self {
            name: name.into(),
            rgb,
            family,
            lab: Lab::from(rgb),
        }
    }

    /// Entry name, e.g. `"Forest_Green"`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entry color.
    #[inline]
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Hue family assigned at construction.
    #[inline]
    pub fn family(&self) -> ColorFamily {
        self.family
    }

    /// Cached Lab value of [`rgb`](Self::rgb).
    #[inline]
    pub fn lab(&self) -> Lab {
        self.lab
    }

    /// The entry color as a working color.
    #[inline]
    pub fn working(&self) -> WorkingColor {
        WorkingColor::from(self.rgb)
    }
}

/// An immutable, ordered catalog of named colors.
///
/// `Palette` is `Send + Sync`; one instance can back any number of
/// concurrent generations.
///
/// # Example
///
/// ```
/// use mosaic_core::{Palette, PaletteEntry, Rgb};
///
/// let palette = Palette::new(vec![
///     PaletteEntry::new("Black", Rgb::BLACK),
///     PaletteEntry::new("White", Rgb::WHITE),
/// ])
/// .unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.names(), vec!["Black", "White"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    white: Option<usize>,
}

impl Palette {
    /// Build a catalog from entries.
    ///
    /// # Errors
    ///
    /// [`PaletteError::EmptyPalette`] if `entries` yields nothing.
    pub fn new(entries: impl IntoIterator<Item = PaletteEntry>) -> Result<Self, PaletteError> {
        let entries: Vec<PaletteEntry> = entries.into_iter().collect();
        if entries.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let white = entries.iter().position(|e| e.rgb == Rgb::WHITE);
        Ok(Self { entries, white })
    }

    /// Build a catalog from unvalidated integer channels.
    ///
    /// Entries without a family get one from [`ColorFamily::from_rgb`].
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `entries` yields nothing
    /// - [`PaletteError::ChannelOutOfRange`] for the first channel outside
    ///   0..=255
    pub fn from_channels<I, S>(entries: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = (S, [i64; 3], Option<ColorFamily>)>,
        S: Into<String>,
    {
        let mut built = Vec::new();
        for (index, (name, channels, family)) in entries.into_iter().enumerate() {
            let name = name.into();
            let mut bytes = [0u8; 3];
            for (byte, &value) in bytes.iter_mut().zip(channels.iter()) {
                *byte = u8::try_from(value).map_err(|_| PaletteError::ChannelOutOfRange {
                    index,
                    name: name.clone(),
                    value,
                })?;
            }
            let rgb = Rgb::from_bytes(bytes);
            let family = family.unwrap_or_else(|| ColorFamily::from_rgb(rgb));
            built.push(PaletteEntry::with_family(name, rgb, family));
        }
        Self::new(built)
    }

    /// Build a catalog from `(name, hex)` pairs, deriving families.
    ///
    /// # Example
    ///
    /// ```
    /// use mosaic_core::Palette;
    ///
    /// let palette = Palette::from_hex(&[("Black", "#000"), ("Red", "#FF0000")]).unwrap();
    /// assert_eq!(palette.len(), 2);
    /// ```
    pub fn from_hex(entries: &[(&str, &str)]) -> Result<Self, PaletteError> {
        let parsed = entries
            .iter()
            .map(|(name, hex)| -> Result<PaletteEntry, PaletteError> {
                Ok(PaletteEntry::new(*name, hex.parse::<Rgb>()?))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(parsed)
    }

    /// Number of entries (always at least one).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; present for API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&PaletteEntry> {
        self.entries.get(index)
    }

    /// All entries in catalog order.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Iterate over entries in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }

    /// Entry names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name()).collect()
    }

    /// Index of the first pure white `(255, 255, 255)` entry.
    #[inline]
    pub fn white_index(&self) -> Option<usize> {
        self.white
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
