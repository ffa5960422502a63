use crate::assets::AssetLoader;
use crate::error::ConfigError;
use mosaic_core::{ColorFamily, MosaicError, Palette, Rgb};
use serde::Deserialize;

/// A color catalog as written in palette.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct PaletteFile {
    pub colors: Vec<PaletteColor>,
}

/// One catalog entry
#[derive(Debug, Deserialize, Clone)]
pub struct PaletteColor {
    pub name: String,

    /// `[r, g, b]` or `"#RRGGBB"`
    #[serde(alias = "hex")]
    pub rgb: ColorValue,

    /// Hue family; derived from the color when missing
    #[serde(default)]
    pub family: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ColorValue {
    /// Kept wide so out-of-range channels are reported by name, not as a
    /// YAML type error
    Channels([i64; 3]),
    Hex(String),
}

impl PaletteFile {
    /// Parse YAML text; `origin` is only used in error messages
    pub fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    /// Load the embedded or external palette
    pub fn load(loader: &AssetLoader) -> Result<Self, ConfigError> {
        let origin = loader.palette_source().to_string();
        let content = loader
            .read_palette_string()
            .map_err(|source| ConfigError::Read {
                path: origin.clone(),
                source,
            })?;
        Self::parse(&content, &origin)
    }

    /// Build the engine catalog, keeping file order
    pub fn to_palette(&self) -> Result<Palette, ConfigError> {
        let mut entries = Vec::with_capacity(self.colors.len());
        for (index, color) in self.colors.iter().enumerate() {
            let channels = match &color.rgb {
                ColorValue::Channels(c) => *c,
                ColorValue::Hex(hex) => {
                    let rgb: Rgb = hex.parse().map_err(|_| ConfigError::InvalidColor {
                        field: format!("colors[{index}] ({})", color.name),
                        value: hex.clone(),
                    })?;
                    rgb.to_bytes().map(i64::from)
                }
            };
            let family = match color.family.as_deref() {
                Some(f) => Some(f.parse::<ColorFamily>().map_err(|e| {
                    ConfigError::InvalidValue {
                        field: "family",
                        reason: format!("{} ({})", e, color.name),
                    }
                })?),
                None => None,
            };
            entries.push((color.name.clone(), channels, family));
        }

        Palette::from_channels(entries).map_err(|e| ConfigError::Palette(MosaicError::from(e)))
    }
}

/// Load and build the catalog in one step
pub fn load_palette(loader: &AssetLoader) -> Result<Palette, ConfigError> {
    let palette = PaletteFile::load(loader)?.to_palette()?;
    tracing::debug!(
        colors = palette.len(),
        source = %loader.palette_source(),
        "Loaded palette"
    );
    Ok(palette)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_palette_builds() {
        let palette = load_palette(&AssetLoader::default()).unwrap();
        assert!(palette.len() > 100);
        assert_eq!(palette.get(0).unwrap().name(), "Black");
        assert_eq!(palette.white_index(), Some(1));
        // Duplicate triples under different names are allowed
        assert!(palette.names().contains(&"Cyan"));
        assert!(palette.names().contains(&"Aqua"));
    }

    #[test]
    fn test_embedded_palette_families_are_explicit() {
        let file = PaletteFile::load(&AssetLoader::default()).unwrap();
        assert!(file.colors.iter().all(|c| c.family.is_some()));
        let palette = file.to_palette().unwrap();
        let forest = palette
            .iter()
            .find(|e| e.name() == "Forest_Green")
            .unwrap();
        assert_eq!(forest.family(), ColorFamily::Green);
    }

    #[test]
    fn test_hex_and_list_forms() {
        let file = PaletteFile::parse(
            r##"
colors:
  - { name: Ink, rgb: [10, 20, 30] }
  - { name: Paper, hex: "#F0E0D0", family: neutral }
"##,
            "test",
        )
        .unwrap();
        let palette = file.to_palette().unwrap();
        assert_eq!(palette.get(0).unwrap().rgb(), Rgb::new(10, 20, 30));
        assert_eq!(palette.get(1).unwrap().rgb(), Rgb::new(0xF0, 0xE0, 0xD0));
        assert_eq!(palette.get(1).unwrap().family(), ColorFamily::Neutral);
    }

    #[test]
    fn test_out_of_range_channel_is_named() {
        let file = PaletteFile::parse(
            "colors:\n  - { name: Hot, rgb: [256, 0, 0] }\n",
            "test",
        )
        .unwrap();
        let err = file.to_palette().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Hot"), "{message}");
        assert!(message.contains("256"), "{message}");
    }

    #[test]
    fn test_empty_palette_is_empty_catalog() {
        let file = PaletteFile::parse("colors: []\n", "test").unwrap();
        match file.to_palette().unwrap_err() {
            ConfigError::Palette(MosaicError::EmptyCatalog) => {}
            other => panic!("Expected EmptyCatalog, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_hex_and_family() {
        let file = PaletteFile::parse("colors:\n  - { name: X, rgb: \"#12\" }\n", "test").unwrap();
        assert!(matches!(
            file.to_palette().unwrap_err(),
            ConfigError::InvalidColor { .. }
        ));

        let file = PaletteFile::parse(
            "colors:\n  - { name: X, rgb: [1, 2, 3], family: teal }\n",
            "test",
        )
        .unwrap();
        assert!(matches!(
            file.to_palette().unwrap_err(),
            ConfigError::InvalidValue { field: "family", .. }
        ));
    }

    #[test]
    fn test_non_ascii_hex_is_invalid_color() {
        let file = PaletteFile::parse(
            "colors:\n  - { name: Ok, hex: \"#010203\" }\n  - { name: Accent, hex: \"#aé000\" }\n",
            "test",
        )
        .unwrap();
        match file.to_palette().unwrap_err() {
            ConfigError::InvalidColor { field, value } => {
                assert!(field.contains("colors[1]"), "{field}");
                assert!(field.contains("Accent"), "{field}");
                assert_eq!(value, "#aé000");
            }
            other => panic!("Expected InvalidColor, got {other:?}"),
        }
    }
}
