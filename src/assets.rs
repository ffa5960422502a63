//! Asset loading with embedded fallbacks
//!
//! The default `config.yaml` and `palette.yaml` are compiled into the binary.
//!
//! - If no external path is configured: use the embedded asset (no filesystem access)
//! - If an external path IS configured: read it, and fail if it cannot be read
//!
//! A configured file that is missing is an error rather than a silent fallback,
//! so a typo in `--config` never produces a mosaic from the wrong settings.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded default config and palette
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "*.yaml"]
struct EmbeddedAssets;

pub const CONFIG_ASSET: &str = "config.yaml";
pub const PALETTE_ASSET: &str = "palette.yaml";

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Config,
    Palette,
}

impl AssetCategory {
    pub fn file_name(self) -> &'static str {
        match self {
            AssetCategory::Config => CONFIG_ASSET,
            AssetCategory::Palette => PALETTE_ASSET,
        }
    }
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Where an asset is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Embedded,
    File(PathBuf),
}

impl std::fmt::Display for AssetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetSource::Embedded => write!(f, "embedded"),
            AssetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Asset loader with optional filesystem override
#[derive(Debug, Clone, Default)]
pub struct AssetLoader {
    /// External config file (from --config or CONFIG_FILE)
    config_file: Option<PathBuf>,
    /// External palette file (from --palette, PALETTE_FILE or config.yaml)
    palette_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the user asked for an external file.
    /// If `None`, embedded assets are used exclusively.
    pub fn new(config_file: Option<PathBuf>, palette_file: Option<PathBuf>) -> Self {
        Self {
            config_file,
            palette_file,
        }
    }

    /// Same loader with a different palette file
    pub fn with_palette_file(mut self, palette_file: Option<PathBuf>) -> Self {
        if palette_file.is_some() {
            self.palette_file = palette_file;
        }
        self
    }

    pub fn config_source(&self) -> AssetSource {
        Self::source_of(self.config_file.as_deref())
    }

    pub fn palette_source(&self) -> AssetSource {
        Self::source_of(self.palette_file.as_deref())
    }

    fn source_of(path: Option<&Path>) -> AssetSource {
        match path {
            Some(p) => AssetSource::File(p.to_path_buf()),
            None => AssetSource::Embedded,
        }
    }

    /// Read the config file
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        Self::read_asset(self.config_file.as_deref(), CONFIG_ASSET)
    }

    /// Read the palette file
    pub fn read_palette(&self) -> io::Result<Cow<'static, [u8]>> {
        Self::read_asset(self.palette_file.as_deref(), PALETTE_ASSET)
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        Self::into_string(self.read_config()?)
    }

    /// Read palette as a UTF-8 string
    pub fn read_palette_string(&self) -> io::Result<String> {
        Self::into_string(self.read_palette()?)
    }

    fn into_string(bytes: Cow<'static, [u8]>) -> io::Result<String> {
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn read_asset(external: Option<&Path>, embedded: &str) -> io::Result<Cow<'static, [u8]>> {
        if let Some(path) = external {
            tracing::trace!(path = %path.display(), "Loading asset from filesystem");
            return Ok(Cow::Owned(fs::read(path)?));
        }

        EmbeddedAssets::get(embedded)
            .map(|f| {
                tracing::trace!(asset = embedded, "Loading asset from embedded data");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Embedded {embedded} not found"),
                )
            })
    }

    /// Extract embedded assets to filesystem (init command)
    ///
    /// Uses the configured paths, or `./config.yaml` and `./palette.yaml`.
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for &category in categories {
            let configured = match category {
                AssetCategory::Config => self.config_file.clone(),
                AssetCategory::Palette => self.palette_file.clone(),
            };
            let path = configured.unwrap_or_else(|| PathBuf::from(category.file_name()));

            if !force && path.exists() {
                report.skipped.push(path.display().to_string());
                continue;
            }
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            if let Some(data) = EmbeddedAssets::get(category.file_name()) {
                fs::write(&path, &*data.data)?;
                tracing::debug!(path = %path.display(), "Extracted embedded asset");
                report.written.push(path.display().to_string());
            }
        }

        Ok(report)
    }

    /// List embedded assets (for display)
    pub fn list_embedded() -> Vec<String> {
        let mut files: Vec<String> = EmbeddedAssets::iter().map(|s| s.to_string()).collect();
        files.sort();
        files
    }
}
