use std::path::Path;

use mosaic_core::{Mosaic, UsageHistogram};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JSON shape of a usage histogram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramReport {
    pub width: u32,
    pub height: u32,
    /// Always `width * height`
    pub total: usize,
    /// Cells that were near-white in the source (also counted under White)
    pub background: usize,
    pub fingerprint: String,
    /// Descending count, ties in catalog order
    pub colors: Vec<ColorCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorCount {
    pub name: String,
    pub hex: String,
    pub count: usize,
}

impl HistogramReport {
    pub fn new(mosaic: &Mosaic, histogram: &UsageHistogram, fingerprint: &str) -> Self {
        Self {
            width: mosaic.width(),
            height: mosaic.height(),
            total: histogram.total(),
            background: histogram.background(),
            fingerprint: fingerprint.to_string(),
            colors: histogram
                .by_count()
                .into_iter()
                .map(|usage| ColorCount {
                    name: usage.name.clone(),
                    hex: usage.rgb.to_hex(),
                    count: usage.count,
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write as pretty-printed JSON
    pub fn write_to(&self, path: &Path) -> Result<(), AppError> {
        let mut json = self.to_json()?;
        json.push('\n');
        std::fs::write(path, json)?;
        tracing::debug!(path = %path.display(), colors = self.colors.len(), "Wrote histogram");
        Ok(())
    }
}
