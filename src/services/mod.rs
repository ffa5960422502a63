pub mod histogram_report;
pub mod mosaic_service;

pub use histogram_report::{ColorCount, HistogramReport};
pub use mosaic_service::{fingerprint, GenerationResult, MosaicService};
