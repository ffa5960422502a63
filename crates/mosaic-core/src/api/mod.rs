//! Public API for the mosaic-core crate.
//!
//! This module provides the high-level API: [`MosaicGenerator`] builder and
//! [`MosaicError`] unified error type.

mod builder;
mod error;

pub use builder::{MosaicGenerator, DEFAULT_BACKGROUND_THRESHOLD};
pub use error::MosaicError;
