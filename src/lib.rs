//! Brickmosaic - photos to brick mosaics
//!
//! Application layer around the `mosaic-core` engine: configuration and
//! palette files, PNG rendering and the generation service.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
