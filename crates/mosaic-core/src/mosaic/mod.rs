//! Generated output: the cell grid and its color usage.

mod grid;
mod histogram;

pub use grid::{Cell, ColorRef, Mosaic, BACKGROUND_NAME};
pub use histogram::{ColorUsage, UsageHistogram};
