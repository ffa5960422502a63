//! Palette types and utilities
//!
//! The catalog of named colors, the hue families attached to each entry,
//! and the errors raised while building either.

mod error;
mod family;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use family::ColorFamily;
pub use palette::{Palette, PaletteEntry};
