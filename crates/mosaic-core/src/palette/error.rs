//! Error types for palette operations
//!
//! This module provides error types for color parsing and catalog validation.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
    /// A character that is not an ASCII hex digit
    InvalidCharacter(char),
    /// Unknown color family name
    UnknownFamily(String),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 characters)")
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
            ParseColorError::InvalidCharacter(c) => {
                write!(f, "invalid hex character {:?}", c)
            }
            ParseColorError::UnknownFamily(name) => {
                write!(f, "unknown color family '{}'", name)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for catalog validation.
///
/// Catalog construction is all-or-nothing: any of these leaves no palette.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// No colors provided
    EmptyPalette,
    /// A channel value outside 0..=255
    ChannelOutOfRange {
        /// Index of the offending entry
        index: usize,
        /// Name of the offending entry
        name: String,
        /// The rejected value
        value: i64,
    },
    /// Invalid hex color string
    ParseColor(ParseColorError),
}

impl From<ParseColorError> for PaletteError {
    fn from(err: ParseColorError) -> Self {
        PaletteError::ParseColor(err)
    }
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => {
                write!(f, "palette cannot be empty")
            }
            PaletteError::ChannelOutOfRange { index, name, value } => {
                write!(
                    f,
                    "color '{}' at index {} has channel value {} outside 0..=255",
                    name, index, value
                )
            }
            PaletteError::ParseColor(err) => {
                write!(f, "invalid color: {}", err)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor(err) => Some(err),
            _ => None,
        }
    }
}
