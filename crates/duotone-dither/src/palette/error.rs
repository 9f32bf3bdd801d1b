//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette resolution.

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// A character other than `0-9`, `a-f` or `A-F` was found
    #[error("invalid hex character: {0:?}")]
    InvalidHex(char),
}

/// Error type for palette resolution.
///
/// A palette needs both roles filled. The caller checks this before any
/// dithering starts; an unresolved palette means the dither never runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// No color was available for the given role
    #[error("{role} color is missing")]
    MissingColor {
        /// `"background"` or `"foreground"`
        role: &'static str,
    },
    /// The color for the given role could not be parsed
    #[error("{role} color {value:?} is invalid: {source}")]
    ParseColor {
        /// `"background"` or `"foreground"`
        role: &'static str,
        /// The raw value that failed to parse
        value: String,
        /// Underlying parse failure
        #[source]
        source: ParseColorError,
    },
}

impl PaletteError {
    /// The palette role that failed to resolve.
    pub fn role(&self) -> &'static str {
        match self {
            PaletteError::MissingColor { role } | PaletteError::ParseColor { role, .. } => role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_error_display() {
        assert_eq!(
            ParseColorError::InvalidLength.to_string(),
            "invalid hex color length (expected 3 or 6 characters)"
        );
        assert_eq!(
            ParseColorError::InvalidHex('+').to_string(),
            "invalid hex character: '+'"
        );
    }

    #[test]
    fn test_missing_color_display() {
        let err = PaletteError::MissingColor { role: "foreground" };
        assert_eq!(err.to_string(), "foreground color is missing");
        assert_eq!(err.role(), "foreground");
    }

    #[test]
    fn test_parse_color_keeps_source() {
        use std::error::Error;

        let err = PaletteError::ParseColor {
            role: "background",
            value: "#12".to_string(),
            source: ParseColorError::InvalidLength,
        };
        assert_eq!(
            err.to_string(),
            "background color \"#12\" is invalid: invalid hex color length (expected 3 or 6 characters)"
        );
        assert!(err.source().is_some());
    }
}
