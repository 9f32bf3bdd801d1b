//! 8-bit RGB color type
//!
//! Palette colors arrive as hex strings from theme configuration and are
//! written verbatim into the output raster, so they stay as raw bytes.
//! No gamma handling happens here: luminance is computed directly on the
//! encoded channel values.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// Luminance weights in per-mille. They sum to exactly 1000 so a neutral
/// grey `(v, v, v)` maps to luminance `v` without rounding drift.
const LUMA_R: u32 = 299;
const LUMA_G: u32 = 587;
const LUMA_B: u32 = 114;

/// A color with three 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    ///
    /// # Example
    /// ```
    /// use duotone_dither::Rgb;
    /// let white = Rgb::from_bytes([255, 255, 255]);
    /// assert_eq!(white, Rgb::WHITE);
    /// ```
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Perceived brightness, `0.299 R + 0.587 G + 0.114 B`, in `0.0..=255.0`.
    ///
    /// # Example
    /// ```
    /// use duotone_dither::Rgb;
    /// assert_eq!(Rgb::new(128, 128, 128).luminance(), 128.0);
    /// assert_eq!(Rgb::WHITE.luminance(), 255.0);
    /// ```
    #[inline]
    pub fn luminance(self) -> f32 {
        let weighted = LUMA_R * self.r as u32 + LUMA_G * self.g as u32 + LUMA_B * self.b as u32;
        weighted as f32 / 1000.0
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for Rgb {
    /// Formats as lowercase `#rrggbb`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` - standard 6-digit hex with hash
    /// - `RRGGBB` - standard 6-digit hex without hash
    /// - `#RGB` - shorthand 3-digit hex with hash (expands to RRGGBB)
    /// - `RGB` - shorthand 3-digit hex without hash
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed,
    /// which matters for values read out of stylesheet variables.
    ///
    /// # Examples
    ///
    /// ```
    /// use duotone_dither::Rgb;
    ///
    /// let bg: Rgb = " #1E1E1E ".parse().unwrap();
    /// assert_eq!(bg, Rgb::new(0x1e, 0x1e, 0x1e));
    ///
    /// let red: Rgb = "#F00".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }
        let digits = s
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8).ok_or(ParseColorError::InvalidHex(c)))
            .collect::<Result<Vec<u8>, _>>();

        match s.len() {
            // Shorthand: each digit is doubled (0xF -> 0xFF)
            3 => {
                let d = digits?;
                Ok(Self::new(d[0] * 17, d[1] * 17, d[2] * 17))
            }
            6 => {
                let d = digits?;
                Ok(Self::new(d[0] << 4 | d[1], d[2] << 4 | d[3], d[4] << 4 | d[5]))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_weights() {
        assert_eq!(Rgb::BLACK.luminance(), 0.0);
        assert_eq!(Rgb::WHITE.luminance(), 255.0);
        assert!((Rgb::new(255, 0, 0).luminance() - 76.245).abs() < 1e-3);
        assert!((Rgb::new(0, 255, 0).luminance() - 149.685).abs() < 1e-3);
        assert!((Rgb::new(0, 0, 255).luminance() - 29.07).abs() < 1e-3);
    }

    #[test]
    fn test_grey_luminance_is_exact() {
        for v in 0..=255u8 {
            assert_eq!(Rgb::new(v, v, v).luminance(), v as f32, "grey {v}");
        }
    }

    #[test]
    fn test_parse_six_digit() {
        let c: Rgb = "#d4d4d4".parse().unwrap();
        assert_eq!(c, Rgb::new(0xd4, 0xd4, 0xd4));

        let c: Rgb = "A0B1C2".parse().unwrap();
        assert_eq!(c, Rgb::new(0xa0, 0xb1, 0xc2));
    }

    #[test]
    fn test_parse_shorthand() {
        let c: Rgb = "#abc".parse().unwrap();
        assert_eq!(c, Rgb::new(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn test_parse_invalid_length() {
        assert_eq!(
            "#12345".parse::<Rgb>().unwrap_err(),
            ParseColorError::InvalidLength
        );
        assert_eq!("".parse::<Rgb>().unwrap_err(), ParseColorError::InvalidLength);
        assert_eq!(
            "#ééé".parse::<Rgb>().unwrap_err(),
            ParseColorError::InvalidLength
        );
    }

    #[test]
    fn test_parse_invalid_hex() {
        assert_eq!(
            "#GG0000".parse::<Rgb>().unwrap_err(),
            ParseColorError::InvalidHex('G')
        );
        // Sign characters are not hex digits
        for (input, bad) in [("#+f+f+f", '+'), ("+1+2+3", '+'), ("+ff", '+'), ("-1-2-3", '-')] {
            assert_eq!(
                input.parse::<Rgb>().unwrap_err(),
                ParseColorError::InvalidHex(bad),
                "{input}"
            );
        }
    }

    #[test]
    fn test_display_formats_lowercase_hex() {
        assert_eq!(Rgb::new(0x1e, 0xAB, 0x00).to_string(), "#1eab00");
        let back: Rgb = Rgb::new(12, 34, 56).to_string().parse().unwrap();
        assert_eq!(back, Rgb::new(12, 34, 56));
    }
}
