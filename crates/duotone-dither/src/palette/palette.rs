//! Two-color palette and the tones that index it.

use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Rgb;

/// Which palette role a dithered pixel takes.
///
/// Luminance above the threshold quantizes to white and takes the
/// background color; everything else quantizes to black and takes the
/// foreground color. The page draws dark ink on a light page or light ink
/// on a dark page, so "white" always means "page".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tone {
    /// Quantized gray level 255.
    Background = 0,
    /// Quantized gray level 0.
    Foreground = 1,
}

impl Tone {
    /// The gray level this tone quantizes to.
    #[inline]
    pub fn level(self) -> f32 {
        match self {
            Tone::Background => 255.0,
            Tone::Foreground => 0.0,
        }
    }

    /// Palette index of this tone (background = 0, foreground = 1).
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// The two-color output alphabet of the ditherer.
///
/// Every output pixel takes one of these colors verbatim.
///
/// # Example
///
/// ```
/// use duotone_dither::{Palette, Rgb, Tone};
///
/// let palette = Palette::from_hex("#1e1e1e", "#d4d4d4").unwrap();
/// assert_eq!(palette.color(Tone::Background), Rgb::new(0x1e, 0x1e, 0x1e));
/// assert_eq!(palette.color(Tone::Foreground), Rgb::new(0xd4, 0xd4, 0xd4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    /// Color for pixels quantized to white.
    pub background: Rgb,
    /// Color for pixels quantized to black.
    pub foreground: Rgb,
}

impl Palette {
    /// Create a palette from two colors.
    #[inline]
    pub const fn new(background: Rgb, foreground: Rgb) -> Self {
        Self {
            background,
            foreground,
        }
    }

    /// Parse a palette from two hex strings.
    ///
    /// The error names the role whose color failed to parse.
    pub fn from_hex(background: &str, foreground: &str) -> Result<Self, PaletteError> {
        Ok(Self::new(
            parse_role("background", background)?,
            parse_role("foreground", foreground)?,
        ))
    }

    /// Resolve a palette from optional hex strings, as read from a theme.
    ///
    /// A missing role yields [`PaletteError::MissingColor`].
    pub fn resolve(
        background: Option<&str>,
        foreground: Option<&str>,
    ) -> Result<Self, PaletteError> {
        let background = background.ok_or(PaletteError::MissingColor { role: "background" })?;
        let foreground = foreground.ok_or(PaletteError::MissingColor { role: "foreground" })?;
        Self::from_hex(background, foreground)
    }

    /// The color for a tone.
    #[inline]
    pub fn color(&self, tone: Tone) -> Rgb {
        match tone {
            Tone::Background => self.background,
            Tone::Foreground => self.foreground,
        }
    }

    /// True when both roles share one color; every output is then uniform.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.background == self.foreground
    }
}

impl Default for Palette {
    /// Black ink on a white page.
    fn default() -> Self {
        Self::new(Rgb::WHITE, Rgb::BLACK)
    }
}

fn parse_role(role: &'static str, value: &str) -> Result<Rgb, PaletteError> {
    if value.trim().is_empty() {
        return Err(PaletteError::MissingColor { role });
    }
    Rgb::from_str(value).map_err(|source| PaletteError::ParseColor {
        role,
        value: value.to_string(),
        source,
    })
}
