//! Unified error type for the duotone-dither public API.
//!
//! Every variant of [`DitherError`] is an invalid-input failure. It is
//! raised before any dithering pass runs, so there is never partial output.

use thiserror::Error;

use crate::palette::PaletteError;

/// Invalid input to the ditherer.
///
/// # Example
///
/// ```
/// use duotone_dither::{DitherError, Palette};
///
/// fn theme_palette() -> Result<Palette, DitherError> {
///     let palette = Palette::from_hex("#1e1e1e", "#d4d4d4")?;
///     Ok(palette)
/// }
/// # theme_palette().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DitherError {
    /// Width or height is zero
    #[error("invalid input: image dimensions must be positive, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    /// Pixel buffer length does not match the dimensions
    #[error("invalid input: pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    /// Palette color missing or unparseable
    #[error("invalid input: {0}")]
    Palette(#[from] PaletteError),
}
