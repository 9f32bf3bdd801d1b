//! Public API for the duotone-dither crate.
//!
//! This module provides the high-level API: the [`dither`] function,
//! the [`Ditherer`] builder, and the [`DitherError`] error type.

mod builder;
mod error;

pub use builder::Ditherer;
pub use error::DitherError;

use crate::palette::Palette;
use crate::raster::RasterImage;

/// Dither `image` into a raster where every pixel is one palette color.
///
/// Uses the default options. The result has the same dimensions and pixel
/// layout as the input; alpha, if present, is copied unchanged.
///
/// # Example
///
/// ```
/// use duotone_dither::{dither, Palette, RasterImage, Rgb};
///
/// let image = RasterImage::filled(3, 3, Rgb::new(128, 128, 128));
/// let palette = Palette::new(Rgb::new(245, 245, 245), Rgb::new(34, 34, 34));
///
/// let out = dither(&image, palette).unwrap();
/// assert!(out
///     .pixels()
///     .all(|c| c == palette.background || c == palette.foreground));
/// ```
pub fn dither(image: &RasterImage, palette: Palette) -> Result<RasterImage, DitherError> {
    Ok(Ditherer::new(palette).dither(image)?.to_raster())
}
