//! Ditherer builder -- the primary ergonomic entry point for the crate.
//!
//! [`Ditherer`] wraps the dithering passes with fluent configuration.

use crate::api::DitherError;
use crate::dither::{dither_with_options, DitherOptions};
use crate::output::DitheredImage;
use crate::palette::Palette;
use crate::raster::RasterImage;

/// High-level two-color ditherer.
///
/// # Design
///
/// - Constructor requires a [`Palette`] (no unresolved palette state)
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - [`dither()`](Self::dither) takes `&self` so the builder is **reusable**
///   across multiple images; no state survives between calls
///
/// # Example
///
/// ```
/// use duotone_dither::{Ditherer, Palette, RasterImage, Rgb};
///
/// let palette = Palette::from_hex("#1e1e1e", "#d4d4d4").unwrap();
/// let ditherer = Ditherer::new(palette);
///
/// let image = RasterImage::filled(2, 2, Rgb::new(128, 128, 128));
/// let result = ditherer.dither(&image).unwrap();
///
/// assert_eq!(result.width(), 2);
/// assert_eq!(result.height(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Ditherer {
    palette: Palette,
    options: DitherOptions,
}

impl Ditherer {
    /// Create a new ditherer with the given palette and default options.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            options: DitherOptions::default(),
        }
    }

    /// Replace all options at once.
    #[inline]
    pub fn options(mut self, options: DitherOptions) -> Self {
        self.options = options;
        self
    }

    /// Enable or disable contrast stretching.
    #[inline]
    pub fn contrast_stretch(mut self, enabled: bool) -> Self {
        self.options = self.options.contrast_stretch(enabled);
        self
    }

    /// Set the luminance at which pixels count as padding for the stretch.
    #[inline]
    pub fn padding_cutoff(mut self, cutoff: f32) -> Self {
        self.options = self.options.padding_cutoff(cutoff);
        self
    }

    /// Set the quantization threshold.
    #[inline]
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.options = self.options.threshold(threshold);
        self
    }

    /// The palette this ditherer writes.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Dither an image into a [`DitheredImage`].
    ///
    /// Fails with [`DitherError::EmptyImage`] when the image has a zero
    /// dimension.
    pub fn dither(&self, image: &RasterImage) -> Result<DitheredImage, DitherError> {
        dither_with_options(image, self.palette, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::palette::Tone;

    fn gradient_4x4() -> RasterImage {
        let pixels: Vec<Rgb> = (0..16)
            .map(|i| {
                let v = (i as f32 / 15.0 * 255.0) as u8;
                Rgb::new(v, v, v)
            })
            .collect();
        RasterImage::from_pixels(4, 4, &pixels).unwrap()
    }

    #[test]
    fn test_builder_is_reusable() {
        let ditherer = Ditherer::new(Palette::default());
        let image = gradient_4x4();

        let first = ditherer.dither(&image).unwrap();
        let second = ditherer.dither(&image).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_builder_applies_options() {
        let image = RasterImage::filled(1, 1, Rgb::new(100, 100, 100));

        let result = Ditherer::new(Palette::default())
            .contrast_stretch(false)
            .threshold(50.0)
            .dither(&image)
            .unwrap();
        assert_eq!(result.tones(), &[Tone::Background]);
    }

    #[test]
    fn test_gradient_ends() {
        let result = Ditherer::new(Palette::default())
            .dither(&gradient_4x4())
            .unwrap();
        assert_eq!(result.tone(0, 0), Tone::Foreground);
        assert_eq!(result.tones().len(), 16);
    }

    #[test]
    fn test_palette_accessor() {
        let palette = Palette::new(Rgb::new(1, 1, 1), Rgb::new(2, 2, 2));
        assert_eq!(Ditherer::new(palette).palette(), &palette);
    }
}
