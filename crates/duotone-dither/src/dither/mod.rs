//! Two-color error diffusion dithering.
//!
//! Dithering runs three passes over one image:
//!
//! 1. **Luminance extraction** into a scratch buffer owned by the call.
//! 2. **Contrast stretching** of that buffer to `0..=255`, with near-white
//!    padding left out of the min/max scan.
//! 3. **Floyd-Steinberg diffusion** in row-major order, quantizing each
//!    value to background or foreground and pushing the gray-level error
//!    into unvisited neighbors.
//!
//! The error is diffused in the gray domain only. Each pixel gets exactly
//! one palette color and the palette is applied after quantization, so
//! per-channel error would only reintroduce the hue of the source into a
//! decision that is binary anyway.
//!
//! # Example
//!
//! ```
//! use duotone_dither::{dither_with_options, DitherOptions, Palette, RasterImage, Rgb};
//!
//! let image = RasterImage::filled(4, 4, Rgb::new(200, 200, 200));
//! let result = dither_with_options(&image, Palette::default(), &DitherOptions::new()).unwrap();
//! assert_eq!(result.width(), 4);
//! ```

mod floyd_steinberg;
mod kernel;
mod luminance;
mod options;

pub use luminance::StretchRange;
pub use options::{DitherOptions, DEFAULT_PADDING_CUTOFF, DEFAULT_THRESHOLD};

use luminance::LuminanceBuffer;

use crate::api::DitherError;
use crate::output::DitheredImage;
use crate::palette::{Palette, Tone};
use crate::raster::RasterImage;

/// Dither `image` into `palette` with explicit options.
///
/// Input is validated before any pass runs. On success every pixel of the
/// result carries one of the two palette colors.
pub fn dither_with_options(
    image: &RasterImage,
    palette: Palette,
    options: &DitherOptions,
) -> Result<DitheredImage, DitherError> {
    validate(image)?;

    let mut buffer = LuminanceBuffer::from_image(image);

    let stretch = if options.contrast_stretch {
        buffer.stretch(options.padding_cutoff)
    } else {
        None
    };
    match stretch {
        Some(range) => tracing::debug!(
            min = range.min,
            max = range.max,
            "Stretched luminance range"
        ),
        None => tracing::debug!("Luminance left unstretched"),
    }

    let tones = floyd_steinberg::diffuse(buffer, options.threshold);

    let result = DitheredImage::new(
        tones,
        image.width(),
        image.height(),
        palette,
        image.alpha_plane(),
    )
    .with_stretch(stretch);

    tracing::debug!(
        width = result.width(),
        height = result.height(),
        background = result.count(Tone::Background),
        foreground = result.count(Tone::Foreground),
        "Dithered image"
    );

    Ok(result)
}

fn validate(image: &RasterImage) -> Result<(), DitherError> {
    if image.is_empty() {
        return Err(DitherError::EmptyImage {
            width: image.width(),
            height: image.height(),
        });
    }
    let expected = image.len() * image.layout().channels();
    if image.as_bytes().len() != expected {
        return Err(DitherError::BufferSize {
            expected,
            actual: image.as_bytes().len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_rejects_zero_width() {
        let image = RasterImage::from_rgb(0, 3, Vec::new()).unwrap();
        let err = dither_with_options(&image, Palette::default(), &DitherOptions::new())
            .unwrap_err();
        assert_eq!(err, DitherError::EmptyImage { width: 0, height: 3 });
    }

    #[test]
    fn test_rejects_zero_height() {
        let image = RasterImage::from_rgba(7, 0, Vec::new()).unwrap();
        assert!(matches!(
            dither_with_options(&image, Palette::default(), &DitherOptions::new()),
            Err(DitherError::EmptyImage { .. })
        ));
    }

    #[test]
    fn test_stretch_reported() {
        let image = RasterImage::from_pixels(
            2,
            1,
            &[Rgb::new(50, 50, 50), Rgb::new(150, 150, 150)],
        )
        .unwrap();
        let result = dither_with_options(&image, Palette::default(), &DitherOptions::new()).unwrap();
        assert_eq!(
            result.stretch(),
            Some(StretchRange {
                min: 50.0,
                max: 150.0
            })
        );
    }

    #[test]
    fn test_stretch_disabled() {
        // Without stretching, 100 stays below the threshold
        let image = RasterImage::filled(1, 1, Rgb::new(100, 100, 100));
        let options = DitherOptions::new().contrast_stretch(false);
        let result = dither_with_options(&image, Palette::default(), &options).unwrap();
        assert_eq!(result.stretch(), None);
        assert_eq!(result.tones(), &[Tone::Foreground]);
    }

    #[test]
    fn test_stretch_turns_light_gray_white() {
        // [60, 180] stretches to [0, 255]
        let image = RasterImage::from_pixels(
            2,
            1,
            &[Rgb::new(60, 60, 60), Rgb::new(180, 180, 180)],
        )
        .unwrap();
        let result = dither_with_options(&image, Palette::default(), &DitherOptions::new()).unwrap();
        assert_eq!(result.tones(), &[Tone::Foreground, Tone::Background]);
    }

    #[test]
    fn test_custom_threshold() {
        let image = RasterImage::filled(1, 1, Rgb::new(100, 100, 100));
        let options = DitherOptions::new().threshold(99.0);
        let result = dither_with_options(&image, Palette::default(), &options).unwrap();
        assert_eq!(result.tones(), &[Tone::Background]);
    }
}
