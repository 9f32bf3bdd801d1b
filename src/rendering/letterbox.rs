//! Fit a source image onto the fixed art canvas.
//!
//! The image keeps its aspect ratio, is centred, and is composited onto the
//! background color. Only the drawn region is dithered; the border is left
//! as plain background.

use duotone_dither::{DitherError, DitheredImage, Ditherer, RasterImage, Rgb};
use image::imageops::{self, FilterType};

use crate::models::CanvasConfig;

/// Position and size of the drawn image on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Scale `(image_width, image_height)` to fit the canvas, centred.
pub fn fit(image_width: u32, image_height: u32, canvas: CanvasConfig) -> Placement {
    let image_ratio = image_width as f64 / image_height as f64;
    let canvas_ratio = canvas.width as f64 / canvas.height as f64;

    let (width, height) = if image_ratio > canvas_ratio {
        (canvas.width as f64, canvas.width as f64 / image_ratio)
    } else {
        (canvas.height as f64 * image_ratio, canvas.height as f64)
    };
    let width = (width.round() as u32).clamp(1, canvas.width.max(1));
    let height = (height.round() as u32).clamp(1, canvas.height.max(1));

    Placement {
        x: canvas.width.saturating_sub(width) / 2,
        y: canvas.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Flatten alpha onto `background`, then resize to the placement size.
///
/// Compositing first keeps the color of fully transparent pixels out of
/// the interpolated result.
pub fn scale_onto_background(
    raster: &RasterImage,
    placement: Placement,
    background: Rgb,
) -> Result<RasterImage, DitherError> {
    let bg = background.to_bytes();
    let source = image::RgbImage::from_fn(raster.width(), raster.height(), |x, y| {
        let c = raster.pixel(x, y);
        let a = raster.alpha(x, y).unwrap_or(u8::MAX);
        image::Rgb([blend(c.r, bg[0], a), blend(c.g, bg[1], a), blend(c.b, bg[2], a)])
    });
    let scaled = if (source.width(), source.height()) == (placement.width, placement.height) {
        source
    } else {
        imageops::resize(&source, placement.width, placement.height, FilterType::Triangle)
    };

    RasterImage::from_rgb(placement.width, placement.height, scaled.into_raw())
}

/// `src` over `dst` with 8-bit coverage, rounded
fn blend(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((src as u32 * a + dst as u32 * (255 - a) + 127) / 255) as u8
}

/// Letterbox `image` onto the canvas and dither the drawn region.
pub fn letterbox(
    image: &RasterImage,
    canvas: CanvasConfig,
    ditherer: &Ditherer,
) -> Result<DitheredImage, DitherError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(DitherError::EmptyImage {
            width: image.width(),
            height: image.height(),
        });
    }
    if canvas.width == 0 || canvas.height == 0 {
        return Err(DitherError::EmptyImage {
            width: canvas.width,
            height: canvas.height,
        });
    }

    let placement = fit(image.width(), image.height(), canvas);
    tracing::debug!(
        source_width = image.width(),
        source_height = image.height(),
        x = placement.x,
        y = placement.y,
        width = placement.width,
        height = placement.height,
        "Letterboxing image"
    );

    let scaled = scale_onto_background(image, placement, ditherer.palette().background)?;
    let dithered = ditherer.dither(&scaled)?;
    Ok(dithered.embed(canvas.width, canvas.height, placement.x, placement.y))
}
