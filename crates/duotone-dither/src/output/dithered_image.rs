//! DitheredImage struct with raster output methods.
//!
//! [`DitheredImage`] wraps the per-pixel [`Tone`] decisions with dimension
//! metadata, the [`Palette`] used, and the alpha plane of the source. The
//! tone grid is canonical; colored output is computed on demand.

use crate::dither::StretchRange;
use crate::palette::{Palette, Tone};
use crate::raster::{PixelLayout, RasterImage};

/// The canonical output of the dithering pipeline.
///
/// Stores one [`Tone`] per pixel in row-major order. Output formats:
///
/// - [`tones()`](DitheredImage::tones): raw background/foreground decisions
/// - [`to_rgb()`](DitheredImage::to_rgb): `[R, G, B, ...]` bytes
/// - [`to_rgba()`](DitheredImage::to_rgba): `[R, G, B, A, ...]` bytes, with
///   the source alpha or 255
/// - [`to_raster()`](DitheredImage::to_raster): a [`RasterImage`] in the same
///   pixel layout as the source
///
/// # Example
///
/// ```
/// use duotone_dither::{DitheredImage, Palette, Tone};
///
/// let tones = vec![Tone::Background, Tone::Foreground];
/// let image = DitheredImage::new(tones, 2, 1, Palette::default(), None);
///
/// assert_eq!(image.to_rgb(), vec![255, 255, 255, 0, 0, 0]);
/// assert_eq!(image.count(Tone::Foreground), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DitheredImage {
    tones: Vec<Tone>,
    width: u32,
    height: u32,
    palette: Palette,
    alpha: Option<Vec<u8>>,
    stretch: Option<StretchRange>,
}

impl DitheredImage {
    /// Create a new `DitheredImage` from tone decisions.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `tones` (and `alpha`, if given) hold
    /// `width * height` entries.
    pub fn new(
        tones: Vec<Tone>,
        width: u32,
        height: u32,
        palette: Palette,
        alpha: Option<Vec<u8>>,
    ) -> Self {
        let len = width as usize * height as usize;
        debug_assert_eq!(
            tones.len(),
            len,
            "tones length ({}) must match width * height ({}x{}={})",
            tones.len(),
            width,
            height,
            len,
        );
        debug_assert!(alpha.as_ref().map_or(true, |a| a.len() == len));
        Self {
            tones,
            width,
            height,
            palette,
            alpha,
            stretch: None,
        }
    }

    pub(crate) fn with_stretch(mut self, stretch: Option<StretchRange>) -> Self {
        self.stretch = stretch;
        self
    }

    /// Tone decisions in row-major order.
    #[inline]
    pub fn tones(&self) -> &[Tone] {
        &self.tones
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The source alpha plane, if the source had one.
    #[inline]
    pub fn alpha(&self) -> Option<&[u8]> {
        self.alpha.as_deref()
    }

    /// The luminance range the contrast stretch used, if it ran.
    #[inline]
    pub fn stretch(&self) -> Option<StretchRange> {
        self.stretch
    }

    /// Tone at `(x, y)`.
    #[inline]
    pub fn tone(&self, x: u32, y: u32) -> Tone {
        self.tones[y as usize * self.width as usize + x as usize]
    }

    /// Number of pixels with the given tone.
    pub fn count(&self, tone: Tone) -> usize {
        self.tones.iter().filter(|&&t| t == tone).count()
    }

    /// Palette indices in row-major order (background = 0, foreground = 1).
    pub fn indices(&self) -> Vec<u8> {
        self.tones.iter().map(|t| t.index()).collect()
    }

    /// Convert to `[R, G, B, ...]` bytes. Length is `width * height * 3`.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.tones.len() * 3);
        for &tone in &self.tones {
            rgb.extend_from_slice(&self.palette.color(tone).to_bytes());
        }
        rgb
    }

    /// Convert to `[R, G, B, A, ...]` bytes. Alpha comes from the source,
    /// or is 255 when the source had none.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.tones.len() * 4);
        for (i, &tone) in self.tones.iter().enumerate() {
            let [r, g, b] = self.palette.color(tone).to_bytes();
            let a = self.alpha.as_ref().map_or(255, |alpha| alpha[i]);
            rgba.extend_from_slice(&[r, g, b, a]);
        }
        rgba
    }

    /// Render into a raster with the source's pixel layout.
    pub fn to_raster(&self) -> RasterImage {
        let (layout, data) = match self.alpha {
            Some(_) => (PixelLayout::Rgba, self.to_rgba()),
            None => (PixelLayout::Rgb, self.to_rgb()),
        };
        RasterImage::from_parts(self.width, self.height, layout, data)
    }

    /// Place this image onto a larger canvas filled with background.
    ///
    /// `(x, y)` is the top-left corner of this image on the canvas. Parts
    /// that fall outside the canvas are cropped. The result is opaque.
    pub fn embed(&self, canvas_width: u32, canvas_height: u32, x: u32, y: u32) -> DitheredImage {
        let mut tones = vec![Tone::Background; canvas_width as usize * canvas_height as usize];
        let cw = canvas_width as usize;
        for row in 0..self.height {
            let cy = y + row;
            if cy >= canvas_height {
                break;
            }
            for col in 0..self.width {
                let cx = x + col;
                if cx >= canvas_width {
                    break;
                }
                tones[cy as usize * cw + cx as usize] = self.tone(col, row);
            }
        }
        DitheredImage::new(tones, canvas_width, canvas_height, self.palette, None)
            .with_stretch(self.stretch)
    }
}
