//! Interleaved 8-bit raster storage.

use crate::api::DitherError;
use crate::color::Rgb;

/// Byte layout of one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// `[R, G, B]`
    Rgb,
    /// `[R, G, B, A]`. Alpha is carried through dithering untouched.
    Rgba,
}

impl PixelLayout {
    /// Bytes per pixel.
    #[inline]
    pub const fn channels(self) -> usize {
        match self {
            PixelLayout::Rgb => 3,
            PixelLayout::Rgba => 4,
        }
    }

    /// Whether the layout carries an alpha channel.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self, PixelLayout::Rgba)
    }
}

/// A decoded raster image: `width * height` pixels in row-major order.
///
/// Construction checks that the buffer length matches the dimensions.
/// Zero dimensions are accepted here and rejected when dithering, so a
/// loader can hand over whatever it decoded and the engine decides.
///
/// # Example
///
/// ```
/// use duotone_dither::{PixelLayout, RasterImage, Rgb};
///
/// let image = RasterImage::new(2, 1, PixelLayout::Rgb, vec![255, 0, 0, 0, 0, 255]).unwrap();
/// assert_eq!(image.pixel(0, 0), Rgb::new(255, 0, 0));
/// assert_eq!(image.pixel(1, 0), Rgb::new(0, 0, 255));
/// assert_eq!(image.alpha(1, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    layout: PixelLayout,
    data: Vec<u8>,
}

impl RasterImage {
    /// Wrap an interleaved pixel buffer.
    ///
    /// Fails with [`DitherError::BufferSize`] when `data.len()` is not
    /// `width * height * layout.channels()`.
    pub fn new(
        width: u32,
        height: u32,
        layout: PixelLayout,
        data: Vec<u8>,
    ) -> Result<Self, DitherError> {
        let expected = width as usize * height as usize * layout.channels();
        if data.len() != expected {
            return Err(DitherError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            layout,
            data,
        })
    }

    /// Assemble an image whose buffer length is already known to match.
    pub(crate) fn from_parts(width: u32, height: u32, layout: PixelLayout, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * layout.channels());
        Self {
            width,
            height,
            layout,
            data,
        }
    }

    /// Wrap an `[R, G, B, ...]` buffer.
    pub fn from_rgb(width: u32, height: u32, data: Vec<u8>) -> Result<Self, DitherError> {
        Self::new(width, height, PixelLayout::Rgb, data)
    }

    /// Wrap an `[R, G, B, A, ...]` buffer.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, DitherError> {
        Self::new(width, height, PixelLayout::Rgba, data)
    }

    /// Build an opaque image from colors in row-major order.
    pub fn from_pixels(width: u32, height: u32, pixels: &[Rgb]) -> Result<Self, DitherError> {
        let data = pixels.iter().flat_map(|c| c.to_bytes()).collect();
        Self::from_rgb(width, height, data)
    }

    /// An opaque image filled with one color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        let data = color.to_bytes().repeat(width as usize * height as usize);
        Self::from_parts(width, height, PixelLayout::Rgb, data)
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
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True when either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The raw interleaved bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// RGB of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the image.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let offset = self.offset(x, y);
        Rgb::new(
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        )
    }

    /// Alpha of the pixel at `(x, y)`, if the layout has one.
    #[inline]
    pub fn alpha(&self, x: u32, y: u32) -> Option<u8> {
        self.layout
            .has_alpha()
            .then(|| self.data[self.offset(x, y) + 3])
    }

    /// Iterate over pixel colors in row-major order, ignoring alpha.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.data
            .chunks_exact(self.layout.channels())
            .map(|px| Rgb::new(px[0], px[1], px[2]))
    }

    /// The alpha plane in row-major order, if the layout has one.
    pub fn alpha_plane(&self) -> Option<Vec<u8>> {
        self.layout.has_alpha().then(|| {
            self.data
                .chunks_exact(4)
                .map(|px| px[3])
                .collect()
        })
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * self.layout.channels()
    }
}
