//! Per-pixel luminance scratch buffer.
//!
//! One buffer lives for exactly one dither call. The first pass fills it
//! from the source image, the stretch pass remaps it, and the diffusion
//! pass reads and adjusts it in place.

use crate::raster::RasterImage;

/// Luminance range used to normalize a buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StretchRange {
    /// Darkest luminance below the padding cutoff.
    pub min: f32,
    /// Brightest luminance below the padding cutoff.
    pub max: f32,
}

impl StretchRange {
    /// Width of the range.
    #[inline]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Map `value` so that `min -> 0` and `max -> 255`.
    #[inline]
    pub fn apply(&self, value: f32) -> f32 {
        (value - self.min) / self.span() * 255.0
    }
}

/// Row-major grid of `f32` luminance values.
#[derive(Debug, Clone)]
pub(crate) struct LuminanceBuffer {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl LuminanceBuffer {
    /// Extract luminance from every pixel of `image`, ignoring alpha.
    pub(crate) fn from_image(image: &RasterImage) -> Self {
        Self {
            width: image.width() as usize,
            height: image.height() as usize,
            values: image.pixels().map(|c| c.luminance()).collect(),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_values(width: usize, height: usize, values: Vec<f32>) -> Self {
        assert_eq!(values.len(), width * height);
        Self {
            width,
            height,
            values,
        }
    }

    #[inline]
    pub(crate) fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub(crate) fn height(&self) -> usize {
        self.height
    }

    #[cfg(test)]
    pub(crate) fn values(&self) -> &[f32] {
        &self.values
    }

    /// Scan for the min/max over values strictly below `cutoff`.
    ///
    /// Returns `None` when no range exists: every value was excluded, or
    /// all included values are equal.
    pub(crate) fn stretch_range(&self, cutoff: f32) -> Option<StretchRange> {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for &v in self.values.iter().filter(|&&v| v < cutoff) {
            min = min.min(v);
            max = max.max(v);
        }
        (max > min).then_some(StretchRange { min, max })
    }

    /// Contrast-stretch the whole buffer.
    ///
    /// The range is computed over the complete buffer before any value is
    /// rewritten. Returns the range applied, or `None` if the buffer was
    /// left unchanged.
    pub(crate) fn stretch(&mut self, cutoff: f32) -> Option<StretchRange> {
        let range = self.stretch_range(cutoff)?;
        for v in &mut self.values {
            *v = range.apply(*v);
        }
        Some(range)
    }

    /// Current value at `(x, y)`.
    #[inline]
    pub(crate) fn get(&self, x: usize, y: usize) -> f32 {
        self.values[y * self.width + x]
    }

    /// Add `amount` at `(x + dx, y + dy)`. Targets outside the grid are
    /// dropped.
    #[inline]
    pub(crate) fn add(&mut self, x: usize, y: usize, dx: isize, dy: isize, amount: f32) {
        let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
            return;
        };
        if nx < self.width && ny < self.height {
            self.values[ny * self.width + nx] += amount;
        }
    }
}
