//! Dithering options and configuration.
//!
//! This module provides the [`DitherOptions`] struct for configuring
//! the contrast stretch and quantization threshold.

/// Luminance at or above which a pixel is treated as padding and left out
/// of the contrast-stretch range.
pub const DEFAULT_PADDING_CUTOFF: f32 = 254.0;

/// Luminance above which a pixel quantizes to white.
pub const DEFAULT_THRESHOLD: f32 = 128.0;

/// Configuration options for the dithering passes.
///
/// # Defaults
///
/// - Contrast stretch: enabled
/// - Padding cutoff: 254 (near-white letterbox borders do not skew the stretch)
/// - Threshold: 128 (strictly greater quantizes to white)
///
/// # Example
///
/// ```
/// use duotone_dither::DitherOptions;
///
/// let options = DitherOptions::new();
/// assert!(options.contrast_stretch);
///
/// let options = DitherOptions::new()
///     .contrast_stretch(false)
///     .threshold(100.0);
/// assert_eq!(options.threshold, 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DitherOptions {
    /// Remap the luminance range to `0..=255` before diffusion.
    ///
    /// Default: `true`
    pub contrast_stretch: bool,

    /// Pixels with luminance `>=` this value are excluded from the
    /// min/max scan. They are still remapped and dithered.
    ///
    /// Default: `254.0`
    pub padding_cutoff: f32,

    /// Quantization threshold. `v > threshold` becomes background.
    ///
    /// Default: `128.0`
    pub threshold: f32,
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self {
            contrast_stretch: true,
            padding_cutoff: DEFAULT_PADDING_CUTOFF,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl DitherOptions {
    /// Create new dither options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable contrast stretching.
    #[inline]
    pub fn contrast_stretch(mut self, enabled: bool) -> Self {
        self.contrast_stretch = enabled;
        self
    }

    /// Set the padding cutoff for the stretch range scan.
    #[inline]
    pub fn padding_cutoff(mut self, cutoff: f32) -> Self {
        self.padding_cutoff = cutoff;
        self
    }

    /// Set the quantization threshold.
    #[inline]
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }
}
