//! duotone-dither: two-color dithering for themed image widgets
//!
//! This library turns a decoded raster image into one that uses exactly two
//! colors, a page `background` and an ink `foreground`, using luminance
//! contrast stretching followed by Floyd-Steinberg error diffusion.
//!
//! # Quick Start
//!
//! ```
//! use duotone_dither::{dither, Palette, RasterImage, Rgb};
//!
//! let palette = Palette::from_hex("#1e1e1e", "#d4d4d4").unwrap();
//! let image = RasterImage::filled(4, 3, Rgb::new(90, 120, 200));
//!
//! let out = dither(&image, palette).unwrap();
//! assert_eq!((out.width(), out.height()), (4, 3));
//! ```
//!
//! # Builder API
//!
//! [`Ditherer`] exposes the per-pixel [`Tone`] decisions and lets callers
//! adjust the stretch and threshold:
//!
//! ```
//! use duotone_dither::{Ditherer, Palette, RasterImage, Rgb, Tone};
//!
//! let image = RasterImage::filled(1, 1, Rgb::new(128, 128, 128));
//! let result = Ditherer::new(Palette::default()).dither(&image).unwrap();
//!
//! // 128 is not greater than the threshold of 128
//! assert_eq!(result.tones(), &[Tone::Foreground]);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RasterImage (RGB or RGBA, 8-bit)
//!     |
//!     v
//! luminance = 0.299 R + 0.587 G + 0.114 B      (scratch buffer, f32)
//!     |
//!     v
//! [Contrast stretch]  min/max over values < 254, remap to 0..=255
//!     |
//!     v
//! ╔════════════════════════════════════════════╗
//! ║  Row-major diffusion                       ║
//! ║                                            ║
//! ║  v = buffer[x, y]                          ║
//! ║  v > 128 ? background (255)                ║
//! ║          : foreground (0)                  ║
//! ║  err = v - level                           ║
//! ║                                            ║
//! ║         X   7                              ║
//! ║     3   5   1      (/16, dropped off-grid) ║
//! ╚════════════════════════════════════════════╝
//!     |
//!     v
//! DitheredImage (one Tone per pixel, source alpha kept)
//! ```
//!
//! ## Padding cutoff
//!
//! Images drawn onto a letterboxed canvas pick up near-white borders. If
//! those pixels took part in the min/max scan, every photo would stretch
//! against pure white and lose its highlights. Luminance of 254 and above
//! is therefore left out of the scan (it is still remapped and dithered).
//!
//! ## Gray-level error
//!
//! Quantization error is a single luminance value, not a per-channel RGB
//! vector. The palette is applied after the binary decision, so the
//! result only depends on brightness; two images with equal luminance
//! fields dither identically whatever their hues.

pub mod api;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;
pub mod raster;


pub use api::{dither, DitherError, Ditherer};
pub use color::Rgb;
pub use dither::{dither_with_options, DitherOptions, StretchRange};
pub use output::DitheredImage;
pub use palette::{Palette, PaletteError, ParseColorError, Tone};
pub use raster::{PixelLayout, RasterImage};
