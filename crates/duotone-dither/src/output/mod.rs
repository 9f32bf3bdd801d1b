//! Output types for the dithering pipeline.
//!
//! [`DitheredImage`] holds one background/foreground decision per pixel
//! and renders RGB, RGBA, or raster output on demand.

mod dithered_image;

pub use dithered_image::DitheredImage;
