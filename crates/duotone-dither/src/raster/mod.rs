//! Input and output raster types.

mod raster_image;

pub use raster_image::{PixelLayout, RasterImage};
