//! Test fixtures and constants.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

/// Theme colors from the default configuration
pub mod colors {
    pub const DARK_BG: [u8; 3] = [0x1e, 0x1e, 0x1e];
    pub const DARK_FG: [u8; 3] = [0xd4, 0xd4, 0xd4];
    pub const LIGHT_BG: [u8; 3] = [0xf5, 0xf5, 0xf5];
    pub const LIGHT_FG: [u8; 3] = [0x22, 0x22, 0x22];
}

/// Horizontal gray ramp from black to white
pub fn gradient(width: u32, height: u32) -> DynamicImage {
    let image = RgbImage::from_fn(width, height, |x, _| {
        let v = (x * 255 / (width - 1).max(1)) as u8;
        Rgb([v, v, v])
    });
    DynamicImage::ImageRgb8(image)
}

/// Solid color with partial transparency
pub fn translucent(width: u32, height: u32, alpha: u8) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        width,
        height,
        Rgba([200, 40, 40, alpha]),
    ))
}

/// Encode an image in memory
pub fn encode(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, format)
        .expect("Failed to encode fixture image");
    buf.into_inner()
}

pub fn png_bytes(image: &DynamicImage) -> Vec<u8> {
    encode(image, ImageFormat::Png)
}

/// Write an image as PNG and return its bytes
pub fn write_png(path: &Path, image: &DynamicImage) -> Vec<u8> {
    let bytes = png_bytes(image);
    std::fs::write(path, &bytes).expect("Failed to write fixture image");
    bytes
}

/// Write a config file with a single custom theme added to the defaults
pub fn write_config(path: &Path, extra: &str) {
    let yaml = format!(
        r##"default_theme: dark
themes:
  dark:
    "--bg-1": "#1e1e1e"
    "--txt-3": "#d4d4d4"
  light:
    "--bg-1": "#f5f5f5"
    "--txt-3": "#222222"
{extra}"##
    );
    std::fs::write(path, yaml).expect("Failed to write config");
}
