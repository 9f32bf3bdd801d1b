//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

/// Assert bytes start with the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Decode PNG bytes to RGBA pixels
pub fn decode_rgba(bytes: &[u8]) -> image::RgbaImage {
    assert_png(bytes);
    image::load_from_memory(bytes)
        .expect("Failed to decode PNG")
        .to_rgba8()
}

/// Assert every pixel is one of the two palette colors
pub fn assert_two_colors(bytes: &[u8], background: [u8; 3], foreground: [u8; 3]) {
    let decoded = decode_rgba(bytes);
    for (x, y, pixel) in decoded.enumerate_pixels() {
        let rgb = [pixel[0], pixel[1], pixel[2]];
        assert!(
            rgb == background || rgb == foreground,
            "Pixel ({x}, {y}) is {rgb:?}, expected {background:?} or {foreground:?}"
        );
    }
}

/// Assert decoded dimensions
pub fn assert_dimensions(bytes: &[u8], width: u32, height: u32) {
    let decoded = decode_rgba(bytes);
    assert_eq!(decoded.dimensions(), (width, height));
}

/// Count pixels of one color
pub fn count_color(bytes: &[u8], color: [u8; 3]) -> usize {
    decode_rgba(bytes)
        .pixels()
        .filter(|p| [p[0], p[1], p[2]] == color)
        .count()
}
