use std::io::Cursor;

use duotone_dither::DitheredImage;

use crate::error::RenderError;

/// Encode a dithered image as PNG.
///
/// Opaque images become 1-bit indexed PNGs whose palette is
/// `[background, foreground]`; images that kept an alpha channel are
/// written as 8-bit RGBA. The result is re-compressed with oxipng.
pub fn encode(image: &DitheredImage) -> Result<Vec<u8>, RenderError> {
    let png_bytes = encode_unoptimized(image)?;

    // Re-compress with oxipng (zopfli + adaptive filter selection)
    let before = png_bytes.len();
    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or(png_bytes);

    tracing::debug!(before, after = optimized.len(), "Optimized PNG");
    Ok(optimized)
}

/// Encode without re-compression, keeping the exact color type chosen
pub(crate) fn encode_unoptimized(image: &DitheredImage) -> Result<Vec<u8>, RenderError> {
    match image.alpha() {
        Some(_) => write_png(
            image,
            png::ColorType::Rgba,
            png::BitDepth::Eight,
            None,
            &image.to_rgba(),
        ),
        None => {
            let palette = image.palette();
            let mut plte = Vec::with_capacity(6);
            plte.extend_from_slice(&palette.background.to_bytes());
            plte.extend_from_slice(&palette.foreground.to_bytes());
            let packed = pack_bits(&image.indices(), image.width());
            write_png(
                image,
                png::ColorType::Indexed,
                png::BitDepth::One,
                Some(&plte),
                &packed,
            )
        }
    }
}

fn write_png(
    image: &DitheredImage,
    color_type: png::ColorType,
    bit_depth: png::BitDepth,
    plte: Option<&[u8]>,
    data: &[u8],
) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width(), image.height());
        encoder.set_color(color_type);
        encoder.set_depth(bit_depth);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        if let Some(plte) = plte {
            encoder.set_palette(plte);
        }
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(data)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Pack 0/1 palette indices into 1-bit PNG rows, MSB first.
/// Each row starts on a byte boundary.
fn pack_bits(indices: &[u8], width: u32) -> Vec<u8> {
    let width = width as usize;
    let bytes_per_row = width.div_ceil(8);
    let mut packed = Vec::with_capacity(bytes_per_row * indices.len().div_ceil(width.max(1)));

    for row in indices.chunks(width.max(1)) {
        for byte_pixels in row.chunks(8) {
            let byte = byte_pixels
                .iter()
                .enumerate()
                .fold(0u8, |acc, (i, &idx)| acc | ((idx & 1) << (7 - i)));
            packed.push(byte);
        }
    }
    packed
}
