//! Floyd-Steinberg error diffusion over a luminance buffer.
//!
//! The scan is strictly row-major, left to right and top to bottom, and
//! the error is a single gray-level value. Diffused error is written back
//! into the luminance buffer so later pixels read the adjusted value.

use super::kernel::FLOYD_STEINBERG;
use super::luminance::LuminanceBuffer;
use crate::palette::Tone;

/// Quantize one luminance value. Ties at the threshold go to foreground.
#[inline]
pub(crate) fn quantize(value: f32, threshold: f32) -> Tone {
    if value > threshold {
        Tone::Background
    } else {
        Tone::Foreground
    }
}

/// Run error diffusion over `buffer` with the Floyd-Steinberg kernel.
///
/// Consumes the buffer; it is scratch state for this pass only.
pub(crate) fn diffuse(mut buffer: LuminanceBuffer, threshold: f32) -> Vec<Tone> {
    let (width, height) = (buffer.width(), buffer.height());
    let mut tones = Vec::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let value = buffer.get(x, y);
            let tone = quantize(value, threshold);
            tones.push(tone);

            let error = value - tone.level();
            if error == 0.0 {
                continue;
            }
            for &(dx, dy, weight) in FLOYD_STEINBERG.entries {
                buffer.add(x, y, dx, dy, error * FLOYD_STEINBERG.fraction(weight));
            }
        }
    }

    tones
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(width: usize, height: usize, values: Vec<f32>) -> Vec<Tone> {
        diffuse(LuminanceBuffer::from_values(width, height, values), 128.0)
    }

    #[test]
    fn test_quantize_tie_goes_to_foreground() {
        assert_eq!(quantize(128.0, 128.0), Tone::Foreground);
        assert_eq!(quantize(128.001, 128.0), Tone::Background);
        assert_eq!(quantize(-40.0, 128.0), Tone::Foreground);
        assert_eq!(quantize(400.0, 128.0), Tone::Background);
    }

    #[test]
    fn test_error_pushes_east() {
        // 100 -> foreground, error 100; east gets 100 * 7/16 = 43.75
        // 100 + 43.75 = 143.75 -> background
        let tones = run(2, 1, vec![100.0, 100.0]);
        assert_eq!(tones, vec![Tone::Foreground, Tone::Background]);
    }

    #[test]
    fn test_error_pushes_south() {
        // 1x2: south receives 5/16 of the error, the other targets are off-grid
        // 200 -> background, error -55; south: 130 - 17.1875 = 112.8 -> foreground
        let tones = run(1, 2, vec![200.0, 130.0]);
        assert_eq!(tones, vec![Tone::Background, Tone::Foreground]);
    }

    #[test]
    fn test_southwest_and_southeast_weights() {
        // Row 0: [0, 120]. Pixel (1,0)=120 -> foreground, error 120.
        //   SW (0,1) += 120 * 3/16 = 22.5, S (1,1) += 120 * 5/16 = 37.5
        // Row 1: [110, 100] -> (0,1) = 132.5 -> background, error -122.5
        //   E (1,1) += -122.5 * 7/16 = -53.59; (1,1) = 100 + 37.5 - 53.59 = 83.9
        let tones = run(2, 2, vec![0.0, 120.0, 110.0, 100.0]);
        assert_eq!(
            tones,
            vec![
                Tone::Foreground,
                Tone::Foreground,
                Tone::Background,
                Tone::Foreground
            ]
        );
    }

    #[test]
    fn test_single_pixel_edges() {
        assert_eq!(run(1, 1, vec![128.0]), vec![Tone::Foreground]);
        assert_eq!(run(1, 1, vec![129.0]), vec![Tone::Background]);
    }

    #[test]
    fn test_mid_gray_checkerboards() {
        let tones = run(4, 4, vec![127.5; 16]);
        let background = tones.iter().filter(|&&t| t == Tone::Background).count();
        assert_eq!(tones.len(), 16);
        assert!((6..=10).contains(&background), "got {background} background");
    }
}
