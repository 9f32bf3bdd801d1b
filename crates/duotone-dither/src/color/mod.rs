//! Color types
//!
//! The engine works on plain 8-bit RGB. Palette colors are written into the
//! output byte-for-byte, and luminance is derived from the encoded values.
//!
//! # Example
//!
//! ```
//! use duotone_dither::Rgb;
//!
//! let fg: Rgb = "#d4d4d4".parse().unwrap();
//! assert_eq!(fg.to_bytes(), [0xd4, 0xd4, 0xd4]);
//! assert_eq!(fg.luminance(), 212.0);
//! ```

mod rgb;

pub use rgb::Rgb;
