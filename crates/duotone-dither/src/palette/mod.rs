//! Palette types and utilities
//!
//! This module provides the two-color [`Palette`], the [`Tone`] that picks a
//! palette role per pixel, and error types for resolving palettes from hex
//! strings.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, Tone};
