//! homepage-dither
//!
//! Renders images as two-color dithered art in the homepage's theme
//! colors. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
