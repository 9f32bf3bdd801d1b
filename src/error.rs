use std::path::PathBuf;

use duotone_dither::DitherError;
use thiserror::Error;

use crate::services::theme::ThemeError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("No images found in {0}")]
    EmptyDirectory(PathBuf),

    #[error("Image too large: {size} bytes (max {max})")]
    TooLarge { size: u64, max: u64 },

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Decoded image rejected: {0}")]
    Raster(#[from] DitherError),

    #[error("Load task failed: {0}")]
    Task(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Theme error: {0}")]
    Theme(#[from] ThemeError),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Dither error: {0}")]
    Dither(#[from] DitherError),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Render task failed: {0}")]
    Task(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
