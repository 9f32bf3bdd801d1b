pub mod art_pipeline;
pub mod image_loader;
pub mod theme;

pub use art_pipeline::{ArtPipeline, RenderedArt};
pub use image_loader::{ImageLoader, ImageSource};
pub use theme::{resolve_palette, select_theme, ResolvedTheme, ThemeError};
