use std::sync::Arc;

use duotone_dither::{DitheredImage, Ditherer, Palette, RasterImage, StretchRange, Tone};

use crate::error::RenderError;
use crate::models::{AppConfig, CanvasConfig};
use crate::rendering::{letterbox, png_output};
use crate::services::image_loader::{ImageLoader, ImageSource};
use crate::services::theme::select_theme;

/// Result of rendering one piece of art
#[derive(Debug, Clone)]
pub struct RenderedArt {
    /// Encoded PNG bytes
    pub png_bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Theme the palette came from
    pub theme: String,
    pub palette: Palette,
    pub background_pixels: usize,
    pub foreground_pixels: usize,
    /// Luminance range used by the contrast stretch, if it ran
    pub stretch: Option<StretchRange>,
}

/// Pipeline that orchestrates theme → load → letterbox → dither → encode
pub struct ArtPipeline {
    config: Arc<AppConfig>,
    loader: ImageLoader,
    letterbox: bool,
}

impl ArtPipeline {
    pub fn new(config: Arc<AppConfig>) -> Result<Self, RenderError> {
        let loader = ImageLoader::new(&config.loader)?;
        Ok(Self {
            config,
            loader,
            letterbox: true,
        })
    }

    /// Dither at the source's native size instead of fitting the canvas
    pub fn with_letterbox(mut self, letterbox: bool) -> Self {
        self.letterbox = letterbox;
        self
    }

    /// Render `source` with the named theme (or the default theme).
    ///
    /// The palette is resolved before anything is loaded, so a broken theme
    /// fails fast without touching the source.
    pub async fn render(
        &self,
        source: &ImageSource,
        theme: Option<&str>,
    ) -> Result<RenderedArt, RenderError> {
        let theme = select_theme(&self.config, theme)?;
        let image = self.loader.load(source).await?;

        let ditherer = Ditherer::new(theme.palette).options(self.config.dither.to_options());
        let canvas = self.letterbox.then_some(self.config.canvas);

        let (dithered, png_bytes) =
            tokio::task::spawn_blocking(move || -> Result<_, RenderError> {
                let dithered = compose(&image, &ditherer, canvas)?;
                let png_bytes = png_output::encode(&dithered)?;
                Ok((dithered, png_bytes))
            })
            .await
            .map_err(|e| RenderError::Task(e.to_string()))??;

        let art = RenderedArt {
            png_bytes,
            width: dithered.width(),
            height: dithered.height(),
            theme: theme.name,
            palette: theme.palette,
            background_pixels: dithered.count(Tone::Background),
            foreground_pixels: dithered.count(Tone::Foreground),
            stretch: dithered.stretch(),
        };
        tracing::info!(
            source = %source,
            theme = %art.theme,
            width = art.width,
            height = art.height,
            foreground = art.foreground_pixels,
            bytes = art.png_bytes.len(),
            "Rendered art"
        );
        Ok(art)
    }
}

/// Dither an image, letterboxed onto `canvas` when given.
pub fn compose(
    image: &RasterImage,
    ditherer: &Ditherer,
    canvas: Option<CanvasConfig>,
) -> Result<DitheredImage, RenderError> {
    let dithered = match canvas {
        Some(canvas) => letterbox(image, canvas, ditherer)?,
        None => ditherer.dither(image)?,
    };
    Ok(dithered)
}
