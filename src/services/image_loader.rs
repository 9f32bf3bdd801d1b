use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use duotone_dither::RasterImage;
use image::ImageFormat;
use rand::seq::SliceRandom;

use crate::error::LoadError;
use crate::models::LoaderConfig;

/// Where an image comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A single image file
    File(PathBuf),
    /// An image served over HTTP(S)
    Url(String),
    /// A directory; one image in it is picked at random
    Directory(PathBuf),
}

impl ImageSource {
    /// Classify a command-line argument.
    ///
    /// `http://` and `https://` prefixes are URLs, existing directories are
    /// directories, and anything else is treated as a file path.
    pub fn parse(input: &str) -> Self {
        if input.starts_with("http://") || input.starts_with("https://") {
            return Self::Url(input.to_string());
        }
        let path = PathBuf::from(input);
        if path.is_dir() {
            Self::Directory(path)
        } else {
            Self::File(path)
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
            Self::Directory(path) => write!(f, "{}/ (random)", path.display()),
        }
    }
}

/// Loads and decodes source images
pub struct ImageLoader {
    client: reqwest::Client,
    max_bytes: u64,
}

impl ImageLoader {
    pub fn new(config: &LoaderConfig) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("homepage-dither/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            max_bytes: config.max_bytes,
        })
    }

    /// Fetch and decode an image.
    ///
    /// Decoding is CPU-bound and runs on the blocking pool.
    pub async fn load(&self, source: &ImageSource) -> Result<RasterImage, LoadError> {
        let bytes = match source {
            ImageSource::File(path) => self.read_file(path).await?,
            ImageSource::Url(url) => self.fetch(url).await?,
            ImageSource::Directory(dir) => {
                let path = pick_from_directory(dir).await?;
                tracing::info!(path = %path.display(), "Picked image from directory");
                self.read_file(&path).await?
            }
        };
        tracing::debug!(source = %source, bytes = bytes.len(), "Read image source");

        let image = tokio::task::spawn_blocking(move || decode(&bytes))
            .await
            .map_err(|e| LoadError::Task(e.to_string()))??;

        tracing::info!(
            source = %source,
            width = image.width(),
            height = image.height(),
            alpha = image.layout().has_alpha(),
            "Decoded image"
        );
        Ok(image)
    }

    async fn read_file(&self, path: &Path) -> Result<Vec<u8>, LoadError> {
        let io_error = |source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        };

        let size = tokio::fs::metadata(path).await.map_err(io_error)?.len();
        self.check_size(size)?;

        tokio::fs::read(path).await.map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read image file");
            io_error(e)
        })
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, LoadError> {
        let mut response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = url, status = status.as_u16(), "Image request failed");
            return Err(LoadError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        if let Some(length) = response.content_length() {
            self.check_size(length)?;
        }

        // Content-Length may be absent or wrong; enforce the limit while streaming
        let mut bytes = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            bytes.extend_from_slice(&chunk);
            self.check_size(bytes.len() as u64)?;
        }
        Ok(bytes)
    }

    fn check_size(&self, size: u64) -> Result<(), LoadError> {
        if size > self.max_bytes {
            return Err(LoadError::TooLarge {
                size,
                max: self.max_bytes,
            });
        }
        Ok(())
    }
}

/// Pick one decodable image file from a directory, uniformly at random
async fn pick_from_directory(dir: &Path) -> Result<PathBuf, LoadError> {
    let io_error = |source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(io_error)?;
    let mut candidates = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
        let path = entry.path();
        let is_file = entry.file_type().await.is_ok_and(|t| t.is_file());
        if is_file && is_image_path(&path) {
            candidates.push(path);
        }
    }
    candidates.sort();
    tracing::debug!(dir = %dir.display(), candidates = candidates.len(), "Listed image directory");

    let picked = {
        let mut rng = rand::thread_rng();
        candidates.choose(&mut rng).cloned()
    };
    picked.ok_or_else(|| LoadError::EmptyDirectory(dir.to_path_buf()))
}

/// Whether the file extension names a format we can decode
fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(ImageFormat::from_extension)
        .is_some_and(|format| format.reading_enabled())
}

/// Decode encoded image bytes into a raster.
///
/// Images with an alpha channel keep it; everything else decodes to RGB.
pub fn decode(bytes: &[u8]) -> Result<RasterImage, LoadError> {
    let decoded = image::load_from_memory(bytes)?;
    let (width, height) = (decoded.width(), decoded.height());

    let image = if decoded.color().has_alpha() {
        RasterImage::from_rgba(width, height, decoded.into_rgba8().into_raw())?
    } else {
        RasterImage::from_rgb(width, height, decoded.into_rgb8().into_raw())?
    };
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use duotone_dither::{PixelLayout, Rgb};
    use std::io::Cursor;

    fn encode(image: image::DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        image.write_to(&mut buf, format).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_parse_url() {
        assert_eq!(
            ImageSource::parse("https://cdn.example.com/art/1.png"),
            ImageSource::Url("https://cdn.example.com/art/1.png".to_string())
        );
        assert_eq!(
            ImageSource::parse("http://localhost/a.jpg"),
            ImageSource::Url("http://localhost/a.jpg".to_string())
        );
    }

    #[test]
    fn test_parse_file_and_directory() {
        let dir = std::env::temp_dir();
        assert_eq!(
            ImageSource::parse(dir.to_str().unwrap()),
            ImageSource::Directory(dir.clone())
        );
        assert_eq!(
            ImageSource::parse("art/sunset.png"),
            ImageSource::File(PathBuf::from("art/sunset.png"))
        );
    }

    #[test]
    fn test_is_image_path() {
        assert!(is_image_path(Path::new("a/photo.png")));
        assert!(is_image_path(Path::new("a/photo.JPG")));
        assert!(is_image_path(Path::new("photo.webp")));
        assert!(!is_image_path(Path::new("notes.txt")));
        assert!(!is_image_path(Path::new("README")));
    }

    #[test]
    fn test_decode_rgb_png() {
        let source = image::RgbImage::from_pixel(3, 2, image::Rgb([10, 20, 30]));
        let bytes = encode(image::DynamicImage::ImageRgb8(source), ImageFormat::Png);

        let image = decode(&bytes).unwrap();
        assert_eq!((image.width(), image.height()), (3, 2));
        assert_eq!(image.layout(), PixelLayout::Rgb);
        assert_eq!(image.pixel(2, 1), Rgb::new(10, 20, 30));
    }

    #[test]
    fn test_decode_keeps_alpha() {
        let source = image::RgbaImage::from_pixel(2, 2, image::Rgba([200, 100, 50, 64]));
        let bytes = encode(image::DynamicImage::ImageRgba8(source), ImageFormat::Png);

        let image = decode(&bytes).unwrap();
        assert_eq!(image.layout(), PixelLayout::Rgba);
        assert_eq!(image.alpha(1, 1), Some(64));
    }

    #[test]
    fn test_decode_grayscale_expands_to_rgb() {
        let source = image::GrayImage::from_pixel(1, 1, image::Luma([90]));
        let bytes = encode(image::DynamicImage::ImageLuma8(source), ImageFormat::Png);

        let image = decode(&bytes).unwrap();
        assert_eq!(image.layout(), PixelLayout::Rgb);
        assert_eq!(image.pixel(0, 0), Rgb::new(90, 90, 90));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ImageSource::Directory(PathBuf::from("art")).to_string(),
            "art/ (random)"
        );
        assert_eq!(ImageSource::File(PathBuf::from("a.png")).to_string(), "a.png");
    }
}
