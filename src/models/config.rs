use duotone_dither::DitherOptions;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Configuration compiled into the binary
pub const EMBEDDED_CONFIG: &str = include_str!("../../config.yaml");

/// Where the configuration is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Embedded,
}

impl ConfigSource {
    /// Pick the source: explicit path first, then `CONFIG_FILE`, then embedded.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        explicit
            .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from))
            .map_or(Self::Embedded, Self::File)
    }

    fn read_to_string(&self) -> std::io::Result<String> {
        match self {
            Self::File(path) => std::fs::read_to_string(path),
            Self::Embedded => Ok(EMBEDDED_CONFIG.to_string()),
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) if path.exists() => write!(f, "{}", path.display()),
            Self::File(path) => write!(f, "{} (not found, using defaults)", path.display()),
            Self::Embedded => write!(f, "embedded"),
        }
    }
}

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Theme used when none is requested
    #[serde(default = "default_theme")]
    pub default_theme: String,

    #[serde(default)]
    pub canvas: CanvasConfig,

    #[serde(default)]
    pub palette_variables: PaletteVariables,

    #[serde(default)]
    pub loader: LoaderConfig,

    #[serde(default)]
    pub dither: DitherConfig,

    /// Theme name to its variables
    #[serde(default)]
    pub themes: BTreeMap<String, Theme>,
}

fn default_theme() -> String {
    "dark".to_string()
}

/// Size of the art canvas images are letterboxed onto
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 300,
        }
    }
}

/// Names of the theme variables holding the two palette colors
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PaletteVariables {
    pub background: String,
    pub foreground: String,
}

impl Default for PaletteVariables {
    fn default() -> Self {
        Self {
            background: "--bg-1".to_string(),
            foreground: "--txt-3".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoaderConfig {
    /// Largest accepted source, in bytes
    pub max_bytes: u64,

    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_bytes: 20 * 1024 * 1024,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DitherConfig {
    pub contrast_stretch: bool,
    pub padding_cutoff: f32,
    pub threshold: f32,
}

impl Default for DitherConfig {
    fn default() -> Self {
        let options = DitherOptions::default();
        Self {
            contrast_stretch: options.contrast_stretch,
            padding_cutoff: options.padding_cutoff,
            threshold: options.threshold,
        }
    }
}

impl DitherConfig {
    pub fn to_options(&self) -> DitherOptions {
        DitherOptions::new()
            .contrast_stretch(self.contrast_stretch)
            .padding_cutoff(self.padding_cutoff)
            .threshold(self.threshold)
    }
}

/// A named set of theme variables, e.g. `--bg-1: "#1e1e1e"`
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Theme {
    pub variables: BTreeMap<String, String>,
}

impl Theme {
    pub fn get(&self, variable: &str) -> Option<&str> {
        self.variables.get(variable).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Theme {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            variables: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl AppConfig {
    /// Load configuration, falling back to defaults on any error
    pub fn load(source: &ConfigSource) -> Self {
        match source.read_to_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        source = %source,
                        themes = config.themes.len(),
                        default_theme = %config.default_theme,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, source = %source, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, source = %source, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    pub fn theme_names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut themes = BTreeMap::new();
        themes.insert(
            "dark".to_string(),
            Theme::from_iter([("--bg-1", "#1e1e1e"), ("--txt-3", "#d4d4d4")]),
        );
        themes.insert(
            "light".to_string(),
            Theme::from_iter([("--bg-1", "#f5f5f5"), ("--txt-3", "#222222")]),
        );

        Self {
            default_theme: default_theme(),
            canvas: CanvasConfig::default(),
            palette_variables: PaletteVariables::default(),
            loader: LoaderConfig::default(),
            dither: DitherConfig::default(),
            themes,
        }
    }
}
