pub mod config;

pub use config::{
    AppConfig, CanvasConfig, ConfigSource, DitherConfig, LoaderConfig, PaletteVariables, Theme,
};
