use duotone_dither::{Palette, PaletteError};
use thiserror::Error;

use crate::models::{AppConfig, PaletteVariables, Theme};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThemeError {
    #[error("Unknown theme '{name}' (available: {available})")]
    UnknownTheme { name: String, available: String },

    #[error(transparent)]
    Palette(#[from] PaletteError),
}

/// Read the background and foreground colors out of a theme.
///
/// A variable that is absent or blank is a missing color; nothing gets
/// dithered with a half-resolved palette.
pub fn resolve_palette(theme: &Theme, variables: &PaletteVariables) -> Result<Palette, PaletteError> {
    Palette::resolve(
        theme.get(&variables.background),
        theme.get(&variables.foreground),
    )
}

/// A theme chosen by name with its resolved palette
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
    pub name: String,
    pub palette: Palette,
}

/// Select a theme by name (or the configured default) and resolve its palette
pub fn select_theme(config: &AppConfig, name: Option<&str>) -> Result<ResolvedTheme, ThemeError> {
    let name = name.unwrap_or(&config.default_theme);
    let theme = config.theme(name).ok_or_else(|| {
        let names: Vec<_> = config.theme_names().collect();
        ThemeError::UnknownTheme {
            name: name.to_string(),
            available: if names.is_empty() {
                "none".to_string()
            } else {
                names.join(", ")
            },
        }
    })?;

    let palette = resolve_palette(theme, &config.palette_variables)?;
    tracing::debug!(
        theme = name,
        background = %palette.background,
        foreground = %palette.foreground,
        "Resolved theme palette"
    );
    if palette.is_degenerate() {
        tracing::warn!(theme = name, "Theme background and foreground are identical");
    }

    Ok(ResolvedTheme {
        name: name.to_string(),
        palette,
    })
}
