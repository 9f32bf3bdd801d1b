use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use homepage_dither::models::{AppConfig, ConfigSource};
use homepage_dither::services::{resolve_palette, ArtPipeline, ImageSource};

#[derive(Parser)]
#[command(name = "homepage-dither")]
#[command(about = "Render images as themed two-color dithered art")]
#[command(version)]
struct Cli {
    /// Configuration file (overrides CONFIG_FILE)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dither an image to a PNG file
    Render {
        /// Image file, directory (random pick), or http(s) URL
        #[arg(short, long)]
        input: String,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Theme to take the palette from (defaults to default_theme)
        #[arg(short, long)]
        theme: Option<String>,

        /// Dither at native size instead of fitting the art canvas
        #[arg(long)]
        no_letterbox: bool,

        /// Canvas width override
        #[arg(long)]
        width: Option<u32>,

        /// Canvas height override
        #[arg(long)]
        height: Option<u32>,
    },
    /// List configured themes and their palettes
    Themes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let source = ConfigSource::resolve(cli.config);

    match cli.command {
        Some(Commands::Render {
            input,
            output,
            theme,
            no_letterbox,
            width,
            height,
        }) => {
            init_logging();
            run_render_command(
                &source,
                &input,
                &output,
                theme.as_deref(),
                no_letterbox,
                width,
                height,
            )
            .await
        }
        Some(Commands::Themes) => {
            init_logging();
            run_themes_command(&source);
            Ok(())
        }
        None => {
            run_status_command(&source);
            Ok(())
        }
    }
}

/// Minimal logging for CLI
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homepage_dither=warn,duotone_dither=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Run the full pipeline and write the PNG
async fn run_render_command(
    source: &ConfigSource,
    input: &str,
    output: &Path,
    theme: Option<&str>,
    no_letterbox: bool,
    width: Option<u32>,
    height: Option<u32>,
) -> anyhow::Result<()> {
    let mut config = AppConfig::load(source);
    if let Some(width) = width {
        config.canvas.width = width;
    }
    if let Some(height) = height {
        config.canvas.height = height;
    }

    let pipeline = ArtPipeline::new(Arc::new(config))?.with_letterbox(!no_letterbox);
    let image_source = ImageSource::parse(input);
    let art = pipeline.render(&image_source, theme).await?;

    tokio::fs::write(output, &art.png_bytes).await?;
    println!(
        "Rendered {} ({}x{}, theme {}, {} foreground / {} background pixels, {} bytes)",
        output.display(),
        art.width,
        art.height,
        art.theme,
        art.foreground_pixels,
        art.background_pixels,
        art.png_bytes.len()
    );

    Ok(())
}

/// Print each theme with its resolved palette or the resolution error
fn run_themes_command(source: &ConfigSource) {
    let config = AppConfig::load(source);

    println!(
        "Themes (background {}, foreground {}):",
        config.palette_variables.background, config.palette_variables.foreground
    );
    for (name, theme) in &config.themes {
        let marker = if *name == config.default_theme {
            " (default)"
        } else {
            ""
        };
        match resolve_palette(theme, &config.palette_variables) {
            Ok(palette) => println!(
                "  {name:<10} {}  {}{marker}",
                palette.background, palette.foreground
            ),
            Err(e) => println!("  {name:<10} error: {e}{marker}"),
        }
    }
    if config.themes.is_empty() {
        println!("  (none configured)");
    }
}

/// Display status information when no subcommand is given
fn run_status_command(source: &ConfigSource) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();

    // Header
    println!("homepage-dither v{VERSION}");
    println!("Two-color dithered art for the homepage canvas\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG    = {}",
        std::env::var("RUST_LOG")
            .ok()
            .as_deref()
            .unwrap_or("(not set)")
    );

    println!("\nConfiguration:");
    println!("  Source:  {source}");

    // Commands section
    println!("\nCommands:");
    println!("  homepage-dither render   Dither an image to a PNG file");
    println!("  homepage-dither themes   List configured themes");
    println!("\nRun 'homepage-dither --help' for more details.");
}
