//! Print the shades and tints of a color, darkest first, and optionally
//! render them as a strip of swatches.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use huestep::{Component, Hsla, Include, PaletteOptions};
use image::{Rgba, RgbaImage};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// The base color: `white`, `rgb(R, G, B)` or `rgba(R, G, B, A)`.
    color: String,

    /// Number of shades to generate.
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(0..=10))]
    shades: u8,

    /// Number of tints to generate.
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(0..=10))]
    tints: u8,

    /// Preferred lightness step in percentage points.
    #[arg(long, default_value_t = huestep::DEFAULT_STEP)]
    step: Component,

    /// Leave the base color out of the palette.
    #[arg(long)]
    no_base: bool,

    /// Write the palette as a PNG strip of swatches to this file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Width and height of each swatch in pixels.
    #[arg(long, default_value_t = 64, value_parser = clap::value_parser!(u32).range(1..=1024))]
    swatch_size: u32,
}

impl Cli {
    fn options(&self) -> PaletteOptions {
        let mut include = Include::all();
        include.set(Include::BASE, !self.no_base);

        PaletteOptions {
            step: self.step,
            include,
        }
    }
}

fn write_image(path: impl AsRef<Path>, colors: &[Hsla], size: u32) -> Result<()> {
    let width = size * colors.len().max(1) as u32;
    let mut image = RgbaImage::new(width, size);

    for (x, _, pixel) in image.enumerate_pixels_mut() {
        let Some(color) = colors.get((x / size) as usize) else {
            continue;
        };
        let color = color.to_rgba();
        *pixel = Rgba([color.red, color.green, color.blue, color.alpha_channel()]);
    }

    let path = path.as_ref();
    image
        .save(path)
        .with_context(|| format!("could not write swatches to {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let parsed = huestep::parse(Some(cli.color.as_str()));
    let base = parsed.color().to_hsl();
    tracing::debug!(%base, fallback = parsed.is_fallback(), "base color");

    let colors = huestep::palette(
        &base,
        cli.shades.into(),
        cli.tints.into(),
        &cli.options(),
    );

    for color in &colors {
        println!("{}", color.to_rgba());
    }

    if let Some(output) = &cli.output {
        write_image(output, &colors, cli.swatch_size)?;
        tracing::info!(path = %output.display(), count = colors.len(), "wrote swatches");
    }

    Ok(())
}
