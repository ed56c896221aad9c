/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use fontpack::{Format, GlyphSize};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Packs a 32x8 glyph sheet into a 1bpp font table.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    in_image: PathBuf,
    glyph_width: u32,
    glyph_height: u32,
    /// Comma-separated flags: `dbl`, `invert_x`. May be empty.
    format: Format,
    out_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let size = GlyphSize::new(args.glyph_width, args.glyph_height)?;
    let img = fontpack::open_image(&args.in_image)
        .context("failed to load glyph sheet")?
        .to_rgba8();

    let data = fontpack::convert_1bpp(&img, size, args.format)
        .with_context(|| format!("failed to pack {}", args.in_image.display()))?;

    fontpack::write_file(&args.out_file, &data).context("failed to write font table")?;

    info!(
        glyph_width = size.width,
        glyph_height = size.height,
        dbl = args.format.dbl,
        invert_x = args.format.invert_x,
        len = data.len(),
        path = %args.out_file.display(),
        "packed 256 glyphs"
    );
    Ok(())
}
