/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use fontpack::psp;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Packs a 6x10 glyph sheet into the 4bpp PSP console font canvas.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    in_image: PathBuf,
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

    let img = fontpack::open_image(&args.in_image)
        .context("failed to load glyph sheet")?
        .to_rgb8();

    let data = psp::convert(&img)
        .with_context(|| format!("failed to pack {}", args.in_image.display()))?;

    fontpack::write_file(&args.out_file, &data).context("failed to write font canvas")?;

    info!(
        width = psp::CANVAS_WIDTH,
        height = psp::CANVAS_HEIGHT,
        len = data.len(),
        path = %args.out_file.display(),
        "packed 256 glyphs"
    );
    Ok(())
}
