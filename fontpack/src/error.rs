/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid glyph size {width}x{height}")]
    InvalidGlyphSize { width: u32, height: u32 },

    #[error("unknown format token `{0}` (expected `dbl` or `invert_x`)")]
    UnknownFormatToken(String),

    /// The image does not cover the full 32x8 cell grid.
    #[error(
        "glyph sheet is {width}x{height}, but a 32x8 grid of these cells needs at least {required_width}x{required_height}"
    )]
    SheetTooSmall {
        width: u32,
        height: u32,
        required_width: u32,
        required_height: u32,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
