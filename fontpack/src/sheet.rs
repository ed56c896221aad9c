/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::{path::Path, str::FromStr};

use image::{DynamicImage, ImageReader, Rgba, RgbaImage};
use tracing::debug;

use crate::error::{Error, Result};

pub const GRID_COLUMNS: u32 = 32;
pub const GRID_ROWS: u32 = 8;
pub const GLYPH_COUNT: u32 = GRID_COLUMNS * GRID_ROWS;

/// Red channel level a 1bpp sample must exceed to count as set.
pub const RED_THRESHOLD: u8 = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSize {
    pub width: u32,
    pub height: u32,
}

impl GlyphSize {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidGlyphSize { width, height });
        }

        Ok(GlyphSize { width, height })
    }

    /// Pixel size of the full 32x8 grid, `None` if it does not fit in a `u32`.
    pub fn sheet_dimensions(&self) -> Option<(u32, u32)> {
        Some((
            self.width.checked_mul(GRID_COLUMNS)?,
            self.height.checked_mul(GRID_ROWS)?,
        ))
    }
}

/// Output modifiers, parsed from a comma-separated list such as `dbl,invert_x`.
///
/// Empty entries and surrounding whitespace are ignored; any other token is
/// rejected with [`Error::UnknownFormatToken`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Format {
    /// Emit every source row twice.
    pub dbl: bool,
    /// Read each row right to left.
    pub invert_x: bool,
}

impl Format {
    pub fn repeat_rows(&self) -> u32 {
        if self.dbl { 2 } else { 1 }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut format = Format::default();

        for token in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match token {
                "dbl" => format.dbl = true,
                "invert_x" => format.invert_x = true,
                other => return Err(Error::UnknownFormatToken(other.to_string())),
            }
        }

        Ok(format)
    }
}

pub fn is_lit(px: &Rgba<u8>) -> bool {
    px[0] > RED_THRESHOLD
}

pub fn open_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    reader.decode().map_err(|source| Error::Image {
        path: path.to_path_buf(),
        source,
    })
}

/// An RGBA image viewed as 256 fixed-size glyph cells.
#[derive(Debug, Clone, Copy)]
pub struct GlyphSheet<'a> {
    image: &'a RgbaImage,
    size: GlyphSize,
}

impl<'a> GlyphSheet<'a> {
    pub fn new(image: &'a RgbaImage, size: GlyphSize) -> Result<Self> {
        let (required_width, required_height) =
            size.sheet_dimensions().ok_or(Error::InvalidGlyphSize {
                width: size.width,
                height: size.height,
            })?;

        let (width, height) = image.dimensions();
        if width < required_width || height < required_height {
            return Err(Error::SheetTooSmall {
                width,
                height,
                required_width,
                required_height,
            });
        }

        debug!(
            width,
            height,
            glyph_width = size.width,
            glyph_height = size.height,
            "loaded glyph sheet"
        );

        Ok(GlyphSheet { image, size })
    }

    pub fn cell_origin(&self, glyph: u32) -> (u32, u32) {
        (
            (glyph % GRID_COLUMNS) * self.size.width,
            (glyph / GRID_COLUMNS) * self.size.height,
        )
    }

    /// Samples produced by [`GlyphSheet::samples`] for `format`.
    pub fn sample_count(&self, format: Format) -> usize {
        GLYPH_COUNT as usize
            * self.size.height as usize
            * self.size.width as usize
            * format.repeat_rows() as usize
    }

    pub fn glyph_samples(self, glyph: u32, format: Format) -> impl Iterator<Item = bool> + 'a {
        let GlyphSize { width, height } = self.size;
        let (ox, oy) = self.cell_origin(glyph);

        (0..height).flat_map(move |y| {
            (0..format.repeat_rows()).flat_map(move |_| {
                (0..width).map(move |x| {
                    let sx = if format.invert_x {
                        ox + width - 1 - x
                    } else {
                        ox + x
                    };
                    is_lit(self.image.get_pixel(sx, oy + y))
                })
            })
        })
    }

    /// Every glyph's samples in index order.
    pub fn samples(self, format: Format) -> impl Iterator<Item = bool> + 'a {
        (0..GLYPH_COUNT).flat_map(move |glyph| self.glyph_samples(glyph, format))
    }
}
